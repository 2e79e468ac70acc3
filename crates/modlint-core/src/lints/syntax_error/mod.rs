pub(crate) mod syntax_error;
