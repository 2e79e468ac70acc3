pub(crate) mod unused_variable;
