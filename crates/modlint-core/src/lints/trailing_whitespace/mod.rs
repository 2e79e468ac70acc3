pub(crate) mod trailing_whitespace;
