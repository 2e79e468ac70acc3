pub(crate) mod debugger;
pub(crate) mod eqeqeq;
pub(crate) mod max_line_length;
pub(crate) mod missing_semicolon;
pub(crate) mod no_eval;
pub(crate) mod no_with;
pub(crate) mod syntax_error;
pub(crate) mod trailing_whitespace;
pub(crate) mod unused_variable;
