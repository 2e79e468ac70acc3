pub(crate) mod missing_semicolon;
