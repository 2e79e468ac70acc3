use crate::finding::*;
use crate::lexer::SyntaxError as LexerError;

pub struct SyntaxError {
    message: String,
}

/// ## What it does
///
/// Reports code that cannot be tokenized: unterminated strings, comments,
/// template literals or regular expressions, unexpected characters and
/// unbalanced brackets.
///
/// When a file has a syntax error, no other rule runs on it. This rule can't
/// be disabled and its findings can't be suppressed.
impl Violation for SyntaxError {
    fn name(&self) -> String {
        "syntax_error".to_string()
    }
    fn body(&self) -> String {
        self.message.clone()
    }
    fn severity(&self) -> Severity {
        Severity::Error
    }
}

pub fn syntax_error(error: LexerError) -> Finding {
    Finding::new(SyntaxError { message: error.message }, error.range)
}
