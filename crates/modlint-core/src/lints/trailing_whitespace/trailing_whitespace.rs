use crate::checker::Checker;
use crate::finding::*;
use crate::lexer::TokenKind;
use crate::utils::line_ranges;

pub struct TrailingWhitespace;

/// ## What it does
///
/// Checks for whitespace at the end of lines. Whitespace that is part of a
/// multi-line template literal is left alone since it changes the value of the
/// string.
///
/// This rule is disabled by default.
impl Violation for TrailingWhitespace {
    fn name(&self) -> String {
        "trailing_whitespace".to_string()
    }
    fn body(&self) -> String {
        "Trailing whitespace.".to_string()
    }
    fn suggestion(&self) -> Option<String> {
        Some("Remove the whitespace at the end of the line.".to_string())
    }
}

pub fn trailing_whitespace(checker: &Checker) -> Vec<Finding> {
    let literals: Vec<_> = checker
        .tokens
        .iter()
        .filter(|token| matches!(token.kind, TokenKind::String | TokenKind::Template))
        .map(|token| token.range.clone())
        .collect();

    line_ranges(checker.source)
        .into_iter()
        .filter_map(|line| {
            let text = &checker.source[line.clone()];
            let trimmed = text.trim_end();
            if trimmed.len() == text.len() {
                return None;
            }
            let start = line.start + trimmed.len();
            if literals
                .iter()
                .any(|literal| literal.start < start && start < literal.end)
            {
                return None;
            }
            Some(Finding::new(TrailingWhitespace, start..line.end))
        })
        .collect()
}
