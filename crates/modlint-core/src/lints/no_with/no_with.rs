use crate::checker::Checker;
use crate::finding::*;

pub struct NoWith;

/// ## What it does
///
/// Checks for `with` statements.
///
/// ## Why is this bad?
///
/// `with` makes it impossible to tell statically which variable a name refers
/// to, and is forbidden in strict mode.
impl Violation for NoWith {
    fn name(&self) -> String {
        "no_with".to_string()
    }
    fn body(&self) -> String {
        "Don't use 'with'.".to_string()
    }
}

pub fn no_with(checker: &Checker, index: usize) -> Option<Finding> {
    let token = &checker.code_tokens[index];
    if !token.is_keyword(checker.source, "with") {
        return None;
    }
    let next = checker.code_tokens.get(index + 1)?;
    if !next.is_punct(checker.source, "(") {
        return None;
    }
    Some(Finding::new(NoWith, token.range.clone()))
}
