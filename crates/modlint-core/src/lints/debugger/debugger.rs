use crate::checker::Checker;
use crate::finding::*;

pub struct Debugger;

/// ## What it does
///
/// Checks for `debugger` statements.
///
/// ## Why is this bad?
///
/// `debugger` pauses execution whenever developer tools are open. It is useful
/// while debugging but should never be committed.
impl Violation for Debugger {
    fn name(&self) -> String {
        "debugger".to_string()
    }
    fn body(&self) -> String {
        "Forgotten 'debugger' statement?".to_string()
    }
    fn suggestion(&self) -> Option<String> {
        Some("Remove the `debugger` statement.".to_string())
    }
}

pub fn debugger(checker: &Checker, index: usize) -> Option<Finding> {
    let token = &checker.code_tokens[index];
    if !token.is_keyword(checker.source, "debugger") {
        return None;
    }
    Some(Finding::new(Debugger, token.range.clone()))
}
