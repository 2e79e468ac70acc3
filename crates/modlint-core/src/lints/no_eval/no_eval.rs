use crate::checker::Checker;
use crate::finding::*;
use crate::lexer::TokenKind;

pub struct NoEval;

/// ## What it does
///
/// Checks for calls to the global `eval()` function.
///
/// ## Why is this bad?
///
/// `eval()` runs arbitrary strings as code, which opens the door to injection
/// and defeats most optimizations of the JavaScript engine.
///
/// Method calls such as `obj.eval()` are not reported.
impl Violation for NoEval {
    fn name(&self) -> String {
        "no_eval".to_string()
    }
    fn body(&self) -> String {
        "eval can be harmful.".to_string()
    }
}

pub fn no_eval(checker: &Checker, index: usize) -> Option<Finding> {
    let token = &checker.code_tokens[index];
    if token.kind != TokenKind::Ident || checker.text(token) != "eval" {
        return None;
    }

    let is_call = checker
        .code_tokens
        .get(index + 1)
        .is_some_and(|next| next.is_punct(checker.source, "("));
    if !is_call {
        return None;
    }

    let is_member = index > 0 && {
        let prev = &checker.code_tokens[index - 1];
        prev.is_punct(checker.source, ".") || prev.is_punct(checker.source, "?.")
    };
    if is_member {
        return None;
    }

    Some(Finding::new(NoEval, token.range.clone()))
}
