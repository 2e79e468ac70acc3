use crate::checker::Checker;
use crate::finding::*;
use crate::lexer::TokenKind;

pub struct Eqeqeq {
    operator: String,
}

/// ## What it does
///
/// Checks for loose equality operators, `==` and `!=`.
///
/// ## Why is this bad?
///
/// Loose equality converts its operands before comparing them, which leads to
/// surprising results such as `0 == ''` or `null == undefined` being `true`.
///
/// ## Example
///
/// ```js
/// if (x == 1) {}
/// ```
///
/// Use instead:
/// ```js
/// if (x === 1) {}
/// ```
impl Violation for Eqeqeq {
    fn name(&self) -> String {
        "eqeqeq".to_string()
    }
    fn body(&self) -> String {
        format!(
            "Expected '{}=' and instead saw '{}'.",
            self.operator, self.operator
        )
    }
    fn suggestion(&self) -> Option<String> {
        Some(format!("Use `{}=` instead.", self.operator))
    }
}

pub fn eqeqeq(checker: &Checker, index: usize) -> Option<Finding> {
    let token = &checker.code_tokens[index];
    if token.kind != TokenKind::Punct {
        return None;
    }
    let operator = checker.text(token);
    if operator != "==" && operator != "!=" {
        return None;
    }
    Some(Finding::new(
        Eqeqeq { operator: operator.to_string() },
        token.range.clone(),
    ))
}
