use crate::checker::Checker;
use crate::finding::*;
use crate::lexer::{Token, TokenKind};

pub struct MissingSemicolon;

/// ## What it does
///
/// Checks for statements that rely on automatic semicolon insertion, i.e.
/// statements followed by a line break or a closing `}` instead of a `;`.
///
/// ## Why is this bad?
///
/// Automatic semicolon insertion has surprising corner cases: a line starting
/// with `(`, `[` or a template literal continues the previous statement.
///
/// ## Example
///
/// ```js
/// var x = 1
/// function f() { return x }
/// ```
///
/// Use instead:
/// ```js
/// var x = 1;
/// function f() { return x; }
/// ```
impl Violation for MissingSemicolon {
    fn name(&self) -> String {
        "missing_semicolon".to_string()
    }
    fn body(&self) -> String {
        "Missing semicolon.".to_string()
    }
    fn suggestion(&self) -> Option<String> {
        Some("Add `;` at the end of the statement.".to_string())
    }
}

/// What an open bracket delimits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    // Parentheses of `if (...)`, `function f(...)`, etc.
    Paren { control: bool },
    Bracket,
    Block,
    Object,
    Class,
    // `${ ... }` in a template literal
    Interpolation,
}

const CONTROL_KEYWORDS: &[&str] = &["if", "for", "while", "with", "switch", "catch", "function"];
const BLOCK_KEYWORDS: &[&str] = &["else", "do", "try", "finally", "catch"];
const ENDING_KEYWORDS: &[&str] = &[
    "this", "null", "true", "false", "super", "break", "continue", "return", "debugger",
];

pub fn missing_semicolon(checker: &Checker) -> Vec<Finding> {
    let tokens = &checker.code_tokens;
    let mut findings = Vec::new();

    let mut stack: Vec<Context> = Vec::new();
    // The context closed by the previous token, if it was a closing bracket.
    let mut prev_closed: Option<Context> = None;
    let mut pending_class = false;

    for index in 0..=tokens.len() {
        let current = tokens.get(index);

        if let Some(prev) = index.checked_sub(1).map(|i| &tokens[i]) {
            let in_statement_list = matches!(stack.last(), None | Some(Context::Block));
            let at_boundary = match current {
                None => true,
                Some(token) => {
                    token.newline_before
                        || (token.is_punct(checker.source, "}")
                            && stack.last() == Some(&Context::Block))
                }
            };
            let next_starts_statement = current.is_none_or(|token| starts_statement(checker, token));

            if in_statement_list
                && at_boundary
                && next_starts_statement
                && ends_expression(checker, prev, prev_closed)
            {
                findings.push(Finding::new(MissingSemicolon, prev.range.clone()));
            }
        }

        let Some(token) = current else {
            break;
        };
        prev_closed = None;

        match token.kind {
            TokenKind::Keyword if checker.text(token) == "class" => pending_class = true,
            TokenKind::Template => {
                let text = checker.text(token);
                if !text.starts_with('`') && stack.last() == Some(&Context::Interpolation) {
                    stack.pop();
                }
                if text.ends_with("${") {
                    stack.push(Context::Interpolation);
                }
            }
            TokenKind::Punct => match checker.text(token) {
                "(" => stack.push(Context::Paren { control: is_control_paren(checker, index) }),
                "[" => stack.push(Context::Bracket),
                "{" => {
                    let context = if pending_class {
                        pending_class = false;
                        Context::Class
                    } else {
                        brace_context(checker, index, stack.last().copied())
                    };
                    stack.push(context);
                }
                ")" | "]" | "}" => prev_closed = stack.pop(),
                _ => {}
            },
            _ => {}
        }
    }

    findings
}

fn is_keyword_in(checker: &Checker, index: Option<usize>, keywords: &[&str]) -> bool {
    index
        .and_then(|i| checker.code_tokens.get(i))
        .is_some_and(|token| {
            token.kind == TokenKind::Keyword && keywords.contains(&checker.text(token))
        })
}

fn is_control_paren(checker: &Checker, index: usize) -> bool {
    let tokens = &checker.code_tokens;
    let Some(prev_index) = index.checked_sub(1) else {
        return false;
    };
    if is_keyword_in(checker, Some(prev_index), CONTROL_KEYWORDS) {
        return true;
    }

    // `function name(`, `function* name(`
    if tokens[prev_index].kind != TokenKind::Ident {
        return false;
    }
    let before_name = prev_index.checked_sub(1);
    if is_keyword_in(checker, before_name, &["function"]) {
        return true;
    }
    let is_star = before_name
        .and_then(|i| tokens.get(i))
        .is_some_and(|token| token.is_punct(checker.source, "*"));
    is_star && is_keyword_in(checker, prev_index.checked_sub(2), &["function"])
}

fn brace_context(checker: &Checker, index: usize, enclosing: Option<Context>) -> Context {
    let Some(prev) = index.checked_sub(1).map(|i| &checker.code_tokens[i]) else {
        return Context::Block;
    };
    let text = checker.text(prev);
    match prev.kind {
        TokenKind::Punct => match text {
            ")" | "=>" | ";" | "{" | "}" => Context::Block,
            // `case x: {` or a labelled block
            ":" if matches!(enclosing, None | Some(Context::Block)) => Context::Block,
            _ => Context::Object,
        },
        TokenKind::Keyword if BLOCK_KEYWORDS.contains(&text) => Context::Block,
        _ => Context::Object,
    }
}

fn ends_expression(checker: &Checker, token: &Token, closed: Option<Context>) -> bool {
    let text = checker.text(token);
    match token.kind {
        TokenKind::Ident | TokenKind::Number | TokenKind::String | TokenKind::Regex => true,
        TokenKind::Template => text.ends_with('`'),
        TokenKind::Keyword => ENDING_KEYWORDS.contains(&text),
        TokenKind::Punct => match text {
            "++" | "--" => true,
            ")" => !matches!(closed, Some(Context::Paren { control: true })),
            "]" => true,
            "}" => closed == Some(Context::Object),
            _ => false,
        },
        TokenKind::LineComment | TokenKind::BlockComment => false,
    }
}

fn starts_statement(checker: &Checker, token: &Token) -> bool {
    let text = checker.text(token);
    match token.kind {
        TokenKind::Ident | TokenKind::Number | TokenKind::String | TokenKind::Regex => true,
        // A template literal after a line break is a tagged template.
        TokenKind::Template => false,
        TokenKind::Keyword => !matches!(text, "in" | "instanceof"),
        TokenKind::Punct => matches!(text, "}" | "++" | "--"),
        TokenKind::LineComment | TokenKind::BlockComment => false,
    }
}
