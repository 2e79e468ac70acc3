use rustc_hash::{FxHashMap, FxHashSet};

use crate::checker::Checker;
use crate::finding::*;
use crate::lexer::{Token, TokenKind};

pub struct UnusedVariable {
    name: String,
}

/// ## What it does
///
/// Checks for variables declared with `var`, `let` or `const` whose name is
/// never referenced anywhere else in the file.
///
/// Names are matched across the whole file, ignoring scopes: a variable counts
/// as used if the same name is referenced anywhere. Exported declarations and
/// destructuring patterns are not checked. Property accesses (`obj.x`) and
/// object keys (`{ x: 1 }`) are not references.
///
/// ## Example
///
/// ```js
/// var unused = 1;
/// var x = 2;
/// console.log(x);
/// ```
impl Violation for UnusedVariable {
    fn name(&self) -> String {
        "unused_variable".to_string()
    }
    fn body(&self) -> String {
        format!("'{}' is defined but never used.", self.name)
    }
    fn suggestion(&self) -> Option<String> {
        Some("Remove the declaration or use the variable.".to_string())
    }
}

pub fn unused_variable(checker: &Checker) -> Vec<Finding> {
    let tokens = &checker.code_tokens;

    let mut declarations: Vec<usize> = Vec::new();
    for (index, token) in tokens.iter().enumerate() {
        if token.kind != TokenKind::Keyword
            || !matches!(checker.text(token), "var" | "let" | "const")
        {
            continue;
        }
        let exported = index > 0 && tokens[index - 1].is_keyword(checker.source, "export");
        if exported {
            continue;
        }
        declarations.extend(declared_bindings(checker, index));
    }

    if declarations.is_empty() {
        return vec![];
    }

    let declaration_sites: FxHashSet<usize> = declarations.iter().copied().collect();
    let mut references: FxHashMap<&str, usize> = FxHashMap::default();
    for (index, token) in tokens.iter().enumerate() {
        if token.kind == TokenKind::Ident
            && !declaration_sites.contains(&index)
            && is_reference(checker, index)
        {
            *references.entry(checker.text(token)).or_default() += 1;
        }
    }

    declarations
        .into_iter()
        .filter_map(|index| {
            let token = &tokens[index];
            let name = checker.text(token);
            if references.contains_key(name) {
                return None;
            }
            Some(Finding::new(
                UnusedVariable { name: name.to_string() },
                token.range.clone(),
            ))
        })
        .collect()
}

/// Indices of the identifiers bound by the declaration starting at the
/// `var`/`let`/`const` keyword at `keyword_index`.
fn declared_bindings(checker: &Checker, keyword_index: usize) -> Vec<usize> {
    let tokens = &checker.code_tokens;
    let mut bindings = Vec::new();
    let mut index = keyword_index + 1;

    'bindings: loop {
        let Some(token) = tokens.get(index) else {
            break;
        };
        if token.kind == TokenKind::Ident {
            bindings.push(index);
            index += 1;
        } else if token.is_punct(checker.source, "{") || token.is_punct(checker.source, "[") {
            // Destructuring pattern
            match matching_close(checker, index) {
                Some(close) => index = close + 1,
                None => break,
            }
        } else {
            break;
        }

        // Skip the initializer, up to the next binding or the end of the
        // declaration.
        let mut depth = 0i32;
        while let Some(token) = tokens.get(index) {
            if depth == 0
                && token.newline_before
                && starts_statement(checker, token)
                && ends_expression(checker, &tokens[index - 1])
            {
                break 'bindings;
            }
            depth += bracket_delta(checker, token);
            if depth < 0 {
                break 'bindings;
            }
            if depth == 0 && token.is_punct(checker.source, ",") {
                index += 1;
                continue 'bindings;
            }
            if depth == 0 && token.is_punct(checker.source, ";") {
                break 'bindings;
            }
            index += 1;
        }
        break;
    }

    bindings
}

/// How a token changes the bracket depth. Template parts count as brackets:
/// `` `a${ `` opens and `` }b` `` closes.
fn bracket_delta(checker: &Checker, token: &Token) -> i32 {
    let text = checker.text(token);
    match token.kind {
        TokenKind::Punct => match text {
            "(" | "[" | "{" => 1,
            ")" | "]" | "}" => -1,
            _ => 0,
        },
        TokenKind::Template => {
            let mut delta = 0;
            if !text.starts_with('`') {
                delta -= 1;
            }
            if text.ends_with("${") {
                delta += 1;
            }
            delta
        }
        _ => 0,
    }
}

fn matching_close(checker: &Checker, open_index: usize) -> Option<usize> {
    let mut depth = 0i32;
    for (index, token) in checker.code_tokens.iter().enumerate().skip(open_index) {
        depth += bracket_delta(checker, token);
        if depth == 0 {
            return Some(index);
        }
    }
    None
}

fn starts_statement(checker: &Checker, token: &Token) -> bool {
    match token.kind {
        TokenKind::Punct => matches!(checker.text(token), "++" | "--"),
        TokenKind::Keyword => !matches!(checker.text(token), "in" | "instanceof"),
        _ => true,
    }
}

fn ends_expression(checker: &Checker, token: &Token) -> bool {
    let text = checker.text(token);
    match token.kind {
        TokenKind::Ident | TokenKind::Number | TokenKind::String | TokenKind::Regex => true,
        TokenKind::Template => text.ends_with('`'),
        TokenKind::Punct => matches!(text, ")" | "]" | "}" | "++" | "--"),
        TokenKind::Keyword => matches!(text, "this" | "null" | "true" | "false" | "super"),
        TokenKind::LineComment | TokenKind::BlockComment => false,
    }
}

/// Whether the identifier at `index` refers to a variable, as opposed to a
/// property name.
fn is_reference(checker: &Checker, index: usize) -> bool {
    let tokens = &checker.code_tokens;
    let Some(prev) = index.checked_sub(1).map(|i| &tokens[i]) else {
        return true;
    };
    if prev.is_punct(checker.source, ".") || prev.is_punct(checker.source, "?.") {
        return false;
    }
    let is_key_position =
        prev.is_punct(checker.source, "{") || prev.is_punct(checker.source, ",");
    let followed_by_colon = tokens
        .get(index + 1)
        .is_some_and(|next| next.is_punct(checker.source, ":"));
    !(is_key_position && followed_by_colon)
}
