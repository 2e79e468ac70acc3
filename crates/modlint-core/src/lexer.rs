//! Tokenizer for JavaScript source.
//!
//! This is not a full ECMAScript parser: it produces a flat token stream with
//! byte ranges, which is all the rules need, and reports the lexical errors
//! (unterminated literals, stray characters, unbalanced brackets) as syntax
//! errors.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    Keyword,
    Number,
    String,
    Template,
    Regex,
    Punct,
    LineComment,
    BlockComment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub range: Range<usize>,
    // Whether a line terminator appears between the previous token (comments
    // included) and this one.
    pub newline_before: bool,
}

impl Token {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range.clone()]
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.kind, TokenKind::LineComment | TokenKind::BlockComment)
    }

    pub fn is_punct(&self, source: &str, punct: &str) -> bool {
        self.kind == TokenKind::Punct && self.text(source) == punct
    }

    pub fn is_keyword(&self, source: &str, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text(source) == keyword
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: Range<usize>,
}

impl SyntaxError {
    fn new(message: impl Into<String>, range: Range<usize>) -> Self {
        Self { message: message.into(), range }
    }
}

const KEYWORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "let", "new", "null", "return", "super", "switch", "this", "throw",
    "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

// Longest first, so the first match is the longest one.
const PUNCTUATORS: &[&str] = &[
    ">>>=", "...", "===", "!==", "**=", "<<=", ">>=", ">>>", "&&=", "||=", "??=", "=>", "==",
    "!=", "<=", ">=", "&&", "||", "??", "?.", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=",
    "|=", "^=", "**", "<<", ">>", "{", "}", "(", ")", "[", "]", ";", ",", "<", ">", "+", "-",
    "*", "/", "%", "&", "|", "^", "!", "~", "?", ":", "=", ".", "@",
];

pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphanumeric() || c == '\u{200c}' || c == '\u{200d}'
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Tokenizes `source` and checks that brackets are balanced.
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let tokens = Lexer::new(source).run()?;
    check_brackets(source, &tokens)?;
    Ok(tokens)
}

struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    tokens: Vec<Token>,
    newline_before: bool,
    // Brace depths at which a template literal's `${` was opened.
    template_stack: Vec<usize>,
    brace_depth: usize,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            tokens: Vec::new(),
            newline_before: false,
            template_stack: Vec::new(),
            brace_depth: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.source[self.pos..].chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token {
            kind,
            range: start..self.pos,
            newline_before: self.newline_before,
        });
        self.newline_before = false;
    }

    fn run(mut self) -> Result<Vec<Token>, SyntaxError> {
        // Hashbang line
        if self.source.starts_with("#!") {
            while let Some(c) = self.peek() {
                if is_line_terminator(c) {
                    break;
                }
                self.bump();
            }
        }

        while let Some(c) = self.peek() {
            let start = self.pos;

            if is_line_terminator(c) {
                self.bump();
                self.newline_before = true;
                continue;
            }
            if c.is_whitespace() || c == '\u{feff}' {
                self.bump();
                continue;
            }

            match c {
                '/' if self.peek_nth(1) == Some('/') => self.line_comment(start),
                '/' if self.peek_nth(1) == Some('*') => self.block_comment(start)?,
                '/' if self.regex_allowed() => self.regex(start)?,
                '"' | '\'' => self.string(start, c)?,
                '`' => {
                    self.bump();
                    self.template(start)?;
                }
                '}' if self.template_stack.last() == Some(&self.brace_depth) => {
                    // End of a `${...}` substitution: resume the template.
                    self.template_stack.pop();
                    self.bump();
                    self.template(start)?;
                }
                c if c.is_ascii_digit() => self.number(start),
                '.' if self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) => self.number(start),
                '#' if self.peek_nth(1).is_some_and(is_ident_start) => {
                    self.bump();
                    self.ident(start);
                }
                '\\' if self.peek_nth(1) == Some('u') => self.ident(start),
                c if is_ident_start(c) => self.ident(start),
                _ => self.punct(start)?,
            }
        }

        Ok(self.tokens)
    }

    fn line_comment(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_line_terminator(c) {
                break;
            }
            self.bump();
        }
        self.push(TokenKind::LineComment, start);
    }

    fn block_comment(&mut self, start: usize) -> Result<(), SyntaxError> {
        self.bump();
        self.bump();
        let mut has_newline = false;
        loop {
            match self.bump() {
                Some('*') if self.peek() == Some('/') => {
                    self.bump();
                    break;
                }
                Some(c) if is_line_terminator(c) => has_newline = true,
                Some(_) => {}
                None => {
                    return Err(SyntaxError::new(
                        "Unmatched '/*'.",
                        start..start + 2,
                    ));
                }
            }
        }
        self.push(TokenKind::BlockComment, start);
        // A multi-line comment acts as a line terminator for the next token.
        if has_newline {
            self.newline_before = true;
        }
        Ok(())
    }

    fn string(&mut self, start: usize, quote: char) -> Result<(), SyntaxError> {
        self.bump();
        loop {
            match self.bump() {
                Some('\\') => {
                    // Escaped character, including line continuations
                    if self.peek() == Some('\r') {
                        self.bump();
                        if self.peek() == Some('\n') {
                            self.bump();
                        }
                    } else {
                        self.bump();
                    }
                }
                Some(c) if c == quote => break,
                Some(c) if c == '\n' || c == '\r' => {
                    return Err(SyntaxError::new(
                        "Unclosed string.",
                        start..self.pos - c.len_utf8(),
                    ));
                }
                Some(_) => {}
                None => {
                    return Err(SyntaxError::new("Unclosed string.", start..self.pos));
                }
            }
        }
        self.push(TokenKind::String, start);
        Ok(())
    }

    // Called right after a backtick or the `}` closing a substitution.
    fn template(&mut self, start: usize) -> Result<(), SyntaxError> {
        loop {
            match self.bump() {
                Some('\\') => {
                    self.bump();
                }
                Some('`') => break,
                Some('$') if self.peek() == Some('{') => {
                    self.bump();
                    self.template_stack.push(self.brace_depth);
                    break;
                }
                Some(_) => {}
                None => {
                    return Err(SyntaxError::new(
                        "Unclosed template literal.",
                        start..start + 1,
                    ));
                }
            }
        }
        self.push(TokenKind::Template, start);
        Ok(())
    }

    fn regex(&mut self, start: usize) -> Result<(), SyntaxError> {
        self.bump();
        let mut in_class = false;
        loop {
            match self.bump() {
                Some('\\') => {
                    if self.peek().is_some_and(is_line_terminator) {
                        break;
                    }
                    self.bump();
                }
                Some('[') => in_class = true,
                Some(']') => in_class = false,
                Some('/') if !in_class => {
                    // Flags
                    while self.peek().is_some_and(is_ident_continue) {
                        self.bump();
                    }
                    self.push(TokenKind::Regex, start);
                    return Ok(());
                }
                Some(c) if is_line_terminator(c) => break,
                Some(_) => {}
                None => break,
            }
        }
        Err(SyntaxError::new(
            "Unclosed regular expression.",
            start..start + 1,
        ))
    }

    fn number(&mut self, start: usize) {
        let is_hex = self.peek() == Some('0')
            && self.peek_nth(1).is_some_and(|c| matches!(c, 'x' | 'X'));
        let mut prev = '\0';
        while let Some(c) = self.peek() {
            let exponent_sign = !is_hex && matches!(c, '+' | '-') && matches!(prev, 'e' | 'E');
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' || exponent_sign {
                prev = c;
                self.bump();
            } else {
                break;
            }
        }
        self.push(TokenKind::Number, start);
    }

    fn ident(&mut self, start: usize) {
        let first = self.pos;
        while let Some(c) = self.peek() {
            if c == '\\' && self.peek_nth(1) == Some('u') {
                self.bump();
                self.bump();
            } else if is_ident_continue(c) {
                self.bump();
            } else {
                break;
            }
        }
        // Never leave the cursor in place, `run` would loop forever.
        if self.pos == first {
            self.bump();
        }
        let kind = if is_keyword(&self.source[start..self.pos]) {
            TokenKind::Keyword
        } else {
            TokenKind::Ident
        };
        self.push(kind, start);
    }

    fn punct(&mut self, start: usize) -> Result<(), SyntaxError> {
        let rest = &self.source[self.pos..];
        let Some(punct) = PUNCTUATORS.iter().find(|p| rest.starts_with(**p)) else {
            let c = self.peek().unwrap_or('\0');
            return Err(SyntaxError::new(
                format!("Unexpected '{c}'."),
                start..start + c.len_utf8().max(1),
            ));
        };
        // `?.5` is a conditional followed by a number, not optional chaining.
        let len = if *punct == "?." && rest[2..].starts_with(|c: char| c.is_ascii_digit()) {
            1
        } else {
            punct.len()
        };
        self.pos += len;
        match &rest[..len] {
            "{" => self.brace_depth += 1,
            "}" => self.brace_depth = self.brace_depth.saturating_sub(1),
            _ => {}
        }
        self.push(TokenKind::Punct, start);
        Ok(())
    }

    // A `/` starts a regex unless the previous significant token ends an
    // expression.
    fn regex_allowed(&self) -> bool {
        let Some(prev) = self.tokens.iter().rev().find(|t| !t.is_comment()) else {
            return true;
        };
        let text = prev.text(self.source);
        match prev.kind {
            TokenKind::Number | TokenKind::String | TokenKind::Regex => false,
            TokenKind::Template => !text.ends_with('`'),
            TokenKind::Ident => false,
            // `return /a/`, `typeof /a/`, ...
            TokenKind::Keyword => !matches!(text, "this" | "super" | "null" | "true" | "false"),
            TokenKind::Punct => !matches!(text, ")" | "]" | "}" | "++" | "--"),
            TokenKind::LineComment | TokenKind::BlockComment => true,
        }
    }
}

fn closing_for(open: &str) -> &'static str {
    match open {
        "(" => ")",
        "[" => "]",
        _ => "}",
    }
}

fn check_brackets(source: &str, tokens: &[Token]) -> Result<(), SyntaxError> {
    let mut stack: Vec<&Token> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Punct => {}
            // `${` opens and `}` closes a brace inside template literals.
            TokenKind::Template => {
                let text = token.text(source);
                if !text.starts_with('`') {
                    match stack.pop() {
                        Some(open) if open.kind == TokenKind::Template => {}
                        _ => {
                            return Err(SyntaxError::new(
                                "Unmatched '}'.",
                                token.range.start..token.range.start + 1,
                            ));
                        }
                    }
                }
                if text.ends_with("${") {
                    stack.push(token);
                }
                continue;
            }
            _ => continue,
        }

        let text = token.text(source);
        match text {
            "(" | "[" | "{" => stack.push(token),
            ")" | "]" | "}" => {
                let Some(open) = stack.pop() else {
                    return Err(SyntaxError::new(
                        format!("Unmatched '{text}'."),
                        token.range.clone(),
                    ));
                };
                let open_text = if open.kind == TokenKind::Template {
                    "{"
                } else {
                    open.text(source)
                };
                let expected = closing_for(open_text);
                if expected != text {
                    return Err(SyntaxError::new(
                        format!("Expected '{expected}' to match '{open_text}' and instead saw '{text}'."),
                        token.range.clone(),
                    ));
                }
            }
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        let open_text = open.text(source);
        let open_text = if open.kind == TokenKind::Template {
            "${"
        } else {
            open_text
        };
        let end = if open.kind == TokenKind::Template {
            open.range.end
        } else {
            open.range.start + 1
        };
        return Err(SyntaxError::new(
            format!("Unmatched '{open_text}'."),
            end.saturating_sub(open_text.len())..end,
        ));
    }

    Ok(())
}
