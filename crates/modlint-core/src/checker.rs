use crate::finding::Finding;
use crate::lexer::Token;
use crate::rule_set::{Rule, RuleSet};
use crate::settings::RuleOptions;

#[derive(Debug)]
// The object that collects findings while the rules run. One per analyzed
// file.
pub struct Checker<'a> {
    pub source: &'a str,
    // All tokens, comments included.
    pub tokens: &'a [Token],
    // Tokens without comments. `newline_before` is true when a line terminator
    // appears anywhere between this token and the previous code token.
    pub code_tokens: Vec<Token>,
    // The findings to report (possibly empty).
    pub findings: Vec<Finding>,
    // The set of rules to apply.
    pub rule_set: RuleSet,
    pub rule_options: RuleOptions,
}

impl<'a> Checker<'a> {
    pub(crate) fn new(
        source: &'a str,
        tokens: &'a [Token],
        rule_set: RuleSet,
        rule_options: RuleOptions,
    ) -> Self {
        Self {
            source,
            tokens,
            code_tokens: code_tokens(tokens),
            findings: vec![],
            rule_set,
            rule_options,
        }
    }

    // This takes an Option<Finding> because a check reports either
    // Some(Finding) or None at a given position.
    pub(crate) fn report(&mut self, finding: Option<Finding>) {
        if let Some(finding) = finding {
            self.findings.push(finding);
        }
    }

    pub(crate) fn report_all(&mut self, findings: Vec<Finding>) {
        self.findings.extend(findings);
    }

    pub(crate) fn is_rule_enabled(&self, rule: Rule) -> bool {
        self.rule_set.contains(&rule)
    }

    pub(crate) fn text(&self, token: &Token) -> &'a str {
        token.text(self.source)
    }
}

fn code_tokens(tokens: &[Token]) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut pending_newline = false;
    for token in tokens {
        if token.is_comment() {
            pending_newline |= token.newline_before;
            continue;
        }
        let mut token = token.clone();
        token.newline_before |= pending_newline;
        pending_newline = false;
        out.push(token);
    }
    out
}
