//! Comment-based suppression for lint rules
//!
//! Supported directives:
//! - `// modlint-ignore-line` hides findings on the line holding the comment;
//! - `// modlint-ignore-start` and `// modlint-ignore-end` hide findings on all
//!   lines in between (an unclosed region extends to the end of the file).
//!
//! Every directive accepts an optional list of rules, e.g.
//! `// modlint-ignore-line: eqeqeq, no_eval`. Without it, all rules are hidden.
//! Syntax errors are never hidden.

use rustc_hash::FxHashSet;

use crate::finding::Finding;
use crate::lexer::Token;
use crate::utils::{find_new_lines, find_row_col};

const IGNORE_LINE: &str = "modlint-ignore-line";
const IGNORE_START: &str = "modlint-ignore-start";
const IGNORE_END: &str = "modlint-ignore-end";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Directive {
    Line(Option<FxHashSet<String>>),
    Start(Option<FxHashSet<String>>),
    End,
}

/// Parse the text of a comment (delimiters included) into a directive.
fn parse_directive(comment: &str) -> Option<Directive> {
    let text = comment
        .strip_prefix("//")
        .or_else(|| comment.strip_prefix("/*").map(|c| c.trim_end_matches("*/")))?
        .trim();

    let (head, rules) = match text.split_once(':') {
        Some((head, rules)) => (head.trim(), Some(rules)),
        None => (text, None),
    };

    let rules = rules.map(|rules| {
        rules
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect::<FxHashSet<String>>()
    });

    match head {
        IGNORE_LINE => Some(Directive::Line(rules)),
        IGNORE_START => Some(Directive::Start(rules)),
        IGNORE_END => Some(Directive::End),
        _ => None,
    }
}

#[derive(Debug, Clone)]
struct SuppressedRegion {
    // 1-based, inclusive
    first_row: usize,
    last_row: usize,
    // `None` means every rule
    rules: Option<FxHashSet<String>>,
}

impl SuppressedRegion {
    fn covers(&self, row: usize, rule: &str) -> bool {
        row >= self.first_row
            && row <= self.last_row
            && self.rules.as_ref().is_none_or(|rules| rules.contains(rule))
    }
}

/// Tracks which lines should skip linting based on comments.
#[derive(Debug, Default)]
pub struct SuppressionManager {
    regions: Vec<SuppressedRegion>,
}

impl SuppressionManager {
    pub fn from_tokens(source: &str, tokens: &[Token]) -> Self {
        let new_lines = find_new_lines(source);
        let mut regions = Vec::new();
        let mut open: Option<(usize, Option<FxHashSet<String>>)> = None;

        for token in tokens.iter().filter(|t| t.is_comment()) {
            let Some(directive) = parse_directive(token.text(source)) else {
                continue;
            };
            let (row, _) = find_row_col(source, token.range.start, &new_lines);

            match directive {
                Directive::Line(rules) => {
                    regions.push(SuppressedRegion { first_row: row, last_row: row, rules });
                }
                Directive::Start(rules) => {
                    // A nested start is ignored, the outer region wins.
                    if open.is_none() {
                        open = Some((row, rules));
                    }
                }
                Directive::End => {
                    if let Some((first_row, rules)) = open.take() {
                        regions.push(SuppressedRegion { first_row, last_row: row, rules });
                    }
                }
            }
        }

        if let Some((first_row, rules)) = open {
            regions.push(SuppressedRegion { first_row, last_row: usize::MAX, rules });
        }

        Self { regions }
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn is_suppressed(&self, row: usize, rule: &str) -> bool {
        self.regions.iter().any(|region| region.covers(row, rule))
    }

    /// Drop the findings hidden by a directive. Findings must already have
    /// their location computed.
    pub fn filter(&self, findings: Vec<Finding>) -> Vec<Finding> {
        if self.is_empty() {
            return findings;
        }
        findings
            .into_iter()
            .filter(|finding| {
                if finding.is_error() {
                    return true;
                }
                match finding.location {
                    Some(location) => !self.is_suppressed(location.row(), finding.rule_name()),
                    None => true,
                }
            })
            .collect()
    }
}
