use crate::checker::Checker;
use crate::finding::*;
use crate::utils::line_ranges;

pub struct MaxLineLength {
    length: usize,
    max: usize,
}

/// ## What it does
///
/// Checks for lines longer than `max-line-length` characters (100 by default).
/// The length is counted in characters, not bytes.
///
/// This rule is disabled by default.
impl Violation for MaxLineLength {
    fn name(&self) -> String {
        "max_line_length".to_string()
    }
    fn body(&self) -> String {
        format!("Line is too long ({} > {}).", self.length, self.max)
    }
}

pub fn max_line_length(checker: &Checker) -> Vec<Finding> {
    let max = checker.rule_options.max_line_length;

    line_ranges(checker.source)
        .into_iter()
        .filter_map(|line| {
            let text = &checker.source[line.clone()];
            let length = text.chars().count();
            if length <= max {
                return None;
            }
            // Highlight the overflowing part of the line.
            let overflow = text
                .char_indices()
                .nth(max)
                .map_or(line.start, |(offset, _)| line.start + offset);
            Some(Finding::new(MaxLineLength { length, max }, overflow..line.end))
        })
        .collect()
}
