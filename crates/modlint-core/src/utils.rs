use crate::finding::Finding;
use crate::location::Location;

/// Find the byte offsets of the new line characters in the given source.
pub fn find_new_lines(contents: &str) -> Vec<usize> {
    contents.match_indices('\n').map(|x| x.0).collect()
}

/// Takes the byte offset of the start of a finding and the offsets of the new
/// lines. Returns the 1-based (row, col) position of the finding in the file.
///
/// The row is 1 + the number of new line characters before `start`.
/// "1 + 1\nfoo()"
/// -> there is one \n so a finding on `foo` appears on line 2.
///
/// The column is 1 + the number of characters between the last new line before
/// `start` and `start` itself.
pub fn find_row_col(contents: &str, start: usize, loc_new_lines: &[usize]) -> (usize, usize) {
    let n_new_lines = loc_new_lines.partition_point(|x| *x < start);
    let line_start = match n_new_lines {
        0 => 0,
        n => loc_new_lines[n - 1] + 1,
    };
    let start = start.min(contents.len());
    let col = contents
        .get(line_start..start)
        .map(|s| s.chars().count())
        .unwrap_or(start - line_start);

    (n_new_lines + 1, col + 1)
}

/// Converts the byte range of every finding into a (row, col) location.
pub fn compute_findings_location(findings: Vec<Finding>, contents: &str) -> Vec<Finding> {
    let loc_new_lines = find_new_lines(contents);
    findings
        .into_iter()
        .map(|mut finding| {
            let (row, col) = find_row_col(contents, finding.range.start, &loc_new_lines);
            finding.location = Some(Location::new(row, col));
            finding
        })
        .collect()
}

/// Byte range of each line of `contents`, without the line terminator.
pub fn line_ranges(contents: &str) -> Vec<std::ops::Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;
    for (idx, _) in contents.match_indices('\n') {
        let end = if idx > start && contents.as_bytes()[idx - 1] == b'\r' {
            idx - 1
        } else {
            idx
        };
        ranges.push(start..end);
        start = idx + 1;
    }
    if start < contents.len() {
        ranges.push(start..contents.len());
    }
    ranges
}
