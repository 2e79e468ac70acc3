use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;
use std::path::PathBuf;

use crate::location::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Details on the violated rule.
pub trait Violation {
    /// Name of the rule.
    fn name(&self) -> String;
    /// Explanation of the rule.
    fn body(&self) -> String;
    /// Optional suggestion for how to fix the violation.
    fn suggestion(&self) -> Option<String> {
        None
    }
    fn severity(&self) -> Severity {
        Severity::Warning
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ViolationData {
    pub name: String,
    pub body: String,
    pub suggestion: Option<String>,
    pub severity: Severity,
}

impl<T: Violation> From<T> for ViolationData {
    fn from(value: T) -> Self {
        Self {
            name: Violation::name(&value),
            body: Violation::body(&value),
            suggestion: Violation::suggestion(&value),
            severity: Violation::severity(&value),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
// A single issue reported by the analyzer.
pub struct Finding {
    // The name and description of the violated rule.
    pub message: ViolationData,
    pub filename: PathBuf,
    // Byte range in the analyzed source.
    pub range: Range<usize>,
    // Filled once all findings of a file are collected.
    pub location: Option<Location>,
}

impl Finding {
    pub fn new<T: Into<ViolationData>>(message: T, range: Range<usize>) -> Self {
        Self {
            message: message.into(),
            filename: PathBuf::new(),
            range,
            location: None,
        }
    }

    pub fn severity(&self) -> Severity {
        self.message.severity
    }

    pub fn is_error(&self) -> bool {
        self.message.severity == Severity::Error
    }

    pub fn rule_name(&self) -> &str {
        &self.message.name
    }
}

impl Ord for Finding {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare first by filename, then by range
        self.filename
            .cmp(&other.filename)
            .then_with(|| self.range.start.cmp(&other.range.start))
            .then_with(|| self.range.end.cmp(&other.range.end))
            .then_with(|| self.message.name.cmp(&other.message.name))
    }
}

impl PartialOrd for Finding {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
