use anyhow::Result;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use crate::analyzer::{Analyzer, JsAnalyzer};
use crate::config::Config;
use crate::discovery::{FileSelection, SelectionOptions};
use crate::emitter::Emitter;
use crate::selector::ModuleSelector;
use crate::stream::{FileReport, FindingStream};

/// What to lint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintOptions {
    pub root: PathBuf,
    pub selector: ModuleSelector,
    pub selection: SelectionOptions,
}

/// Counts gathered over a lint run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskSummary {
    pub files_checked: usize,
    pub findings: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl TaskSummary {
    pub fn add(&mut self, report: &FileReport) {
        let errors = report.errors();
        self.files_checked += 1;
        self.findings += report.findings.len();
        self.errors += errors;
        self.warnings += report.findings.len() - errors;
    }

    pub fn has_findings(&self) -> bool {
        self.findings > 0
    }
}

/// `All checks passed!`, `Found 2 warnings.` or `Found 1 error and 2 warnings.`
impl fmt::Display for TaskSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn count(n: usize, noun: &str) -> String {
            if n == 1 { format!("1 {noun}") } else { format!("{n} {noun}s") }
        }

        match (self.errors, self.warnings) {
            (0, 0) => write!(f, "All checks passed!"),
            (errors, 0) => write!(f, "Found {}.", count(errors, "error")),
            (0, warnings) => write!(f, "Found {}.", count(warnings, "warning")),
            (errors, warnings) => write!(
                f,
                "Found {} and {}.",
                count(errors, "error"),
                count(warnings, "warning")
            ),
        }
    }
}

/// The `lint` task: selects the files of a module, analyzes them one by one
/// and hands each result to an [Emitter].
pub struct LintTask<A: Analyzer = JsAnalyzer> {
    options: LintOptions,
    analyzer: A,
}

impl LintTask<JsAnalyzer> {
    pub fn from_config(config: Config) -> Self {
        let options = LintOptions {
            root: config.root,
            selector: config.selector,
            selection: config.selection,
        };
        Self::new(options, JsAnalyzer::new(config.rule_set, config.rule_options))
    }
}

impl<A: Analyzer> LintTask<A> {
    pub fn new(options: LintOptions, analyzer: A) -> Self {
        Self { options, analyzer }
    }

    pub fn file_selection(&self) -> Result<FileSelection> {
        Ok(FileSelection::new(
            &self.options.root,
            &self.options.selector,
            &self.options.selection,
        )?)
    }

    /// Run the task, streaming every file report to `emitter`.
    ///
    /// Findings never make the run fail; only I/O errors (listing or reading
    /// files, writing the report) do.
    pub fn run<E: Emitter, W: Write>(&self, emitter: &mut E, writer: &mut W) -> Result<TaskSummary> {
        let selection = self.file_selection()?;
        tracing::info!(
            "Linting {} in {}",
            self.options.selector,
            self.options.root.display()
        );
        tracing::info!("File patterns: {}", selection.patterns().join(" "));

        let mut summary = TaskSummary::default();
        for report in FindingStream::new(&selection, &self.analyzer) {
            let report = report?;
            summary.add(&report);
            emitter.emit_file(writer, &report)?;
        }

        if summary.files_checked == 0 {
            tracing::warn!(
                "No files matched `{}` under {}",
                selection.patterns()[0],
                self.options.root.display()
            );
            return Ok(summary);
        }

        emitter.finish(writer, &summary)?;
        tracing::info!(
            "Checked {} file(s): {} error(s), {} warning(s)",
            summary.files_checked,
            summary.errors,
            summary.warnings
        );

        Ok(summary)
    }
}
