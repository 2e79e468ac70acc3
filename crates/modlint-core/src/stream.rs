//! Lazy pipeline from the selected files to per-file findings.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::analyzer::Analyzer;
use crate::discovery::{FileSelection, SelectedFiles};
use crate::finding::Finding;

/// The findings of one analyzed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub source: String,
    pub findings: Vec<Finding>,
}

impl FileReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn errors(&self) -> usize {
        self.findings.iter().filter(|f| f.is_error()).count()
    }

    pub fn warnings(&self) -> usize {
        self.findings.len() - self.errors()
    }
}

/// Reads and analyzes the files of a selection one at a time, in the order of
/// the walk. Only the current file is held in memory.
pub struct FindingStream<'a, A: Analyzer + ?Sized> {
    root: PathBuf,
    files: SelectedFiles,
    analyzer: &'a A,
}

impl<'a, A: Analyzer + ?Sized> FindingStream<'a, A> {
    pub fn new(selection: &FileSelection, analyzer: &'a A) -> Self {
        Self {
            root: selection.root().to_path_buf(),
            files: selection.walk(),
            analyzer,
        }
    }

    fn report(&self, path: PathBuf) -> Result<FileReport> {
        let relative = relativize_path(&self.root, &path);
        tracing::debug!("Checking file: {}", relative.display());

        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {}", relative.display()))?;
        let findings = self.analyzer.analyze(&relative, &source);

        Ok(FileReport { path: relative, source, findings })
    }
}

impl<A: Analyzer + ?Sized> Iterator for FindingStream<'_, A> {
    type Item = Result<FileReport>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.files.next()? {
            Ok(path) => Some(self.report(path)),
            Err(err) => Some(Err(err).context("Failed to list the files to lint")),
        }
    }
}

fn relativize_path(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
