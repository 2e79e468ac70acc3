//! Resolution of the module selector into a set of files.
//!
//! The glob set uses gitignore syntax through [ignore::overrides]: patterns are
//! anchored at the project root, `*` never crosses a `/`, a leading `!` turns a
//! pattern into an exclusion and the last matching pattern wins.

use ignore::overrides::{Override, OverrideBuilder};
use ignore::{Walk, WalkBuilder};
use std::path::{Path, PathBuf};

use crate::selector::ModuleSelector;
use crate::settings::{DEFAULT_EXTENSION, DEFAULT_SOURCE_DIR};

/// Dependency directories that are never linted, unless default excludes are
/// turned off.
pub const DEFAULT_EXCLUDE_DIRECTORIES: &[&str] = &["node_modules", "bower_components"];

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Invalid file pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: ignore::Error,
    },
    #[error("Failed to build the file selection: {0}")]
    Build(#[source] ignore::Error),
}

/// Inputs of the glob set besides the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOptions {
    pub source_dir: String,
    pub extension: String,
    pub exclude: Vec<String>,
    pub default_exclude: bool,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            source_dir: DEFAULT_SOURCE_DIR.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            exclude: Vec::new(),
            default_exclude: true,
        }
    }
}

/// The glob set derived from a module selector.
#[derive(Debug, Clone)]
pub struct FileSelection {
    root: PathBuf,
    source_dir: PathBuf,
    patterns: Vec<String>,
    overrides: Override,
}

impl FileSelection {
    pub fn new(
        root: &Path,
        selector: &ModuleSelector,
        options: &SelectionOptions,
    ) -> Result<Self, SelectionError> {
        let patterns = build_patterns(selector, options);

        let mut builder = OverrideBuilder::new(root);
        for pattern in &patterns {
            builder
                .add(pattern)
                .map_err(|source| SelectionError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })?;
        }
        let overrides = builder.build().map_err(SelectionError::Build)?;

        tracing::debug!("File selection patterns: {:?}", patterns);

        Ok(Self {
            root: root.to_path_buf(),
            source_dir: root.join(normalize_dir(&options.source_dir)),
            patterns,
            overrides,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The ordered patterns, exclusions prefixed with `!`.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether a file, given relative to the root, belongs to the selection.
    pub fn is_selected<P: AsRef<Path>>(&self, relative_path: P) -> bool {
        self.overrides
            .matched(relative_path.as_ref(), false)
            .is_whitelist()
    }

    /// Whether a directory, given relative to the root, is pruned from the walk.
    pub fn is_excluded_dir<P: AsRef<Path>>(&self, relative_path: P) -> bool {
        self.overrides
            .matched(relative_path.as_ref(), true)
            .is_ignore()
    }

    /// Lazily enumerate the selected files, sorted by file name within each
    /// directory. A missing source directory yields nothing.
    pub fn walk(&self) -> SelectedFiles {
        if !self.source_dir.is_dir() {
            tracing::debug!(
                "Source directory {} does not exist",
                self.source_dir.display()
            );
            return SelectedFiles { walk: None };
        }

        let root = self.root.clone();
        let overrides = self.overrides.clone();

        let mut builder = WalkBuilder::new(&self.source_dir);
        builder
            .standard_filters(false)
            .hidden(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                let Ok(relative) = entry.path().strip_prefix(&root) else {
                    return true;
                };
                if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    !overrides.matched(relative, true).is_ignore()
                } else {
                    overrides.matched(relative, false).is_whitelist()
                }
            });

        SelectedFiles { walk: Some(builder.build()) }
    }
}

/// Iterator over the files of a [FileSelection].
pub struct SelectedFiles {
    walk: Option<Walk>,
}

impl Iterator for SelectedFiles {
    type Item = Result<PathBuf, ignore::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let walk = self.walk.as_mut()?;
        for entry in walk.by_ref() {
            match entry {
                Ok(entry) if entry.file_type().is_some_and(|ft| ft.is_file()) => {
                    return Some(Ok(entry.into_path()));
                }
                Ok(_) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
        None
    }
}

fn normalize_dir(dir: &str) -> &str {
    let dir = dir.trim_start_matches("./").trim_matches('/');
    if dir == "." { "" } else { dir }
}

fn build_patterns(selector: &ModuleSelector, options: &SelectionOptions) -> Vec<String> {
    let source_dir = normalize_dir(&options.source_dir);
    let extension = options.extension.trim_start_matches('.');

    let include = if source_dir.is_empty() {
        format!("/{}/*.{extension}", selector.as_glob())
    } else {
        format!("/{source_dir}/{}/*.{extension}", selector.as_glob())
    };

    let mut patterns = vec![include];

    if options.default_exclude {
        for dir in DEFAULT_EXCLUDE_DIRECTORIES {
            patterns.push(format!("!**/{dir}"));
            patterns.push(format!("!**/{dir}/**"));
        }
    }

    for exclude in &options.exclude {
        let exclude = exclude.trim();
        if exclude.is_empty() {
            continue;
        }
        patterns.push(format!("!{}", exclude.trim_start_matches('!')));
    }

    patterns
}
