use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use crate::settings::LinterSettings;
use crate::settings::Settings;

pub const CONFIG_FILE_NAMES: [&str; 2] = ["modlint.toml", ".modlint.toml"];

#[derive(Debug, thiserror::Error)]
pub enum ParseTomlError {
    // It's nicer if we don't make these paths relative, so we can quickly
    // jump to the TOML file to see what is wrong
    #[error("Failed to read {}:\n{}", .0.display(), .1)]
    Read(PathBuf, io::Error),
    #[error("Failed to parse {}:\n{}", .0.display(), .1)]
    Deserialize(PathBuf, toml::de::Error),
}

pub fn parse_modlint_toml(path: &Path) -> Result<TomlOptions, ParseTomlError> {
    let contents =
        fs::read_to_string(path).map_err(|err| ParseTomlError::Read(path.to_path_buf(), err))?;
    parse_modlint_toml_str(&contents, path)
}

pub fn parse_modlint_toml_str(contents: &str, path: &Path) -> Result<TomlOptions, ParseTomlError> {
    toml::from_str(contents).map_err(|err| ParseTomlError::Deserialize(path.to_path_buf(), err))
}

#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct TomlOptions {
    pub lint: Option<LinterTomlOptions>,
}

#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct LinterTomlOptions {
    /// # Rules to select
    ///
    /// If this is empty, then all rules enabled by default are used.
    pub select: Option<Vec<String>>,

    /// # Rules to add on top of `select`
    pub extend_select: Option<Vec<String>>,

    /// # Rules to ignore
    ///
    /// This field has higher importance than `select`, so if a rule name
    /// appears in both `select` and `ignore`, it is ignored. `syntax_error`
    /// cannot be ignored.
    pub ignore: Option<Vec<String>>,

    /// # Directory containing the modules
    ///
    /// Relative to the project root: `--root` when passed, otherwise the
    /// directory holding `modlint.toml`. Defaults to `src`.
    pub source_dir: Option<String>,

    /// # Extension of the files to lint
    ///
    /// Defaults to `js`.
    pub extension: Option<String>,

    /// # Additional patterns to exclude
    ///
    /// Gitignore-style patterns resolved relative to the project root, e.g.
    /// `vendor/` or `**/*.min.js`.
    pub exclude: Option<Vec<String>>,

    /// # Whether to exclude dependency directories
    ///
    /// When `true` (the default), files under `node_modules/` and
    /// `bower_components/` are never linted.
    pub default_exclude: Option<bool>,

    /// # Maximum line length for `max_line_length`
    pub max_line_length: Option<usize>,
}

/// Return the path to the `modlint.toml` or `.modlint.toml` file in a given
/// directory.
pub fn find_modlint_toml_in_directory<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    // `modlint.toml` first, as we prioritize the "visible" one.
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| path.as_ref().join(name))
        .find(|toml| toml.is_file())
}

/// Find the closest `modlint.toml` or `.modlint.toml` if one exists, walking up
/// the filesystem.
pub fn find_modlint_toml<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    path.as_ref()
        .ancestors()
        .find_map(find_modlint_toml_in_directory)
}

impl TomlOptions {
    pub fn into_settings(self) -> Settings {
        let linter = self.lint.unwrap_or_default();

        let linter = LinterSettings {
            select: linter.select,
            extend_select: linter.extend_select,
            ignore: linter.ignore,
            source_dir: linter.source_dir,
            extension: linter.extension,
            exclude: linter.exclude,
            default_exclude: linter.default_exclude,
            max_line_length: linter.max_line_length,
        };

        Settings { linter }
    }
}
