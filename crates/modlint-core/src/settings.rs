/// Resolved configuration settings used within modlint
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Settings {
    pub linter: LinterSettings,
}

/// Settings from `[lint]` in `modlint.toml`. `None` means "not specified", so
/// that CLI arguments and defaults can take over.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LinterSettings {
    pub select: Option<Vec<String>>,
    pub extend_select: Option<Vec<String>>,
    pub ignore: Option<Vec<String>>,
    pub source_dir: Option<String>,
    pub extension: Option<String>,
    pub exclude: Option<Vec<String>>,
    pub default_exclude: Option<bool>,
    pub max_line_length: Option<usize>,
}

pub const DEFAULT_SOURCE_DIR: &str = "src";
pub const DEFAULT_EXTENSION: &str = "js";
pub const DEFAULT_MAX_LINE_LENGTH: usize = 100;

/// Per-rule options once configuration is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOptions {
    pub max_line_length: usize,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self { max_line_length: DEFAULT_MAX_LINE_LENGTH }
    }
}
