use std::fmt;

/// Picks the subdirectories of the source directory to lint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ModuleSelector {
    /// Every module.
    #[default]
    Wildcard,
    /// A module name, or any glob fragment such as `wid*`.
    Named(String),
}

impl ModuleSelector {
    /// An absent or empty value selects every module. Trailing slashes are
    /// dropped, `widgets/` is the module `widgets`.
    pub fn from_value(value: Option<&str>) -> Self {
        match value.map(|value| value.trim_end_matches('/')) {
            None | Some("") => Self::Wildcard,
            Some(name) => Self::Named(name.to_string()),
        }
    }

    /// The fragment used in place of `<module>` in `src/<module>/*.js`. The
    /// wildcard is `**`, so it also reaches nested module directories.
    pub fn as_glob(&self) -> &str {
        match self {
            Self::Wildcard => "**",
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for ModuleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wildcard => write!(f, "<all modules>"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}
