#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown rules in {origin}: {}", .rules.join(", "))]
    UnknownRules { origin: String, rules: Vec<String> },
}
