use rustc_hash::FxHashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultStatus {
    #[default]
    Enabled,
    Disabled,
}

/// All rules known to the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    SyntaxError,
    UnusedVariable,
    Eqeqeq,
    Debugger,
    MissingSemicolon,
    NoWith,
    NoEval,
    TrailingWhitespace,
    MaxLineLength,
}

impl Rule {
    pub fn all() -> &'static [Rule] {
        &[
            Rule::SyntaxError,
            Rule::UnusedVariable,
            Rule::Eqeqeq,
            Rule::Debugger,
            Rule::MissingSemicolon,
            Rule::NoWith,
            Rule::NoEval,
            Rule::TrailingWhitespace,
            Rule::MaxLineLength,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rule::SyntaxError => "syntax_error",
            Rule::UnusedVariable => "unused_variable",
            Rule::Eqeqeq => "eqeqeq",
            Rule::Debugger => "debugger",
            Rule::MissingSemicolon => "missing_semicolon",
            Rule::NoWith => "no_with",
            Rule::NoEval => "no_eval",
            Rule::TrailingWhitespace => "trailing_whitespace",
            Rule::MaxLineLength => "max_line_length",
        }
    }

    pub fn from_name(name: &str) -> Option<Rule> {
        Rule::all().iter().copied().find(|r| r.name() == name)
    }

    pub fn default_status(&self) -> DefaultStatus {
        match self {
            Rule::TrailingWhitespace | Rule::MaxLineLength => DefaultStatus::Disabled,
            _ => DefaultStatus::Enabled,
        }
    }

    pub fn is_enabled_by_default(&self) -> bool {
        self.default_status() == DefaultStatus::Enabled
    }

    /// Rules that are always applied, whatever the selection.
    pub fn is_mandatory(&self) -> bool {
        matches!(self, Rule::SyntaxError)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet(FxHashSet<Rule>);

impl RuleSet {
    pub fn default_rules() -> Self {
        Rule::all()
            .iter()
            .copied()
            .filter(Rule::is_enabled_by_default)
            .collect()
    }

    pub fn insert(&mut self, rule: Rule) -> bool {
        self.0.insert(rule)
    }

    pub fn remove(&mut self, rule: &Rule) -> bool {
        // Mandatory rules survive `ignore`.
        if rule.is_mandatory() {
            return false;
        }
        self.0.remove(rule)
    }

    pub fn contains(&self, rule: &Rule) -> bool {
        self.0.contains(rule)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Rule> + '_ {
        Rule::all().iter().copied().filter(|r| self.0.contains(r))
    }

    /// Build the set of rules to apply from a `select` list (replacing the
    /// defaults when non-empty), an `extend-select` list and an `ignore` list.
    /// Mandatory rules are always part of the result.
    pub fn resolve(select: &[Rule], extend_select: &[Rule], ignore: &[Rule]) -> Self {
        let mut rules = if select.is_empty() {
            Self::default_rules()
        } else {
            select.iter().copied().collect()
        };
        for rule in extend_select {
            rules.insert(*rule);
        }
        for rule in ignore {
            rules.remove(rule);
        }
        for rule in Rule::all().iter().filter(|r| r.is_mandatory()) {
            rules.insert(*rule);
        }
        rules
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parse rule names as passed in the CLI (separated by commas) or listed in
/// `modlint.toml`. Returns the names that don't match any rule as the error.
pub fn parse_rule_names<S: AsRef<str>>(names: &[S]) -> Result<Vec<Rule>, Vec<String>> {
    let mut rules = Vec::new();
    let mut unknown = Vec::new();

    for name in names.iter().map(|s| s.as_ref().trim()).filter(|s| !s.is_empty()) {
        match Rule::from_name(name) {
            Some(rule) => rules.push(rule),
            None => unknown.push(name.to_string()),
        }
    }

    if unknown.is_empty() {
        Ok(rules)
    } else {
        Err(unknown)
    }
}
