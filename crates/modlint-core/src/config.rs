use anyhow::Result;
use std::path::PathBuf;

use crate::discovery::SelectionOptions;
use crate::error::ConfigError;
use crate::rule_set::{Rule, RuleSet, parse_rule_names};
use crate::selector::ModuleSelector;
use crate::settings::{DEFAULT_EXTENSION, DEFAULT_SOURCE_DIR, RuleOptions, Settings};

#[derive(Clone, Debug, Default)]
/// Arguments provided in the CLI.
pub struct ArgsConfig {
    /// Directory the selection is resolved against.
    pub root: PathBuf,
    /// Value of the module selector, `None` if unset.
    pub module: Option<String>,
    /// Names of rules to use. A single string with commas between rule names.
    pub select: String,
    /// Names of rules to add to the selection, separated by commas.
    pub extend_select: String,
    /// Names of rules to ignore, separated by commas.
    pub ignore: String,
    /// Did the user pass the --no-default-exclude flag?
    pub no_default_exclude: bool,
}

/// Everything a lint run needs, once CLI arguments and `modlint.toml` are
/// reconciled.
#[derive(Clone, Debug)]
pub struct Config {
    pub root: PathBuf,
    pub selector: ModuleSelector,
    pub selection: SelectionOptions,
    pub rule_set: RuleSet,
    pub rule_options: RuleOptions,
}

pub fn build_config(args: &ArgsConfig, settings: Option<&Settings>) -> Result<Config> {
    let linter = settings.map(|s| &s.linter);

    let select_cli = parse_rules_cli(&args.select, "`--select`")?;
    let extend_select_cli = parse_rules_cli(&args.extend_select, "`--extend-select`")?;
    let ignore_cli = parse_rules_cli(&args.ignore, "`--ignore`")?;

    let select_toml = parse_rules_toml(linter.and_then(|l| l.select.as_deref()), "select")?;
    let extend_select_toml =
        parse_rules_toml(linter.and_then(|l| l.extend_select.as_deref()), "extend-select")?;
    let ignore_toml = parse_rules_toml(linter.and_then(|l| l.ignore.as_deref()), "ignore")?;

    // `--select` replaces the selection from the TOML, the other two lists
    // are combined.
    let select = if select_cli.is_empty() { select_toml } else { select_cli };
    let extend_select: Vec<Rule> = extend_select_toml.into_iter().chain(extend_select_cli).collect();
    let ignore: Vec<Rule> = ignore_toml.into_iter().chain(ignore_cli).collect();

    let rule_set = RuleSet::resolve(&select, &extend_select, &ignore);

    let default_exclude = if args.no_default_exclude {
        false
    } else {
        linter.and_then(|l| l.default_exclude).unwrap_or(true)
    };

    let selection = SelectionOptions {
        source_dir: linter
            .and_then(|l| l.source_dir.clone())
            .unwrap_or_else(|| DEFAULT_SOURCE_DIR.to_string()),
        extension: linter
            .and_then(|l| l.extension.clone())
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
        exclude: linter.and_then(|l| l.exclude.clone()).unwrap_or_default(),
        default_exclude,
    };

    let mut rule_options = RuleOptions::default();
    if let Some(max_line_length) = linter.and_then(|l| l.max_line_length) {
        rule_options.max_line_length = max_line_length;
    }

    Ok(Config {
        root: args.root.clone(),
        selector: ModuleSelector::from_value(args.module.as_deref()),
        selection,
        rule_set,
        rule_options,
    })
}

/// Parse a comma-separated list of rule names passed in the CLI.
pub fn parse_rules_cli(rules: &str, origin: &str) -> Result<Vec<Rule>, ConfigError> {
    let names: Vec<&str> = rules.split(',').collect();
    parse_rule_names(&names)
        .map_err(|rules| ConfigError::UnknownRules { origin: origin.to_string(), rules })
}

/// Parse a list of rule names from `modlint.toml`.
pub fn parse_rules_toml(rules: Option<&[String]>, field: &str) -> Result<Vec<Rule>, ConfigError> {
    let Some(rules) = rules else {
        return Ok(vec![]);
    };
    parse_rule_names(rules).map_err(|rules| ConfigError::UnknownRules {
        origin: format!("field `{field}` in 'modlint.toml'"),
        rules,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::LinterSettings;

    fn settings(linter: LinterSettings) -> Settings {
        Settings { linter }
    }

    #[test]
    fn test_defaults() {
        let config = build_config(&ArgsConfig::default(), None).unwrap();
        assert_eq!(config.selector, ModuleSelector::Wildcard);
        assert_eq!(config.selection, SelectionOptions::default());
        assert_eq!(config.rule_set, RuleSet::default_rules());
        assert_eq!(config.rule_options, RuleOptions::default());
    }

    #[test]
    fn test_module_is_passed_through() {
        let args = ArgsConfig { module: Some("widgets".to_string()), ..Default::default() };
        let config = build_config(&args, None).unwrap();
        assert_eq!(config.selector, ModuleSelector::Named("widgets".to_string()));

        let args = ArgsConfig { module: Some(String::new()), ..Default::default() };
        let config = build_config(&args, None).unwrap();
        assert_eq!(config.selector, ModuleSelector::Wildcard);
    }

    #[test]
    fn test_cli_select_overrides_toml() {
        let settings = settings(LinterSettings {
            select: Some(vec!["debugger".to_string()]),
            ignore: Some(vec!["eqeqeq".to_string()]),
            ..Default::default()
        });

        let config = build_config(&ArgsConfig::default(), Some(&settings)).unwrap();
        assert_eq!(
            config.rule_set.iter().collect::<Vec<_>>(),
            vec![Rule::SyntaxError, Rule::Debugger]
        );

        let args = ArgsConfig {
            select: "eqeqeq,no_eval".to_string(),
            extend_select: "trailing_whitespace".to_string(),
            ..Default::default()
        };
        let config = build_config(&args, Some(&settings)).unwrap();
        // `ignore` from the TOML still applies.
        assert_eq!(
            config.rule_set.iter().collect::<Vec<_>>(),
            vec![Rule::SyntaxError, Rule::NoEval, Rule::TrailingWhitespace]
        );
    }

    #[test]
    fn test_syntax_error_cannot_be_ignored() {
        let args = ArgsConfig { ignore: "syntax_error".to_string(), ..Default::default() };
        let config = build_config(&args, None).unwrap();
        assert!(config.rule_set.contains(&Rule::SyntaxError));
    }

    #[test]
    fn test_unknown_rules() {
        let args = ArgsConfig { select: "eqeqeq,foo,bar".to_string(), ..Default::default() };
        let err = build_config(&args, None).unwrap_err();
        assert_eq!(err.to_string(), "Unknown rules in `--select`: foo, bar");

        let settings = settings(LinterSettings {
            ignore: Some(vec!["nope".to_string()]),
            ..Default::default()
        });
        let err = build_config(&ArgsConfig::default(), Some(&settings)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown rules in field `ignore` in 'modlint.toml': nope"
        );
    }

    #[test]
    fn test_selection_options_from_toml() {
        let settings = settings(LinterSettings {
            source_dir: Some("lib".to_string()),
            extension: Some("mjs".to_string()),
            exclude: Some(vec!["vendor/".to_string()]),
            default_exclude: Some(true),
            max_line_length: Some(80),
            ..Default::default()
        });
        let args = ArgsConfig { no_default_exclude: true, ..Default::default() };
        let config = build_config(&args, Some(&settings)).unwrap();
        assert_eq!(
            config.selection,
            SelectionOptions {
                source_dir: "lib".to_string(),
                extension: "mjs".to_string(),
                exclude: vec!["vendor/".to_string()],
                default_exclude: false,
            }
        );
        assert_eq!(config.rule_options.max_line_length, 80);
    }
}
