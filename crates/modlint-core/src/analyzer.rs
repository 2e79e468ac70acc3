use std::path::Path;

use crate::checker::Checker;
use crate::finding::Finding;
use crate::lexer::tokenize;
use crate::lints::debugger::debugger::debugger;
use crate::lints::eqeqeq::eqeqeq::eqeqeq;
use crate::lints::max_line_length::max_line_length::max_line_length;
use crate::lints::missing_semicolon::missing_semicolon::missing_semicolon;
use crate::lints::no_eval::no_eval::no_eval;
use crate::lints::no_with::no_with::no_with;
use crate::lints::syntax_error::syntax_error::syntax_error;
use crate::lints::trailing_whitespace::trailing_whitespace::trailing_whitespace;
use crate::lints::unused_variable::unused_variable::unused_variable;
use crate::rule_set::{Rule, RuleSet};
use crate::settings::RuleOptions;
use crate::suppression::SuppressionManager;
use crate::utils::compute_findings_location;

/// Turns the contents of one file into findings.
pub trait Analyzer {
    fn analyze(&self, path: &Path, contents: &str) -> Vec<Finding>;
}

/// The built-in JavaScript analyzer.
#[derive(Debug, Clone)]
pub struct JsAnalyzer {
    rule_set: RuleSet,
    rule_options: RuleOptions,
}

impl JsAnalyzer {
    pub fn new(rule_set: RuleSet, rule_options: RuleOptions) -> Self {
        Self { rule_set, rule_options }
    }
}

impl Analyzer for JsAnalyzer {
    fn analyze(&self, path: &Path, contents: &str) -> Vec<Finding> {
        let findings = match tokenize(contents) {
            Ok(tokens) => {
                let mut checker = Checker::new(
                    contents,
                    &tokens,
                    self.rule_set.clone(),
                    self.rule_options,
                );
                check_tokens(&mut checker);
                check_document(&mut checker);

                let findings = compute_findings_location(checker.findings, contents);
                SuppressionManager::from_tokens(contents, &tokens).filter(findings)
            }
            Err(error) => {
                tracing::debug!("Syntax error in {}: {}", path.display(), error.message);
                compute_findings_location(vec![syntax_error(error)], contents)
            }
        };

        let mut findings: Vec<Finding> = findings
            .into_iter()
            .map(|mut finding| {
                finding.filename = path.to_path_buf();
                finding
            })
            .collect();
        findings.sort();
        findings
    }
}

// Rules that look at one token at a time.
fn check_tokens(checker: &mut Checker) {
    for index in 0..checker.code_tokens.len() {
        if checker.is_rule_enabled(Rule::Eqeqeq) {
            checker.report(eqeqeq(checker, index));
        }
        if checker.is_rule_enabled(Rule::Debugger) {
            checker.report(debugger(checker, index));
        }
        if checker.is_rule_enabled(Rule::NoWith) {
            checker.report(no_with(checker, index));
        }
        if checker.is_rule_enabled(Rule::NoEval) {
            checker.report(no_eval(checker, index));
        }
    }
}

// Rules that need the whole file.
fn check_document(checker: &mut Checker) {
    if checker.is_rule_enabled(Rule::UnusedVariable) {
        checker.report_all(unused_variable(checker));
    }
    if checker.is_rule_enabled(Rule::MissingSemicolon) {
        checker.report_all(missing_semicolon(checker));
    }
    if checker.is_rule_enabled(Rule::TrailingWhitespace) {
        checker.report_all(trailing_whitespace(checker));
    }
    if checker.is_rule_enabled(Rule::MaxLineLength) {
        checker.report_all(max_line_length(checker));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn analyze(code: &str) -> Vec<Finding> {
        JsAnalyzer::new(RuleSet::default_rules(), RuleOptions::default())
            .analyze(Path::new("src/widgets/a.js"), code)
    }

    #[test]
    fn test_clean_file() {
        assert!(analyze("var x = 1;\nconsole.log(x);\n").is_empty());
    }

    #[test]
    fn test_findings_are_sorted_and_located() {
        let findings = analyze("var unused = 1\nif (a == b) { debugger; }\n");
        let summary: Vec<_> = findings
            .iter()
            .map(|f| {
                let location = f.location.unwrap();
                (f.rule_name(), location.row(), location.column())
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("unused_variable", 1, 5),
                ("missing_semicolon", 1, 14),
                ("eqeqeq", 2, 7),
                ("debugger", 2, 15),
            ]
        );
        assert!(findings
            .iter()
            .all(|f| f.filename == PathBuf::from("src/widgets/a.js")));
    }

    #[test]
    fn test_syntax_error_is_the_only_finding() {
        let findings = analyze("var unused = 'oops;\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule_name(), "syntax_error");
        assert!(findings[0].is_error());
        assert_eq!(findings[0].filename, PathBuf::from("src/widgets/a.js"));
    }

    #[test]
    fn test_suppression_comments() {
        let code = "\
var a = 1; // modlint-ignore-line
// modlint-ignore-start: eqeqeq
if (x == y) { f(); }
if (x != y) { debugger; }
// modlint-ignore-end
if (x == y) { g(); }
";
        let findings = analyze(code);
        let rules: Vec<_> = findings
            .iter()
            .map(|f| (f.rule_name(), f.location.unwrap().row()))
            .collect();
        assert_eq!(rules, vec![("debugger", 4), ("eqeqeq", 6)]);
    }

    #[test]
    fn test_disabled_rules_do_not_run() {
        let analyzer = JsAnalyzer::new(
            RuleSet::resolve(&[Rule::Debugger], &[], &[]),
            RuleOptions::default(),
        );
        let findings = analyzer.analyze(Path::new("a.js"), "var a = b == c\ndebugger;\n");
        let rules: Vec<_> = findings.iter().map(|f| f.rule_name()).collect();
        assert_eq!(rules, vec!["debugger"]);
    }
}
