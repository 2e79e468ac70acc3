use crate::helpers::Project;

fn project() -> anyhow::Result<Project> {
    Project::new(&[
        ("src/widgets/a.js", "var x = 1;\nconsole.log(x);\n"),
        ("src/widgets/b.js", "var unused = 1;\nif (unused2 == 1) {}\n"),
    ])
}

#[test]
fn test_github_output() -> anyhow::Result<()> {
    let project = project()?;

    insta::assert_snapshot!(
        project.lint().args(["--output-format", "github"]).run(),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ::warning title=modlint (unused_variable),file=src/widgets/b.js,line=1,col=5::src/widgets/b.js:1:5 [unused_variable] 'unused' is defined but never used. Remove the declaration or use the variable.
    ::warning title=modlint (eqeqeq),file=src/widgets/b.js,line=2,col=13::src/widgets/b.js:2:13 [eqeqeq] Expected '===' and instead saw '=='. Use `===` instead.

    ----- stderr -----

    ----- args -----
    lint --output-format github
    "
    );

    Ok(())
}

#[test]
fn test_json_output() -> anyhow::Result<()> {
    let project = project()?;

    let output = project.lint().args(["--output-format", "json"]).run();
    assert!(output.success());

    let value: serde_json::Value = serde_json::from_str(&output.stdout)?;
    let findings = value.as_array().unwrap();
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0]["filename"], "src/widgets/b.js");
    assert_eq!(findings[0]["message"]["name"], "unused_variable");
    assert_eq!(findings[1]["message"]["name"], "eqeqeq");
    assert_eq!(findings[1]["location"]["row"], 2);

    Ok(())
}

#[test]
fn test_full_output() -> anyhow::Result<()> {
    let project = project()?;

    let output = project.lint().run();
    assert!(output.success());

    // `NO_COLOR` is set, so no escape codes end up in the report
    assert!(!output.stdout.contains('\x1b'));
    assert!(output.stdout.contains("warning: unused_variable"));
    assert!(output.stdout.contains("src/widgets/b.js:1:5"));
    assert!(output.stdout.contains("var unused = 1;"));
    assert!(output.stdout.contains("help: Remove the declaration or use the variable."));
    assert!(output.stdout.contains("warning: eqeqeq"));
    assert!(output.stdout.ends_with("Found 2 warnings.\n"));

    Ok(())
}

#[test]
fn test_clean_project() -> anyhow::Result<()> {
    let project = Project::new(&[("src/widgets/a.js", "var x = 1;\nconsole.log(x);\n")])?;

    let output = project.lint().run();
    assert!(output.success());
    assert_eq!(output.stdout, "All checks passed!\n");

    let output = project.lint().args(["--output-format", "json"]).run();
    assert_eq!(output.stdout, "[]\n");

    Ok(())
}
