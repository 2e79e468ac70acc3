use crate::helpers::Project;

fn widgets_project() -> anyhow::Result<Project> {
    Project::new(&[
        ("src/widgets/a.js", "var x = 1;\nconsole.log(x);\n"),
        ("src/widgets/b.js", "var unused = 1;\n"),
        ("src/other/c.js", "debugger;\n"),
    ])
}

#[test]
fn test_module_from_environment() -> anyhow::Result<()> {
    let project = widgets_project()?;

    insta::assert_snapshot!(
        project.lint().module("widgets").concise().run(),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    src/widgets/b.js [1:5] unused_variable 'unused' is defined but never used. Remove the declaration or use the variable.

    Found 1 warning.

    ----- stderr -----

    ----- args -----
    lint --output-format concise
    "
    );

    Ok(())
}

#[test]
fn test_module_flag_takes_precedence_over_environment() -> anyhow::Result<()> {
    let project = widgets_project()?;

    let output = project
        .lint()
        .module("widgets")
        .args(["--module", "other"])
        .concise()
        .run();

    assert!(output.success());
    assert!(output.stdout.contains("src/other/c.js [1:1] debugger"));
    assert!(!output.stdout.contains("src/widgets"));

    Ok(())
}

#[test]
fn test_trailing_slash_in_module() -> anyhow::Result<()> {
    let project = widgets_project()?;

    let output = project.lint().module("widgets/").concise().run();
    assert!(output.stdout.contains("src/widgets/b.js [1:5] unused_variable"));
    assert!(!output.stdout.contains("src/other"));

    Ok(())
}

#[test]
fn test_unset_module_lints_every_module() -> anyhow::Result<()> {
    let project = widgets_project()?;

    insta::assert_snapshot!(
        project.lint().concise().run(),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    src/other/c.js [1:1] debugger Forgotten 'debugger' statement? Remove the `debugger` statement.
    src/widgets/b.js [1:5] unused_variable 'unused' is defined but never used. Remove the declaration or use the variable.

    Found 2 warnings.

    ----- stderr -----

    ----- args -----
    lint --output-format concise
    "
    );

    Ok(())
}

#[test]
fn test_empty_module_is_the_same_as_unset() -> anyhow::Result<()> {
    let project = widgets_project()?;

    let unset = project.lint().concise().run();
    let empty = project.lint().module("").concise().run();

    assert_eq!(unset.stdout, empty.stdout);
    assert_eq!(unset.exit_code(), empty.exit_code());

    Ok(())
}

#[test]
fn test_dependency_directories_are_never_linted() -> anyhow::Result<()> {
    let project = Project::new(&[
        ("src/widgets/a.js", "var x = 1;\nconsole.log(x);\n"),
        ("src/widgets/node_modules/dep.js", "debugger;\n"),
        ("src/bower_components/dep.js", "debugger;\n"),
        ("src/node_modules/lib/dep.js", "debugger;\n"),
    ])?;

    let output = project.lint().concise().run();
    assert!(output.success());
    assert_eq!(output.stdout, "All checks passed!\n");

    // Even when the module itself is named after a dependency directory
    let output = project.lint().module("node_modules").concise().run();
    assert!(output.success());
    assert_eq!(output.stdout, "");

    // Unless the default excludes are turned off
    let output = project.lint().concise().arg("--no-default-exclude").run();
    assert!(output.stdout.contains("src/bower_components/dep.js [1:1] debugger"));
    assert!(output.stdout.contains("src/widgets/node_modules/dep.js [1:1] debugger"));

    Ok(())
}

#[test]
fn test_no_matching_files() -> anyhow::Result<()> {
    let project = widgets_project()?;

    let output = project.lint().module("missing").concise().run();
    assert!(output.success());
    assert_eq!(output.stdout, "");
    assert!(
        output
            .stderr
            .contains("No files matched `/src/missing/*.js` under [ROOT]")
    );

    // No source directory at all
    let empty = Project::new(&[])?;
    let output = empty.lint().run();
    assert!(output.success());
    assert_eq!(output.stdout, "");

    Ok(())
}

#[test]
fn test_syntax_error_does_not_stop_the_run() -> anyhow::Result<()> {
    let project = Project::new(&[
        ("src/widgets/a.js", "var s = 'oops;\n"),
        ("src/widgets/b.js", "var unused = 1;\n"),
    ])?;

    insta::assert_snapshot!(
        project.lint().concise().run(),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    src/widgets/a.js [1:9] syntax_error Unclosed string.
    src/widgets/b.js [1:5] unused_variable 'unused' is defined but never used. Remove the declaration or use the variable.

    Found 1 error and 1 warning.

    ----- stderr -----

    ----- args -----
    lint --output-format concise
    "
    );

    Ok(())
}

#[test]
fn test_stray_backslash_is_a_syntax_error() -> anyhow::Result<()> {
    let project = Project::new(&[
        ("src/widgets/a.js", "var a = 1; \\ b;\n"),
        ("src/widgets/b.js", "debugger;\n"),
    ])?;

    let output = project.lint().concise().run();
    assert!(output.success());
    assert_eq!(
        output.stdout,
        "src/widgets/a.js [1:12] syntax_error Unexpected '\\'.\n\
         src/widgets/b.js [1:1] debugger Forgotten 'debugger' statement? Remove the `debugger` statement.\n\
         \n\
         Found 1 error and 1 warning.\n"
    );

    Ok(())
}

#[test]
fn test_fail_on_findings() -> anyhow::Result<()> {
    let project = widgets_project()?;

    let output = project.lint().module("widgets").arg("--fail-on-findings").run();
    assert_eq!(output.exit_code(), 1);

    // A clean module still succeeds
    project.write("src/widgets/b.js", "var used = 1;\nused;\n")?;
    let output = project.lint().module("widgets").arg("--fail-on-findings").run();
    assert_eq!(output.exit_code(), 0);

    Ok(())
}

#[test]
fn test_select_and_ignore() -> anyhow::Result<()> {
    let project = Project::new(&[("src/widgets/a.js", "var x = 1;\nif (x == 2) { debugger; }\n")])?;

    let output = project.lint().concise().args(["--select", "eqeqeq"]).run();
    assert!(output.stdout.contains("eqeqeq"));
    assert!(!output.stdout.contains("debugger"));

    let output = project.lint().concise().args(["--ignore", "eqeqeq"]).run();
    assert!(!output.stdout.contains("eqeqeq"));
    assert!(output.stdout.contains("debugger"));

    Ok(())
}

#[test]
fn test_unknown_rule() -> anyhow::Result<()> {
    let project = widgets_project()?;

    insta::assert_snapshot!(
        project.lint().args(["--select", "eqeqeq,foo,bar"]).run(),
        @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    modlint failed
      Cause: Unknown rules in `--select`: foo, bar

    ----- args -----
    lint --select eqeqeq,foo,bar
    "
    );

    Ok(())
}

#[test]
fn test_statistics() -> anyhow::Result<()> {
    let project = Project::new(&[
        ("src/widgets/a.js", "debugger;\ndebugger;\n"),
        ("src/widgets/b.js", "var unused = 1;\ndebugger;\n"),
    ])?;

    let output = project.lint().arg("--statistics").run();
    assert!(output.success());
    assert_eq!(
        output.stdout,
        "    3 [warning] debugger\n    1 [warning] unused_variable\n"
    );

    Ok(())
}
