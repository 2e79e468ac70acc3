use crate::helpers::Project;

#[test]
fn test_toml_rule_selection() -> anyhow::Result<()> {
    let project = Project::new(&[
        ("modlint.toml", "[lint]\nselect = [\"debugger\"]\n"),
        ("src/widgets/a.js", "var unused = 1;\ndebugger;\n"),
    ])?;

    let output = project.lint().concise().run();
    assert!(output.stdout.contains("src/widgets/a.js [2:1] debugger"));
    assert!(!output.stdout.contains("unused_variable"));

    // `--select` replaces the selection of the TOML
    let output = project.lint().concise().args(["--select", "unused_variable"]).run();
    assert!(output.stdout.contains("unused_variable"));
    assert!(!output.stdout.contains("[2:1] debugger"));

    Ok(())
}

#[test]
fn test_toml_found_from_nested_directory() -> anyhow::Result<()> {
    let project = Project::new(&[
        ("modlint.toml", "[lint]\nsource-dir = \"lib\"\nextension = \"mjs\"\n"),
        ("lib/widgets/a.mjs", "debugger;\n"),
        ("lib/widgets/b.js", "debugger;\n"),
        ("src/widgets/c.js", "debugger;\n"),
    ])?;

    // Paths are reported relative to the directory of `modlint.toml`
    let output = project.lint_from("lib/widgets").concise().run();
    assert!(output.success());
    assert!(output.stdout.contains("lib/widgets/a.mjs [1:1] debugger"));
    assert!(!output.stdout.contains("b.js"));
    assert!(!output.stdout.contains("c.js"));

    Ok(())
}

#[test]
fn test_source_dir_is_relative_to_root_option() -> anyhow::Result<()> {
    let project = Project::new(&[
        ("modlint.toml", "[lint]\nsource-dir = \"lib\"\n"),
        ("lib/widgets/a.js", "debugger;\n"),
        ("app/lib/widgets/b.js", "debugger;\n"),
    ])?;

    // The TOML is found in an ancestor of `--root`, but `source-dir` is
    // resolved against `--root`.
    let output = project.lint().concise().args(["--root", "app"]).run();
    assert!(output.success());
    assert!(output.stdout.contains("lib/widgets/b.js [1:1] debugger"));
    assert!(!output.stdout.contains("a.js"));

    Ok(())
}

#[test]
fn test_toml_exclude() -> anyhow::Result<()> {
    let project = Project::new(&[
        ("modlint.toml", "[lint]\nexclude = [\"*.min.js\"]\n"),
        ("src/widgets/a.js", "debugger;\n"),
        ("src/widgets/a.min.js", "debugger;\n"),
    ])?;

    let output = project.lint().concise().run();
    assert!(output.stdout.contains("src/widgets/a.js [1:1] debugger"));
    assert!(!output.stdout.contains("a.min.js"));

    Ok(())
}

#[test]
fn test_toml_unknown_rule() -> anyhow::Result<()> {
    let project = Project::new(&[
        ("modlint.toml", "[lint]\nignore = [\"foo\"]\n"),
        ("src/widgets/a.js", "debugger;\n"),
    ])?;

    insta::assert_snapshot!(
        project.lint().run(),
        @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    modlint failed
      Cause: Unknown rules in field `ignore` in 'modlint.toml': foo

    ----- args -----
    lint
    "
    );

    Ok(())
}

#[test]
fn test_toml_invalid_field() -> anyhow::Result<()> {
    let project = Project::new(&[
        ("modlint.toml", "[lint]\nselekt = [\"debugger\"]\n"),
        ("src/widgets/a.js", "debugger;\n"),
    ])?;

    let output = project.lint().run();
    assert_eq!(output.exit_code(), 2);
    assert_eq!(output.stdout, "");
    assert!(output.stderr.starts_with("modlint failed\n"));
    assert!(output.stderr.contains("Failed to parse [ROOT]/modlint.toml"));
    assert!(output.stderr.contains("selekt"));

    Ok(())
}
