use anyhow::{Context, Result};
use modlint_core::config::{ArgsConfig, build_config};
use modlint_core::emitter::Emitter;
use modlint_core::task::{LintTask, TaskSummary};
use modlint_core::toml::{find_modlint_toml, parse_modlint_toml};
use std::env;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::args::LintCommand;
use crate::output_format::{ConciseEmitter, FullEmitter, GithubEmitter, JsonEmitter, OutputFormat};
use crate::statistics::StatisticsEmitter;
use crate::status::ExitStatus;

pub fn lint(args: LintCommand, no_color: bool) -> Result<ExitStatus> {
    let start = if args.with_timing {
        Some(Instant::now())
    } else {
        None
    };

    let cwd = env::current_dir().context("Failed to get the current directory")?;
    let (root, config_path) = resolve_root(args.root.as_deref(), &cwd);

    let settings = match &config_path {
        Some(path) => {
            tracing::info!("Using configuration file {}", path.display());
            Some(parse_modlint_toml(path)?.into_settings())
        }
        None => None,
    };

    let args_config = ArgsConfig {
        root,
        module: args.module.clone(),
        select: args.select.clone(),
        extend_select: args.extend_select.clone(),
        ignore: args.ignore.clone(),
        no_default_exclude: args.no_default_exclude,
    };
    let config = build_config(&args_config, settings.as_ref())?;
    let task = LintTask::from_config(config);

    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let summary = if args.statistics {
        run(&task, StatisticsEmitter::default(), &mut writer)?
    } else {
        match args.output_format {
            OutputFormat::Full => run(&task, FullEmitter::new(!no_color), &mut writer)?,
            OutputFormat::Concise => run(&task, ConciseEmitter, &mut writer)?,
            OutputFormat::Github => run(&task, GithubEmitter, &mut writer)?,
            OutputFormat::Json => run(&task, JsonEmitter::default(), &mut writer)?,
        }
    };
    writer.flush().context("Failed to write the report")?;

    if let Some(start) = start {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "Checked files in: {:?}", start.elapsed()).ok();
    }

    if args.fail_on_findings && summary.has_findings() {
        return Ok(ExitStatus::Failure);
    }

    Ok(ExitStatus::Success)
}

fn run<E: Emitter, W: Write>(task: &LintTask, mut emitter: E, writer: &mut W) -> Result<TaskSummary> {
    task.run(&mut emitter, writer)
}

/// The root is `--root` when passed. Otherwise it is the directory of the
/// closest `modlint.toml`, or the current directory if there is none.
fn resolve_root(root: Option<&Path>, cwd: &Path) -> (PathBuf, Option<PathBuf>) {
    match root {
        Some(root) => {
            let root = cwd.join(root);
            let config_path = find_modlint_toml(&root);
            (root, config_path)
        }
        None => match find_modlint_toml(cwd) {
            Some(config_path) => {
                let root = config_path
                    .parent()
                    .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
                (root, Some(config_path))
            }
            None => (cwd.to_path_buf(), None),
        },
    }
}
