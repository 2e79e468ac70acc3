use crate::logging::LogLevel;
use crate::output_format::OutputFormat;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Configures Clap v3-style help menu colors
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser)]
#[command(
    author,
    name = "modlint",
    about = "modlint: lint the JavaScript files of one module at a time",
    after_help = "For help with a specific command, see: `modlint help <command>`."
)]
#[command(version)]
#[command(styles = STYLES)]
pub struct Args {
    #[command(subcommand)]
    pub(crate) command: Command,
    #[clap(flatten)]
    pub(crate) global_options: GlobalOptions,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Lint the files of a module, e.g. `module=widgets modlint lint`
    Lint(LintCommand),
}

#[derive(Clone, Debug, Parser)]
pub struct LintCommand {
    #[arg(
        long,
        env = "module",
        help = "Module to lint, i.e. a directory under the source directory. Glob characters are allowed. All modules are linted when unset or empty."
    )]
    pub module: Option<String>,
    #[arg(
        long,
        help = "Project root. Defaults to the directory of the closest `modlint.toml`, or the current directory."
    )]
    pub root: Option<PathBuf>,
    #[arg(
        short,
        long,
        default_value = "",
        help = "Names of rules to include, separated by a comma (no spaces)."
    )]
    pub select: String,
    #[arg(
        short,
        long,
        default_value = "",
        help = "Like `--select` but adds additional rules in addition to those already specified."
    )]
    pub extend_select: String,
    #[arg(
        short,
        long,
        default_value = "",
        help = "Names of rules to exclude, separated by a comma (no spaces). `syntax_error` cannot be excluded."
    )]
    pub ignore: String,
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::default(),
        help = "Output serialization format for findings."
    )]
    pub output_format: OutputFormat,
    #[arg(
        long,
        default_value = "false",
        help = "Show counts for every rule with at least one finding."
    )]
    pub statistics: bool,
    #[arg(
        long,
        default_value = "false",
        help = "Exit with status 1 if there are findings."
    )]
    pub fail_on_findings: bool,
    #[arg(
        long,
        default_value = "false",
        help = "Lint files under `node_modules` and `bower_components` too."
    )]
    pub no_default_exclude: bool,
    #[arg(
        short,
        long,
        default_value = "false",
        help = "Show the time taken by the task."
    )]
    pub with_timing: bool,
}

/// All configuration options that can be passed "globally"
#[derive(Debug, Default, clap::Args)]
#[command(next_help_heading = "Global options")]
pub(crate) struct GlobalOptions {
    /// The log level. One of: `error`, `warn`, `info`, `debug`, or `trace`. Defaults
    /// to `warn`.
    #[arg(long, global = true)]
    pub(crate) log_level: Option<LogLevel>,
    /// Disable colors in the output. Also enabled by the `NO_COLOR` environment
    /// variable.
    #[arg(long, global = true)]
    pub(crate) no_color: bool,
}
