use annotate_snippets::{Level, Renderer, Snippet};
use clap::ValueEnum;
use colored::Colorize;
use modlint_core::emitter::Emitter;
use modlint_core::finding::{Finding, Severity};
use modlint_core::stream::FileReport;
use modlint_core::task::TaskSummary;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    /// Print findings with full context using annotated code snippets
    Full,
    /// Print findings in a concise format, one per line
    Concise,
    /// Print findings as GitHub workflow commands
    Github,
    /// Print findings as JSON
    Json,
}

fn message(finding: &Finding) -> String {
    match &finding.message.suggestion {
        Some(suggestion) => format!("{} {}", finding.message.body, suggestion),
        None => finding.message.body.clone(),
    }
}

fn row_col(finding: &Finding) -> (usize, usize) {
    match finding.location {
        Some(location) => (location.row(), location.column()),
        None => unreachable!("Row/col locations must have been computed before."),
    }
}

fn write_summary<W: Write>(writer: &mut W, summary: &TaskSummary) -> anyhow::Result<()> {
    writeln!(writer, "{summary}")?;
    Ok(())
}

pub struct ConciseEmitter;

impl Emitter for ConciseEmitter {
    fn emit_file<W: Write>(&mut self, writer: &mut W, report: &FileReport) -> anyhow::Result<()> {
        for finding in &report.findings {
            let (row, col) = row_col(finding);
            let rule_name = match finding.severity() {
                Severity::Error => finding.rule_name().red().bold(),
                Severity::Warning => finding.rule_name().red(),
            };
            writeln!(
                writer,
                "{} [{}:{}] {} {}",
                report.path.display().to_string().white(),
                row,
                col,
                rule_name,
                message(finding)
            )?;
        }
        Ok(())
    }

    fn finish<W: Write>(&mut self, writer: &mut W, summary: &TaskSummary) -> anyhow::Result<()> {
        if summary.has_findings() {
            writeln!(writer)?;
        }
        write_summary(writer, summary)
    }
}

pub struct FullEmitter {
    renderer: Renderer,
}

impl FullEmitter {
    pub fn new(use_colors: bool) -> Self {
        let renderer = if use_colors {
            Renderer::styled()
        } else {
            Renderer::plain()
        };
        Self { renderer }
    }
}

impl Emitter for FullEmitter {
    fn emit_file<W: Write>(&mut self, writer: &mut W, report: &FileReport) -> anyhow::Result<()> {
        let origin = report.path.display().to_string();

        for finding in &report.findings {
            let level = match finding.severity() {
                Severity::Error => Level::Error,
                Severity::Warning => Level::Warning,
            };

            let snippet = Snippet::source(&report.source)
                .origin(&origin)
                .fold(true)
                .annotation(
                    level
                        .span(finding.range.clone())
                        .label(&finding.message.body),
                );

            let mut message = level.title(finding.rule_name()).snippet(snippet);

            // Add suggestion as a footer message if present
            if let Some(suggestion) = &finding.message.suggestion {
                message = message.footer(Level::Help.title(suggestion));
            }

            writeln!(writer, "{}\n", self.renderer.render(message))?;
        }
        Ok(())
    }

    fn finish<W: Write>(&mut self, writer: &mut W, summary: &TaskSummary) -> anyhow::Result<()> {
        write_summary(writer, summary)
    }
}

pub struct GithubEmitter;

impl Emitter for GithubEmitter {
    fn emit_file<W: Write>(&mut self, writer: &mut W, report: &FileReport) -> anyhow::Result<()> {
        let file = report.path.to_string_lossy();

        for finding in &report.findings {
            let (row, col) = row_col(finding);

            // The location appears twice:
            // - between the "::" markers, for the annotation to show up in the
            //   changed files of a PR;
            // - after the "::" marker, for the workflow log itself.
            writeln!(
                writer,
                "::{} title=modlint ({}),file={file},line={row},col={col}::{file}:{row}:{col} [{}] {}",
                finding.severity(),
                finding.rule_name(),
                finding.rule_name(),
                message(finding)
            )?;
        }
        Ok(())
    }

    fn finish<W: Write>(&mut self, _writer: &mut W, _summary: &TaskSummary) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Writes a JSON array of findings, one element per line, as files are
/// analyzed.
#[derive(Default)]
pub struct JsonEmitter {
    started: bool,
}

impl Emitter for JsonEmitter {
    fn emit_file<W: Write>(&mut self, writer: &mut W, report: &FileReport) -> anyhow::Result<()> {
        for finding in &report.findings {
            if self.started {
                writeln!(writer, ",")?;
            } else {
                writeln!(writer, "[")?;
                self.started = true;
            }
            write!(writer, "  ")?;
            serde_json::to_writer(&mut *writer, finding)?;
        }
        Ok(())
    }

    fn finish<W: Write>(&mut self, writer: &mut W, _summary: &TaskSummary) -> anyhow::Result<()> {
        if self.started {
            writeln!(writer, "\n]")?;
        } else {
            writeln!(writer, "[]")?;
        }
        Ok(())
    }
}
