use colored::Colorize;
use modlint_core::emitter::Emitter;
use modlint_core::finding::Severity;
use modlint_core::stream::FileReport;
use modlint_core::task::TaskSummary;
use std::collections::HashMap;
use std::io::Write;

/// Counts findings per rule instead of printing them.
#[derive(Default)]
pub struct StatisticsEmitter {
    counts: HashMap<String, (usize, Severity)>,
}

impl Emitter for StatisticsEmitter {
    fn emit_file<W: Write>(&mut self, _writer: &mut W, report: &FileReport) -> anyhow::Result<()> {
        for finding in &report.findings {
            self.counts
                .entry(finding.rule_name().to_string())
                .or_insert((0, finding.severity()))
                .0 += 1;
        }
        Ok(())
    }

    fn finish<W: Write>(&mut self, writer: &mut W, summary: &TaskSummary) -> anyhow::Result<()> {
        if !summary.has_findings() {
            writeln!(writer, "All checks passed!")?;
            return Ok(());
        }

        let mut sorted: Vec<_> = self.counts.iter().collect();
        // Most frequent first, ties by rule name
        sorted.sort_by(|a, b| b.1.0.cmp(&a.1.0).then_with(|| a.0.cmp(b.0)));

        for (rule, (count, severity)) in sorted {
            writeln!(
                writer,
                "{:>5} [{}] {}",
                count.to_string().bold(),
                severity,
                rule.bold().red()
            )?;
        }

        Ok(())
    }
}
