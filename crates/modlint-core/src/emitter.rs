use std::io::Write;

use crate::stream::FileReport;
use crate::task::TaskSummary;

/// Renders the findings of a lint run. Files are handed over one at a time,
/// in the order they are analyzed, so output can be written incrementally.
pub trait Emitter {
    fn emit_file<W: Write>(&mut self, writer: &mut W, report: &FileReport) -> anyhow::Result<()>;

    /// Called once after the last file. Not called when no file was analyzed.
    fn finish<W: Write>(&mut self, writer: &mut W, summary: &TaskSummary) -> anyhow::Result<()>;
}
