//! The `OutputWriter` trait implemented by result writers.

use coop_sim::{RunOutput, Snapshot};

use crate::{FinalNeedsRow, OutputResult};

/// A sink for adjacency snapshots and end-of-run needs.
///
/// The entity list is fixed when the writer is opened; every snapshot must
/// use it.
pub trait OutputWriter {
    /// Write one adjacency snapshot.
    fn write_snapshot(&mut self, snapshot: &Snapshot) -> OutputResult<()>;

    /// Write every agent's final state.
    fn write_final_needs(&mut self, rows: &[FinalNeedsRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write a finished run in one go.
///
/// Use this when the sim ran with a `NoopObserver`; otherwise
/// [`RunOutputObserver`][crate::RunOutputObserver] streams the same data.
pub fn write_run<W: OutputWriter>(writer: &mut W, output: &RunOutput) -> OutputResult<()> {
    for snapshot in &output.snapshots {
        writer.write_snapshot(snapshot)?;
    }
    let rows: Vec<FinalNeedsRow> = output.final_needs.iter().map(FinalNeedsRow::from).collect();
    writer.write_final_needs(&rows)?;
    writer.finish()
}
