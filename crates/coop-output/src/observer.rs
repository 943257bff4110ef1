//! `RunOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use coop_agent::AgentStore;
use coop_core::Tick;
use coop_sim::{AgentSummary, SimObserver, Snapshot};
use tracing::warn;

use crate::row::FinalNeedsRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams snapshots and final needs to any
/// [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct RunOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RunOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for RunOutputObserver<W> {
    fn on_snapshot(&mut self, _names: &[String], snapshot: &Snapshot) {
        let result = self.writer.write_snapshot(snapshot);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, agents: &AgentStore) {
        let rows: Vec<FinalNeedsRow> =
            AgentSummary::collect(agents).iter().map(FinalNeedsRow::from).collect();
        let result = self.writer.write_final_needs(&rows);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
