//! Simulation observer trait for progress reporting and data collection.

use coop_agent::AgentStore;
use coop_core::Tick;

use crate::Snapshot;

/// Per-tick counters passed to [`SimObserver::on_tick_end`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct TickStats {
    /// Agents whose chosen move was taken (including `Stay`).
    pub moved: usize,
    /// Agents whose chosen move left the grid and was dropped.
    pub rejected: usize,
    /// Agents that ended their turn on a resource and consumed from it.
    pub interactions: usize,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, stats: TickStats) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {} ate or drank", stats.interactions);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every agent has taken its turn.
    fn on_tick_end(&mut self, _tick: Tick, _stats: TickStats) {}

    /// Called right after a snapshot is recorded.
    ///
    /// `names` labels the matrix rows and is identical for every call within
    /// a run.
    fn on_snapshot(&mut self, _names: &[String], _snapshot: &Snapshot) {}

    /// Called once after the final tick, with the agents' final state.
    fn on_sim_end(&mut self, _final_tick: Tick, _agents: &AgentStore) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
