//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter with no wall-clock
//! mapping: one tick is one round in which every agent moves once.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// `true` when `interval > 0` and this tick falls on a multiple of it.
    #[inline]
    pub fn is_on_interval(self, interval: u64) -> bool {
        interval > 0 && self.0.is_multiple_of(interval)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick of a run.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current_tick)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level settings shared by the tick loop and its observers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Record an adjacency snapshot every N ticks.  Must be non-zero.
    pub snapshot_interval_ticks: u64,

    /// Refill every resource to capacity every N ticks.  0 = never.
    pub refill_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Number of snapshots a full run will emit.
    pub fn expected_snapshots(&self) -> u64 {
        if self.snapshot_interval_ticks == 0 {
            return 0;
        }
        self.total_ticks.div_ceil(self.snapshot_interval_ticks)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:             1_800,
            seed:                    0,
            snapshot_interval_ticks: 10,
            refill_interval_ticks:   0,
        }
    }
}
