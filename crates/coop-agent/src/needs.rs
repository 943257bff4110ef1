//! Need levels and their per-tick decay.
//!
//! Levels are unbounded signed scalars.  Nothing clamps them: a starving
//! agent keeps going further negative, and an agent parked on a resource
//! keeps climbing past its starting level.  Scoring code in `coop-behavior`
//! relies on this and must not assume a range.

use std::fmt;

/// Level every need starts at unless the builder is told otherwise.
pub const INITIAL_NEED_LEVEL: f64 = 100.0;

/// Which of an agent's three needs a value refers to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NeedKind {
    Food,
    Water,
    Cleanliness,
}

impl NeedKind {
    pub const ALL: [NeedKind; 3] = [NeedKind::Food, NeedKind::Water, NeedKind::Cleanliness];

    pub fn as_str(self) -> &'static str {
        match self {
            NeedKind::Food        => "food",
            NeedKind::Water       => "water",
            NeedKind::Cleanliness => "cleanliness",
        }
    }
}

impl fmt::Display for NeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Needs ─────────────────────────────────────────────────────────────────────

/// One agent's current need levels.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Needs {
    pub food:        f64,
    pub water:       f64,
    pub cleanliness: f64,
}

impl Needs {
    /// All three needs at `level`.
    #[inline]
    pub fn uniform(level: f64) -> Self {
        Self { food: level, water: level, cleanliness: level }
    }

    #[inline]
    pub fn get(&self, kind: NeedKind) -> f64 {
        match kind {
            NeedKind::Food        => self.food,
            NeedKind::Water       => self.water,
            NeedKind::Cleanliness => self.cleanliness,
        }
    }

    /// Add `amount` to one need.  No ceiling is applied.
    #[inline]
    pub fn add(&mut self, kind: NeedKind, amount: f64) {
        match kind {
            NeedKind::Food        => self.food += amount,
            NeedKind::Water       => self.water += amount,
            NeedKind::Cleanliness => self.cleanliness += amount,
        }
    }

    /// Apply one tick of metabolism.
    ///
    /// Food and water drop by their fixed costs; cleanliness does not decay
    /// on its own and only changes through bathing.
    #[inline]
    pub fn metabolise(&mut self, metabolism: &Metabolism) {
        self.food -= metabolism.food_cost;
        self.water -= metabolism.water_cost;
    }
}

impl Default for Needs {
    fn default() -> Self {
        Self::uniform(INITIAL_NEED_LEVEL)
    }
}

// ── Metabolism ────────────────────────────────────────────────────────────────

/// Fixed per-tick costs subtracted from every agent after it moves.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Metabolism {
    pub food_cost:  f64,
    pub water_cost: f64,
}

impl Default for Metabolism {
    fn default() -> Self {
        Self { food_cost: 1.0, water_cost: 1.0 }
    }
}
