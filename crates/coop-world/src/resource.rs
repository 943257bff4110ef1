//! A single consumable resource node.

use std::fmt;

use coop_agent::NeedKind;
use coop_core::{Position, SimRng};

use crate::{WorldError, WorldResult};

/// The three resource types, in the fixed priority order used everywhere
/// (interaction scanning, entity ordering, scoring).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ResourceKind {
    Food,
    Water,
    Bath,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [ResourceKind::Food, ResourceKind::Water, ResourceKind::Bath];

    /// The need this resource replenishes.
    #[inline]
    pub fn need(self) -> NeedKind {
        match self {
            ResourceKind::Food  => NeedKind::Food,
            ResourceKind::Water => NeedKind::Water,
            ResourceKind::Bath  => NeedKind::Cleanliness,
        }
    }

    /// Label used in entity names (`food_0`, `water_1`, …).
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Food  => "food",
            ResourceKind::Water => "water",
            ResourceKind::Bath  => "bath",
        }
    }

    /// Capacity a freshly placed node of this kind starts with.
    pub fn default_capacity(self) -> Capacity {
        match self {
            ResourceKind::Food  => Capacity::Limited(100),
            ResourceKind::Water => Capacity::Limited(1_000),
            ResourceKind::Bath  => Capacity::Unbounded,
        }
    }

    /// Amount a single interaction grants by default.
    pub fn default_yield(self) -> YieldSpec {
        match self {
            ResourceKind::Food  => YieldSpec::Fixed(1.0),
            ResourceKind::Water => YieldSpec::Fixed(1.0),
            ResourceKind::Bath  => YieldSpec::UniformInt { low: 10, high: 25 },
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Capacity ──────────────────────────────────────────────────────────────────

/// How many units a node holds when full.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Capacity {
    Unbounded,
    Limited(i64),
}

// ── YieldSpec ─────────────────────────────────────────────────────────────────

/// How much one interaction adds to the matching need.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum YieldSpec {
    Fixed(f64),
    /// Uniform integer in `[low, high]`, drawn from the run's `SimRng`.
    UniformInt { low: i64, high: i64 },
}

impl YieldSpec {
    /// Draw one yield.  `Fixed` never touches the RNG.
    #[inline]
    pub fn sample(&self, rng: &mut SimRng) -> f64 {
        match *self {
            YieldSpec::Fixed(v) => v,
            YieldSpec::UniformInt { low, high } => rng.gen_range(low..=high) as f64,
        }
    }

    pub(crate) fn validate(&self, kind: ResourceKind) -> WorldResult<()> {
        match *self {
            YieldSpec::Fixed(value) if !value.is_finite() => {
                Err(WorldError::NonFiniteYield { kind, value })
            }
            YieldSpec::UniformInt { low, high } if low > high => {
                Err(WorldError::EmptyYieldRange { kind, low, high })
            }
            _ => Ok(()),
        }
    }
}

// ── ResourceNode ──────────────────────────────────────────────────────────────

/// A food, water, or bath cell.
///
/// The running counter starts at capacity (0 for unbounded nodes) and drops
/// by one per interaction.  It may go negative: capacity is informational
/// unless the [`InteractionResolver`][crate::InteractionResolver] is told to
/// enforce it.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceNode {
    pub position:   Position,
    pub kind:       ResourceKind,
    pub capacity:   Capacity,
    pub yield_spec: YieldSpec,
    current_amount: i64,
}

impl ResourceNode {
    /// A node of `kind` at `position` with that kind's default capacity and
    /// yield.
    pub fn new(kind: ResourceKind, position: Position) -> Self {
        Self::with_params(kind, position, kind.default_capacity(), kind.default_yield())
    }

    pub fn with_params(
        kind:       ResourceKind,
        position:   Position,
        capacity:   Capacity,
        yield_spec: YieldSpec,
    ) -> Self {
        let current_amount = match capacity {
            Capacity::Limited(c) => c,
            Capacity::Unbounded  => 0,
        };
        Self { position, kind, capacity, yield_spec, current_amount }
    }

    #[inline]
    pub fn current_amount(&self) -> i64 {
        self.current_amount
    }

    /// `true` when a limited node has less than one unit left.  Unbounded
    /// nodes are never depleted.
    #[inline]
    pub fn is_depleted(&self) -> bool {
        matches!(self.capacity, Capacity::Limited(_)) && self.current_amount < 1
    }

    /// Take one unit and return the counter's new value.  No floor.
    #[inline]
    pub fn consume(&mut self) -> i64 {
        self.current_amount -= 1;
        self.current_amount
    }

    /// Restore stock.
    ///
    /// `None` fills a limited node to capacity (and resets an unbounded
    /// node's counter to zero); `Some(n)` adds `n`, capped at capacity.
    pub fn refill(&mut self, amount: Option<i64>) {
        self.current_amount = match (self.capacity, amount) {
            (Capacity::Limited(c), None)    => c,
            (Capacity::Limited(c), Some(n)) => (self.current_amount + n).min(c),
            (Capacity::Unbounded, None)     => 0,
            (Capacity::Unbounded, Some(n))  => self.current_amount + n,
        };
    }

    pub(crate) fn validate(&self) -> WorldResult<()> {
        if let Capacity::Limited(capacity) = self.capacity {
            if capacity <= 0 {
                return Err(WorldError::InvalidCapacity { kind: self.kind, capacity });
            }
        }
        self.yield_spec.validate(self.kind)
    }
}
