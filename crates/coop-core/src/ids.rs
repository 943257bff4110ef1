//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into SoA `Vec`s, but callers should prefer `.index()`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an agent in SoA storage, assigned in creation order.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a resource node within its kind's collection.
    pub struct ResourceId(u32);
}

// ── AgentIdGen ────────────────────────────────────────────────────────────────

/// Monotonic agent ID allocator owned by whoever builds the population.
///
/// IDs start at 0 and are never reused, so `AgentId(n)` is also the agent's
/// index into every SoA array.
#[derive(Debug, Default)]
pub struct AgentIdGen {
    next: u32,
}

impl AgentIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next ID.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX - 1` agents are allocated.
    pub fn next_id(&mut self) -> AgentId {
        let id = AgentId(self.next);
        assert!(id != AgentId::INVALID, "agent id space exhausted");
        self.next += 1;
        id
    }

    /// How many IDs have been handed out so far.
    #[inline]
    pub fn issued(&self) -> usize {
        self.next as usize
    }
}
