//! Fluent builder for constructing an `AgentStore`.
//!
//! # Usage
//!
//! ```rust
//! use coop_agent::AgentStoreBuilder;
//! use coop_core::{GridWorld, Position};
//!
//! let store = AgentStoreBuilder::new(GridWorld::new(5, 5))
//!     .agent_at(Position::new(0, 0))
//!     .agent_at(Position::new(4, 4))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.count, 2);
//! ```

use coop_core::{AgentId, AgentIdGen, CoopError, CoopResult, GridWorld, Position};

use crate::{AgentStore, Needs};

/// Fluent builder for [`AgentStore`].
///
/// IDs are handed out by an [`AgentIdGen`] owned by the builder, in the
/// order agents are added.
pub struct AgentStoreBuilder {
    grid:          GridWorld,
    ids:           AgentIdGen,
    positions:     Vec<Position>,
    initial_needs: Needs,
}

impl AgentStoreBuilder {
    pub fn new(grid: GridWorld) -> Self {
        Self {
            grid,
            ids:           AgentIdGen::new(),
            positions:     Vec::new(),
            initial_needs: Needs::default(),
        }
    }

    /// Starting need levels for every agent.  Default: all at
    /// [`INITIAL_NEED_LEVEL`][crate::INITIAL_NEED_LEVEL].
    pub fn initial_needs(mut self, needs: Needs) -> Self {
        self.initial_needs = needs;
        self
    }

    /// Add one agent at `pos` and return the ID it will have in the store.
    /// Placement is validated in [`build`](Self::build).
    pub fn spawn(&mut self, pos: Position) -> AgentId {
        let id = self.ids.next_id();
        self.positions.push(pos);
        id
    }

    /// Fluent form of [`spawn`](Self::spawn).
    pub fn agent_at(mut self, pos: Position) -> Self {
        self.spawn(pos);
        self
    }

    /// Add one agent per position, in iteration order.
    pub fn agents_at<I: IntoIterator<Item = Position>>(mut self, positions: I) -> Self {
        for pos in positions {
            self = self.agent_at(pos);
        }
        self
    }

    /// Validate placements and construct the store.
    ///
    /// # Errors
    /// `CoopError::OutOfBounds` if any agent was placed off the grid.
    pub fn build(self) -> CoopResult<AgentStore> {
        if let Some(&pos) = self.positions.iter().find(|&&p| !self.grid.is_valid(p)) {
            return Err(CoopError::OutOfBounds {
                pos,
                width:  self.grid.width,
                height: self.grid.height,
            });
        }
        debug_assert_eq!(self.ids.issued(), self.positions.len());

        let needs = vec![self.initial_needs; self.positions.len()];
        Ok(AgentStore::new(self.grid, self.positions, needs))
    }
}
