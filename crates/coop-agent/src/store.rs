//! Core agent storage.
//!
//! Every `Vec` field has exactly `count` elements and `AgentId` is the index
//! into all of them:
//!
//! ```ignore
//! let pos = store.positions[agent.index()];
//! ```

use coop_core::{AgentId, GridWorld, Move, Position};

use crate::{Metabolism, Needs, VisitMemory};

/// What happened when an agent tried to take a move.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    /// The agent now stands on `to`.  `Stay` also reports `Moved`.
    Moved { to: Position },
    /// The target cell was off the grid; the agent did not move.
    Rejected { target: Position },
}

/// Structure-of-Arrays storage for all agent state.
///
/// Agents are created once by [`AgentStoreBuilder`][crate::AgentStoreBuilder]
/// and never removed during a run.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Current cell.  Always valid for `grid`.
    pub positions: Vec<Position>,

    /// Current need levels.
    pub needs: Vec<Needs>,

    /// Per-agent recency grid.
    pub memory: Vec<VisitMemory>,

    grid: GridWorld,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order, the order the
    /// tick loop processes them in.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    #[inline]
    pub fn position(&self, agent: AgentId) -> Position {
        self.positions[agent.index()]
    }

    #[inline]
    pub fn needs_of(&self, agent: AgentId) -> &Needs {
        &self.needs[agent.index()]
    }

    #[inline]
    pub fn memory_of(&self, agent: AgentId) -> &VisitMemory {
        &self.memory[agent.index()]
    }

    /// The grid the store was built against.
    pub fn grid(&self) -> GridWorld {
        self.grid
    }

    // ── Mutation (tick loop only) ─────────────────────────────────────────

    /// Move `agent` by `mv` unless that would leave the grid.
    ///
    /// Out-of-bounds targets are a silent no-op: the position is unchanged
    /// and the caller gets `Rejected` back for logging.
    pub fn apply_move(&mut self, agent: AgentId, mv: Move) -> MoveOutcome {
        let target = self.positions[agent.index()].step(mv);
        if self.grid.is_valid(target) {
            self.positions[agent.index()] = target;
            MoveOutcome::Moved { to: target }
        } else {
            MoveOutcome::Rejected { target }
        }
    }

    /// Subtract one tick of food and water cost from `agent`.
    #[inline]
    pub fn metabolise(&mut self, agent: AgentId, metabolism: &Metabolism) {
        self.needs[agent.index()].metabolise(metabolism);
    }

    /// Record the agent's current cell in its visit memory.
    pub fn record_visit(&mut self, agent: AgentId) {
        let pos = self.positions[agent.index()];
        self.memory[agent.index()].record_visit(pos);
    }

    // ── Package-private constructor used by AgentStoreBuilder ─────────────

    pub(crate) fn new(grid: GridWorld, positions: Vec<Position>, needs: Vec<Needs>) -> Self {
        let count = positions.len();
        Self {
            count,
            memory: vec![VisitMemory::new(grid); count],
            positions,
            needs,
            grid,
        }
    }
}
