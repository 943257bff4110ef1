//! Read-only world view handed to every scoring call.

use coop_agent::AgentStore;
use coop_core::{GridWorld, Tick};
use coop_social::RelationGraph;
use coop_world::ResourceLayout;

use crate::ScoringWeights;

/// Everything a [`MovePolicy`][crate::MovePolicy] may look at.
///
/// Built by coop-sim once per agent decision.  Because agents are processed
/// one after another, a context built for a later agent already reflects the
/// moves and interactions of earlier agents in the same tick.
#[derive(Copy, Clone)]
pub struct DecisionContext<'a> {
    pub tick:      Tick,
    pub grid:      GridWorld,
    pub agents:    &'a AgentStore,
    pub resources: &'a ResourceLayout,
    pub relations: &'a RelationGraph,
    pub weights:   &'a ScoringWeights,
}

impl<'a> DecisionContext<'a> {
    #[inline]
    pub fn new(
        tick:      Tick,
        agents:    &'a AgentStore,
        resources: &'a ResourceLayout,
        relations: &'a RelationGraph,
        weights:   &'a ScoringWeights,
    ) -> Self {
        Self { tick, grid: agents.grid(), agents, resources, relations, weights }
    }
}
