//! End-of-run results handed to downstream consumers.

use coop_agent::{AgentStore, Needs};
use coop_core::{AgentId, Position, Tick};

use crate::Snapshot;

/// One agent's state when the run finished.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentSummary {
    pub agent:    AgentId,
    pub name:     String,
    pub position: Position,
    pub needs:    Needs,
}

impl AgentSummary {
    /// Summaries for every agent in ID order.
    pub fn collect(agents: &AgentStore) -> Vec<AgentSummary> {
        agents
            .agent_ids()
            .map(|agent| AgentSummary {
                agent,
                name:     format!("chicken_{}", agent.0),
                position: agents.position(agent),
                needs:    *agents.needs_of(agent),
            })
            .collect()
    }
}

/// Everything a finished run produces.
#[derive(Clone, Debug)]
pub struct RunOutput {
    /// Row/column labels shared by every snapshot.
    pub entity_names: Vec<String>,
    /// Snapshots in tick order.
    pub snapshots:    Vec<Snapshot>,
    pub final_needs:  Vec<AgentSummary>,
    /// First tick that was *not* simulated.
    pub final_tick:   Tick,
}
