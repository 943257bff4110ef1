//! Plain data row types written by output backends.

use coop_sim::AgentSummary;

/// One entry of the entity list that labels adjacency rows and columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRow {
    pub index: usize,
    pub name:  String,
    /// `chicken`, `food`, `water` or `bath`.
    pub kind:  String,
}

impl EntityRow {
    /// Rows for `names`, with the kind taken from the name prefix.
    pub fn from_names(names: &[String]) -> Vec<EntityRow> {
        names
            .iter()
            .enumerate()
            .map(|(index, name)| EntityRow {
                index,
                name: name.clone(),
                kind: name.rsplit_once('_').map_or(name.as_str(), |(kind, _)| kind).to_owned(),
            })
            .collect()
    }
}

/// One agent's end-of-run state, flattened for tabular output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinalNeedsRow {
    pub agent:       u32,
    pub x:           i32,
    pub y:           i32,
    pub food:        f64,
    pub water:       f64,
    pub cleanliness: f64,
}

impl From<&AgentSummary> for FinalNeedsRow {
    fn from(s: &AgentSummary) -> Self {
        FinalNeedsRow {
            agent:       s.agent.0,
            x:           s.position.x,
            y:           s.position.y,
            food:        s.needs.food,
            water:       s.needs.water,
            cleanliness: s.needs.cleanliness,
        }
    }
}
