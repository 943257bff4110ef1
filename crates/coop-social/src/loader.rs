//! CSV relation loader.
//!
//! # CSV format
//!
//! One row per directed edge:
//!
//! ```csv
//! from,to,kind
//! 0,1,friend
//! 1,0,enemy
//! 2,5,friend
//! ```
//!
//! `kind` is `friend` or `enemy` (case-insensitive).  Any other value, a
//! self-edge, or a pair listed with both kinds fails the whole load.  A row
//! naming an agent outside `0..agent_count` is rejected as soon as it is read,
//! and the error names the offending ID rather than a line number.

use std::io::Read;
use std::path::Path;

use coop_core::AgentId;
use serde::Deserialize;

use crate::{RelationGraph, RelationKind, SocialError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RelationRecord {
    from: u32,
    to:   u32,
    kind: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`RelationGraph`] for `agent_count` agents from a CSV file.
pub fn load_relations_csv(path: &Path, agent_count: usize) -> Result<RelationGraph, SocialError> {
    let file = std::fs::File::open(path)?;
    load_relations_reader(file, agent_count)
}

/// Like [`load_relations_csv`] but accepts any `Read` source.
pub fn load_relations_reader<R: Read>(
    reader: R,
    agent_count: usize,
) -> Result<RelationGraph, SocialError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut graph = RelationGraph::new();

    for result in csv_reader.deserialize::<RelationRecord>() {
        let row = result.map_err(|e| SocialError::Parse(e.to_string()))?;
        let kind: RelationKind = row.kind.parse()?;
        for id in [row.from, row.to] {
            if id as usize >= agent_count {
                return Err(SocialError::UnknownAgent { agent: AgentId(id), agent_count });
            }
        }
        graph.insert(AgentId(row.from), AgentId(row.to), kind)?;
    }

    Ok(graph)
}
