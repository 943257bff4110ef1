//! Entity adjacency snapshots.
//!
//! # Entity order
//!
//! Rows and columns of every matrix follow one fixed list:
//!
//! ```text
//! chicken_0 … chicken_{n-1}, food_0 …, water_0 …, bath_0 …
//! ```
//!
//! Downstream tools label nodes by position in this list, so it never changes
//! during a run.
//!
//! Two distinct entities are adjacent when their Chebyshev distance is at
//! most one.  That includes entities sharing a cell: a hen standing on a
//! feeder is adjacent to it.

use coop_agent::AgentStore;
use coop_core::{Position, Tick};
use coop_world::ResourceLayout;
use tracing::debug;

/// Dense, symmetric 0/1 matrix stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size:  usize,
    cells: Vec<u8>,
}

impl AdjacencyMatrix {
    /// An all-zero `size × size` matrix.
    pub fn new(size: usize) -> Self {
        Self { size, cells: vec![0; size * size] }
    }

    /// Build the matrix for entities at `positions`.
    pub fn from_positions(positions: &[Position]) -> Self {
        let mut m = Self::new(positions.len());
        for (i, &a) in positions.iter().enumerate() {
            for (j, &b) in positions.iter().enumerate().skip(i + 1) {
                if a.chebyshev(b) <= 1 {
                    m.cells[i * m.size + j] = 1;
                    m.cells[j * m.size + i] = 1;
                }
            }
        }
        m
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.size + j] != 0
    }

    /// Row `i` as 0/1 bytes.
    #[inline]
    pub fn row(&self, i: usize) -> &[u8] {
        &self.cells[i * self.size..(i + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells.chunks(self.size.max(1)).take(self.size)
    }

    /// Number of adjacent unordered pairs.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count() / 2
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (0..i).all(|j| self.get(i, j) == self.get(j, i)))
    }

    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.size).all(|i| !self.get(i, i))
    }
}

// ── Entity list ───────────────────────────────────────────────────────────────

/// Entity names in matrix order.
pub fn entity_names(agent_count: usize, resources: &ResourceLayout) -> Vec<String> {
    let mut names = Vec::with_capacity(agent_count + resources.len());
    names.extend((0..agent_count).map(|i| format!("chicken_{i}")));
    for kind in coop_world::ResourceKind::ALL {
        let count = resources.of_kind(kind).len();
        names.extend((0..count).map(|i| format!("{}_{i}", kind.as_str())));
    }
    names
}

/// Entity positions in matrix order.
pub fn entity_positions(agents: &AgentStore, resources: &ResourceLayout) -> Vec<Position> {
    agents
        .positions
        .iter()
        .copied()
        .chain(resources.iter().map(|n| n.position))
        .collect()
}

// ── AdjacencyRecorder ─────────────────────────────────────────────────────────

/// One recorded sample.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub tick:   Tick,
    pub matrix: AdjacencyMatrix,
}

/// Accumulates snapshots in tick order and hands them off at run end.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyRecorder {
    names:     Vec<String>,
    snapshots: Vec<Snapshot>,
}

impl AdjacencyRecorder {
    pub fn new(agent_count: usize, resources: &ResourceLayout) -> Self {
        Self { names: entity_names(agent_count, resources), snapshots: Vec::new() }
    }

    /// Build and store the matrix for the current state.
    pub fn record(&mut self, tick: Tick, agents: &AgentStore, resources: &ResourceLayout) {
        let matrix = AdjacencyMatrix::from_positions(&entity_positions(agents, resources));
        debug!(%tick, edges = matrix.edge_count(), "adjacency snapshot");
        self.snapshots.push(Snapshot { tick, matrix });
    }

    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[inline]
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Snapshot>) {
        (self.names, self.snapshots)
    }
}
