//! Per-agent visit recency grid.
//!
//! Each cell holds the number of visits the owning agent has made *since* it
//! last stood there, or [`VisitMemory::NEVER_VISITED`].  A visit bumps every
//! remembered cell by one and resets the visited cell to zero, so the age of
//! a cell is exactly "how many ticks ago was I here".
//!
//! There is no eviction: the grid lives as long as the agent.

use coop_core::{GridWorld, Position};

/// A `height × width` grid of cell ages, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitMemory {
    grid: GridWorld,
    ages: Vec<u32>,
}

impl VisitMemory {
    /// Sentinel for cells the agent has never stood on.
    pub const NEVER_VISITED: u32 = u32::MAX;

    /// A fresh memory with every cell at the sentinel.
    pub fn new(grid: GridWorld) -> Self {
        Self {
            grid,
            ages: vec![Self::NEVER_VISITED; grid.cell_count()],
        }
    }

    /// Age every remembered cell by one tick and mark `pos` as just visited.
    ///
    /// Off-grid positions only age the existing entries; the tick loop never
    /// passes one because rejected moves leave the agent in place.
    pub fn record_visit(&mut self, pos: Position) {
        for age in self.ages.iter_mut().filter(|a| **a != Self::NEVER_VISITED) {
            // Saturate one below the sentinel so a very old cell never
            // reads as unvisited.
            *age = (*age + 1).min(Self::NEVER_VISITED - 1);
        }
        if let Some(i) = self.grid.cell_index(pos) {
            self.ages[i] = 0;
        }
    }

    /// Ticks since the agent last stood on `pos`, or `None` if it never has
    /// (or `pos` is off the grid).
    #[inline]
    pub fn age(&self, pos: Position) -> Option<u32> {
        self.grid
            .cell_index(pos)
            .map(|i| self.ages[i])
            .filter(|&a| a != Self::NEVER_VISITED)
    }

    /// Number of distinct cells visited so far.
    pub fn visited_cells(&self) -> usize {
        self.ages.iter().filter(|&&a| a != Self::NEVER_VISITED).count()
    }

    pub fn grid(&self) -> GridWorld {
        self.grid
    }
}
