//! Grid coordinate type and the bounded world the agents live in.
//!
//! Coordinates are signed so that a candidate step off the edge of the grid
//! (e.g. `x = -1`) is representable and can be rejected by
//! [`GridWorld::is_valid`] instead of wrapping or saturating.

use std::fmt;

/// A cell on the grid.  `x` grows eastward, `y` grows southward.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `|Δx| + |Δy|`, used for attraction and repulsion scoring.
    #[inline]
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `max(|Δx|, |Δy|)`, used for co-location detection.
    #[inline]
    pub fn chebyshev(self, other: Position) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// The cell reached by taking `mv` from `self`.  May lie off the grid.
    #[inline]
    pub fn step(self, mv: Move) -> Position {
        let (dx, dy) = mv.delta();
        Position::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position::new(x, y)
    }
}

// ── Move ──────────────────────────────────────────────────────────────────────

/// One of the five discrete displacements an agent may choose per tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Move {
    North,
    South,
    East,
    West,
    Stay,
}

impl Move {
    /// Every candidate in the fixed order used for score vectors and sampling.
    pub const ALL: [Move; 5] = [Move::North, Move::South, Move::East, Move::West, Move::Stay];

    /// `(dx, dy)` for this move.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Move::North => (0, -1),
            Move::South => (0, 1),
            Move::East  => (1, 0),
            Move::West  => (-1, 0),
            Move::Stay  => (0, 0),
        }
    }

    /// Position of this move inside [`Move::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Move::North => 0,
            Move::South => 1,
            Move::East  => 2,
            Move::West  => 3,
            Move::Stay  => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Move::North => "north",
            Move::South => "south",
            Move::East  => "east",
            Move::West  => "west",
            Move::Stay  => "stay",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── GridWorld ─────────────────────────────────────────────────────────────────

/// Bounds of the rectangular world: `[0, width) × [0, height)`.
///
/// A pure value; it owns no agents or resources.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridWorld {
    pub width:  u32,
    pub height: u32,
}

impl GridWorld {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `true` iff both coordinates lie inside the grid.
    #[inline]
    pub fn is_valid(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// `true` iff `a` and `b` are distinct cells within Chebyshev distance 1.
    #[inline]
    pub fn adjacent(a: Position, b: Position) -> bool {
        a != b && a.chebyshev(b) <= 1
    }

    /// Number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of `pos`, or `None` when it lies off the grid.
    #[inline]
    pub fn cell_index(&self, pos: Position) -> Option<usize> {
        self.is_valid(pos)
            .then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    /// Iterator over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Position::new(x, y)))
    }
}

impl fmt::Display for GridWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
