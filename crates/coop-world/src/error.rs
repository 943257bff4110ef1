use coop_core::Position;
use thiserror::Error;

use crate::ResourceKind;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("{kind}_{index} at {pos} lies outside the grid")]
    ResourceOutOfBounds {
        kind:  ResourceKind,
        index: usize,
        pos:   Position,
    },

    #[error("{kind} yield range [{low}, {high}] is empty")]
    EmptyYieldRange {
        kind: ResourceKind,
        low:  i64,
        high: i64,
    },

    #[error("{kind} yield must be finite, got {value}")]
    NonFiniteYield {
        kind:  ResourceKind,
        value: f64,
    },

    #[error("{kind} capacity must be positive, got {capacity}")]
    InvalidCapacity {
        kind:     ResourceKind,
        capacity: i64,
    },
}

pub type WorldResult<T> = Result<T, WorldError>;
