//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoopError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::{AgentId, Position};

/// The top-level error type for `coop-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoopError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("position {pos} lies outside the {width}x{height} grid")]
    OutOfBounds {
        pos:    Position,
        width:  u32,
        height: u32,
    },
}

/// Shorthand result type for all `coop-*` crates.
pub type CoopResult<T> = Result<T, CoopError>;
