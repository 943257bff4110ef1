//! `coop-core` — foundational types for the `rust_coop` foraging simulation.
//!
//! This crate is a dependency of every other `coop-*` crate.  It has no
//! `coop-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `ResourceId`, `AgentIdGen`                 |
//! | [`grid`]        | `Position`, `Move`, `GridWorld`, distance helpers     |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `SimRng` (the single seeded source for a run)         |
//! | [`error`]       | `CoopError`, `CoopResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoopError, CoopResult};
pub use grid::{GridWorld, Move, Position};
pub use ids::{AgentId, AgentIdGen, ResourceId};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
