//! `coop-behavior` — how an agent picks its next step.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`context`] | `DecisionContext<'a>` — read-only view for one decision         |
//! | [`weights`] | `ScoringWeights` — every tunable constant of the scoring terms  |
//! | [`policy`]  | `MovePolicy` trait, `Policy` enum, the individual score terms   |
//! | [`engine`]  | `score_moves`, `move_distribution`, `choose_move`               |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! The three policies differ only in which terms they add up.  Candidate
//! generation, the score floor and sampling are implemented once in
//! [`engine`] and work for any `MovePolicy`, including user-defined ones.

pub mod context;
pub mod engine;
pub mod error;
pub mod policy;
pub mod weights;

#[cfg(test)]
mod tests;

pub use context::DecisionContext;
pub use engine::{choose_move, move_distribution, score_moves};
pub use error::{BehaviorError, BehaviorResult};
pub use policy::{MovePolicy, Policy};
pub use weights::ScoringWeights;
