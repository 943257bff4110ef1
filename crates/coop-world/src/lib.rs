//! `coop-world` — consumable resources placed on the grid.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`resource`]    | `ResourceKind`, `Capacity`, `YieldSpec`, `ResourceNode`     |
//! | [`layout`]      | `ResourceLayout` — per-kind collections, nearest lookups    |
//! | [`interaction`] | `InteractionResolver`, `Interaction`                        |
//! | [`error`]       | `WorldError`, `WorldResult<T>`                              |
//!
//! Resources are created once at setup, never move, and are never removed.
//! Only their running counters change.

pub mod error;
pub mod interaction;
pub mod layout;
pub mod resource;

#[cfg(test)]
mod tests;

pub use error::{WorldError, WorldResult};
pub use interaction::{Interaction, InteractionResolver};
pub use layout::ResourceLayout;
pub use resource::{Capacity, ResourceKind, ResourceNode, YieldSpec};
