//! `coop-agent` — Structure-of-Arrays agent storage for the `rust_coop` simulation.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`needs`]       | `Needs`, `NeedKind`, `Metabolism`                         |
//! | [`memory`]      | `VisitMemory` — per-agent recency grid                    |
//! | [`store`]       | `AgentStore` (SoA arrays), `MoveOutcome`                  |
//! | [`builder`]     | `AgentStoreBuilder` (fluent construction)                 |
//!
//! Friend and enemy sets are not stored here; they live in the id-keyed
//! `RelationGraph` of `coop-social` so agents never hold references to each
//! other.

pub mod builder;
pub mod memory;
pub mod needs;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use memory::VisitMemory;
pub use needs::{INITIAL_NEED_LEVEL, Metabolism, NeedKind, Needs};
pub use store::{AgentStore, MoveOutcome};
