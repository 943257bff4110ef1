//! `coop-social` — who likes whom.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`relation`] | `RelationKind`, `RelationGraph`                          |
//! | [`loader`]   | `load_relations_csv`, `load_relations_reader`            |
//! | [`error`]    | `SocialError`, `SocialResult<T>`                         |
//!
//! Relations are directed and built once before the run.  The tick loop only
//! reads them; nothing in the simulation adds, removes, or regenerates an
//! edge.  How the graph was produced (by hand, by a generator script) is the
//! caller's business.

pub mod error;
pub mod loader;
pub mod relation;


pub use error::{SocialError, SocialResult};
pub use loader::{load_relations_csv, load_relations_reader};
pub use relation::{RelationGraph, RelationKind};
