//! `coop-sim` — the sequential tick loop of the rust_coop simulation.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   for agent in AgentId order:
//!     ① Decide      — score N/S/E/W/Stay with the policy, sample one move
//!     ② Move        — off-grid targets are dropped (agent stays put)
//!     ③ Metabolise  — food and water drop by their fixed costs
//!     ④ Interact    — consume from the first food/water/bath node on the cell
//!     ⑤ Remember    — record the cell in the agent's visit memory
//!   refill resources        (every refill_interval_ticks, if non-zero)
//!   record adjacency matrix (every snapshot_interval_ticks)
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`sim`]       | `Sim<P>` — state and tick loop                             |
//! | [`builder`]   | `SimBuilder<P>` — validation and assembly                  |
//! | [`observer`]  | `SimObserver`, `NoopObserver`, `TickStats`                 |
//! | [`adjacency`] | `AdjacencyMatrix`, `AdjacencyRecorder`, entity naming      |
//! | [`report`]    | `AgentSummary`, `RunOutput`                                |
//! | [`scenario`]  | `ScenarioConfig` — TOML scenario files                     |
//! | [`render`]    | `render_ascii`                                             |
//! | [`error`]     | `SimError`, `SimResult<T>`                                 |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use coop_sim::{NoopObserver, ScenarioConfig};
//!
//! let scenario = ScenarioConfig::from_toml_str("")?;
//! let mut sim = scenario.build(RelationGraph::new())?;
//! sim.run(&mut NoopObserver)?;
//! let output = sim.into_output();
//! ```

pub mod adjacency;
pub mod builder;
pub mod error;
pub mod observer;
pub mod render;
pub mod report;
pub mod scenario;
pub mod sim;


pub use adjacency::{entity_names, entity_positions, AdjacencyMatrix, AdjacencyRecorder, Snapshot};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickStats};
pub use render::render_ascii;
pub use report::{AgentSummary, RunOutput};
pub use scenario::{ScenarioConfig, reference_positions};
pub use sim::Sim;
