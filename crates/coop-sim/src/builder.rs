//! Fluent builder for constructing a [`Sim`].

use coop_agent::{AgentStore, Metabolism};
use coop_behavior::{MovePolicy, ScoringWeights};
use coop_core::{SimClock, SimConfig, SimRng};
use coop_social::RelationGraph;
use coop_world::{InteractionResolver, ResourceLayout};

use crate::{AdjacencyRecorder, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, snapshot and refill intervals
/// - [`AgentStore`] — from [`coop_agent::AgentStoreBuilder`]
/// - [`ResourceLayout`] — every food, water and bath node
/// - `P: MovePolicy` — usually a [`coop_behavior::Policy`]
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                              |
/// |--------------------------|--------------------------------------|
/// | `.relations(g)`          | Empty `RelationGraph`                |
/// | `.weights(w)`            | `ScoringWeights::default()`          |
/// | `.metabolism(m)`         | 1.0 food and 1.0 water per tick      |
/// | `.enforce_capacity(b)`   | `false`                              |
/// | `.rng(r)`                | `SimRng::new(config.seed)`           |
///
/// Pass `.rng` when draws were already taken from the stream (e.g. for
/// random placement) so the run continues the same sequence.
///
/// # Example
///
/// ```rust,ignore
/// let store = AgentStoreBuilder::new(grid).agents_at(positions).build()?;
/// let mut sim = SimBuilder::new(config, store, layout, Policy::Social)
///     .relations(graph)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: MovePolicy> {
    config:           SimConfig,
    agents:           AgentStore,
    resources:        ResourceLayout,
    policy:           P,
    relations:        Option<RelationGraph>,
    weights:          ScoringWeights,
    metabolism:       Metabolism,
    enforce_capacity: bool,
    rng:              Option<SimRng>,
}

impl<P: MovePolicy> SimBuilder<P> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, agents: AgentStore, resources: ResourceLayout, policy: P) -> Self {
        Self {
            config,
            agents,
            resources,
            policy,
            relations:        None,
            weights:          ScoringWeights::default(),
            metabolism:       Metabolism::default(),
            enforce_capacity: false,
            rng:              None,
        }
    }

    pub fn relations(mut self, relations: RelationGraph) -> Self {
        self.relations = Some(relations);
        self
    }

    pub fn weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn metabolism(mut self, metabolism: Metabolism) -> Self {
        self.metabolism = metabolism;
        self
    }

    /// Refuse yield from limited nodes whose counter has run out.
    pub fn enforce_capacity(mut self, enforce: bool) -> Self {
        self.enforce_capacity = enforce;
        self
    }

    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate every input and return a ready-to-run [`Sim`].
    ///
    /// All configuration problems surface here, before the first tick.
    pub fn build(self) -> SimResult<Sim<P>> {
        let grid = self.agents.grid();

        // ── Validate ──────────────────────────────────────────────────────
        if grid.width == 0 || grid.height == 0 {
            return Err(SimError::Config(format!("grid must be non-empty, got {grid}")));
        }
        if self.config.snapshot_interval_ticks == 0 {
            return Err(SimError::Config("snapshot_interval_ticks must be non-zero".into()));
        }
        let Metabolism { food_cost, water_cost } = self.metabolism;
        if !food_cost.is_finite() || !water_cost.is_finite() {
            return Err(SimError::Config(format!(
                "metabolism costs must be finite, got food {food_cost} water {water_cost}"
            )));
        }
        self.resources.validate(&grid)?;
        self.weights.validate()?;

        let relations = self.relations.unwrap_or_default();
        relations.validate(self.agents.count)?;

        // ── Assemble ──────────────────────────────────────────────────────
        let recorder = AdjacencyRecorder::new(self.agents.count, &self.resources);
        let rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.seed));

        Ok(Sim {
            clock:      SimClock::new(),
            config:     self.config,
            agents:     self.agents,
            resources:  self.resources,
            relations,
            weights:    self.weights,
            metabolism: self.metabolism,
            resolver:   InteractionResolver::new(self.enforce_capacity),
            policy:     self.policy,
            rng,
            recorder,
        })
    }
}
