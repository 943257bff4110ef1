//! The `Sim` struct and its tick loop.

use coop_agent::{AgentStore, Metabolism, MoveOutcome};
use coop_behavior::{
    choose_move, move_distribution, score_moves, DecisionContext, MovePolicy, ScoringWeights,
};
use coop_core::{AgentId, CoopError, SimClock, SimConfig, SimRng, Tick};
use coop_social::RelationGraph;
use coop_world::{InteractionResolver, ResourceLayout};
use tracing::{debug, info};

use crate::{AdjacencyRecorder, AgentSummary, RunOutput, SimObserver, SimResult, TickStats};

/// The main simulation runner.
///
/// `Sim<P>` owns every agent and resource for the lifetime of a run and
/// drives a strictly sequential loop.  For each agent in ascending
/// `AgentId` order:
///
/// 1. **Decide**: score the five candidate moves with `P` and sample one.
/// 2. **Move**: apply it; an off-grid target leaves the agent in place.
/// 3. **Metabolise**: subtract the fixed food and water costs.
/// 4. **Interact**: consume from a resource on the agent's cell, if any.
/// 5. **Remember**: record the cell in the agent's visit memory.
///
/// Each decision sees the world as left by the agents before it in the same
/// tick.  After all agents have moved, resources are refilled (if due) and
/// an adjacency snapshot is taken (if due).
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: MovePolicy> {
    /// Run length, seed, and sampling intervals.
    pub config: SimConfig,

    pub clock: SimClock,

    /// Agent state (SoA arrays).
    pub agents: AgentStore,

    pub resources: ResourceLayout,

    /// Read-only for the whole run.
    pub relations: RelationGraph,

    pub weights: ScoringWeights,

    pub metabolism: Metabolism,

    pub resolver: InteractionResolver,

    pub policy: P,

    /// The single random source for the run.
    pub rng: SimRng,

    pub recorder: AdjacencyRecorder,
}

impl<P: MovePolicy> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            agents = self.agents.count,
            resources = self.resources.len(),
            ticks = self.config.total_ticks,
            seed = self.config.seed,
            "simulation starting"
        );
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick, &self.agents);
        info!(
            final_tick = %self.clock.current_tick,
            snapshots = self.recorder.snapshots().len(),
            "simulation finished"
        );
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Probability of each move in [`Move::ALL`](coop_core::Move::ALL) order for `agent` right now.
    ///
    /// Does not touch the RNG.
    pub fn move_probabilities(&self, agent: AgentId) -> SimResult<[f64; 5]> {
        if !self.agents.contains(agent) {
            return Err(CoopError::AgentNotFound(agent).into());
        }
        let ctx = DecisionContext::new(
            self.clock.current_tick,
            &self.agents,
            &self.resources,
            &self.relations,
            &self.weights,
        );
        Ok(move_distribution(&score_moves(&self.policy, agent, &ctx))?)
    }

    /// Final state of every agent.
    pub fn summaries(&self) -> Vec<AgentSummary> {
        AgentSummary::collect(&self.agents)
    }

    /// Consume the sim and hand off its results.
    pub fn into_output(self) -> RunOutput {
        let final_needs = AgentSummary::collect(&self.agents);
        let (entity_names, snapshots) = self.recorder.into_parts();
        RunOutput { entity_names, snapshots, final_needs, final_tick: self.clock.current_tick }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let stats = self.process_tick(now)?;
        observer.on_tick_end(now, stats);

        let refill = self.config.refill_interval_ticks;
        if refill > 0 && (now.0 + 1).is_multiple_of(refill) {
            self.resources.refill_all();
            debug!(%now, "resources refilled");
        }

        if now.is_on_interval(self.config.snapshot_interval_ticks) {
            self.recorder.record(now, &self.agents, &self.resources);
            if let Some(snapshot) = self.recorder.snapshots().last() {
                observer.on_snapshot(self.recorder.names(), snapshot);
            }
        }

        self.clock.advance();
        Ok(())
    }

    fn process_tick(&mut self, now: Tick) -> SimResult<TickStats> {
        let mut stats = TickStats::default();

        for i in 0..self.agents.count {
            let agent = AgentId(i as u32);

            // ── Decide ────────────────────────────────────────────────────
            let mv = {
                let ctx = DecisionContext::new(
                    now,
                    &self.agents,
                    &self.resources,
                    &self.relations,
                    &self.weights,
                );
                choose_move(&self.policy, agent, &ctx, &mut self.rng)?
            };

            // ── Move ──────────────────────────────────────────────────────
            match self.agents.apply_move(agent, mv) {
                MoveOutcome::Moved { .. } => stats.moved += 1,
                MoveOutcome::Rejected { target } => {
                    stats.rejected += 1;
                    debug!(%now, agent = agent.0, %target, "off-grid move rejected");
                }
            }

            // ── Metabolise, interact, remember ────────────────────────────
            self.agents.metabolise(agent, &self.metabolism);
            let pos = self.agents.position(agent);
            let needs = &mut self.agents.needs[agent.index()];
            if self.resolver.apply(&mut self.resources, pos, needs, &mut self.rng).is_some() {
                stats.interactions += 1;
            }
            self.agents.record_visit(agent);
        }

        Ok(stats)
    }
}
