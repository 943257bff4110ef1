//! TOML scenario files.
//!
//! Every section and field is optional.  An empty file reproduces the
//! reference henhouse: an 18×10 pen with 20 hens, two feeders, one water
//! trough and a three-cell dust bath, run for 1800 ticks.
//!
//! ```toml
//! relations = "relations.csv"   # optional, resolved by the caller
//!
//! [grid]
//! width  = 18
//! height = 10
//!
//! [agents]
//! count  = 20
//! policy = "social"             # random_walk | needs_driven | social
//!
//! [resources]
//! food  = [{ x = 9, y = 4 }, { x = 8, y = 7 }]
//! enforce_capacity = false
//!
//! [resources.bath_params]
//! capacity = "unbounded"
//! yield    = { uniform_int = { low = 10, high = 25 } }
//!
//! [run]
//! ticks             = 1800
//! seed              = 0
//! snapshot_interval = 10
//! refill_interval   = 0
//!
//! [weights]
//! enemy_repulsion = 1.2
//! ```
//!
//! Omitted resource positions are derived from the grid size the same way
//! the reference layout is, so they follow the pen when it is resized.

use std::path::{Path, PathBuf};

use coop_agent::{AgentStoreBuilder, Metabolism, Needs, INITIAL_NEED_LEVEL};
use coop_behavior::{Policy, ScoringWeights};
use coop_core::{GridWorld, Position, SimConfig, SimRng};
use coop_social::RelationGraph;
use coop_world::{Capacity, ResourceKind, ResourceLayout, ResourceNode, YieldSpec};
use serde::{Deserialize, Serialize};

use crate::{Sim, SimBuilder, SimError, SimResult};

// ── Sections ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSection {
    pub width:  u32,
    pub height: u32,
}

impl Default for GridSection {
    fn default() -> Self {
        Self { width: 18, height: 10 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentsSection {
    pub count:        usize,
    pub policy:       Policy,
    /// Starting level of all three needs.
    pub initial_need: f64,
}

impl Default for AgentsSection {
    fn default() -> Self {
        Self { count: 20, policy: Policy::Social, initial_need: INITIAL_NEED_LEVEL }
    }
}

/// Optional per-kind parameter overrides.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KindParams {
    pub capacity: Option<Capacity>,
    #[serde(rename = "yield")]
    pub yield_spec: Option<YieldSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcesSection {
    /// `None` means "use the reference positions for this grid".
    #[serde(rename = "food")]
    pub food_positions:  Option<Vec<Position>>,
    #[serde(rename = "water")]
    pub water_positions: Option<Vec<Position>>,
    #[serde(rename = "bath")]
    pub bath_positions:  Option<Vec<Position>>,

    pub food_params:  KindParams,
    pub water_params: KindParams,
    pub bath_params:  KindParams,

    pub enforce_capacity: bool,
}

impl ResourcesSection {
    fn params(&self, kind: ResourceKind) -> &KindParams {
        match kind {
            ResourceKind::Food  => &self.food_params,
            ResourceKind::Water => &self.water_params,
            ResourceKind::Bath  => &self.bath_params,
        }
    }

    fn positions(&self, kind: ResourceKind) -> Option<&Vec<Position>> {
        match kind {
            ResourceKind::Food  => self.food_positions.as_ref(),
            ResourceKind::Water => self.water_positions.as_ref(),
            ResourceKind::Bath  => self.bath_positions.as_ref(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSection {
    pub ticks:             u64,
    pub seed:              u64,
    pub snapshot_interval: u64,
    /// 0 = never refill.
    pub refill_interval:   u64,
}

impl Default for RunSection {
    fn default() -> Self {
        let c = SimConfig::default();
        Self {
            ticks:             c.total_ticks,
            seed:              c.seed,
            snapshot_interval: c.snapshot_interval_ticks,
            refill_interval:   c.refill_interval_ticks,
        }
    }
}

// ── ScenarioConfig ────────────────────────────────────────────────────────────

/// A complete, self-describing run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub grid:       GridSection,
    pub agents:     AgentsSection,
    pub resources:  ResourcesSection,
    pub run:        RunSection,
    pub metabolism: Metabolism,
    pub weights:    ScoringWeights,
    /// Relations CSV.  Relative paths are resolved against the scenario
    /// file's directory by [`ScenarioConfig::load_relations`].
    pub relations:  Option<PathBuf>,
}

impl ScenarioConfig {
    /// Parse and validate a TOML scenario.
    pub fn from_toml_str(s: &str) -> SimResult<Self> {
        let config: ScenarioConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML scenario file.
    pub fn from_toml_file(path: &Path) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn grid(&self) -> GridWorld {
        GridWorld::new(self.grid.width, self.grid.height)
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            total_ticks:             self.run.ticks,
            seed:                    self.run.seed,
            snapshot_interval_ticks: self.run.snapshot_interval,
            refill_interval_ticks:   self.run.refill_interval,
        }
    }

    /// Check everything that can be checked without building the run.
    pub fn validate(&self) -> SimResult<()> {
        if self.grid.width == 0 || self.grid.height == 0 {
            return Err(SimError::Config(format!(
                "grid must be non-empty, got {}x{}",
                self.grid.width, self.grid.height
            )));
        }
        if i32::try_from(self.grid.width).is_err() || i32::try_from(self.grid.height).is_err() {
            return Err(SimError::Config("grid dimensions must fit in i32".into()));
        }
        if self.run.snapshot_interval == 0 {
            return Err(SimError::Config("run.snapshot_interval must be non-zero".into()));
        }
        if !self.agents.initial_need.is_finite() {
            return Err(SimError::Config("agents.initial_need must be finite".into()));
        }
        self.weights.validate()?;
        self.layout().validate(&self.grid())?;
        Ok(())
    }

    /// Resource nodes with positions and overrides applied.
    pub fn layout(&self) -> ResourceLayout {
        let reference = reference_positions(self.grid.width as i32, self.grid.height as i32);
        let mut layout = ResourceLayout::new();
        for (kind, default_positions) in ResourceKind::ALL.into_iter().zip(reference) {
            let params = self.resources.params(kind);
            let capacity = params.capacity.unwrap_or(kind.default_capacity());
            let yield_spec = params.yield_spec.unwrap_or(kind.default_yield());
            let positions = self.resources.positions(kind).cloned().unwrap_or(default_positions);
            for pos in positions {
                layout.push(ResourceNode::with_params(kind, pos, capacity, yield_spec));
            }
        }
        layout
    }

    /// Load the relations CSV named by `relations`, or an empty graph.
    ///
    /// `base_dir` is the directory relative paths are resolved against.
    pub fn load_relations(&self, base_dir: Option<&Path>) -> SimResult<RelationGraph> {
        let Some(path) = &self.relations else {
            return Ok(RelationGraph::new());
        };
        let full = match base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.clone(),
        };
        Ok(coop_social::load_relations_csv(&full, self.agents.count)?)
    }

    /// Place agents at random and assemble a ready-to-run [`Sim`].
    ///
    /// Placement draws from the run's `SimRng` (seeded from `run.seed`), and
    /// the same stream then drives the simulation.
    pub fn build(&self, relations: RelationGraph) -> SimResult<Sim<Policy>> {
        self.validate()?;
        let grid = self.grid();
        let mut rng = SimRng::new(self.run.seed);

        let mut builder =
            AgentStoreBuilder::new(grid).initial_needs(Needs::uniform(self.agents.initial_need));
        for _ in 0..self.agents.count {
            let x = rng.gen_range(0..self.grid.width as i32);
            let y = rng.gen_range(0..self.grid.height as i32);
            builder.spawn(Position::new(x, y));
        }
        let agents = builder.build()?;

        SimBuilder::new(self.sim_config(), agents, self.layout(), self.agents.policy)
            .relations(relations)
            .weights(self.weights)
            .metabolism(self.metabolism)
            .enforce_capacity(self.resources.enforce_capacity)
            .rng(rng)
            .build()
    }
}

/// The reference pen's resource cells for a `w × h` grid, in
/// food, water, bath order.
pub fn reference_positions(w: i32, h: i32) -> [Vec<Position>; 3] {
    [
        vec![Position::new(9, 4), Position::new(8, h - 3)],
        vec![Position::new(w - 3, h - 4)],
        vec![Position::new(w - 7, 0), Position::new(w - 6, 0), Position::new(w - 5, 0)],
    ]
}
