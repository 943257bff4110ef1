//! henhouse — command-line runner for the rust_coop foraging simulation.
//!
//! Runs the reference pen (18×10, 20 hens, 1800 ticks) unless a scenario
//! file says otherwise, and writes the adjacency snapshots as CSV.
//!
//! ```text
//! henhouse --config henhouse.toml --out output/henhouse --show
//! RUST_LOG=debug henhouse --ticks 50 --policy needs_driven
//! ```

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use coop_agent::AgentStore;
use coop_behavior::Policy;
use coop_core::Tick;
use coop_output::{CsvWriter, RunOutputObserver};
use coop_sim::{ScenarioConfig, SimObserver, Snapshot, TickStats, render_ascii};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "henhouse", version, about = "Chicken foraging simulation")]
struct Cli {
    /// TOML scenario file.  Omit to run the reference pen.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Relations CSV (`from,to,kind`).  Overrides the scenario's `relations`.
    #[arg(long)]
    relations: Option<PathBuf>,

    #[arg(long)]
    ticks: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,

    /// random_walk, needs_driven or social.
    #[arg(long)]
    policy: Option<Policy>,

    /// Ticks between adjacency snapshots.
    #[arg(long)]
    interval: Option<u64>,

    /// Output directory for the CSV files.
    #[arg(long, default_value = "output/henhouse")]
    out: PathBuf,

    /// Print the pen before and after the run.
    #[arg(long)]
    show: bool,
}

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: coop_output::OutputWriter> {
    inner:        RunOutputObserver<W>,
    snapshots:    usize,
    interactions: usize,
    rejected:     usize,
}

impl<W: coop_output::OutputWriter> SimObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, stats: TickStats) {
        self.interactions += stats.interactions;
        self.rejected += stats.rejected;
        self.inner.on_tick_end(tick, stats);
    }

    fn on_snapshot(&mut self, names: &[String], snapshot: &Snapshot) {
        self.snapshots += 1;
        self.inner.on_snapshot(names, snapshot);
    }

    fn on_sim_end(&mut self, final_tick: Tick, agents: &AgentStore) {
        self.inner.on_sim_end(final_tick, agents);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let (mut scenario, base_dir) = load_scenario(cli.config.as_deref())?;

    // 1. Command-line overrides.
    if let Some(ticks) = cli.ticks {
        scenario.run.ticks = ticks;
    }
    if let Some(seed) = cli.seed {
        scenario.run.seed = seed;
    }
    if let Some(policy) = cli.policy {
        scenario.agents.policy = policy;
    }
    if let Some(interval) = cli.interval {
        scenario.run.snapshot_interval = interval;
    }
    let base_dir = match cli.relations {
        // A path given on the command line is relative to the working directory.
        Some(path) => {
            scenario.relations = Some(path);
            None
        }
        None => base_dir,
    };

    // 2. Relations, placement and the sim itself.
    let relations = scenario
        .load_relations(base_dir.as_deref())
        .context("loading relations")?;
    info!(edges = relations.len(), "relations loaded");
    let mut sim = scenario.build(relations).context("building simulation")?;

    println!("=== henhouse — rust_coop ===");
    println!(
        "Pen: {}  |  Hens: {}  |  Ticks: {}  |  Seed: {}  |  Policy: {}",
        scenario.grid(),
        scenario.agents.count,
        scenario.run.ticks,
        scenario.run.seed,
        scenario.agents.policy,
    );
    if cli.show {
        println!();
        print!("{}", render_ascii(&sim.agents, &sim.resources));
    }
    println!();

    // 3. Output.
    let writer = CsvWriter::new(&cli.out, sim.recorder.names())
        .with_context(|| format!("opening output directory {}", cli.out.display()))?;
    let mut obs = CountingObserver {
        inner:        RunOutputObserver::new(writer),
        snapshots:    0,
        interactions: 0,
        rejected:     0,
    };

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        return Err(e).context("writing output");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  snapshots      : {}", obs.snapshots);
    println!("  interactions   : {}", obs.interactions);
    println!("  off-grid moves : {}", obs.rejected);
    println!("  output         : {}", cli.out.display());
    println!();

    if cli.show {
        print!("{}", render_ascii(&sim.agents, &sim.resources));
        println!();
    }

    println!("{:<12} {:>8} {:>8} {:>8} {:>12}", "Hen", "Cell", "Food", "Water", "Cleanliness");
    println!("{}", "-".repeat(52));
    for s in sim.summaries() {
        println!(
            "{:<12} {:>8} {:>8.1} {:>8.1} {:>12.1}",
            s.name, s.position.to_string(), s.needs.food, s.needs.water, s.needs.cleanliness,
        );
    }

    Ok(())
}

/// The scenario at `path` and the directory its relative paths resolve
/// against, or the reference scenario.
fn load_scenario(path: Option<&Path>) -> Result<(ScenarioConfig, Option<PathBuf>)> {
    match path {
        Some(path) => {
            let scenario = ScenarioConfig::from_toml_file(path)
                .with_context(|| format!("reading scenario {}", path.display()))?;
            Ok((scenario, path.parent().map(Path::to_path_buf)))
        }
        None => Ok((ScenarioConfig::default(), None)),
    }
}
