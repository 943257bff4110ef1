//! The simulation's single deterministic random source.
//!
//! # Determinism strategy
//!
//! Every random draw in a run (initial placement, yield ranges, move
//! sampling) goes through one `SimRng` seeded from `SimConfig::seed`.  The
//! tick loop is strictly sequential and visits agents in ascending `AgentId`
//! order, so the sequence of draws (and therefore the whole trajectory) is a
//! pure function of the seed and the configuration.
//!
//! `SmallRng` is fast but its algorithm may change between `rand` releases;
//! reproducibility is guaranteed for a fixed build, not across upgrades.

use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Deliberately not `Clone`: duplicating the stream would let two consumers
/// replay the same draws.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Draw an index into `weights` with probability proportional to its
    /// weight (categorical sampling).
    ///
    /// # Errors
    /// Returns the `rand` error when `weights` is empty, contains a negative
    /// or non-finite entry, or sums to zero.
    pub fn choose_weighted(&mut self, weights: &[f64]) -> Result<usize, WeightedError> {
        let dist = WeightedIndex::new(weights)?;
        Ok(dist.sample(&mut self.0))
    }
}
