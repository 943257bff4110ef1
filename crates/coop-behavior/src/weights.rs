//! Tunable constants of the scoring function.

use coop_world::ResourceKind;

use crate::{BehaviorError, BehaviorResult};

/// Every constant the needs and social terms read.
///
/// All fields have defaults, so a scenario file only lists what it changes.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringWeights {
    /// Exploration score every candidate starts from.
    pub base_score: f64,
    /// Need level at which the deficit reaches zero.
    pub need_ceiling: f64,
    pub food_weight:  f64,
    pub water_weight: f64,
    pub bath_weight:  f64,
    /// Multiplier for landing exactly on a resource.  Kept above 1 so arrival
    /// outranks approach.
    pub on_resource_multiplier: f64,
    pub friend_attraction: f64,
    pub enemy_repulsion:   f64,
    /// Divisor applied to the change in distance from an enemy.
    pub social_distance_factor: f64,
    /// Ticks after which a visited cell stops being penalised.
    pub memory_decay: f64,
    /// Lower bound applied to every candidate's final score.
    pub score_floor: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base_score:             1.0,
            need_ceiling:           100.0,
            food_weight:            1.0,
            water_weight:           1.0,
            bath_weight:            0.5,
            on_resource_multiplier: 3.0,
            friend_attraction:      0.5,
            enemy_repulsion:        0.8,
            social_distance_factor: 2.0,
            memory_decay:           10.0,
            score_floor:            1e-3,
        }
    }
}

impl ScoringWeights {
    #[inline]
    pub fn kind_weight(&self, kind: ResourceKind) -> f64 {
        match kind {
            ResourceKind::Food  => self.food_weight,
            ResourceKind::Water => self.water_weight,
            ResourceKind::Bath  => self.bath_weight,
        }
    }

    /// Reject values that would make scores non-finite or let the floor reach
    /// zero.
    pub fn validate(&self) -> BehaviorResult<()> {
        let named = [
            ("base_score", self.base_score),
            ("need_ceiling", self.need_ceiling),
            ("food_weight", self.food_weight),
            ("water_weight", self.water_weight),
            ("bath_weight", self.bath_weight),
            ("on_resource_multiplier", self.on_resource_multiplier),
            ("friend_attraction", self.friend_attraction),
            ("enemy_repulsion", self.enemy_repulsion),
            ("social_distance_factor", self.social_distance_factor),
            ("memory_decay", self.memory_decay),
            ("score_floor", self.score_floor),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(BehaviorError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("need_ceiling", self.need_ceiling),
            ("social_distance_factor", self.social_distance_factor),
            ("memory_decay", self.memory_decay),
            ("score_floor", self.score_floor),
        ] {
            if value == 0.0 {
                return Err(BehaviorError::Config(format!("{name} must be positive")));
            }
        }
        Ok(())
    }
}
