//! The `MovePolicy` trait and the three built-in scoring policies.
//!
//! A policy only scores a single candidate.  Candidate generation, the score
//! floor, normalisation and sampling live in [`engine`][crate::engine] and
//! are shared by every policy.

use std::fmt;
use std::str::FromStr;

use coop_core::{AgentId, Move, Position};
use coop_world::ResourceKind;

use crate::{BehaviorError, DecisionContext};

/// Scores one candidate move for one agent.
///
/// Implementations must be pure: same agent, move and context give the same
/// score.  Randomness belongs to the engine's sampling step only.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysStay;
///
/// impl MovePolicy for AlwaysStay {
///     fn raw_score(&self, _agent: AgentId, mv: Move, _ctx: &DecisionContext<'_>) -> f64 {
///         if mv == Move::Stay { 1.0 } else { 0.0 }
///     }
/// }
/// ```
pub trait MovePolicy: Send + Sync + 'static {
    /// Score before the floor is applied.  May be zero or negative.
    fn raw_score(&self, agent: AgentId, mv: Move, ctx: &DecisionContext<'_>) -> f64;
}

// ── Policy ────────────────────────────────────────────────────────────────────

/// The built-in policies, from simplest to richest.
///
/// `NeedsDriven` and `Social` share every term except the social one, so an
/// agent without friends or enemies scores identically under both.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Policy {
    /// Uniform over all five moves.  Off-grid candidates are not filtered.
    RandomWalk,
    /// Base score plus need attraction minus recency.
    NeedsDriven,
    /// `NeedsDriven` plus friend attraction and enemy repulsion.
    #[default]
    Social,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::RandomWalk, Policy::NeedsDriven, Policy::Social];

    pub fn as_str(self) -> &'static str {
        match self {
            Policy::RandomWalk  => "random_walk",
            Policy::NeedsDriven => "needs_driven",
            Policy::Social      => "social",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = BehaviorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('-', "_").as_str() {
            "random_walk" | "random"  => Ok(Policy::RandomWalk),
            "needs_driven" | "needs"  => Ok(Policy::NeedsDriven),
            "social"                  => Ok(Policy::Social),
            other => Err(BehaviorError::Config(format!(
                "unknown policy {other:?}: expected random_walk, needs_driven or social"
            ))),
        }
    }
}

impl MovePolicy for Policy {
    fn raw_score(&self, agent: AgentId, mv: Move, ctx: &DecisionContext<'_>) -> f64 {
        let weights = ctx.weights;
        if *self == Policy::RandomWalk {
            return weights.base_score;
        }

        let here = ctx.agents.position(agent);
        let target = here.step(mv);
        if !ctx.grid.is_valid(target) {
            return 0.0;
        }

        let mut score = weights.base_score + needs_term(agent, here, target, ctx);
        if *self == Policy::Social {
            score += social_term(agent, here, target, ctx);
        }
        score - recency_penalty(agent, target, ctx)
    }
}

// ── Scoring terms ─────────────────────────────────────────────────────────────

/// Normalised shortfall of `level` below `ceiling`.
///
/// Zero at or above the ceiling.  Not clamped from above: a need that has
/// drifted below zero yields a deficit greater than one.
#[inline]
pub fn need_deficit(level: f64, ceiling: f64) -> f64 {
    ((ceiling - level) / ceiling).max(0.0)
}

/// Attraction towards resources the agent needs.
///
/// Per kind: a large bonus for landing on a node, otherwise a bonus
/// proportional to the reduction in distance to the nearest node.  A kind
/// with no nodes contributes nothing.
pub fn needs_term(agent: AgentId, here: Position, target: Position, ctx: &DecisionContext<'_>) -> f64 {
    let weights = ctx.weights;
    let needs = ctx.agents.needs_of(agent);
    let mut total = 0.0;

    for kind in ResourceKind::ALL {
        let deficit = need_deficit(needs.get(kind.need()), weights.need_ceiling);
        if deficit == 0.0 {
            continue;
        }
        let weight = weights.kind_weight(kind);

        if ctx.resources.has_kind_at(kind, target) {
            total += deficit * weight * weights.on_resource_multiplier;
            continue;
        }
        let (Some(d_now), Some(d_new)) = (
            ctx.resources.nearest_distance(kind, here),
            ctx.resources.nearest_distance(kind, target),
        ) else {
            continue;
        };
        if d_new < d_now {
            let reduction = f64::from(d_now - d_new);
            total += deficit * weight * reduction / f64::from(d_now.max(1));
        }
    }
    total
}

/// Pull towards friends and push away from enemies.
pub fn social_term(agent: AgentId, here: Position, target: Position, ctx: &DecisionContext<'_>) -> f64 {
    let weights = ctx.weights;
    let mut total = 0.0;

    for &friend in ctx.relations.friends_of(agent) {
        if !ctx.agents.contains(friend) {
            continue;
        }
        let other = ctx.agents.position(friend);
        let d_now = here.manhattan(other);
        let d_new = target.manhattan(other);
        let pull = weights.friend_attraction / f64::from(d_new.max(1));
        if d_new < d_now {
            total += pull;
        } else if d_new > 0 {
            total += 0.5 * pull;
        }
    }

    for &enemy in ctx.relations.enemies_of(agent) {
        if !ctx.agents.contains(enemy) {
            continue;
        }
        let other = ctx.agents.position(enemy);
        let d_now = here.manhattan(other);
        let d_new = target.manhattan(other);
        let shift = weights.enemy_repulsion * f64::from(d_new.abs_diff(d_now)) / weights.social_distance_factor;
        if d_new > d_now {
            total += shift;
        } else if d_new < d_now {
            total -= shift;
        }
        if d_new <= 2 {
            total -= 2.0 * weights.enemy_repulsion / f64::from(d_new.max(1));
        }
    }
    total
}

/// Penalty for stepping onto a recently visited cell, fading linearly to
/// zero after `memory_decay` ticks.  Never-visited cells cost nothing.
pub fn recency_penalty(agent: AgentId, target: Position, ctx: &DecisionContext<'_>) -> f64 {
    match ctx.agents.memory_of(agent).age(target) {
        Some(age) => (1.0 - f64::from(age) / ctx.weights.memory_decay).max(0.0),
        None => 0.0,
    }
}
