//! Candidate scoring, normalisation, and categorical sampling.
//!
//! Every policy goes through the same three steps:
//!
//! ```text
//! scores = [max(raw_score(mv), floor) for mv in N, S, E, W, Stay]
//! probs  = scores / sum(scores)
//! move   = categorical(probs)          // one draw from SimRng
//! ```
//!
//! The chosen move may still be off the grid (it only carries the floor
//! weight); the caller must treat it as a rejected no-op.

use coop_core::{AgentId, Move, SimRng};

use crate::{BehaviorError, BehaviorResult, DecisionContext, MovePolicy};

/// Floor-clamped score for each move in [`Move::ALL`] order.
///
/// NaN is passed through untouched so [`move_distribution`] can report it.
pub fn score_moves<P: MovePolicy + ?Sized>(
    policy: &P,
    agent:  AgentId,
    ctx:    &DecisionContext<'_>,
) -> [f64; 5] {
    let floor = ctx.weights.score_floor;
    Move::ALL.map(|mv| {
        let raw = policy.raw_score(agent, mv, ctx);
        if raw < floor { floor } else { raw }
    })
}

/// Normalise scores into probabilities summing to one.
///
/// # Errors
/// [`BehaviorError::DegenerateDistribution`] if any score is negative or
/// non-finite, or the total is not strictly positive.
pub fn move_distribution(scores: &[f64; 5]) -> BehaviorResult<[f64; 5]> {
    let total: f64 = scores.iter().sum();
    let well_formed = scores.iter().all(|s| s.is_finite() && *s >= 0.0);
    if !well_formed || !total.is_finite() || total <= 0.0 {
        return Err(BehaviorError::DegenerateDistribution { total });
    }
    Ok(scores.map(|s| s / total))
}

/// Score, normalise and sample one move for `agent`.
pub fn choose_move<P: MovePolicy + ?Sized>(
    policy: &P,
    agent:  AgentId,
    ctx:    &DecisionContext<'_>,
    rng:    &mut SimRng,
) -> BehaviorResult<Move> {
    let scores = score_moves(policy, agent, ctx);
    let probs = move_distribution(&scores)?;
    let index = rng
        .choose_weighted(&probs)
        .map_err(|_| BehaviorError::DegenerateDistribution { total: probs.iter().sum() })?;
    Ok(Move::ALL[index])
}
