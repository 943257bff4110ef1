use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    /// Candidate scores did not form a usable probability vector.  The score
    /// floor rules this out, so hitting it means a scoring term misbehaved.
    #[error("degenerate move distribution (total score {total})")]
    DegenerateDistribution { total: f64 },

    #[error("behavior configuration error: {0}")]
    Config(String),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
