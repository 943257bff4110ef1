use coop_core::AgentId;
use thiserror::Error;

use crate::RelationKind;

#[derive(Debug, Error)]
pub enum SocialError {
    #[error("{0} cannot hold a relation to itself")]
    SelfRelation(AgentId),

    #[error("{from} -> {to} is already {existing}, cannot also be {requested}")]
    Conflict {
        from:      AgentId,
        to:        AgentId,
        existing:  RelationKind,
        requested: RelationKind,
    },

    #[error("relation names {agent} but only {agent_count} agents exist")]
    UnknownAgent {
        agent:       AgentId,
        agent_count: usize,
    },

    #[error("unknown relation kind {0:?}: expected \"friend\" or \"enemy\"")]
    UnknownKind(String),

    #[error("relation parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SocialResult<T> = Result<T, SocialError>;
