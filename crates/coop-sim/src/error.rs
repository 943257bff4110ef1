use coop_behavior::BehaviorError;
use coop_core::CoopError;
use coop_social::SocialError;
use coop_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("scenario parse error: {0}")]
    Scenario(#[from] toml::de::Error),

    #[error(transparent)]
    Core(#[from] CoopError),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error(transparent)]
    Social(#[from] SocialError),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
