//! Unified error types surfaced by the runtime API.
//!
//! Wraps setup failures from the rules crate and summary serialization so
//! clients can bubble them up with consistent context.
use duel_core::{SetupError, Slot};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{slot} input provider not set")]
    ProviderNotSet { slot: Slot },

    #[error("{slot} archetype not chosen")]
    ArchetypeNotSet { slot: Slot },

    #[error("failed to set up {slot}")]
    FighterSetup {
        slot: Slot,
        #[source]
        source: SetupError,
    },

    #[error("invalid arena")]
    Arena(#[source] SetupError),

    #[error("tick length must be positive")]
    ZeroTickLength,

    #[error("bout already decided at tick {tick}")]
    BoutFinished { tick: u64 },

    #[error("failed to serialize bout summary")]
    Summary(#[from] serde_json::Error),
}
