//! Public surface for driving bouts.
//!
//! Re-exports error types and input providers so consumers can depend on a
//! single module.
mod errors;
mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{
    ChaseInputProvider, IdleInputProvider, InputContext, InputProvider, ScriptedInputProvider,
};
