//! Runtime orchestration for two-fighter bouts.
//!
//! This crate wires the rules in `duel-core` to input sources and observers.
//! Consumers build a [`Bout`], plug an [`InputProvider`] into each slot, and
//! step it tick by tick or run it to completion while reading [`TickReport`]s.
//!
//! Modules are organized by responsibility:
//! - [`bout`] hosts the driver, its builder and the outcome types
//! - [`api`] exposes errors and input providers
//! - [`events`] turns per-tick fighter deltas into [`BoutEvent`]s
pub mod api;
pub mod bout;
pub mod events;

pub use api::{
    ChaseInputProvider, IdleInputProvider, InputContext, InputProvider, Result, RuntimeError,
    ScriptedInputProvider,
};
pub use bout::{
    Bout, BoutBuilder, BoutOutcome, BoutSummary, DEFAULT_MAX_TICKS, DEFAULT_SPAWN_X,
    FighterStats, FighterSummary, TickReport,
};
pub use events::{BoutEvent, HealthThreshold, extract_events, hp_percent};
