//! Bout events and their extraction from per-tick fighter deltas.

mod bout_event;
mod extractor;

pub use bout_event::{BoutEvent, HealthThreshold, hp_percent};
pub use extractor::extract_events;
