//! Data-driven bout content and its loaders.
//!
//! This crate holds the data a bout is built from, kept apart from the rules:
//! - Archetype stat and frame-count overrides (roster, TOML)
//! - Simulation configuration (TOML)
//! - Keyboard layouts per slot (RON)
//! - Scripted input timelines for headless bouts (RON)
//!
//! Content is read once before a bout starts and never changes while it runs.

pub mod roster;
pub mod script;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use roster::{FrameOverride, ProfileOverride, Roster};
pub use script::{InputScript, ScriptButton, ScriptSegment};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, ControlLayout, ControlsLoader, RosterLoader, ScriptLoader,
};
