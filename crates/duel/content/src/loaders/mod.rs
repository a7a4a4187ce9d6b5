//! Content loaders for reading bout data from files.
//!
//! TOML carries numeric tables (config, roster); RON carries structured
//! values that name enum variants (control layouts, input scripts).

pub mod config;
pub mod controls;
pub mod factory;
pub mod roster;
pub mod script;

pub use config::ConfigLoader;
pub use controls::{ControlLayout, ControlsLoader};
pub use factory::ContentFactory;
pub use roster::RosterLoader;
pub use script::ScriptLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
