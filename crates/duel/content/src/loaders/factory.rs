//! Content factory for building a bout from data files.

use std::path::{Path, PathBuf};

use duel_core::SimConfig;

use crate::loaders::{
    ConfigLoader, ControlLayout, ControlsLoader, LoadResult, RosterLoader, ScriptLoader,
};
use crate::roster::Roster;
use crate::script::InputScript;

/// Content factory that loads all bout content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── roster.toml
/// ├── controls.ron
/// └── scripts/
///     ├── opening_exchange.ron
///     └── trap_line.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load simulation configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<SimConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load archetype overrides from `roster.toml`.
    ///
    /// A missing file means no overrides.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        let path = self.data_dir.join("roster.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no roster file, using built-in profiles");
            return Ok(Roster::new());
        }
        RosterLoader::load(&path)
    }

    /// Load key bindings from `controls.ron`.
    pub fn load_controls(&self) -> LoadResult<ControlLayout> {
        let path = self.data_dir.join("controls.ron");
        ControlsLoader::load(&path)
    }

    /// Load an input script from `scripts/{name}.ron`.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the script file (without `.ron` extension)
    pub fn load_script(&self, name: &str) -> LoadResult<InputScript> {
        let path = self.data_dir.join("scripts").join(format!("{}.ron", name));
        ScriptLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_roster_falls_back_to_builtins() {
        let dir = tempfile::tempdir().expect("tempdir");
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_roster().expect("roster"), Roster::new());
    }

    #[test]
    fn missing_config_names_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = ContentFactory::new(dir.path()).load_config().unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
