//! Client configuration read from the environment.
use std::path::PathBuf;
use std::str::FromStr;

use duel_core::Archetype;
use duel_runtime::DEFAULT_MAX_TICKS;

/// What bout to run and how to report it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    pub p1: Archetype,
    pub p2: Archetype,
    /// Script under `data_dir/scripts/`; both fighters chase when unset.
    pub script: Option<String>,
    pub max_ticks: u64,
    /// Overrides the seed from `config.toml`.
    pub seed: Option<u64>,
    /// Print a HUD line every this many ticks (0 disables periodic lines).
    pub hud_every: u64,
    /// Print the JSON summary when the bout ends.
    pub summary: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            p1: Archetype::Warrior,
            p2: Archetype::SlimeDemon,
            script: None,
            max_ticks: DEFAULT_MAX_TICKS,
            seed: None,
            hud_every: 30,
            summary: true,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_DATA_DIR` - Content directory (default: `data`)
    /// - `DUEL_P1` / `DUEL_P2` - Archetype names (default: warrior vs slime_demon)
    /// - `DUEL_SCRIPT` - Input script name (default: both fighters chase)
    /// - `DUEL_MAX_TICKS` - Tick limit before time-up (default: 5625)
    /// - `DUEL_SEED` - Seed override for randomized spawns
    /// - `DUEL_HUD_EVERY` - Ticks between HUD lines (default: 30)
    /// - `DUEL_SUMMARY` - Print the JSON summary (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("DUEL_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(archetype) = parse(&lookup, "DUEL_P1") {
            config.p1 = archetype;
        }
        if let Some(archetype) = parse(&lookup, "DUEL_P2") {
            config.p2 = archetype;
        }
        config.script = lookup("DUEL_SCRIPT").filter(|name| !name.trim().is_empty());
        if let Some(max_ticks) = parse::<u64>(&lookup, "DUEL_MAX_TICKS") {
            config.max_ticks = max_ticks.max(1);
        }
        config.seed = parse(&lookup, "DUEL_SEED");
        if let Some(every) = parse(&lookup, "DUEL_HUD_EVERY") {
            config.hud_every = every;
        }
        if let Some(summary) = parse(&lookup, "DUEL_SUMMARY") {
            config.summary = summary;
        }

        config
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable environment value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(ClientConfig::from_lookup(lookup(&[])), ClientConfig::default());
    }

    #[test]
    fn archetypes_parse_case_insensitively() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("DUEL_P1", "Tank"),
            ("DUEL_P2", "TRAPPER"),
            ("DUEL_SCRIPT", "keep_away"),
            ("DUEL_SEED", "99"),
        ]));
        assert_eq!(config.p1, Archetype::Tank);
        assert_eq!(config.p2, Archetype::Trapper);
        assert_eq!(config.script.as_deref(), Some("keep_away"));
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("DUEL_P1", "wizard"),
            ("DUEL_MAX_TICKS", "0"),
            ("DUEL_SCRIPT", "  "),
            ("DUEL_SUMMARY", "maybe"),
        ]));
        assert_eq!(config.p1, Archetype::Warrior);
        assert_eq!(config.max_ticks, 1);
        assert_eq!(config.script, None);
        assert!(config.summary);
    }
}
