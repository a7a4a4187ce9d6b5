//! Roster loader: archetype overrides keyed by archetype name.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use duel_core::{Archetype, ArchetypeProfile};

use crate::loaders::{LoadResult, read_file};
use crate::roster::{ProfileOverride, Roster};

/// Loader for roster overrides from TOML files.
///
/// ```toml
/// [tank]
/// max_health = 170
///
/// [tank.frames]
/// attack3 = 14
/// ```
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Roster> {
        let tables: BTreeMap<String, ProfileOverride> = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster TOML: {}", e))?;

        let mut roster = Roster::new();
        for (name, patch) in tables {
            let archetype = Archetype::from_str(&name)
                .map_err(|_| anyhow::anyhow!("Unknown archetype in roster: {}", name))?;
            roster = roster.with_override(archetype, &patch);
            validate(archetype, &roster.profile(archetype))?;
            tracing::debug!(%archetype, "applied roster override");
        }

        Ok(roster)
    }
}

fn validate(archetype: Archetype, profile: &ArchetypeProfile) -> LoadResult<()> {
    anyhow::ensure!(
        profile.max_health > 0,
        "{}: max_health must be positive, got {}",
        archetype,
        profile.max_health
    );
    anyhow::ensure!(
        profile.speed >= 0,
        "{}: speed must not be negative, got {}",
        archetype,
        profile.speed
    );
    anyhow::ensure!(
        profile.jump_impulse <= 0,
        "{}: jump_impulse must point up (zero or negative), got {}",
        archetype,
        profile.jump_impulse
    );
    anyhow::ensure!(
        profile.body_width > 0 && profile.body_height > 0,
        "{}: body must have positive size, got {}x{}",
        archetype,
        profile.body_width,
        profile.body_height
    );
    Ok(())
}
