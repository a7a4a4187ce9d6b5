//! Keyboard layout loader.

use std::path::Path;

use duel_core::{ControlScheme, KeyCode, Slot};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Key bindings for both slots.
///
/// ```ron
/// (
///     p1: (left: A, right: D, jump: W, attack1: R, attack2: T, attack3: Y),
///     p2: (left: Left, right: Right, jump: Up, attack1: Keypad1, attack2: Keypad2, attack3: Keypad3),
/// )
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlLayout {
    pub p1: ControlScheme<KeyCode>,
    pub p2: ControlScheme<KeyCode>,
}

impl ControlLayout {
    pub fn scheme(&self, slot: Slot) -> &ControlScheme<KeyCode> {
        match slot {
            Slot::One => &self.p1,
            Slot::Two => &self.p2,
        }
    }

    /// Keys bound in both layouts; pressing one drives both fighters.
    pub fn shared_keys(&self) -> Vec<KeyCode> {
        let p2: Vec<KeyCode> = self.p2.bindings().iter().map(|(key, _)| *key).collect();
        self.p1
            .bindings()
            .iter()
            .map(|(key, _)| *key)
            .filter(|key| p2.contains(key))
            .collect()
    }
}

impl Default for ControlLayout {
    fn default() -> Self {
        Self {
            p1: ControlScheme::player_one(),
            p2: ControlScheme::player_two(),
        }
    }
}

/// Loader for control layouts from RON files.
pub struct ControlsLoader;

impl ControlsLoader {
    pub fn load(path: &Path) -> LoadResult<ControlLayout> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ControlLayout> {
        let layout: ControlLayout = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse controls RON: {}", e))?;

        let shared = layout.shared_keys();
        if !shared.is_empty() {
            tracing::warn!(?shared, "keys bound for both players");
        }

        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_LAYOUT: &str = r#"(
        p1: (left: A, right: D, jump: W, attack1: R, attack2: T, attack3: Y),
        p2: (left: Left, right: Right, jump: Up, attack1: Keypad1, attack2: Keypad2, attack3: Keypad3),
    )"#;

    #[test]
    fn parses_the_default_layout() {
        let layout = ControlsLoader::parse(DEFAULT_LAYOUT).expect("parse");
        assert_eq!(layout, ControlLayout::default());
        assert_eq!(layout.scheme(Slot::Two).jump, KeyCode::Up);
        assert!(layout.shared_keys().is_empty());
    }

    #[test]
    fn shared_keys_are_detected() {
        let mut layout = ControlLayout::default();
        layout.p2.attack1 = KeyCode::R;
        assert_eq!(layout.shared_keys(), vec![KeyCode::R]);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let bad = DEFAULT_LAYOUT.replace("Keypad3", "Keypad9");
        assert!(ControlsLoader::parse(&bad).is_err());
    }
}
