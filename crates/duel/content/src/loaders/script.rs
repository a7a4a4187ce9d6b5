//! Input script loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::script::InputScript;

/// Loader for scripted input timelines from RON files.
///
/// ```ron
/// (
///     name: "opening_exchange",
///     p1: [(from: 0, until: 30, press: [Right]), (from: 30, until: 31, press: [Attack1])],
///     p2: [(from: 10, until: 11, press: [Attack2])],
/// )
/// ```
pub struct ScriptLoader;

impl ScriptLoader {
    pub fn load(path: &Path) -> LoadResult<InputScript> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<InputScript> {
        let script: InputScript = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse input script RON: {}", e))?;

        for (slot, segment) in script.empty_segments() {
            tracing::warn!(
                script = %script.name,
                %slot,
                from = segment.from,
                until = segment.until,
                "script segment never fires"
            );
        }

        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use duel_core::{Buttons, Slot};

    use super::*;

    #[test]
    fn parses_segments_for_both_slots() {
        let script = ScriptLoader::parse(
            r#"(
                name: "poke",
                p1: [(from: 0, until: 3, press: [Right, Jump])],
                p2: [(from: 2, until: 4, press: [Attack3])],
            )"#,
        )
        .expect("parse");

        assert_eq!(script.name, "poke");
        assert_eq!(
            script.input_at(Slot::One, 1).buttons,
            Buttons::RIGHT | Buttons::JUMP
        );
        assert_eq!(script.input_at(Slot::Two, 3).buttons, Buttons::ATTACK3);
        assert_eq!(script.len_ticks(), 4);
    }

    #[test]
    fn missing_slot_defaults_to_idle() {
        let script = ScriptLoader::parse(r#"(name: "solo", p1: [])"#).expect("parse");
        assert!(script.p2.is_empty());
        assert_eq!(script.len_ticks(), 0);
    }

    #[test]
    fn unknown_button_is_an_error() {
        let err = ScriptLoader::parse(
            r#"(name: "bad", p1: [(from: 0, until: 1, press: [Block])])"#,
        );
        assert!(err.is_err());
    }
}
