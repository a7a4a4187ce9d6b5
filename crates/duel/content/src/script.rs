//! Scripted input timelines for headless bouts.
//!
//! A script lists, per slot, the tick ranges during which buttons are held.
//! Overlapping segments combine, so "walk right from 0 to 40" and "attack at
//! 30" can be written independently.

use duel_core::{Buttons, InputSnapshot, Slot};

/// Logical button named in a script file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScriptButton {
    Left,
    Right,
    Jump,
    Attack1,
    Attack2,
    Attack3,
}

impl From<ScriptButton> for Buttons {
    fn from(button: ScriptButton) -> Self {
        match button {
            ScriptButton::Left => Buttons::LEFT,
            ScriptButton::Right => Buttons::RIGHT,
            ScriptButton::Jump => Buttons::JUMP,
            ScriptButton::Attack1 => Buttons::ATTACK1,
            ScriptButton::Attack2 => Buttons::ATTACK2,
            ScriptButton::Attack3 => Buttons::ATTACK3,
        }
    }
}

/// Buttons held for ticks in `[from, until)`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptSegment {
    pub from: u64,
    pub until: u64,
    pub press: Vec<ScriptButton>,
}

impl ScriptSegment {
    #[inline]
    pub fn covers(&self, tick: u64) -> bool {
        self.from <= tick && tick < self.until
    }

    pub fn buttons(&self) -> Buttons {
        self.press
            .iter()
            .fold(Buttons::empty(), |acc, &button| acc | Buttons::from(button))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputScript {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub p1: Vec<ScriptSegment>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub p2: Vec<ScriptSegment>,
}

impl InputScript {
    pub fn segments(&self, slot: Slot) -> &[ScriptSegment] {
        match slot {
            Slot::One => &self.p1,
            Slot::Two => &self.p2,
        }
    }

    /// Buttons `slot` holds on `tick`.
    pub fn input_at(&self, slot: Slot, tick: u64) -> InputSnapshot {
        let buttons = self
            .segments(slot)
            .iter()
            .filter(|segment| segment.covers(tick))
            .fold(Buttons::empty(), |acc, segment| acc | segment.buttons());
        InputSnapshot::new(buttons)
    }

    /// First tick after the last scripted press.
    pub fn len_ticks(&self) -> u64 {
        self.p1
            .iter()
            .chain(&self.p2)
            .map(|segment| segment.until)
            .max()
            .unwrap_or(0)
    }

    /// Segments that can never fire.
    pub fn empty_segments(&self) -> impl Iterator<Item = (Slot, &ScriptSegment)> + '_ {
        let p1 = self.p1.iter().map(|s| (Slot::One, s));
        let p2 = self.p2.iter().map(|s| (Slot::Two, s));
        p1.chain(p2)
            .filter(|(_, segment)| segment.from >= segment.until || segment.press.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(from: u64, until: u64, press: &[ScriptButton]) -> ScriptSegment {
        ScriptSegment {
            from,
            until,
            press: press.to_vec(),
        }
    }

    #[test]
    fn overlapping_segments_combine() {
        let script = InputScript {
            name: "walk_and_swing".into(),
            p1: vec![
                segment(0, 40, &[ScriptButton::Right]),
                segment(30, 31, &[ScriptButton::Attack1]),
            ],
            p2: Vec::new(),
        };

        assert_eq!(script.input_at(Slot::One, 29).buttons, Buttons::RIGHT);
        assert_eq!(
            script.input_at(Slot::One, 30).buttons,
            Buttons::RIGHT | Buttons::ATTACK1
        );
        assert_eq!(script.input_at(Slot::One, 40), InputSnapshot::IDLE);
        assert_eq!(script.input_at(Slot::Two, 30), InputSnapshot::IDLE);
        assert_eq!(script.len_ticks(), 40);
    }

    #[test]
    fn inverted_and_silent_segments_are_reported() {
        let script = InputScript {
            name: "broken".into(),
            p1: vec![segment(10, 5, &[ScriptButton::Jump])],
            p2: vec![segment(0, 5, &[]), segment(0, 5, &[ScriptButton::Left])],
        };
        let empty: Vec<_> = script.empty_segments().map(|(slot, _)| slot).collect();
        assert_eq!(empty, vec![Slot::One, Slot::Two]);
        assert_eq!(script.input_at(Slot::One, 7), InputSnapshot::IDLE);
    }
}
