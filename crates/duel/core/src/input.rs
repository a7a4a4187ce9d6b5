//! Per-tick controller state.
//!
//! The simulation never reads a keyboard. A driver samples whatever device it
//! owns through a [`ControlScheme`] and hands the resulting [`InputSnapshot`]
//! to [`Fighter::move_step`](crate::Fighter::move_step).

use bitflags::bitflags;

use crate::combat::AttackKind;
use crate::slot::Slot;

bitflags! {
    /// Buttons held during one tick.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Buttons: u8 {
        const LEFT    = 1 << 0;
        const RIGHT   = 1 << 1;
        const JUMP    = 1 << 2;
        const ATTACK1 = 1 << 3;
        const ATTACK2 = 1 << 4;
        const ATTACK3 = 1 << 5;
    }
}

/// Buttons held by one fighter during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputSnapshot {
    pub buttons: Buttons,
}

impl InputSnapshot {
    pub const IDLE: Self = Self {
        buttons: Buttons::empty(),
    };

    pub const fn new(buttons: Buttons) -> Self {
        Self { buttons }
    }

    #[inline]
    pub const fn held(&self, buttons: Buttons) -> bool {
        self.buttons.contains(buttons)
    }

    /// Signed horizontal intent; right wins when both directions are held.
    pub const fn horizontal(&self) -> i32 {
        if self.held(Buttons::RIGHT) {
            1
        } else if self.held(Buttons::LEFT) {
            -1
        } else {
            0
        }
    }

    /// First attack button held, checked in order 1, 2, 3.
    pub const fn attack(&self) -> Option<AttackKind> {
        if self.held(Buttons::ATTACK1) {
            Some(AttackKind::First)
        } else if self.held(Buttons::ATTACK2) {
            Some(AttackKind::Second)
        } else if self.held(Buttons::ATTACK3) {
            Some(AttackKind::Third)
        } else {
            None
        }
    }
}

impl From<Buttons> for InputSnapshot {
    fn from(buttons: Buttons) -> Self {
        Self::new(buttons)
    }
}

/// Physical keys used by the default layouts.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum KeyCode {
    A,
    D,
    W,
    R,
    T,
    Y,
    Left,
    Right,
    Up,
    Keypad1,
    Keypad2,
    Keypad3,
}

/// Maps the six logical buttons of one fighter onto device keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlScheme<K> {
    pub left: K,
    pub right: K,
    pub jump: K,
    pub attack1: K,
    pub attack2: K,
    pub attack3: K,
}

impl<K: Copy> ControlScheme<K> {
    /// Samples every mapped key through `pressed`.
    pub fn snapshot(&self, mut pressed: impl FnMut(K) -> bool) -> InputSnapshot {
        let mut buttons = Buttons::empty();
        for (key, button) in self.bindings() {
            buttons.set(button, pressed(key));
        }
        InputSnapshot::new(buttons)
    }

    pub fn bindings(&self) -> [(K, Buttons); 6] {
        [
            (self.left, Buttons::LEFT),
            (self.right, Buttons::RIGHT),
            (self.jump, Buttons::JUMP),
            (self.attack1, Buttons::ATTACK1),
            (self.attack2, Buttons::ATTACK2),
            (self.attack3, Buttons::ATTACK3),
        ]
    }
}

impl ControlScheme<KeyCode> {
    /// A/D/W to move, R/T/Y to attack.
    pub const fn player_one() -> Self {
        Self {
            left: KeyCode::A,
            right: KeyCode::D,
            jump: KeyCode::W,
            attack1: KeyCode::R,
            attack2: KeyCode::T,
            attack3: KeyCode::Y,
        }
    }

    /// Arrow keys to move, keypad 1/2/3 to attack.
    pub const fn player_two() -> Self {
        Self {
            left: KeyCode::Left,
            right: KeyCode::Right,
            jump: KeyCode::Up,
            attack1: KeyCode::Keypad1,
            attack2: KeyCode::Keypad2,
            attack3: KeyCode::Keypad3,
        }
    }

    pub const fn for_slot(slot: Slot) -> Self {
        match slot {
            Slot::One => Self::player_one(),
            Slot::Two => Self::player_two(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_wins_over_left() {
        let input = InputSnapshot::new(Buttons::LEFT | Buttons::RIGHT);
        assert_eq!(input.horizontal(), 1);
        assert_eq!(InputSnapshot::new(Buttons::LEFT).horizontal(), -1);
        assert_eq!(InputSnapshot::IDLE.horizontal(), 0);
    }

    #[test]
    fn first_attack_button_wins() {
        let input = InputSnapshot::new(Buttons::ATTACK3 | Buttons::ATTACK2);
        assert_eq!(input.attack(), Some(AttackKind::Second));
        assert_eq!(InputSnapshot::IDLE.attack(), None);
    }

    #[test]
    fn scheme_samples_key_predicate() {
        let held = [KeyCode::Left, KeyCode::Keypad3];
        let input = ControlScheme::player_two().snapshot(|key| held.contains(&key));
        assert_eq!(input.buttons, Buttons::LEFT | Buttons::ATTACK3);

        let none = ControlScheme::player_one().snapshot(|key| held.contains(&key));
        assert_eq!(none, InputSnapshot::IDLE);
    }
}
