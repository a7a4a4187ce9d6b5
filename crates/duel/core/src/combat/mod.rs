//! Attack bookkeeping and contact resolution.
//!
//! Archetypes decide *where* and *when* an attack may land (see
//! [`crate::archetype`]); this module owns the uniform per-fighter attack
//! state and the archetype-agnostic resolver that applies strikes.

mod resolver;
mod state;

pub use resolver::{execute_attack, resolve_contact};
pub use state::{AttackState, ComboState, HitGuard, HitRecord};

use crate::geometry::Rect;
use crate::health::DamageOutcome;

/// Which of the three attack buttons started the attack.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttackKind {
    First,
    Second,
    Third,
}

impl AttackKind {
    /// 1, 2 or 3.
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }
}

/// Position of an attack within its animation, as seen by a damage window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackFrame {
    pub kind: AttackKind,
    /// Frame index just reached.
    pub frame: u16,
    /// Frame count of the attack's animation.
    pub frames: u16,
}

impl AttackFrame {
    /// True once `frame >= frames * num / den`.
    #[inline]
    pub const fn past(&self, num: u16, den: u16) -> bool {
        self.frame >= self.at(num, den)
    }

    /// Frame index at `frames * num / den`, rounded down.
    #[inline]
    pub const fn at(&self, num: u16, den: u16) -> u16 {
        ((self.frames as u32 * num as u32) / den as u32) as u16
    }
}

/// Damage a qualifying frame deals, keyed by the guard that dedups it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strike {
    pub damage: i32,
    pub guard: HitGuard,
}

impl Strike {
    pub const fn once(damage: i32) -> Self {
        Self {
            damage,
            guard: HitGuard::Once,
        }
    }
}

/// Anything a strike or a piece of ordnance can hurt.
pub trait HitTarget {
    fn hurtbox(&self) -> Rect;

    fn is_alive(&self) -> bool;

    /// Routes `amount` through the health model and flags the target as hit.
    fn take_hit(&mut self, amount: i32) -> DamageOutcome;

    /// Holds the target in its hit reaction for at least `ticks` updates.
    fn stun(&mut self, ticks: u32);
}
