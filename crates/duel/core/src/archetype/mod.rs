//! Archetypes: base stats plus a static table of attack policies.
//!
//! An [`Archetype`] tag selects one [`ArchetypePolicy`], a set of plain
//! functions the resolver and the fighter update call without knowing which
//! archetype they serve. Stats and frame counts live in [`ArchetypeProfile`]
//! so content files can override them per bout.

mod assassin;
mod slime_demon;
mod tank;
mod trapper;
mod warrior;

use crate::arena::Arena;
use crate::combat::{AttackFrame, AttackKind, ComboState, Strike};
use crate::fighter::Fighter;
use crate::geometry::{Facing, Rect};

pub use crate::animation::FrameTable;

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
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Archetype {
    Warrior,
    Tank,
    Assassin,
    SlimeDemon,
    Trapper,
}

impl Archetype {
    pub const ALL: [Archetype; 5] = [
        Self::Warrior,
        Self::Tank,
        Self::Assassin,
        Self::SlimeDemon,
        Self::Trapper,
    ];

    pub fn policy(self) -> &'static ArchetypePolicy {
        match self {
            Self::Warrior => &warrior::POLICY,
            Self::Tank => &tank::POLICY,
            Self::Assassin => &assassin::POLICY,
            Self::SlimeDemon => &slime_demon::POLICY,
            Self::Trapper => &trapper::POLICY,
        }
    }

    /// Default stats and frame counts.
    pub const fn profile(self) -> ArchetypeProfile {
        match self {
            Self::Warrior => warrior::PROFILE,
            Self::Tank => tank::PROFILE,
            Self::Assassin => assassin::PROFILE,
            Self::SlimeDemon => slime_demon::PROFILE,
            Self::Trapper => trapper::PROFILE,
        }
    }
}

/// Animation lengths of ordnance sprites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OrdnanceFrames {
    pub bolt_land: u16,
    pub trap_land: u16,
    pub trap_detonate: u16,
}

impl OrdnanceFrames {
    pub const DEFAULT: Self = Self {
        bolt_land: 4,
        trap_land: 5,
        trap_detonate: 6,
    };
}

impl Default for OrdnanceFrames {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Per-archetype base stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeProfile {
    pub max_health: i32,
    /// Horizontal pixels per tick while running.
    pub speed: i32,
    /// Vertical velocity set on takeoff (negative is up).
    pub jump_impulse: i32,
    pub body_width: i32,
    pub body_height: i32,
    pub frames: FrameTable,
    pub ordnance: OrdnanceFrames,
    /// Sprites are drawn facing left, so renderers invert the flip flag.
    pub mirrored_art: bool,
}

/// Where a contact strike landed, passed to [`ArchetypePolicy::on_hit`].
#[derive(Clone, Copy, Debug)]
pub struct Contact<'a> {
    pub kind: AttackKind,
    pub strike: Strike,
    /// Attacker facing at the moment of impact.
    pub facing: Facing,
    pub arena: &'a Arena,
}

/// Attack behavior of one archetype.
pub struct ArchetypePolicy {
    /// World-space hit box of an attack, mirrored by facing.
    pub attack_area: fn(AttackKind, &Rect, Facing, &Arena) -> Option<Rect>,
    /// Strike dealt when the attack reaches a frame, if that frame qualifies.
    pub damage_window: fn(&AttackFrame) -> Option<Strike>,
    /// Secondary effects of a landed contact strike.
    pub on_hit: fn(&Contact<'_>, &mut Fighter),
    /// Non-contact effects run every update while attacking.
    pub on_frame: fn(&mut Fighter, &mut Fighter, &Arena),
    /// Cooldown armed when an attack starts.
    pub cooldown: fn(AttackKind, &mut ComboState, u64) -> u32,
    /// Attacks shown as idle and timed in updates instead of frames.
    pub channelled: fn(AttackKind) -> bool,
    /// Cooldown armed when an attack animation completes.
    pub recovery_cooldown: u32,
}

pub(crate) const RECOVERY_COOLDOWN: u32 = 20;

pub(crate) fn fixed_cooldown<const TICKS: u32>(_: AttackKind, _: &mut ComboState, _: u64) -> u32 {
    TICKS
}

pub(crate) fn never_channelled(_: AttackKind) -> bool {
    false
}

pub(crate) fn no_hit_effect(_: &Contact<'_>, _: &mut Fighter) {}

pub(crate) fn no_frame_effect(_: &mut Fighter, _: &mut Fighter, _: &Arena) {}

/// Box of `width` starting at the body's center on the facing side.
pub(crate) fn frontal(body: &Rect, facing: Facing, width: i32, top: i32, height: i32) -> Rect {
    Rect::new(facing.frontal_x(body.center_x(), width), top, width, height)
}

/// Frontal box from `rise` pixels above the body down to 20 below the ground.
pub(crate) fn frontal_to_ground(
    body: &Rect,
    facing: Facing,
    width: i32,
    rise: i32,
    arena: &Arena,
) -> Rect {
    let top = body.top() - rise;
    frontal(body, facing, width, top, arena.ground() - top + 20)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for archetype in Archetype::ALL {
            let parsed: Archetype = archetype.as_ref().parse().expect("known name");
            assert_eq!(parsed, archetype);
        }
        assert_eq!("Slime_Demon".parse::<Archetype>(), Ok(Archetype::SlimeDemon));
    }

    #[test]
    fn base_stats() {
        let stats: Vec<(i32, i32, i32)> = Archetype::ALL
            .iter()
            .map(|a| {
                let p = a.profile();
                (p.max_health, p.speed, p.jump_impulse)
            })
            .collect();
        assert_eq!(
            stats,
            vec![
                (120, 10, -30),
                (150, 4, -20),
                (80, 14, -30),
                (100, 6, -30),
                (70, 16, -35)
            ]
        );
    }

    #[test]
    fn frontal_boxes_mirror() {
        let body = Rect::new(400, 370, 80, 180);
        assert_eq!(frontal(&body, Facing::Right, 100, 350, 130).x, 440);
        assert_eq!(frontal(&body, Facing::Left, 100, 350, 130).x, 340);
        let reach = frontal_to_ground(&body, Facing::Right, 320, 20, &Arena::default());
        assert_eq!((reach.y, reach.height), (350, 220));
    }
}
