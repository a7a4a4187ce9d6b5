use super::{
    ArchetypePolicy, ArchetypeProfile, Contact, OrdnanceFrames, RECOVERY_COOLDOWN,
    fixed_cooldown, frontal, never_channelled, no_frame_effect,
};
use crate::animation::FrameTable;
use crate::arena::Arena;
use crate::combat::{AttackFrame, AttackKind, Strike};
use crate::fighter::Fighter;
use crate::geometry::{Facing, Rect};

pub(super) const PROFILE: ArchetypeProfile = ArchetypeProfile {
    max_health: 150,
    speed: 4,
    jump_impulse: -20,
    body_width: 85,
    body_height: 120,
    frames: FrameTable::new([8, 8, 4, 8, 10, 12, 4, 10]),
    ordnance: OrdnanceFrames::DEFAULT,
    mirrored_art: false,
};

pub(super) static POLICY: ArchetypePolicy = ArchetypePolicy {
    attack_area,
    damage_window,
    on_hit,
    on_frame: no_frame_effect,
    cooldown: fixed_cooldown::<35>,
    channelled: never_channelled,
    recovery_cooldown: RECOVERY_COOLDOWN,
};

fn attack_area(kind: AttackKind, body: &Rect, facing: Facing, _: &Arena) -> Option<Rect> {
    let (width, height) = match kind {
        AttackKind::First => (100, 130),
        AttackKind::Second => (170, 180),
        AttackKind::Third => (200, 240),
    };
    Some(frontal(body, facing, width, body.top() - 20, height))
}

fn damage_window(at: &AttackFrame) -> Option<Strike> {
    let (num, den, damage) = match at.kind {
        AttackKind::First => (1, 2, 9),
        AttackKind::Second => (85, 100, 12),
        AttackKind::Third => (9, 10, 15),
    };
    at.past(num, den).then_some(Strike::once(damage))
}

fn knockback_force(kind: AttackKind) -> i32 {
    match kind {
        AttackKind::First => 60,
        AttackKind::Second => 90,
        AttackKind::Third => 160,
    }
}

fn on_hit(contact: &Contact<'_>, target: &mut Fighter) {
    target.knock_back(contact.arena, contact.facing, knockback_force(contact.kind));
}
