use super::{
    ArchetypePolicy, ArchetypeProfile, Contact, OrdnanceFrames, RECOVERY_COOLDOWN,
    fixed_cooldown, frontal_to_ground, never_channelled, no_frame_effect,
};
use crate::animation::FrameTable;
use crate::arena::Arena;
use crate::combat::{AttackFrame, AttackKind, HitGuard, Strike};
use crate::fighter::Fighter;
use crate::geometry::{Facing, Rect};
use crate::status::StatusKind;

pub(super) const PROFILE: ArchetypeProfile = ArchetypeProfile {
    max_health: 120,
    speed: 10,
    jump_impulse: -30,
    body_width: 80,
    body_height: 180,
    frames: FrameTable::new([8, 8, 3, 6, 9, 8, 4, 10]),
    ordnance: OrdnanceFrames::DEFAULT,
    mirrored_art: false,
};

pub(super) static POLICY: ArchetypePolicy = ArchetypePolicy {
    attack_area,
    damage_window,
    on_hit,
    on_frame: no_frame_effect,
    cooldown: fixed_cooldown::<0>,
    channelled: never_channelled,
    recovery_cooldown: RECOVERY_COOLDOWN,
};

const BURN_DAMAGE: i32 = 5;
const BURN_TICKS: i32 = 180;

fn attack_area(_: AttackKind, body: &Rect, facing: Facing, arena: &Arena) -> Option<Rect> {
    Some(frontal_to_ground(body, facing, body.width * 4, 20, arena))
}

fn damage_window(at: &AttackFrame) -> Option<Strike> {
    match at.kind {
        AttackKind::First => Some(Strike::once(8)),
        AttackKind::Second => sweep(at),
        AttackKind::Third => at.past(1, 2).then_some(Strike::once(11)),
    }
}

/// Three evenly spread cuts of 6, then a closing cut of 13 on the last frame.
fn sweep(at: &AttackFrame) -> Option<Strike> {
    let last = at.frames.saturating_sub(1);
    let mid = (last / 2).max(1);
    let late = (last * 3 / 4).max(mid + 1);
    let damage = if at.frame == 0 || at.frame == mid || at.frame == late {
        6
    } else if at.frame == last {
        13
    } else {
        return None;
    };
    Some(Strike {
        damage,
        guard: HitGuard::Frame(at.frame),
    })
}

fn on_hit(contact: &Contact<'_>, target: &mut Fighter) {
    if contact.kind == AttackKind::Third {
        target.apply_status(StatusKind::Burn, BURN_DAMAGE, BURN_TICKS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(kind: AttackKind, frame: u16) -> AttackFrame {
        AttackFrame {
            kind,
            frame,
            frames: PROFILE.frames.count(crate::animation::ActionKind::from_attack(kind)),
        }
    }

    #[test]
    fn sweep_hits_on_spread_frames_and_closes_on_last() {
        let hits: Vec<(u16, i32)> = (0..9)
            .filter_map(|n| damage_window(&frame(AttackKind::Second, n)).map(|s| (n, s.damage)))
            .collect();
        assert_eq!(hits, vec![(0, 6), (4, 6), (6, 6), (8, 13)]);
    }

    #[test]
    fn overhead_needs_half_the_animation() {
        assert_eq!(damage_window(&frame(AttackKind::Third, 3)), None);
        assert_eq!(
            damage_window(&frame(AttackKind::Third, 4)),
            Some(Strike::once(11))
        );
    }

    #[test]
    fn area_reaches_four_bodies_to_the_ground() {
        let arena = Arena::default();
        let body = Rect::new(400, 370, 80, 180);
        let area = attack_area(AttackKind::First, &body, Facing::Left, &arena).expect("area");
        assert_eq!(area, Rect::new(120, 350, 320, 220));
    }
}
