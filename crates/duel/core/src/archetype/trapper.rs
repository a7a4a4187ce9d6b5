use super::{
    ArchetypePolicy, ArchetypeProfile, Contact, OrdnanceFrames, RECOVERY_COOLDOWN,
    never_channelled,
};
use crate::animation::FrameTable;
use crate::arena::Arena;
use crate::combat::{AttackFrame, AttackKind, ComboState, HitGuard, Strike};
use crate::fighter::Fighter;
use crate::geometry::{Facing, Rect};
use crate::ordnance::{Bolt, Trap};
use crate::status::StatusKind;

pub(super) const PROFILE: ArchetypeProfile = ArchetypeProfile {
    max_health: 70,
    speed: 16,
    jump_impulse: -35,
    body_width: 65,
    body_height: 160,
    frames: FrameTable::new([8, 8, 3, 6, 10, 7, 4, 10]),
    ordnance: OrdnanceFrames::DEFAULT,
    mirrored_art: false,
};

pub(super) static POLICY: ArchetypePolicy = ArchetypePolicy {
    attack_area,
    damage_window,
    on_hit,
    on_frame,
    cooldown,
    channelled: never_channelled,
    recovery_cooldown: RECOVERY_COOLDOWN,
};

const TRAP_COOLDOWN: u32 = 120;
const RANGED_COOLDOWN: u32 = 25;
const TRAP_DAMAGE: i32 = 8;
/// Horizontal distance from the body center to the trap's left edge.
const TRAP_REACH: i32 = 50;
/// Trap top sits this far above the ground line.
const TRAP_SINK: i32 = 15;
const BOLT_DAMAGE: i32 = 4;
const BOLT_SPEED: f32 = 12.0;
const BOLT_RISE: i32 = 20;
const BLEED: (i32, i32) = (6, 240);

fn cooldown(kind: AttackKind, _: &mut ComboState, _: u64) -> u32 {
    match kind {
        AttackKind::Second => TRAP_COOLDOWN,
        AttackKind::First | AttackKind::Third => RANGED_COOLDOWN,
    }
}

fn attack_area(kind: AttackKind, body: &Rect, facing: Facing, _: &Arena) -> Option<Rect> {
    if kind != AttackKind::First {
        return None;
    }
    let x = match facing {
        Facing::Right => body.center_x() + 10,
        Facing::Left => body.center_x() - 90,
    };
    Some(Rect::new(x, body.center_y() - 30, 80, 60))
}

fn damage_window(at: &AttackFrame) -> Option<Strike> {
    match at.kind {
        AttackKind::First => (at.frame == at.at(1, 2)).then_some(Strike::once(5)),
        AttackKind::Second | AttackKind::Third => None,
    }
}

fn on_hit(contact: &Contact<'_>, target: &mut Fighter) {
    if contact.kind == AttackKind::First {
        target.apply_status(StatusKind::Bleed, BLEED.0, BLEED.1);
    }
}

/// Trap and bolt leave on one exact frame, at most once per attack.
fn on_frame(trapper: &mut Fighter, target: &mut Fighter, arena: &Arena) {
    let Some(at) = trapper.attack_frame() else {
        return;
    };
    if !trapper.is_alive() || !target.is_alive() {
        return;
    }
    let trigger = match at.kind {
        AttackKind::First => return,
        AttackKind::Second => at.at(3, 5),
        AttackKind::Third => at.at(2, 3),
    };
    if at.frame != trigger || !trapper.attack.record.insert(HitGuard::Once) {
        return;
    }

    let body = trapper.body();
    let frames = trapper.profile.ordnance;
    if at.kind == AttackKind::Second {
        let x = body.center_x() + trapper.facing().sign() * TRAP_REACH;
        trapper.ordnance.place_trap(Trap::new(
            x,
            arena.ground() - TRAP_SINK,
            TRAP_DAMAGE,
            frames.trap_land,
            frames.trap_detonate,
            trapper.elapsed_ms(),
        ));
    } else {
        let aim = target.body();
        let bolt = Bolt::aimed(
            (body.center_x(), body.center_y() - BOLT_RISE),
            (aim.center_x(), aim.center_y()),
            BOLT_SPEED,
            BOLT_DAMAGE,
            frames.bolt_land,
        );
        if let Some(bolt) = bolt {
            trapper.ordnance.launch(bolt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trap_cooldown_is_long() {
        let mut combo = ComboState::default();
        assert_eq!(cooldown(AttackKind::Second, &mut combo, 0), 120);
        assert_eq!(cooldown(AttackKind::Third, &mut combo, 0), 25);
        assert_eq!(cooldown(AttackKind::First, &mut combo, 0), 25);
    }

    #[test]
    fn stab_box_sits_beside_the_center() {
        let body = Rect::new(300, 390, 65, 160);
        let arena = Arena::default();
        assert_eq!(
            attack_area(AttackKind::First, &body, Facing::Right, &arena),
            Some(Rect::new(342, 440, 80, 60))
        );
        assert_eq!(
            attack_area(AttackKind::First, &body, Facing::Left, &arena),
            Some(Rect::new(242, 440, 80, 60))
        );
        assert_eq!(attack_area(AttackKind::Third, &body, Facing::Left, &arena), None);
    }

    #[test]
    fn stab_lands_on_the_middle_frame_only() {
        let hits: Vec<u16> = (0..=6)
            .filter(|&frame| {
                damage_window(&AttackFrame {
                    kind: AttackKind::First,
                    frame,
                    frames: 6,
                })
                .is_some()
            })
            .collect();
        assert_eq!(hits, vec![3]);
    }
}
