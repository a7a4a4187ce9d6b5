use super::{
    ArchetypePolicy, ArchetypeProfile, Contact, OrdnanceFrames, RECOVERY_COOLDOWN, frontal,
    never_channelled, no_frame_effect,
};
use crate::animation::FrameTable;
use crate::arena::Arena;
use crate::combat::{AttackFrame, AttackKind, ComboState, HitGuard, Strike};
use crate::config::SimConfig;
use crate::fighter::Fighter;
use crate::geometry::{Facing, Rect};
use crate::status::StatusKind;

pub(super) const PROFILE: ArchetypeProfile = ArchetypeProfile {
    max_health: 80,
    speed: 14,
    jump_impulse: -30,
    body_width: 80,
    body_height: 180,
    frames: FrameTable::new([8, 8, 3, 4, 15, 10, 4, 10]),
    ordnance: OrdnanceFrames::DEFAULT,
    mirrored_art: false,
};

pub(super) static POLICY: ArchetypePolicy = ArchetypePolicy {
    attack_area,
    damage_window,
    on_hit,
    on_frame: no_frame_effect,
    cooldown,
    channelled: never_channelled,
    recovery_cooldown: RECOVERY_COOLDOWN,
};

const CHAIN_COOLDOWN: u32 = 10;
const OPENING_COOLDOWN: u32 = 20;
const LUNGE_KNOCKBACK: i32 = 80;
/// Fractions of the flurry animation, in fifths, at which each mark lands.
const MARKS: [u16; 3] = [2, 3, 4];
const MARK_DAMAGE: i32 = 8;
const FINAL_BURN: (i32, i32) = (4, 150);

/// Follow-ups inside the combo window come back faster.
fn cooldown(_: AttackKind, combo: &mut ComboState, now_ms: u64) -> u32 {
    let chained = combo.within(now_ms, SimConfig::COMBO_WINDOW_MS);
    combo.last_started_ms = Some(now_ms);
    if chained {
        combo.count += 1;
        CHAIN_COOLDOWN
    } else {
        combo.count = 0;
        OPENING_COOLDOWN
    }
}

fn attack_area(kind: AttackKind, body: &Rect, facing: Facing, _: &Arena) -> Option<Rect> {
    let area = match kind {
        AttackKind::First => frontal(body, facing, 160, body.top(), 370),
        AttackKind::Second => frontal(body, facing, 280, body.top() - 30, 240),
        AttackKind::Third => Rect::new(body.center_x() - 225, body.top() - 80, 450, 380),
    };
    Some(area)
}

fn damage_window(at: &AttackFrame) -> Option<Strike> {
    match at.kind {
        AttackKind::First => at.past(1, 3).then_some(Strike::once(6)),
        AttackKind::Second => (at.frame == at.at(3, 5)).then_some(Strike::once(10)),
        AttackKind::Third => MARKS
            .iter()
            .position(|&fifth| at.frame == at.at(fifth, 5))
            .map(|mark| Strike {
                damage: MARK_DAMAGE,
                guard: HitGuard::Mark(mark as u8),
            }),
    }
}

fn on_hit(contact: &Contact<'_>, target: &mut Fighter) {
    match (contact.kind, contact.strike.guard) {
        (AttackKind::Second, _) => {
            target.knock_back(contact.arena, contact.facing, LUNGE_KNOCKBACK);
        }
        (AttackKind::Third, HitGuard::Mark(mark)) if usize::from(mark) == MARKS.len() - 1 => {
            target.apply_status(StatusKind::Burn, FINAL_BURN.0, FINAL_BURN.1);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_starts_shorten_cooldown() {
        let mut combo = ComboState::default();
        assert_eq!(cooldown(AttackKind::First, &mut combo, 0), OPENING_COOLDOWN);
        assert_eq!(cooldown(AttackKind::First, &mut combo, 400), CHAIN_COOLDOWN);
        assert_eq!(cooldown(AttackKind::Second, &mut combo, 900), CHAIN_COOLDOWN);
        assert_eq!(combo.count, 2);
        assert_eq!(cooldown(AttackKind::First, &mut combo, 1_900), OPENING_COOLDOWN);
        assert_eq!(combo.count, 0);
    }

    #[test]
    fn flurry_marks_land_at_fixed_fractions() {
        let marks: Vec<(u16, HitGuard)> = (0..=10)
            .filter_map(|frame| {
                damage_window(&AttackFrame {
                    kind: AttackKind::Third,
                    frame,
                    frames: 10,
                })
                .map(|strike| (frame, strike.guard))
            })
            .collect();
        assert_eq!(
            marks,
            vec![
                (4, HitGuard::Mark(0)),
                (6, HitGuard::Mark(1)),
                (8, HitGuard::Mark(2))
            ]
        );
    }

    #[test]
    fn lunge_lands_on_one_exact_frame() {
        let hits: Vec<u16> = (0..=15)
            .filter(|&frame| {
                damage_window(&AttackFrame {
                    kind: AttackKind::Second,
                    frame,
                    frames: 15,
                })
                .is_some()
            })
            .collect();
        assert_eq!(hits, vec![9]);
    }

    #[test]
    fn flurry_box_is_centered_on_the_body() {
        let body = Rect::new(400, 370, 80, 180);
        let area = attack_area(AttackKind::Third, &body, Facing::Left, &Arena::default())
            .expect("area");
        assert_eq!(area, Rect::new(215, 290, 450, 380));
    }
}
