use super::{
    ArchetypePolicy, ArchetypeProfile, OrdnanceFrames, RECOVERY_COOLDOWN, fixed_cooldown,
    frontal_to_ground, no_hit_effect,
};
use crate::animation::{ActionKind, FrameTable};
use crate::arena::Arena;
use crate::combat::{AttackFrame, AttackKind, HitGuard, HitTarget, Strike};
use crate::fighter::Fighter;
use crate::geometry::{Facing, Rect};
use crate::ordnance::LavaDrop;

pub(super) const PROFILE: ArchetypeProfile = ArchetypeProfile {
    max_health: 100,
    speed: 6,
    jump_impulse: -30,
    body_width: 90,
    body_height: 190,
    frames: FrameTable::new([6, 8, 6, 10, 6, 12, 5, 12]),
    ordnance: OrdnanceFrames::DEFAULT,
    mirrored_art: true,
};

pub(super) static POLICY: ArchetypePolicy = ArchetypePolicy {
    attack_area,
    damage_window,
    on_hit: no_hit_effect,
    on_frame,
    cooldown: fixed_cooldown::<0>,
    channelled,
    recovery_cooldown: RECOVERY_COOLDOWN,
};

const LAVA_DAMAGE: i32 = 4;
const LAVA_SPAWN_Y: i32 = 50;
const LAVA_SPREAD: i32 = 100;
/// Drops never spawn closer than this to either wall.
const LAVA_WALL_MARGIN: i32 = 50;
/// Fall speed range in hundredths of a pixel per tick.
const LAVA_SPEED_RANGE: (u32, u32) = (700, 1_100);
/// Leading frames of the rain animation used by the falling drop.
const LAVA_FALL_FRAMES: u16 = 2;
const ERUPTION_WIDTH: i32 = 520;
const ERUPTION_HEIGHT: i32 = 360;

const ROLL_DROP_COUNT: u32 = 0x5101;
const ROLL_DROP_OFFSET: u32 = 0x5102;
const ROLL_DROP_SPEED: u32 = 0x5103;

fn attack_area(kind: AttackKind, body: &Rect, facing: Facing, arena: &Arena) -> Option<Rect> {
    match kind {
        AttackKind::First => Some(frontal_to_ground(body, facing, 300, 60, arena)),
        AttackKind::Second | AttackKind::Third => None,
    }
}

fn damage_window(at: &AttackFrame) -> Option<Strike> {
    match at.kind {
        AttackKind::First => at.past(1, 2).then_some(Strike::once(14)),
        AttackKind::Second | AttackKind::Third => None,
    }
}

fn channelled(kind: AttackKind) -> bool {
    kind == AttackKind::Second
}

fn on_frame(slime: &mut Fighter, target: &mut Fighter, arena: &Arena) {
    if !slime.is_alive() {
        return;
    }
    match slime.attack.kind {
        Some(AttackKind::Second) => rain(slime, target, arena),
        Some(AttackKind::Third) => erupt(slime, target),
        _ => {}
    }
}

/// Drops one to three lava drops above the target, once per attack.
fn rain(slime: &mut Fighter, target: &Fighter, arena: &Arena) {
    if !slime.attack.record.insert(HitGuard::Spawn) {
        return;
    }
    let burst_frames = slime
        .profile
        .frames
        .count(ActionKind::Attack2)
        .saturating_sub(LAVA_FALL_FRAMES);
    let frame_ms = slime.pacing.frame_ms();
    let aim_x = target.body().center_x();
    let count = slime.roll(ROLL_DROP_COUNT, 1, 3);
    for _ in 0..count {
        let offset = slime.roll_signed(ROLL_DROP_OFFSET, -LAVA_SPREAD, LAVA_SPREAD);
        let x = (aim_x + offset)
            .min(arena.width() - LAVA_WALL_MARGIN)
            .max(LAVA_WALL_MARGIN);
        let speed = slime.roll(ROLL_DROP_SPEED, LAVA_SPEED_RANGE.0, LAVA_SPEED_RANGE.1) as f32 / 100.0;
        slime.ordnance.launch(LavaDrop::new(
            x,
            LAVA_SPAWN_Y,
            speed,
            LAVA_DAMAGE,
            burst_frames,
            frame_ms,
        ));
    }
}

/// Trades half the slime's remaining health for the same damage around it.
fn erupt(slime: &mut Fighter, target: &mut Fighter) {
    let Some(at) = slime.attack_frame() else {
        return;
    };
    if !at.past(2, 3) || slime.attack.record.contains(HitGuard::Spawn) {
        return;
    }
    let sacrifice = slime.health().current() / 2;
    if sacrifice <= 0 {
        return;
    }
    slime.attack.record.insert(HitGuard::Spawn);
    slime.apply_damage(sacrifice);

    let body = slime.body();
    let blast = Rect::new(
        body.center_x() - ERUPTION_WIDTH / 2,
        body.bottom() - ERUPTION_HEIGHT,
        ERUPTION_WIDTH,
        ERUPTION_HEIGHT,
    );
    if target.is_alive() && blast.intersects(&target.hurtbox()) {
        target.take_hit(sacrifice);
    }
}
