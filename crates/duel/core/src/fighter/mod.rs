//! Combatant state and its per-tick transitions.
//!
//! A [`Fighter`] is built fresh for every round. The driver calls
//! [`Fighter::move_step`] then [`Fighter::update`] once per tick, in fixed
//! slot order; everything else here is read access for renderers and tests.

mod movement;
mod update;
mod view;

pub use view::FighterView;

use crate::animation::{ActionKind, FrameClock};
use crate::archetype::{Archetype, ArchetypeProfile};
use crate::arena::Arena;
use crate::combat::{AttackFrame, AttackState, HitTarget};
use crate::config::SimConfig;
use crate::error::SetupError;
use crate::geometry::{Facing, Rect};
use crate::health::{DamageOutcome, Health};
use crate::ordnance::Ordnance;
use crate::rng::RollSource;
use crate::slot::Slot;
use crate::status::{StatusEffects, StatusKind};

#[derive(Clone, Debug, PartialEq)]
pub struct Fighter {
    pub(crate) slot: Slot,
    pub(crate) archetype: Archetype,
    pub(crate) profile: ArchetypeProfile,
    pub(crate) health: Health,
    pub(crate) body: Rect,
    pub(crate) facing: Facing,
    pub(crate) velocity_y: i32,
    pub(crate) running: bool,
    pub(crate) jumping: bool,
    /// Jump button state on the previous tick, for edge detection.
    pub(crate) jump_held: bool,
    pub(crate) is_hit: bool,
    /// Remaining ticks of forced hit reaction.
    pub(crate) stun_ticks: u32,
    pub(crate) action: ActionKind,
    pub(crate) frame: u16,
    pub(crate) pacing: FrameClock,
    pub(crate) death_done: bool,
    pub(crate) attack: AttackState,
    pub(crate) status: StatusEffects,
    pub(crate) ordnance: Ordnance,
    /// Simulated milliseconds seen by this fighter.
    pub(crate) elapsed_ms: u64,
    pub(crate) rolls: RollSource,
}

impl Fighter {
    /// Fighter with the archetype's default profile and the default config.
    pub fn new(
        slot: Slot,
        archetype: Archetype,
        spawn_x: i32,
        arena: &Arena,
    ) -> Result<Self, SetupError> {
        Self::from_config(
            slot,
            archetype,
            archetype.profile(),
            spawn_x,
            arena,
            &SimConfig::default(),
        )
    }

    /// Grounded fighter with its left edge at `spawn_x`.
    ///
    /// Player one starts facing right and player two facing left.
    pub fn from_config(
        slot: Slot,
        archetype: Archetype,
        profile: ArchetypeProfile,
        spawn_x: i32,
        arena: &Arena,
        config: &SimConfig,
    ) -> Result<Self, SetupError> {
        if config.frame_ms == 0 {
            return Err(SetupError::ZeroFrameDuration);
        }
        let body = arena.spawn_rect(spawn_x, profile.body_width, profile.body_height)?;
        let facing = match slot {
            Slot::One => Facing::Right,
            Slot::Two => Facing::Left,
        };
        Ok(Self {
            slot,
            archetype,
            profile,
            health: Health::new(profile.max_health),
            body,
            facing,
            velocity_y: 0,
            running: false,
            jumping: false,
            jump_held: false,
            is_hit: false,
            stun_ticks: 0,
            action: ActionKind::Idle,
            frame: 0,
            pacing: FrameClock::new(config.frame_ms),
            death_done: false,
            attack: AttackState::default(),
            status: StatusEffects::default(),
            ordnance: Ordnance::default(),
            elapsed_ms: 0,
            rolls: RollSource::new(config.seed),
        })
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn profile(&self) -> &ArchetypeProfile {
        &self.profile
    }

    pub fn health(&self) -> &Health {
        &self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health.is_alive()
    }

    pub fn body(&self) -> Rect {
        self.body
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn velocity_y(&self) -> i32 {
        self.velocity_y
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    pub fn is_hit(&self) -> bool {
        self.is_hit
    }

    pub fn stun_ticks(&self) -> u32 {
        self.stun_ticks
    }

    pub fn action(&self) -> ActionKind {
        self.action
    }

    pub fn frame(&self) -> u16 {
        self.frame
    }

    pub fn death_done(&self) -> bool {
        self.death_done
    }

    pub fn attack(&self) -> &AttackState {
        &self.attack
    }

    pub fn status(&self) -> &StatusEffects {
        &self.status
    }

    pub fn ordnance(&self) -> &Ordnance {
        &self.ordnance
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Frame count of `action` for this fighter's archetype.
    pub fn frame_count(&self, action: ActionKind) -> u16 {
        self.profile.frames.count(action)
    }

    /// Current attack and the frame it has reached, if attacking.
    pub fn attack_frame(&self) -> Option<AttackFrame> {
        let kind = self.attack.kind?;
        Some(AttackFrame {
            kind,
            frame: self.frame,
            frames: self.frame_count(ActionKind::from_attack(kind)),
        })
    }

    /// World-space box of the attack in progress.
    pub fn attack_area(&self, arena: &Arena) -> Option<Rect> {
        let kind = self.attack.kind?;
        (self.archetype.policy().attack_area)(kind, &self.body, self.facing, arena)
    }

    /// The single path by which health changes.
    pub fn apply_damage(&mut self, amount: i32) -> DamageOutcome {
        self.health.apply_damage(amount)
    }

    /// Installs a damage-over-time effect, replacing any of the same kind.
    pub fn apply_status(&mut self, kind: StatusKind, total_damage: i32, duration_ticks: i32) {
        self.status.apply(kind, total_damage, duration_ticks);
    }

    /// Pushes the body `force` pixels along `facing`, kept inside the arena.
    pub fn knock_back(&mut self, arena: &Arena, facing: Facing, force: i32) {
        arena.knockback(&mut self.body, facing, force);
    }

    pub(crate) fn roll(&mut self, context: u32, min: u32, max: u32) -> u32 {
        self.rolls.roll(self.slot.id(), context, min, max)
    }

    pub(crate) fn roll_signed(&mut self, context: u32, min: i32, max: i32) -> i32 {
        self.rolls.roll_signed(self.slot.id(), context, min, max)
    }
}

impl HitTarget for Fighter {
    fn hurtbox(&self) -> Rect {
        self.body
    }

    fn is_alive(&self) -> bool {
        self.health.is_alive()
    }

    fn take_hit(&mut self, amount: i32) -> DamageOutcome {
        let outcome = self.apply_damage(amount);
        if outcome.landed() {
            self.is_hit = true;
        }
        outcome
    }

    fn stun(&mut self, ticks: u32) {
        self.stun_ticks = self.stun_ticks.max(ticks);
        self.is_hit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_grounded_and_facing_inward() {
        let arena = Arena::default();
        let p1 = Fighter::new(Slot::One, Archetype::Warrior, 200, &arena).expect("p1");
        let p2 = Fighter::new(Slot::Two, Archetype::Tank, 1000, &arena).expect("p2");
        assert_eq!(p1.body().bottom(), arena.ground());
        assert_eq!(p2.body().bottom(), arena.ground());
        assert_eq!(p1.facing(), Facing::Right);
        assert_eq!(p2.facing(), Facing::Left);
        assert_eq!(p2.health().current(), 150);
    }

    #[test]
    fn spawn_outside_arena_is_rejected() {
        let arena = Arena::default();
        let err = Fighter::new(Slot::One, Archetype::Warrior, 1350, &arena).unwrap_err();
        assert_eq!(err.error_code(), "spawn_outside_arena");
    }

    #[test]
    fn zero_frame_duration_is_rejected() {
        let arena = Arena::default();
        let config = SimConfig {
            frame_ms: 0,
            ..SimConfig::default()
        };
        let err = Fighter::from_config(
            Slot::One,
            Archetype::Trapper,
            Archetype::Trapper.profile(),
            100,
            &arena,
            &config,
        )
        .unwrap_err();
        assert_eq!(err, SetupError::ZeroFrameDuration);
    }

    #[test]
    fn take_hit_flags_only_landed_damage() {
        let arena = Arena::default();
        let mut fighter = Fighter::new(Slot::One, Archetype::Assassin, 200, &arena).expect("p1");
        fighter.take_hit(0);
        assert!(!fighter.is_hit());
        fighter.take_hit(5);
        assert!(fighter.is_hit());
        assert_eq!(fighter.health().current(), 75);
    }
}
