use crate::arena::Arena;
use crate::combat::HitTarget;
use crate::config::SimConfig;
use crate::geometry::Rect;
use crate::health::DamageOutcome;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TrapPhase {
    #[default]
    Landing,
    /// Armed and waiting for the target to step on it.
    Landed,
    Detonating,
    Dead,
}

/// Ground trap. Arms after its landing frames, springs when the target stands
/// within reach, and expires unsprung after [`Trap::LIFETIME_MS`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trap {
    x: i32,
    y: i32,
    damage: i32,
    phase: TrapPhase,
    placed_ms: u64,
    frame: u16,
    counter: u16,
    land_frames: u16,
    detonate_frames: u16,
    sprung: bool,
}

impl Trap {
    pub const WIDTH: i32 = 60;
    pub const HEIGHT: i32 = 30;
    pub const DETECTION_RADIUS: i32 = 50;
    /// Max distance between the target's feet and the ground for it to count
    /// as standing on the trap.
    pub const GROUND_TOLERANCE: i32 = 10;
    pub const LIFETIME_MS: u64 = 10_000;
    pub const TICKS_PER_FRAME: u16 = 6;

    /// Trap with its top-left at `(x, y)`, placed at local time `placed_ms`.
    pub fn new(
        x: i32,
        y: i32,
        damage: i32,
        land_frames: u16,
        detonate_frames: u16,
        placed_ms: u64,
    ) -> Self {
        Self {
            x,
            y,
            damage,
            phase: TrapPhase::Landing,
            placed_ms,
            frame: 0,
            counter: 0,
            land_frames,
            detonate_frames,
            sprung: false,
        }
    }

    pub fn phase(&self) -> TrapPhase {
        self.phase
    }

    pub fn is_dead(&self) -> bool {
        self.phase == TrapPhase::Dead
    }

    pub fn frame(&self) -> u16 {
        self.frame
    }

    pub fn placed_ms(&self) -> u64 {
        self.placed_ms
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, Self::WIDTH, Self::HEIGHT)
    }

    pub fn center_x(&self) -> i32 {
        self.x + Self::WIDTH / 2
    }

    pub fn tick<T: HitTarget + ?Sized>(
        &mut self,
        target: Option<&mut T>,
        arena: &Arena,
        now_ms: u64,
    ) -> Option<DamageOutcome> {
        if self.is_dead() {
            return None;
        }

        self.counter += 1;
        if self.counter >= Self::TICKS_PER_FRAME {
            self.counter = 0;
            self.frame += 1;
        }

        match self.phase {
            TrapPhase::Landing => {
                if self.frame >= self.land_frames {
                    self.phase = TrapPhase::Landed;
                    self.frame = 0;
                }
                None
            }
            TrapPhase::Landed => {
                if now_ms.saturating_sub(self.placed_ms) > Self::LIFETIME_MS {
                    self.phase = TrapPhase::Dead;
                    return None;
                }
                let target = target?;
                if self.sprung || !self.underfoot(&target.hurtbox(), arena) {
                    return None;
                }
                self.sprung = true;
                self.phase = TrapPhase::Detonating;
                self.frame = 0;
                self.counter = 0;
                let outcome = target.take_hit(self.damage);
                target.stun(SimConfig::TRAP_STUN_TICKS);
                Some(outcome)
            }
            TrapPhase::Detonating => {
                if self.frame >= self.detonate_frames {
                    self.phase = TrapPhase::Dead;
                }
                None
            }
            TrapPhase::Dead => None,
        }
    }

    fn underfoot(&self, body: &Rect, arena: &Arena) -> bool {
        let distance = (body.center_x() - self.center_x()).abs();
        let grounded = (body.bottom() - arena.ground()).abs() < Self::GROUND_TOLERANCE;
        distance <= Self::DETECTION_RADIUS && grounded
    }
}
