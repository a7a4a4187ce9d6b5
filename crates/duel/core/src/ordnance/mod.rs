//! Projectiles and traps spawned by attacks.
//!
//! Each fighter exclusively owns its ordnance. Pieces tick once per owner
//! update, hurt the opponent through [`HitTarget`], and are dropped as soon as
//! they reach their dead phase.

mod projectile;
mod trap;

pub use projectile::{Bolt, LavaDrop, Projectile, ProjectileKind, ProjectilePhase};
pub use trap::{Trap, TrapPhase};

use arrayvec::ArrayVec;

use crate::arena::Arena;
use crate::combat::HitTarget;
use crate::config::SimConfig;
use crate::geometry::Rect;

/// Render-facing snapshot of one projectile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectileView {
    pub kind: ProjectileKind,
    pub phase: ProjectilePhase,
    pub bounds: Rect,
    pub frame: u16,
}

/// Render-facing snapshot of one trap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrapView {
    pub phase: TrapPhase,
    pub bounds: Rect,
    pub frame: u16,
}

/// Live projectiles and traps of one fighter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ordnance {
    projectiles: Vec<Projectile>,
    traps: ArrayVec<Trap, { SimConfig::MAX_TRAPS }>,
}

impl Ordnance {
    pub fn launch(&mut self, projectile: impl Into<Projectile>) {
        self.projectiles.push(projectile.into());
    }

    /// Places `trap`, evicting the oldest one when the limit is reached.
    pub fn place_trap(&mut self, trap: Trap) {
        if self.traps.is_full() {
            self.traps.remove(0);
        }
        self.traps.push(trap);
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn traps(&self) -> &[Trap] {
        &self.traps
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty() && self.traps.is_empty()
    }

    /// Advances every piece one tick against `target` and returns the total
    /// damage dealt.
    pub fn tick<T: HitTarget + ?Sized>(
        &mut self,
        mut target: Option<&mut T>,
        arena: &Arena,
        dt_ms: u32,
        now_ms: u64,
    ) -> i32 {
        let mut dealt = 0;

        for projectile in &mut self.projectiles {
            if let Some(outcome) = projectile.tick(target.as_deref_mut(), arena, dt_ms) {
                dealt += outcome.dealt();
            }
        }
        self.projectiles.retain(|projectile| !projectile.is_dead());

        for trap in &mut self.traps {
            if let Some(outcome) = trap.tick(target.as_deref_mut(), arena, now_ms) {
                dealt += outcome.dealt();
            }
        }
        self.traps.retain(|trap| !trap.is_dead());

        dealt
    }

    pub fn projectile_views(&self) -> Vec<ProjectileView> {
        self.projectiles
            .iter()
            .map(|projectile| ProjectileView {
                kind: projectile.kind(),
                phase: projectile.phase(),
                bounds: projectile.bounds(),
                frame: projectile.frame(),
            })
            .collect()
    }

    pub fn trap_views(&self) -> Vec<TrapView> {
        self.traps
            .iter()
            .map(|trap| TrapView {
                phase: trap.phase(),
                bounds: trap.bounds(),
                frame: trap.frame(),
            })
            .collect()
    }
}
