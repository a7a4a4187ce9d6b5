//! Deterministic rules for one-on-one melee bouts.
//!
//! `duel-core` owns the fighter state machine, the archetype attack policies,
//! damage over time, projectiles and traps, and the arena clamping they all
//! share. Drivers feed it one [`InputSnapshot`] per fighter per tick and read
//! back [`FighterView`]s; every change to health flows through
//! [`Health::apply_damage`].
pub mod animation;
pub mod archetype;
pub mod arena;
pub mod combat;
pub mod config;
pub mod cue;
pub mod delta;
pub mod error;
pub mod fighter;
pub mod geometry;
pub mod health;
pub mod input;
pub mod ordnance;
pub mod rng;
pub mod slot;
pub mod status;
pub use animation::{ActionKind, FrameClock, FrameCounts, FrameTable};
pub use archetype::{Archetype, ArchetypePolicy, ArchetypeProfile, Contact, OrdnanceFrames};
pub use arena::Arena;
pub use combat::{
    AttackFrame, AttackKind, AttackState, ComboState, HitGuard, HitRecord, HitTarget, Strike,
    execute_attack, resolve_contact,
};
pub use config::SimConfig;
pub use cue::{AttackCue, CueSink, Muted};
pub use delta::{FighterDelta, FighterFields};
pub use error::SetupError;
pub use fighter::{Fighter, FighterView};
pub use geometry::{Facing, Rect};
pub use health::{DamageOutcome, Health};
pub use input::{Buttons, ControlScheme, InputSnapshot, KeyCode};
pub use ordnance::{
    Bolt, LavaDrop, Ordnance, Projectile, ProjectileKind, ProjectilePhase, ProjectileView, Trap,
    TrapPhase, TrapView,
};
pub use rng::{PcgRng, RngOracle, RollSource, compute_seed};
pub use slot::Slot;
pub use status::{DamageOverTime, StatusEffects, StatusKind};
