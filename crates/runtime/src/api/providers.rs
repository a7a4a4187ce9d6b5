//! Abstraction for sourcing per-tick fighter input.
//!
//! Runtime users plug in [`InputProvider`] implementations so a bout can run
//! with device input, scripted fixtures, or a simple chasing policy.
use std::sync::Arc;

use duel_content::InputScript;
use duel_core::{Buttons, FighterView, InputSnapshot, Slot};

/// What a provider may look at when choosing a tick's input.
#[derive(Debug, Clone, Copy)]
pub struct InputContext<'a> {
    pub slot: Slot,
    pub tick: u64,
    pub own: &'a FighterView,
    pub opponent: &'a FighterView,
}

/// Trait for providing one fighter's buttons each tick.
///
/// Different implementations can handle:
/// - Device input (keyboard, pad) sampled by a frontend
/// - Scripted timelines
/// - Computer-controlled opponents
/// - Testing fixtures
pub trait InputProvider: Send {
    fn provide_input(&mut self, ctx: &InputContext<'_>) -> InputSnapshot;
}

impl<F> InputProvider for F
where
    F: FnMut(&InputContext<'_>) -> InputSnapshot + Send,
{
    fn provide_input(&mut self, ctx: &InputContext<'_>) -> InputSnapshot {
        self(ctx)
    }
}

/// A provider that never presses anything.
/// Useful for testing or as a training dummy.
pub struct IdleInputProvider;

impl InputProvider for IdleInputProvider {
    fn provide_input(&mut self, _ctx: &InputContext<'_>) -> InputSnapshot {
        InputSnapshot::IDLE
    }
}

/// Replays the segments a script lists for the provider's slot.
pub struct ScriptedInputProvider {
    script: Arc<InputScript>,
}

impl ScriptedInputProvider {
    pub fn new(script: Arc<InputScript>) -> Self {
        Self { script }
    }
}

impl InputProvider for ScriptedInputProvider {
    fn provide_input(&mut self, ctx: &InputContext<'_>) -> InputSnapshot {
        self.script.input_at(ctx.slot, ctx.tick)
    }
}

/// Walks toward the opponent and cycles through the three attacks once in
/// reach. Deterministic: the chosen attack depends only on the tick.
pub struct ChaseInputProvider {
    reach: i32,
    /// Ticks each attack button is held before moving to the next.
    cadence: u64,
}

impl ChaseInputProvider {
    pub const DEFAULT_REACH: i32 = 140;
    pub const DEFAULT_CADENCE: u64 = 45;

    pub fn new(reach: i32, cadence: u64) -> Self {
        Self {
            reach,
            cadence: cadence.max(1),
        }
    }
}

impl Default for ChaseInputProvider {
    fn default() -> Self {
        Self::new(Self::DEFAULT_REACH, Self::DEFAULT_CADENCE)
    }
}

impl InputProvider for ChaseInputProvider {
    fn provide_input(&mut self, ctx: &InputContext<'_>) -> InputSnapshot {
        if !ctx.opponent.alive {
            return InputSnapshot::IDLE;
        }
        let gap = ctx.opponent.body.center_x() - ctx.own.body.center_x();
        if gap.abs() > self.reach {
            let toward = if gap > 0 { Buttons::RIGHT } else { Buttons::LEFT };
            return InputSnapshot::new(toward);
        }
        let attack = match (ctx.tick / self.cadence) % 3 {
            0 => Buttons::ATTACK1,
            1 => Buttons::ATTACK2,
            _ => Buttons::ATTACK3,
        };
        InputSnapshot::new(attack)
    }
}
