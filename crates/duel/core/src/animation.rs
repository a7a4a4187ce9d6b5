//! Action ids, per-action frame counts and frame pacing.

use crate::combat::AttackKind;
use crate::config::SimConfig;

/// Visible action of a fighter. The discriminant is the render id (0-7).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum ActionKind {
    #[default]
    Idle = 0,
    Run = 1,
    Jump = 2,
    Attack1 = 3,
    Attack2 = 4,
    Attack3 = 5,
    Hit = 6,
    Death = 7,
}

impl ActionKind {
    pub const ALL: [ActionKind; SimConfig::ACTION_COUNT] = [
        Self::Idle,
        Self::Run,
        Self::Jump,
        Self::Attack1,
        Self::Attack2,
        Self::Attack3,
        Self::Hit,
        Self::Death,
    ];

    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_attack(kind: AttackKind) -> Self {
        match kind {
            AttackKind::First => Self::Attack1,
            AttackKind::Second => Self::Attack2,
            AttackKind::Third => Self::Attack3,
        }
    }

    pub const fn is_attack(self) -> bool {
        matches!(self, Self::Attack1 | Self::Attack2 | Self::Attack3)
    }
}

/// Number of animation frames for each action.
///
/// Counts are floored at one so an action with no art still has a single
/// placeholder frame to sit on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "FrameCounts", into = "FrameCounts"))]
pub struct FrameTable {
    counts: [u16; SimConfig::ACTION_COUNT],
}

impl FrameTable {
    /// Counts in action order: idle, run, jump, attack 1-3, hit, death.
    pub const fn new(counts: [u16; SimConfig::ACTION_COUNT]) -> Self {
        let mut floored = counts;
        let mut i = 0;
        while i < floored.len() {
            if floored[i] == 0 {
                floored[i] = 1;
            }
            i += 1;
        }
        Self { counts: floored }
    }

    #[inline]
    pub const fn count(&self, action: ActionKind) -> u16 {
        self.counts[action.index()]
    }

    #[must_use]
    pub const fn with_count(mut self, action: ActionKind, count: u16) -> Self {
        self.counts[action.index()] = if count == 0 { 1 } else { count };
        self
    }

    pub const fn counts(&self) -> [u16; SimConfig::ACTION_COUNT] {
        self.counts
    }
}

impl Default for FrameTable {
    fn default() -> Self {
        Self::new([1; SimConfig::ACTION_COUNT])
    }
}

/// Named form of a frame table used by data files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FrameCounts {
    pub idle: u16,
    pub run: u16,
    pub jump: u16,
    pub attack1: u16,
    pub attack2: u16,
    pub attack3: u16,
    pub hit: u16,
    pub death: u16,
}

impl From<FrameCounts> for FrameTable {
    fn from(c: FrameCounts) -> Self {
        Self::new([
            c.idle, c.run, c.jump, c.attack1, c.attack2, c.attack3, c.hit, c.death,
        ])
    }
}

impl From<FrameTable> for FrameCounts {
    fn from(table: FrameTable) -> Self {
        let [idle, run, jump, attack1, attack2, attack3, hit, death] = table.counts;
        Self {
            idle,
            run,
            jump,
            attack1,
            attack2,
            attack3,
            hit,
            death,
        }
    }
}

/// Fixed-timestep accumulator that turns elapsed milliseconds into frame
/// advances.
///
/// A frame advances once the accumulated time strictly exceeds the frame
/// duration, after which the accumulator restarts from zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameClock {
    frame_ms: u32,
    accumulated_ms: u32,
}

impl FrameClock {
    pub const fn new(frame_ms: u32) -> Self {
        Self {
            frame_ms,
            accumulated_ms: 0,
        }
    }

    pub const fn frame_ms(&self) -> u32 {
        self.frame_ms
    }

    pub const fn accumulated_ms(&self) -> u32 {
        self.accumulated_ms
    }

    /// Adds `dt_ms` and reports whether a frame boundary was crossed.
    pub fn advance(&mut self, dt_ms: u32) -> bool {
        self.accumulated_ms = self.accumulated_ms.saturating_add(dt_ms);
        if self.accumulated_ms > self.frame_ms {
            self.accumulated_ms = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(SimConfig::DEFAULT_FRAME_MS)
    }
}
