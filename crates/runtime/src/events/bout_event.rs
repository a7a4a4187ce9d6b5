//! Bout events extracted from fighter snapshots.
//!
//! Events represent high-level occurrences (a fighter took damage, went down,
//! changed action) extracted from the low-level [`FighterDelta`] between two
//! views of the same fighter.
//!
//! [`FighterDelta`]: duel_core::FighterDelta

use duel_core::{ActionKind, Archetype, AttackKind, Slot, StatusKind};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BoutEvent {
    /// An attack was initiated (the sound cue fired).
    AttackStarted {
        slot: Slot,
        archetype: Archetype,
        kind: AttackKind,
    },

    /// A fighter lost health, from any source.
    DamageTaken {
        slot: Slot,
        amount: i32,
        hp_before: i32,
        hp_after: i32,
    },

    /// A fighter's health crossed into a new band.
    HealthThresholdCrossed {
        slot: Slot,
        threshold: HealthThreshold,
        hp_percent: u32,
    },

    /// A fighter's health reached zero.
    FighterDown { slot: Slot },

    /// A fighter's death animation reached its last frame.
    DeathAnimationDone { slot: Slot },

    /// The visible action changed.
    ActionChanged {
        slot: Slot,
        from: ActionKind,
        to: ActionKind,
    },

    /// A burn or bleed was applied or re-applied.
    StatusApplied {
        slot: Slot,
        kind: StatusKind,
        remaining_damage: i32,
    },

    /// New projectiles or traps appeared among a fighter's ordnance.
    OrdnanceDeployed {
        slot: Slot,
        projectiles: usize,
        traps: usize,
    },
}

impl BoutEvent {
    pub fn slot(&self) -> Slot {
        match self {
            Self::AttackStarted { slot, .. }
            | Self::DamageTaken { slot, .. }
            | Self::HealthThresholdCrossed { slot, .. }
            | Self::FighterDown { slot }
            | Self::DeathAnimationDone { slot }
            | Self::ActionChanged { slot, .. }
            | Self::StatusApplied { slot, .. }
            | Self::OrdnanceDeployed { slot, .. } => *slot,
        }
    }
}

/// Health bands used for HUD effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthThreshold {
    /// 100% HP
    Full,
    /// 75-99% HP
    Healthy,
    /// 25-74% HP
    Wounded,
    /// 1-24% HP
    Critical,
    /// 0% HP (dead)
    Dead,
}

impl HealthThreshold {
    /// Calculate the band from current and max HP.
    pub fn from_hp(current: i32, max: i32) -> Self {
        if current <= 0 || max <= 0 {
            return Self::Dead;
        }
        match hp_percent(current, max) {
            100.. => Self::Full,
            75..=99 => Self::Healthy,
            25..=74 => Self::Wounded,
            _ => Self::Critical,
        }
    }
}

/// Whole-number percentage; any health above zero counts as at least 1%.
pub fn hp_percent(current: i32, max: i32) -> u32 {
    if current <= 0 || max <= 0 {
        return 0;
    }
    let percent = (i64::from(current) * 100 / i64::from(max)) as u32;
    percent.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_follow_percentages() {
        assert_eq!(HealthThreshold::from_hp(120, 120), HealthThreshold::Full);
        assert_eq!(HealthThreshold::from_hp(90, 120), HealthThreshold::Healthy);
        assert_eq!(HealthThreshold::from_hp(60, 120), HealthThreshold::Wounded);
        assert_eq!(HealthThreshold::from_hp(1, 150), HealthThreshold::Critical);
        assert_eq!(HealthThreshold::from_hp(0, 150), HealthThreshold::Dead);
        assert_eq!(hp_percent(1, 150), 1);
    }
}
