//! Damage-over-time effects.
//!
//! Burn and bleed are tracked independently. Each holds the damage still owed
//! and the ticks it is spread over; every `interval` ticks one installment is
//! paid out, sized so the remaining installments share what is left.
//! Re-applying a kind replaces the running record instead of stacking.

use arrayvec::ArrayVec;

#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum StatusKind {
    Burn,
    Bleed,
}

impl StatusKind {
    /// Ticks between installments.
    pub const fn interval(self) -> i32 {
        match self {
            Self::Burn => 60,
            Self::Bleed => 45,
        }
    }
}

/// A running damage-over-time record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageOverTime {
    pub remaining_damage: i32,
    pub remaining_ticks: i32,
    pub interval: i32,
    pub counter: i32,
}

impl DamageOverTime {
    pub fn new(kind: StatusKind, total_damage: i32, duration_ticks: i32) -> Self {
        Self {
            remaining_damage: total_damage,
            remaining_ticks: duration_ticks,
            interval: kind.interval(),
            counter: 0,
        }
    }

    pub const fn is_spent(&self) -> bool {
        self.remaining_ticks <= 0 || self.remaining_damage <= 0
    }

    /// Advances one tick and returns the installment due, if any.
    fn tick(&mut self) -> Option<i32> {
        self.counter += 1;
        if self.counter < self.interval {
            return None;
        }

        let installments = (self.remaining_ticks / self.interval).max(1);
        let due = (self.remaining_damage / installments).max(1);
        self.remaining_damage -= due;
        self.remaining_ticks -= self.interval;
        self.counter = 0;
        Some(due)
    }
}

/// Burn and bleed slots of one fighter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffects {
    burn: Option<DamageOverTime>,
    bleed: Option<DamageOverTime>,
}

impl StatusEffects {
    pub fn apply(&mut self, kind: StatusKind, total_damage: i32, duration_ticks: i32) {
        let record = DamageOverTime::new(kind, total_damage, duration_ticks);
        *self.slot_mut(kind) = (!record.is_spent()).then_some(record);
    }

    pub fn get(&self, kind: StatusKind) -> Option<&DamageOverTime> {
        match kind {
            StatusKind::Burn => self.burn.as_ref(),
            StatusKind::Bleed => self.bleed.as_ref(),
        }
    }

    pub fn is_active(&self, kind: StatusKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.burn.is_none() && self.bleed.is_none()
    }

    /// Advances both effects one tick. Returns the installments due, which the
    /// caller routes through the health model.
    pub fn tick(&mut self) -> ArrayVec<(StatusKind, i32), 2> {
        let mut due = ArrayVec::new();
        for kind in [StatusKind::Burn, StatusKind::Bleed] {
            let slot = self.slot_mut(kind);
            let Some(record) = slot.as_mut() else {
                continue;
            };
            if let Some(amount) = record.tick() {
                due.push((kind, amount));
            }
            if record.is_spent() {
                *slot = None;
            }
        }
        due
    }

    fn slot_mut(&mut self, kind: StatusKind) -> &mut Option<DamageOverTime> {
        match kind {
            StatusKind::Burn => &mut self.burn,
            StatusKind::Bleed => &mut self.bleed,
        }
    }
}
