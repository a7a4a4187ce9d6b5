//! Authoritative health model.
//!
//! Every source of harm (contact strikes, damage over time, ordnance, the
//! slime's self-sacrifice) goes through [`Health::apply_damage`]. Current
//! health is derived from accumulated damage and never stored on its own.

/// Result of a single damage application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageOutcome {
    /// Non-positive amount or target already dead.
    Ignored,
    /// Damage landed and the target survived.
    Applied { dealt: i32 },
    /// Damage landed and brought health to zero.
    Lethal { dealt: i32 },
}

impl DamageOutcome {
    /// Damage actually absorbed, after clamping.
    pub const fn dealt(&self) -> i32 {
        match self {
            Self::Ignored => 0,
            Self::Applied { dealt } | Self::Lethal { dealt } => *dealt,
        }
    }

    pub const fn is_lethal(&self) -> bool {
        matches!(self, Self::Lethal { .. })
    }

    pub const fn landed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health {
    max: i32,
    damage_taken: i32,
    alive: bool,
}

impl Health {
    /// Fresh pool; a non-positive maximum is raised to 1.
    pub fn new(max: i32) -> Self {
        Self {
            max: max.max(1),
            damage_taken: 0,
            alive: true,
        }
    }

    #[inline]
    pub const fn max(&self) -> i32 {
        self.max
    }

    #[inline]
    pub const fn damage_taken(&self) -> i32 {
        self.damage_taken
    }

    #[inline]
    pub const fn current(&self) -> i32 {
        self.max - self.damage_taken
    }

    #[inline]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn apply_damage(&mut self, amount: i32) -> DamageOutcome {
        if amount <= 0 || !self.alive {
            return DamageOutcome::Ignored;
        }

        let before = self.damage_taken;
        self.damage_taken = before.saturating_add(amount).clamp(0, self.max);
        let dealt = self.damage_taken - before;

        if self.current() == 0 {
            self.alive = false;
            DamageOutcome::Lethal { dealt }
        } else {
            DamageOutcome::Applied { dealt }
        }
    }
}
