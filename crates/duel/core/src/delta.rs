//! Per-tick change tracking between two fighter snapshots.
//!
//! A [`FighterDelta`] stores which fields moved plus the health lost, not the
//! values themselves; the runtime reads values back from the `after` view when
//! it turns a delta into events.

use bitflags::bitflags;

use crate::fighter::FighterView;
use crate::slot::Slot;

bitflags! {
    /// Tracks which fields of a [`FighterView`] changed during one tick.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct FighterFields: u16 {
        const HEALTH     = 1 << 0;
        const POSITION   = 1 << 1;
        const ACTION     = 1 << 2;
        const FRAME      = 1 << 3;
        const FACING     = 1 << 4;
        const ALIVE      = 1 << 5;
        const DEATH_DONE = 1 << 6;
        const ATTACK     = 1 << 7;
        const ORDNANCE   = 1 << 8;
        const STATUS     = 1 << 9;
    }
}

/// Fields of one fighter that changed between two snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterDelta {
    pub slot: Slot,
    pub fields: FighterFields,
    /// Health lost across the two snapshots (zero when unchanged).
    pub health_lost: i32,
}

impl FighterDelta {
    /// Compares two snapshots of the same fighter.
    ///
    /// Returns `None` if nothing changed.
    pub fn from_views(before: &FighterView, after: &FighterView) -> Option<Self> {
        debug_assert_eq!(
            before.slot, after.slot,
            "Cannot compare views of different fighters"
        );

        let mut fields = FighterFields::empty();

        if before.health != after.health {
            fields |= FighterFields::HEALTH;
        }
        if before.body != after.body {
            fields |= FighterFields::POSITION;
        }
        if before.action != after.action {
            fields |= FighterFields::ACTION;
        }
        if before.frame != after.frame {
            fields |= FighterFields::FRAME;
        }
        if before.facing != after.facing {
            fields |= FighterFields::FACING;
        }
        if before.alive != after.alive {
            fields |= FighterFields::ALIVE;
        }
        if before.death_done != after.death_done {
            fields |= FighterFields::DEATH_DONE;
        }
        if before.attack != after.attack {
            fields |= FighterFields::ATTACK;
        }
        if before.projectiles != after.projectiles || before.traps != after.traps {
            fields |= FighterFields::ORDNANCE;
        }
        if before.burn != after.burn || before.bleed != after.bleed {
            fields |= FighterFields::STATUS;
        }

        if fields.is_empty() {
            None
        } else {
            Some(Self {
                slot: after.slot,
                fields,
                health_lost: (before.health - after.health).max(0),
            })
        }
    }

    #[inline]
    pub fn changed(&self, fields: FighterFields) -> bool {
        self.fields.intersects(fields)
    }
}
