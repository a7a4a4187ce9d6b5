use arrayvec::ArrayVec;

use super::AttackKind;
use crate::config::SimConfig;

/// Dedup key for one damage application within an attack instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitGuard {
    /// The attack lands at most once.
    Once,
    /// One application per animation frame.
    Frame(u16),
    /// One application per distributed mark.
    Mark(u8),
    /// Non-contact effect (spawn, explosion) already fired.
    Spawn,
}

/// Guards fired by the current attack instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitRecord {
    guards: ArrayVec<HitGuard, { SimConfig::MAX_HIT_GUARDS }>,
}

impl HitRecord {
    pub fn contains(&self, guard: HitGuard) -> bool {
        self.guards.contains(&guard)
    }

    /// Records `guard`. Returns false when it had already fired.
    pub fn insert(&mut self, guard: HitGuard) -> bool {
        if self.contains(guard) {
            return false;
        }
        // a full record keeps refusing new guards, which only suppresses hits
        self.guards.try_push(guard).is_ok()
    }

    pub fn clear(&mut self) {
        self.guards.clear();
    }

    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }
}

/// Chain bookkeeping for archetypes that reward quick follow-ups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComboState {
    pub count: u32,
    /// Local clock reading at the last successful initiation.
    pub last_started_ms: Option<u64>,
}

impl ComboState {
    /// Whether `now_ms` falls strictly inside `window_ms` of the last start.
    pub fn within(&self, now_ms: u64, window_ms: u64) -> bool {
        self.last_started_ms
            .is_some_and(|last| now_ms.saturating_sub(last) < window_ms)
    }

    /// Drops the chain once `window_ms` has lapsed.
    pub fn expire(&mut self, now_ms: u64, window_ms: u64) {
        let lapsed = self
            .last_started_ms
            .is_some_and(|last| now_ms.saturating_sub(last) > window_ms);
        if lapsed {
            self.count = 0;
        }
    }
}

/// Uniform attack state carried by every fighter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackState {
    /// Attack in progress, if any.
    pub kind: Option<AttackKind>,
    /// Ticks until another attack may start.
    pub cooldown: u32,
    /// Updates spent in the current attack.
    pub ticks: u32,
    pub record: HitRecord,
    pub combo: ComboState,
}

impl AttackState {
    #[inline]
    pub fn is_attacking(&self) -> bool {
        self.kind.is_some()
    }

    /// The single-hit guard has fired for this instance.
    #[inline]
    pub fn has_hit(&self) -> bool {
        self.record.contains(HitGuard::Once)
    }

    /// Starts a fresh instance of `kind` with the given cooldown.
    pub fn begin(&mut self, kind: AttackKind, cooldown: u32) {
        self.kind = Some(kind);
        self.ticks = 0;
        self.record.clear();
        self.cooldown = cooldown;
    }

    /// Ends the current instance and arms `cooldown`.
    pub fn finish(&mut self, cooldown: u32) {
        self.cancel();
        self.cooldown = cooldown;
    }

    /// Drops the current instance without touching the cooldown.
    pub fn cancel(&mut self) {
        self.kind = None;
        self.ticks = 0;
        self.record.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_dedups_guards() {
        let mut record = HitRecord::default();
        assert!(record.insert(HitGuard::Frame(3)));
        assert!(!record.insert(HitGuard::Frame(3)));
        assert!(record.insert(HitGuard::Frame(4)));
        assert!(record.insert(HitGuard::Once));
        assert_eq!(record.len(), 3);
        record.clear();
        assert!(record.is_empty());
    }

    #[test]
    fn combo_window_is_exclusive() {
        let combo = ComboState {
            count: 1,
            last_started_ms: Some(1_000),
        };
        assert!(combo.within(1_999, 1_000));
        assert!(!combo.within(2_000, 1_000));
        assert!(!ComboState::default().within(0, 1_000));
    }

    #[test]
    fn combo_expires_after_window() {
        let mut combo = ComboState {
            count: 2,
            last_started_ms: Some(500),
        };
        combo.expire(1_500, 1_000);
        assert_eq!(combo.count, 2);
        combo.expire(1_501, 1_000);
        assert_eq!(combo.count, 0);
    }

    #[test]
    fn finish_arms_cooldown_and_clears_instance() {
        let mut state = AttackState::default();
        state.begin(AttackKind::Second, 35);
        state.record.insert(HitGuard::Once);
        assert!(state.has_hit());
        state.finish(20);
        assert!(!state.is_attacking());
        assert!(!state.has_hit());
        assert_eq!(state.cooldown, 20);
    }
}
