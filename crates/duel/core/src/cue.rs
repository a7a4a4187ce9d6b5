//! Fire-and-forget triggers for audio and effects collaborators.

use crate::archetype::Archetype;
use crate::combat::AttackKind;
use crate::slot::Slot;

/// An attack was initiated and its sound should play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackCue {
    pub slot: Slot,
    pub archetype: Archetype,
    pub kind: AttackKind,
}

/// Receiver for cues raised synchronously during [`Fighter::move_step`].
///
/// [`Fighter::move_step`]: crate::Fighter::move_step
pub trait CueSink {
    fn attack_started(&mut self, cue: AttackCue);
}

/// Discards every cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct Muted;

impl CueSink for Muted {
    fn attack_started(&mut self, _cue: AttackCue) {}
}

/// Collects cues for later inspection.
impl CueSink for Vec<AttackCue> {
    fn attack_started(&mut self, cue: AttackCue) {
        self.push(cue);
    }
}

impl<S: CueSink + ?Sized> CueSink for &mut S {
    fn attack_started(&mut self, cue: AttackCue) {
        (**self).attack_started(cue);
    }
}
