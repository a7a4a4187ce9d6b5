//! Per-archetype stat overrides layered over the built-in profiles.

use std::collections::BTreeMap;

use duel_core::{ActionKind, Archetype, ArchetypeProfile, OrdnanceFrames};

/// Partial frame table; unset actions keep their built-in count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct FrameOverride {
    pub idle: Option<u16>,
    pub run: Option<u16>,
    pub jump: Option<u16>,
    pub attack1: Option<u16>,
    pub attack2: Option<u16>,
    pub attack3: Option<u16>,
    pub hit: Option<u16>,
    pub death: Option<u16>,
}

impl FrameOverride {
    fn entries(&self) -> [(ActionKind, Option<u16>); 8] {
        [
            (ActionKind::Idle, self.idle),
            (ActionKind::Run, self.run),
            (ActionKind::Jump, self.jump),
            (ActionKind::Attack1, self.attack1),
            (ActionKind::Attack2, self.attack2),
            (ActionKind::Attack3, self.attack3),
            (ActionKind::Hit, self.hit),
            (ActionKind::Death, self.death),
        ]
    }
}

/// Partial archetype profile read from the roster file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ProfileOverride {
    pub max_health: Option<i32>,
    pub speed: Option<i32>,
    pub jump_impulse: Option<i32>,
    pub body_width: Option<i32>,
    pub body_height: Option<i32>,
    pub frames: Option<FrameOverride>,
    pub ordnance: Option<OrdnanceFrames>,
    pub mirrored_art: Option<bool>,
}

impl ProfileOverride {
    /// Returns `base` with every set field replaced.
    pub fn apply(&self, base: ArchetypeProfile) -> ArchetypeProfile {
        let mut profile = base;
        if let Some(v) = self.max_health {
            profile.max_health = v;
        }
        if let Some(v) = self.speed {
            profile.speed = v;
        }
        if let Some(v) = self.jump_impulse {
            profile.jump_impulse = v;
        }
        if let Some(v) = self.body_width {
            profile.body_width = v;
        }
        if let Some(v) = self.body_height {
            profile.body_height = v;
        }
        if let Some(frames) = self.frames {
            for (action, count) in frames.entries() {
                if let Some(count) = count {
                    profile.frames = profile.frames.with_count(action, count);
                }
            }
        }
        if let Some(v) = self.ordnance {
            profile.ordnance = v;
        }
        if let Some(v) = self.mirrored_art {
            profile.mirrored_art = v;
        }
        profile
    }
}

/// Profiles used for a bout, one per archetype.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    profiles: BTreeMap<Archetype, ArchetypeProfile>,
}

impl Roster {
    /// Built-in profiles for every archetype.
    pub fn new() -> Self {
        Self {
            profiles: Archetype::ALL
                .into_iter()
                .map(|archetype| (archetype, archetype.profile()))
                .collect(),
        }
    }

    pub fn profile(&self, archetype: Archetype) -> ArchetypeProfile {
        self.profiles
            .get(&archetype)
            .copied()
            .unwrap_or_else(|| archetype.profile())
    }

    #[must_use]
    pub fn with_override(mut self, archetype: Archetype, patch: &ProfileOverride) -> Self {
        let patched = patch.apply(self.profile(archetype));
        self.profiles.insert(archetype, patched);
        self
    }

    /// Archetypes whose profile differs from the built-in one.
    pub fn overridden(&self) -> impl Iterator<Item = Archetype> + '_ {
        self.profiles
            .iter()
            .filter(|(archetype, profile)| archetype.profile() != **profile)
            .map(|(archetype, _)| *archetype)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
