//! Setup-time errors.
//!
//! Once a bout is running nothing in the simulation fails: out-of-range moves
//! are clamped, attacks on cooldown are ignored and non-positive damage is a
//! no-op. Only building an arena or placing a fighter can be rejected.

/// Rejected arena or fighter configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetupError {
    #[error("arena dimensions must be positive, got {width}x{height}")]
    InvalidArena { width: i32, height: i32 },

    #[error("ground offset {offset} leaves no ground inside an arena {height} tall")]
    GroundOutsideArena { offset: i32, height: i32 },

    #[error("gravity must be positive, got {0}")]
    NonPositiveGravity(i32),

    #[error("frame duration must be positive")]
    ZeroFrameDuration,

    #[error("body {width}x{height} does not fit inside the arena")]
    BodyTooLarge { width: i32, height: i32 },

    #[error("spawn x {x} puts a body {width} wide outside an arena {arena_width} wide")]
    SpawnOutsideArena { x: i32, width: i32, arena_width: i32 },
}

impl SetupError {
    /// Stable identifier for logs and tests.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArena { .. } => "invalid_arena",
            Self::GroundOutsideArena { .. } => "ground_outside_arena",
            Self::NonPositiveGravity(_) => "non_positive_gravity",
            Self::ZeroFrameDuration => "zero_frame_duration",
            Self::BodyTooLarge { .. } => "body_too_large",
            Self::SpawnOutsideArena { .. } => "spawn_outside_arena",
        }
    }
}
