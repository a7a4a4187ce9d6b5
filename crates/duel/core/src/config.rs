/// Simulation constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Simulated milliseconds per driver tick.
    pub tick_ms: u32,
    /// Milliseconds an animation frame must exceed before it advances.
    pub frame_ms: u32,
    pub arena_width: i32,
    pub arena_height: i32,
    /// Downward acceleration added to vertical velocity every tick.
    pub gravity: i32,
    /// Distance between the bottom of the arena and the ground line.
    pub ground_offset: i32,
    /// Base seed for randomized spawns.
    pub seed: u64,
}

impl SimConfig {
    // ===== compile-time constants used as type parameters =====
    /// Dedup guards a single attack instance can record.
    pub const MAX_HIT_GUARDS: usize = 16;
    /// Traps a fighter may hold at once; placing another evicts the oldest.
    pub const MAX_TRAPS: usize = 3;
    /// Number of animation actions (idle through death).
    pub const ACTION_COUNT: usize = 8;

    // ===== fixed rules =====
    /// Cooldown applied when a hit animation finishes.
    pub const HIT_RECOVERY_COOLDOWN: u32 = 20;
    /// Forced-hit ticks inflicted by a detonating trap.
    pub const TRAP_STUN_TICKS: u32 = 45;
    /// Window within which a fast archetype chains attacks.
    pub const COMBO_WINDOW_MS: u64 = 1_000;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TICK_MS: u32 = 16;
    pub const DEFAULT_FRAME_MS: u32 = 50;
    pub const DEFAULT_ARENA_WIDTH: i32 = 1_400;
    pub const DEFAULT_ARENA_HEIGHT: i32 = 600;
    pub const DEFAULT_GRAVITY: i32 = 2;
    pub const DEFAULT_GROUND_OFFSET: i32 = 50;

    pub fn new() -> Self {
        Self {
            tick_ms: Self::DEFAULT_TICK_MS,
            frame_ms: Self::DEFAULT_FRAME_MS,
            arena_width: Self::DEFAULT_ARENA_WIDTH,
            arena_height: Self::DEFAULT_ARENA_HEIGHT,
            gravity: Self::DEFAULT_GRAVITY,
            ground_offset: Self::DEFAULT_GROUND_OFFSET,
            seed: 0,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_tick_ms(mut self, tick_ms: u32) -> Self {
        self.tick_ms = tick_ms;
        self
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}
