//! Deterministic rolls for randomized spawns.
//!
//! A fighter never owns a stateful generator. Each roll derives a fresh seed
//! from the bout seed, a per-fighter nonce, the fighter's slot and a context
//! value, then runs it through a single PCG step. Two bouts built from the
//! same seed and inputs roll the same values.

/// Oracle turning a seed into a pseudo-random value.
pub trait RngOracle {
    fn next_u32(&self, seed: u64) -> u32;

    /// Value in `[min, max]` inclusive. Returns `min` when the range is empty.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min + 1;
        min + (self.next_u32(seed) % span)
    }
}

/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Mixes the roll inputs into one seed.
///
/// Use distinct `context` values for independent rolls made by the same
/// spawn (count, horizontal offset, fall speed).
pub fn compute_seed(bout_seed: u64, nonce: u64, slot_id: u32, context: u32) -> u64 {
    let mut hash = bout_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (slot_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}

/// Per-fighter roll source. Every roll consumes one nonce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollSource {
    seed: u64,
    nonce: u64,
}

impl RollSource {
    pub const fn new(seed: u64) -> Self {
        Self { seed, nonce: 0 }
    }

    pub const fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Inclusive roll in `[min, max]`.
    pub fn roll(&mut self, slot_id: u32, context: u32, min: u32, max: u32) -> u32 {
        let seed = compute_seed(self.seed, self.nonce, slot_id, context);
        self.nonce = self.nonce.wrapping_add(1);
        PcgRng.range(seed, min, max)
    }

    /// Inclusive signed roll in `[min, max]`.
    pub fn roll_signed(&mut self, slot_id: u32, context: u32, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = max.abs_diff(min);
        min + self.roll(slot_id, context, 0, span) as i32
    }
}
