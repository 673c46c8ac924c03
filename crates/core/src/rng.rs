//! RNG module - seedable randomness for tile spawning
//!
//! The medium spawner is the only random part of the core; everything it
//! needs goes through [`TileRng`] so tests can inject a fixed seed and
//! replay a session exactly.
//!
//! Built on a simple LCG so the core stays dependency-free.

use crate::types::FOUR_TILE_PERCENT;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    ///
    /// Multiply-shift so the result depends on the high bits; the low bits
    /// of an LCG cycle too quickly for fair sampling.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (for reseeding a restarted session)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Random source for spawn decisions: cell picks and the classic
/// 90%/10% choice between a 2 and a 4.
#[derive(Debug, Clone)]
pub struct TileRng {
    rng: SimpleRng,
}

impl TileRng {
    /// Create a tile RNG with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw a spawn value: 2 with 90% probability, 4 with 10%
    pub fn next_tile_value(&mut self) -> u32 {
        if self.rng.next_range(100) < FOUR_TILE_PERCENT {
            4
        } else {
            2
        }
    }

    /// Pick a uniform index in [0, len)
    pub fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.rng.next_range(len as u32) as usize
    }

    /// Current RNG state (for restarting with a fresh but derived seed)
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}
