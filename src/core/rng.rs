//! RNG module - deterministic pip generation
//!
//! A simple LCG keeps grid generation reproducible under a seed, which the
//! tests rely on. The game itself seeds from the system clock.

use crate::types::GRID_COLS;

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

    /// Seed from the system clock (subsecond nanos)
    pub fn from_entropy() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(1);
        Self::new(nanos)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32, a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw a pip value in [1, max_pip]
    pub fn next_pip(&mut self, max_pip: u8) -> u8 {
        (self.next_range(max_pip as u32) + 1) as u8
    }

    /// Draw a full row of pips in [1, max_pip]
    pub fn next_row(&mut self, max_pip: u8) -> [u8; GRID_COLS as usize] {
        let mut row = [0u8; GRID_COLS as usize];
        for cell in &mut row {
            *cell = self.next_pip(max_pip);
        }
        row
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}
