//! RNG oracle for deterministic random number generation.
//!
//! Every probabilistic branch in a battle (critical hits, flee attempts, the
//! enemy's defend-or-attack choice) draws from an [`RngOracle`] handed to the
//! session at construction. Nothing in combat-core touches a global RNG.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed (or the
//! same script), they must produce the same sequence of draws. This is what
//! lets tests force specific outcomes and lets hosts replay a fight.

use std::collections::VecDeque;

/// RNG oracle for deterministic random number generation.
pub trait RngOracle {
    /// Generate the next random u32 value.
    fn next_u32(&mut self) -> u32;

    /// Uniform draw in `[0, 1)`.
    fn draw(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Returns true with the given probability (`draw() < probability`).
    fn chance(&mut self, probability: f64) -> bool {
        self.draw() < probability
    }

    /// Returns true with the given percentage chance (0-100).
    fn chance_percent(&mut self, percent: u32) -> bool {
        self.chance(f64::from(percent) / 100.0)
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn draw(&mut self) -> f64 {
        (**self).draw()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG is a family of simple, fast, space-efficient RNGs with excellent
/// statistical quality. This implementation uses PCG-XSH-RR, which produces
/// 32-bit output from 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces the same stream
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed.
    pub fn seeded(seed: u64) -> Self {
        // Scramble the seed so that small consecutive seeds diverge immediately.
        let mut rng = Self {
            state: Self::pcg_step(seed.wrapping_add(Self::INCREMENT)),
        };
        rng.next_u32();
        rng
    }

    /// Advance the PCG state by one step.
    ///
    /// Uses LCG (Linear Congruential Generator) formula:
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        // XOR upper bits with lower bits, shift right
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;

        // Use upper bits to determine rotation amount
        let rot = (state >> 59) as u32;

        xorshifted.rotate_right(rot)
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::seeded(0)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

/// Replays a fixed list of draws, then repeats a fallback value.
///
/// Used to force specific branches: `ScriptedRng::new([0.1])` makes the
/// first probability check succeed for any chance above 10%.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedRng {
    draws: VecDeque<f64>,
    fallback: f64,
    consumed: usize,
}

impl ScriptedRng {
    /// Fallback draw once the script is exhausted: fails every check below 100%.
    pub const DEFAULT_FALLBACK: f64 = 0.999_999;

    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().map(|d| d.clamp(0.0, Self::DEFAULT_FALLBACK)).collect(),
            fallback: Self::DEFAULT_FALLBACK,
            consumed: 0,
        }
    }

    /// A script that never succeeds a probability check.
    pub fn never() -> Self {
        Self::new([])
    }

    /// A script that always succeeds any non-zero probability check.
    pub fn always() -> Self {
        Self::new([]).with_fallback(0.0)
    }

    /// Sets the draw returned once the script is exhausted.
    #[must_use]
    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback.clamp(0.0, Self::DEFAULT_FALLBACK);
        self
    }

    /// Number of draws taken so far, scripted or fallback.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Draws still queued in the script.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.draw() * (f64::from(u32::MAX) + 1.0)) as u32
    }

    fn draw(&mut self) -> f64 {
        self.consumed += 1;
        self.draws.pop_front().unwrap_or(self.fallback)
    }
}
