//! Random sources for stat randomization.
//!
//! Every randomization entry point takes one `&mut impl StatRng` and draws
//! from it in a fixed order and count. Given the same seed, a whole run over
//! a [`Dex`](crate::Dex) produces the same stats.
//!
//! # Determinism
//!
//! Implementations must be deterministic: given the same seed they must
//! produce the same sequence. The draw order of each operation is documented
//! on the operation itself and is part of its contract.

use rand::{Rng, RngCore};
use rand_distr::{Distribution, StandardNormal};

use crate::entity::SpeciesId;

pub use rand::SeedableRng;
/// Default generator for randomization runs.
pub use rand_pcg::Pcg32;

/// Random source threaded through every randomization call.
///
/// Every [`RngCore`] generator is a `StatRng` through the blanket impl below.
/// Sources that must match a foreign generator bit-for-bit, like
/// [`JavaRandom`], implement the trait directly.
pub trait StatRng {
    /// Uniform double in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[0, bound)`. Returns 0 when `bound` is 0.
    fn next_below(&mut self, bound: u32) -> u32;

    /// Standard normal draw (mean 0, deviation 1).
    fn next_gaussian(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> StatRng for R {
    fn next_f64(&mut self) -> f64 {
        self.r#gen::<f64>()
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.gen_range(0..bound)
    }

    fn next_gaussian(&mut self) -> f64 {
        StandardNormal.sample(self)
    }
}

/// 48-bit linear congruential generator with `java.util.Random` semantics.
///
/// Seeds carried over from the upstream randomizer reproduce its stat tables
/// exactly, which is why this does not go through `rand`.
#[derive(Clone, Debug, PartialEq)]
pub struct JavaRandom {
    seed: u64,
    next_gaussian: Option<f64>,
}

impl JavaRandom {
    const MULTIPLIER: u64 = 0x5DEE_CE66D;
    const ADDEND: u64 = 0xB;
    const MASK: u64 = (1 << 48) - 1;

    pub fn new(seed: i64) -> Self {
        Self {
            seed: (seed as u64 ^ Self::MULTIPLIER) & Self::MASK,
            next_gaussian: None,
        }
    }

    /// Top `bits` bits of the next state, as a signed 32-bit value.
    fn next_bits(&mut self, bits: u32) -> i32 {
        self.seed = self
            .seed
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::ADDEND)
            & Self::MASK;
        (self.seed >> (48 - bits)) as i32
    }

    /// `nextInt()`: 32 signed bits.
    pub fn next_int(&mut self) -> i32 {
        self.next_bits(32)
    }
}

impl StatRng for JavaRandom {
    fn next_f64(&mut self) -> f64 {
        let hi = i64::from(self.next_bits(26));
        let lo = i64::from(self.next_bits(27));
        ((hi << 27) + lo) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        // Java bounds are positive ints.
        let bound = bound.min(i32::MAX as u32) as i32;
        let mut r = self.next_bits(31);
        let m = bound - 1;
        if bound & m == 0 {
            return ((i64::from(bound) * i64::from(r)) >> 31) as u32;
        }
        let mut u = r;
        loop {
            r = u % bound;
            if u.wrapping_sub(r).wrapping_add(m) >= 0 {
                return r as u32;
            }
            u = self.next_bits(31);
        }
    }

    fn next_gaussian(&mut self) -> f64 {
        if let Some(cached) = self.next_gaussian.take() {
            return cached;
        }
        loop {
            let v1 = 2.0 * self.next_f64() - 1.0;
            let v2 = 2.0 * self.next_f64() - 1.0;
            let s = v1 * v1 + v2 * v2;
            if s < 1.0 && s != 0.0 {
                let multiplier = (-2.0 * s.ln() / s).sqrt();
                self.next_gaussian = Some(v2 * multiplier);
                return v1 * multiplier;
            }
        }
    }
}

/// Compute a deterministic seed for one species within a randomization run.
///
/// # Arguments
///
/// * `run_seed` - Seed chosen for the whole run
/// * `species` - Species being randomized
/// * `context` - Distinguishes independent streams for the same species
pub fn compute_seed(run_seed: u64, species: SpeciesId, context: u32) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = run_seed;
    hash ^= u64::from(species.0).wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(context).wrapping_mul(0x517cc1b727220a95);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
