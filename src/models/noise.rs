//! Injectable randomness for the generators.
//!
//! Everything random in the crate draws through [`NoiseSource`], so tests can
//! swap the OS-seeded generator for a seeded one or a fixed replay sequence.

use rand::{Rng, SeedableRng, rngs::StdRng};

pub trait NoiseSource {
    /// Uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform draw in `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_unit()
    }

    /// Uniform index in `0..len`. Returns 0 for an empty range.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_unit() * len as f64) as usize).min(len - 1)
    }

    /// Uniform integer in `low..=high`. Returns `low` when the range is empty.
    fn between(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        low + self.index(high - low + 1)
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for Box<N> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngNoise<R> {
    rng: R,
}

impl<R: Rng> RngNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngNoise<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> NoiseSource for RngNoise<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
/// An empty list behaves like a constant 0.5 (the midpoint of every range).
#[derive(Debug, Clone, PartialEq)]
pub struct FixedNoise {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedNoise {
    pub fn new(values: Vec<f64>) -> Self {
        let values = values.into_iter().map(|v| v.clamp(0.0, 1.0 - f64::EPSILON)).collect();
        Self { values, cursor: 0 }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl NoiseSource for FixedNoise {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}

/// Hands out one independent noise stream per generated series.
pub trait NoiseFactory: Send + Sync {
    fn stream(&self, index: usize) -> Box<dyn NoiseSource + Send>;
}

/// How the per-series streams are seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Fresh OS entropy per stream: every build differs.
    #[default]
    Entropy,
    /// Reproducible: stream `i` is seeded from `seed` and `i`.
    Fixed(u64),
}

impl SeedPolicy {
    pub fn from_option(seed: Option<u64>) -> Self {
        seed.map_or(Self::Entropy, Self::Fixed)
    }
}

impl NoiseFactory for SeedPolicy {
    fn stream(&self, index: usize) -> Box<dyn NoiseSource + Send> {
        match self {
            Self::Entropy => Box::new(RngNoise::from_entropy()),
            Self::Fixed(seed) => Box::new(RngNoise::seeded(
                seed.wrapping_add((index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)),
            )),
        }
    }
}

/// Every stream replays the same fixed sequence from the start.
impl NoiseFactory for FixedNoise {
    fn stream(&self, _index: usize) -> Box<dyn NoiseSource + Send> {
        Box::new(Self::new(self.values.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_noise_cycles() {
        let mut noise = FixedNoise::new(vec![0.1, 0.2]);
        let draws: Vec<f64> = (0..5).map(|_| noise.next_unit()).collect();
        assert_eq!(draws, vec![0.1, 0.2, 0.1, 0.2, 0.1]);
    }

    #[test]
    fn fixed_noise_keeps_draws_below_one() {
        let mut noise = FixedNoise::constant(1.0);
        assert!(noise.next_unit() < 1.0);
        assert_eq!(noise.index(4), 3);
    }

    #[test]
    fn between_is_inclusive_and_handles_empty_ranges() {
        let mut low = FixedNoise::constant(0.0);
        let mut high = FixedNoise::constant(0.999);
        assert_eq!(low.between(3, 6), 3);
        assert_eq!(high.between(3, 6), 6);
        assert_eq!(low.between(5, 5), 5);
        assert_eq!(low.between(7, 2), 7);
    }

    #[test]
    fn seeded_streams_are_reproducible_and_distinct() {
        let policy = SeedPolicy::Fixed(42);
        let a: Vec<f64> = {
            let mut s = policy.stream(0);
            (0..4).map(|_| s.next_unit()).collect()
        };
        let b: Vec<f64> = {
            let mut s = policy.stream(0);
            (0..4).map(|_| s.next_unit()).collect()
        };
        let c: Vec<f64> = {
            let mut s = policy.stream(1);
            (0..4).map(|_| s.next_unit()).collect()
        };
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.iter().all(|v| (0.0..1.0).contains(v)));
    }
}
