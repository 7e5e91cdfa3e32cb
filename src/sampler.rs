//! Random sources used by the simulation loop
//!
//! The generator never touches an RNG directly. It asks a [`Sampler`] for
//! draws, so tests can swap in scripted values and every run is reproducible
//! from a single seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Poisson, StandardNormal};

/// Distribution sampling capability required by the generator
pub trait Sampler {
    /// Draw from a Poisson distribution. Non-positive means yield 0.
    fn poisson(&mut self, mean: f64) -> u64;

    /// Draw from a normal distribution
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64;

    /// Draw uniformly from [0, 1)
    fn uniform(&mut self) -> f64;

    /// Pick an index with probability proportional to its weight
    fn weighted_choice(&mut self, weights: &[f64]) -> usize;

    /// Pick an index in `0..len` uniformly
    fn choose_index(&mut self, len: usize) -> usize;

    /// Bernoulli draw that succeeds with the given probability
    fn bernoulli(&mut self, probability: f64) -> bool {
        self.uniform() < probability
    }
}

/// Two independently seeded streams: one for distributions, one for picks
pub struct SeededSampler {
    numeric: StdRng,
    uniform: StdRng,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            numeric: StdRng::seed_from_u64(seed),
            uniform: StdRng::seed_from_u64(seed),
        }
    }
}

impl Sampler for SeededSampler {
    fn poisson(&mut self, mean: f64) -> u64 {
        match Poisson::new(mean) {
            Ok(dist) => {
                let draw: f64 = dist.sample(&mut self.numeric);
                draw as u64
            }
            Err(_) => 0,
        }
    }

    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = self.numeric.sample(StandardNormal);
        mean + std_dev * z
    }

    fn uniform(&mut self) -> f64 {
        self.numeric.gen::<f64>()
    }

    fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        let r: f64 = self.numeric.gen();
        let mut cumulative = 0.0;
        for (idx, weight) in weights.iter().enumerate() {
            cumulative += weight / total;
            if r < cumulative {
                return idx;
            }
        }
        // Rounding can leave the last bucket just short of 1.0
        weights.len().saturating_sub(1)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.uniform.gen_range(0..len)
    }
}
