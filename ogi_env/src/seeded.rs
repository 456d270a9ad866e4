//! Seeded ChaCha8 implementation of [`Entropy`].

use crate::Entropy;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Derives an independent stream seed from a master seed.
///
/// `master * golden_ratio + stream * prime`, so each stream is reproducible
/// on its own and adding streams never shifts the others.
pub fn derive_stream_seed(master_seed: u64, stream: u64) -> u64 {
    master_seed
        .wrapping_mul(0x9e3779b97f4a7c15)
        .wrapping_add(stream.wrapping_mul(0x517cc1b727220a95))
}

/// Deterministic random source backed by ChaCha8.
pub struct SeededEntropy {
    /// Seed this stream was created from
    seed: u64,
    
    /// The underlying generator
    rng: ChaCha8Rng,
}

impl SeededEntropy {
    /// Creates a source seeded directly with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
    
    /// Creates the source for stream `stream` under `master_seed`.
    pub fn for_stream(master_seed: u64, stream: u64) -> Self {
        Self::new(derive_stream_seed(master_seed, stream))
    }
}

impl Entropy for SeededEntropy {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if !(high > low) {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
    
    fn uniform_int(&mut self, low: u64, high: u64) -> u64 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
    
    fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        // Normal::new accepts a negative deviation
        if !(std_dev >= 0.0) || !std_dev.is_finite() {
            return mean;
        }
        match Normal::new(mean, std_dev) {
            Ok(normal) => normal.sample(&mut self.rng),
            Err(_) => mean,
        }
    }
    
    fn choose_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
    
    fn seed(&self) -> u64 {
        self.seed
    }
}
