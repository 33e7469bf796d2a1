//! Noise sources.
//!
//! `SeededNoise` is what runs in production; `Deterministic` replaces every
//! random draw with its neutral value so tests can assert exact outputs.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use taxlens_core::config::NoiseConfig;
use taxlens_core::traits::INoiseSource;
use tracing::info;

/// Pseudo-random noise backed by a `StdRng`.
pub struct SeededNoise {
    rng: Mutex<StdRng>,
}

impl SeededNoise {
    /// Reproducible noise: the same seed yields the same sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Noise seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A poisoned lock still holds a usable generator.
        let mut guard = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }
}

impl INoiseSource for SeededNoise {
    fn jitter(&self, amplitude: f64) -> f64 {
        if amplitude <= 0.0 {
            return 0.0;
        }
        self.with_rng(|rng| rng.gen_range(-amplitude..=amplitude))
    }

    fn uniform(&self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        self.with_rng(|rng| rng.gen_range(lo..hi))
    }

    fn standard_normal(&self) -> f64 {
        self.with_rng(|rng| rng.sample(StandardNormal))
    }

    fn byte(&self) -> u8 {
        self.with_rng(|rng| rng.gen())
    }

    fn is_noisy(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "seeded"
    }
}

/// No noise at all: zero jitter, midpoint fallbacks, zero tail.
#[derive(Debug, Default, Clone, Copy)]
pub struct Deterministic;

impl INoiseSource for Deterministic {
    fn jitter(&self, _amplitude: f64) -> f64 {
        0.0
    }

    fn uniform(&self, lo: f64, hi: f64) -> f64 {
        (lo + hi) / 2.0
    }

    fn standard_normal(&self) -> f64 {
        0.0
    }

    fn byte(&self) -> u8 {
        0
    }

    fn is_noisy(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "deterministic"
    }
}

/// Build the noise source described by `config`.
pub fn noise_from_config(config: &NoiseConfig) -> Arc<dyn INoiseSource> {
    match (config.enabled, config.seed) {
        (false, _) => {
            info!(source = "deterministic", "noise disabled");
            Arc::new(Deterministic)
        }
        (true, Some(seed)) => {
            info!(source = "seeded", seed, "noise seeded");
            Arc::new(SeededNoise::with_seed(seed))
        }
        (true, None) => {
            info!(source = "seeded", "noise seeded from entropy");
            Arc::new(SeededNoise::from_entropy())
        }
    }
}
