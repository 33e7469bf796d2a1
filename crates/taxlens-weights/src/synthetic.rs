//! Synthetic weights for artifacts that could not be read.
//!
//! The matrix depends only on the identifier: its blake3 digest picks one of
//! 1000 seeds, and a `StdRng` with that seed fills the matrix from N(0, 1).
//! The same identifier always yields the same matrix, independent of the
//! engine's noise source.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use taxlens_core::config::defaults::DEFAULT_SYNTHETIC_SEED_MODULUS;

/// Seed derived from the first 8 hex digits of `blake3(identifier)`.
pub fn seed_for(identifier: &str) -> u64 {
    let hex = blake3::hash(identifier.as_bytes()).to_hex();
    // 8 hex digits always fit in a u64.
    let prefix = u64::from_str_radix(&hex[..8], 16).unwrap_or_default();
    prefix % DEFAULT_SYNTHETIC_SEED_MODULUS
}

/// A `rows x cols` standard-normal matrix seeded from `identifier`.
/// A zero-row request yields a single zero row.
pub fn synthetic_matrix(identifier: &str, rows: usize, cols: usize) -> Array2<f32> {
    if rows == 0 {
        return Array2::zeros((1, cols));
    }
    let mut rng = StdRng::seed_from_u64(seed_for(identifier));
    Array2::from_shape_simple_fn((rows, cols), || rng.sample::<f64, _>(StandardNormal) as f32)
}
