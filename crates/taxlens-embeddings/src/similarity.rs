//! Vector similarity.
//!
//! Cosine similarity here adds a small epsilon to each norm, so zero
//! vectors score 0 instead of NaN. Vectors of different length are
//! compared over their common prefix; nothing is ever padded.

use taxlens_core::constants::COSINE_NORM_EPSILON;

/// L2 norm accumulated in f64.
pub fn l2_norm(v: &[f32]) -> f64 {
    v.iter().map(|&x| (x as f64) * (x as f64)).sum::<f64>().sqrt()
}

/// Scale `v` to unit length in place. Zero vectors are left untouched.
pub fn l2_normalize(v: &mut [f32]) {
    let norm = l2_norm(v);
    if norm > f64::from(f32::EPSILON) {
        for x in v.iter_mut() {
            *x = (*x as f64 / norm) as f32;
        }
    }
}

/// Cosine similarity over the first `min(a.len(), b.len())` components.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let n = a.len().min(b.len());
    let (a, b) = (&a[..n], &b[..n]);
    let dot: f64 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| (x as f64) * (y as f64))
        .sum();
    dot / ((l2_norm(a) + COSINE_NORM_EPSILON) * (l2_norm(b) + COSINE_NORM_EPSILON))
}
