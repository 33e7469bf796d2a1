/// Source of every random term in the engine.
///
/// Similarity jitter, weight perturbation, confidence fallbacks and the
/// embedding tail all draw from one of these, so a deterministic
/// implementation makes the whole pipeline reproducible.
pub trait INoiseSource: Send + Sync {
    /// Symmetric noise in `[-amplitude, amplitude]`.
    fn jitter(&self, amplitude: f64) -> f64;

    /// A value in `[lo, hi)`.
    fn uniform(&self, lo: f64, hi: f64) -> f64;

    /// A draw from N(0, 1).
    fn standard_normal(&self) -> f64;

    /// A value in `0..=255`.
    fn byte(&self) -> u8;

    /// Whether this source ever returns anything but its deterministic value.
    fn is_noisy(&self) -> bool;

    fn name(&self) -> &str;
}
