/// Confidence model consulted for every explanation.
pub trait IConfidenceScorer: Send + Sync {
    /// Score a query embedding. Always finite.
    fn score(&self, query: &[f32]) -> f64;
}
