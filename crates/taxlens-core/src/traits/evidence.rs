use crate::models::SearchHit;

/// Ranked evidence lookup over reference text.
pub trait IEvidenceSearch: Send + Sync {
    /// Return at most `top_k` hits, best first.
    fn search(&self, query: &str, top_k: usize) -> Vec<SearchHit>;

    /// Number of indexed fragments.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
