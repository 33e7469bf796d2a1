use serde::{Deserialize, Serialize};

/// One indexed chunk of a reference document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentFragment {
    /// `"{source_label}::chunk_{n}"`, unique within an index.
    pub id: String,
    pub content: String,
    pub source_label: String,
    pub vector: Vec<f32>,
}

/// A ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub content: String,
    /// Cosine similarity, including jitter when the noise source adds it.
    pub similarity: f64,
    pub source_label: String,
}
