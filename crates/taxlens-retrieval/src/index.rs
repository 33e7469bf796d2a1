//! In-memory fragment store with brute-force cosine search.

use std::collections::HashMap;
use std::sync::Arc;

use taxlens_core::config::RetrievalConfig;
use taxlens_core::errors::RetrievalError;
use taxlens_core::models::{DegradationEvent, DocumentFragment, SearchHit};
use taxlens_core::traits::{IEmbeddingProvider, IEvidenceSearch, INoiseSource};
use taxlens_embeddings::similarity::cosine_similarity;
use tracing::{debug, info, warn};

use crate::corpus::ReferenceCorpus;

/// Outcome of a `build` call.
#[derive(Debug, Clone, Default)]
pub struct IndexReport {
    pub fragments: usize,
    pub skipped: usize,
    pub documents: usize,
    pub events: Vec<DegradationEvent>,
}

/// Ordered embedded fragments plus an id lookup.
///
/// Every stored vector has exactly `dimensions()` components. Read-only
/// after `build`; share behind an `Arc` for concurrent searches.
pub struct VectorIndex {
    config: RetrievalConfig,
    embedder: Arc<dyn IEmbeddingProvider>,
    noise: Arc<dyn INoiseSource>,
    fragments: Vec<DocumentFragment>,
    by_id: HashMap<String, usize>,
}

impl VectorIndex {
    pub fn new(
        config: RetrievalConfig,
        embedder: Arc<dyn IEmbeddingProvider>,
        noise: Arc<dyn INoiseSource>,
    ) -> Self {
        Self {
            config,
            embedder,
            noise,
            fragments: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Embed and store every chunk of `corpus`, replacing any previous
    /// contents. Chunks that fail to embed or insert are skipped.
    pub fn build(&mut self, corpus: &ReferenceCorpus) -> IndexReport {
        self.fragments.clear();
        self.by_id.clear();

        let mut report = IndexReport {
            documents: corpus.documents.len(),
            ..Default::default()
        };

        for doc in &corpus.documents {
            for (n, chunk) in doc.chunks.iter().enumerate() {
                let id = doc.chunk_id(n);
                let inserted = self
                    .embedder
                    .embed(chunk)
                    .map_err(|e| e.to_string())
                    .and_then(|vector| {
                        self.insert(DocumentFragment {
                            id: id.clone(),
                            content: chunk.clone(),
                            source_label: doc.label.clone(),
                            vector,
                        })
                        .map_err(|e| e.to_string())
                    });
                if let Err(reason) = inserted {
                    warn!(fragment = %id, reason = %reason, "skipping fragment");
                    report.skipped += 1;
                    report
                        .events
                        .push(DegradationEvent::now("retrieval", reason, format!("skipped {id}")));
                }
            }
        }

        report.fragments = self.fragments.len();
        info!(
            fragments = report.fragments,
            skipped = report.skipped,
            documents = report.documents,
            "vector index built"
        );
        report
    }

    /// Append one fragment. Rejects wrong-sized vectors and duplicate ids.
    pub fn insert(&mut self, fragment: DocumentFragment) -> Result<(), RetrievalError> {
        let expected = self.dimensions();
        if fragment.vector.len() != expected {
            return Err(RetrievalError::DimensionMismatch {
                id: fragment.id,
                expected,
                actual: fragment.vector.len(),
            });
        }
        if self.by_id.contains_key(&fragment.id) {
            return Err(RetrievalError::DuplicateFragment { id: fragment.id });
        }
        self.by_id.insert(fragment.id.clone(), self.fragments.len());
        self.fragments.push(fragment);
        Ok(())
    }

    /// Top-k fragments by cosine similarity to `query`.
    ///
    /// Only the first `candidate_window` fragments are scanned. Each score
    /// gets the noise source's jitter; ties keep index order.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<SearchHit> {
        let query_vec = match self.embedder.embed(query) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "query embedding failed, returning no evidence");
                return Vec::new();
            }
        };

        let window = self.config.candidate_window.min(self.fragments.len());
        let mut hits: Vec<SearchHit> = self.fragments[..window]
            .iter()
            .map(|f| SearchHit {
                id: f.id.clone(),
                content: f.content.clone(),
                similarity: cosine_similarity(&query_vec, &f.vector)
                    + self.noise.jitter(self.config.jitter_amplitude),
                source_label: f.source_label.clone(),
            })
            .collect();

        hits.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        hits.truncate(top_k);

        debug!(query, scanned = window, returned = hits.len(), "index searched");
        hits
    }

    pub fn get(&self, id: &str) -> Option<&DocumentFragment> {
        self.by_id.get(id).map(|&i| &self.fragments[i])
    }

    pub fn vector(&self, id: &str) -> Option<&[f32]> {
        self.get(id).map(|f| f.vector.as_slice())
    }

    pub fn fragments(&self) -> &[DocumentFragment] {
        &self.fragments
    }

    pub fn dimensions(&self) -> usize {
        self.embedder.dimensions()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl IEvidenceSearch for VectorIndex {
    fn search(&self, query: &str, top_k: usize) -> Vec<SearchHit> {
        VectorIndex::search(self, query, top_k)
    }

    fn len(&self) -> usize {
        VectorIndex::len(self)
    }
}
