use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Only the first N fragments are scanned per search.
    pub candidate_window: usize,
    /// Half-width of the symmetric jitter added to each similarity.
    pub jitter_amplitude: f64,
    /// Chunks generated per builtin reference document.
    pub chunks_per_document: usize,
    /// Directory of `.txt` reference documents. Falls back to the builtin corpus.
    pub books_dir: Option<String>,
    /// Fixed chunk size (in characters) for documents read from `books_dir`.
    pub chunk_chars: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            candidate_window: defaults::DEFAULT_CANDIDATE_WINDOW,
            jitter_amplitude: defaults::DEFAULT_JITTER_AMPLITUDE,
            chunks_per_document: defaults::DEFAULT_CHUNKS_PER_DOCUMENT,
            books_dir: None,
            chunk_chars: defaults::DEFAULT_CHUNK_CHARS,
        }
    }
}
