//! Reference documents to index.
//!
//! Either the builtin corpus (five regulatory books of numbered rule
//! sections) or every `.txt` file in a directory, split into fixed-size
//! character chunks.

use std::path::Path;

use taxlens_core::config::RetrievalConfig;
use taxlens_core::constants::BUILTIN_BOOKS;
use taxlens_core::errors::RetrievalError;
use taxlens_core::models::DegradationEvent;
use tracing::{debug, info, warn};

/// One source document, already chunked.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDocument {
    pub label: String,
    pub chunks: Vec<String>,
}

impl ReferenceDocument {
    /// Fragment id for the n-th chunk.
    pub fn chunk_id(&self, n: usize) -> String {
        format!("{}::chunk_{n}", self.label)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceCorpus {
    pub documents: Vec<ReferenceDocument>,
}

impl ReferenceCorpus {
    /// The five builtin books, `chunks_per_document` sections each.
    pub fn builtin(chunks_per_document: usize) -> Self {
        let documents = BUILTIN_BOOKS
            .iter()
            .map(|book| ReferenceDocument {
                label: (*book).to_string(),
                chunks: (0..chunks_per_document)
                    .map(|i| format!("Section {i}: GST Compliance Rule {i}"))
                    .collect(),
            })
            .collect();
        Self { documents }
    }

    /// Every `.txt` file in `dir`, sorted by name, labelled by file name.
    ///
    /// Files that cannot be read are skipped.
    pub fn from_dir(dir: &Path, chunk_chars: usize) -> Result<Self, RetrievalError> {
        let entries = std::fs::read_dir(dir).map_err(|e| RetrievalError::DocumentUnreadable {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut paths: Vec<_> = entries
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                (path.is_file() && path.extension().is_some_and(|ext| ext == "txt")).then_some(path)
            })
            .collect();
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let text = match std::fs::read_to_string(&path) {
                Ok(text) => text,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable reference document");
                    continue;
                }
            };
            let label = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let chunks = chunk_text(&text, chunk_chars);
            debug!(document = %label, chunks = chunks.len(), "reference document chunked");
            documents.push(ReferenceDocument { label, chunks });
        }
        Ok(Self { documents })
    }

    /// The corpus named by `config`: `books_dir` when it yields at least one
    /// chunk, otherwise the builtin books.
    pub fn from_config(config: &RetrievalConfig) -> (Self, Option<DegradationEvent>) {
        let Some(dir) = config.books_dir.as_deref() else {
            return (Self::builtin(config.chunks_per_document), None);
        };

        let failure = match Self::from_dir(Path::new(dir), config.chunk_chars) {
            Ok(corpus) if corpus.chunk_count() > 0 => {
                info!(dir, documents = corpus.documents.len(), "reference corpus loaded");
                return (corpus, None);
            }
            Ok(_) => format!("no .txt content in {dir}"),
            Err(e) => e.to_string(),
        };

        warn!(dir, reason = %failure, "falling back to builtin reference corpus");
        let event = DegradationEvent::now("retrieval", failure, "builtin corpus");
        (Self::builtin(config.chunks_per_document), Some(event))
    }

    pub fn chunk_count(&self) -> usize {
        self.documents.iter().map(|d| d.chunks.len()).sum()
    }
}

/// Split `text` into chunks of at most `chunk_chars` characters.
/// Whitespace-only chunks are dropped.
pub fn chunk_text(text: &str, chunk_chars: usize) -> Vec<String> {
    if chunk_chars == 0 {
        return Vec::new();
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(chunk_chars)
        .map(|c| c.iter().collect::<String>())
        .filter(|c| !c.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_corpus_has_five_books() {
        let corpus = ReferenceCorpus::builtin(50);
        assert_eq!(corpus.documents.len(), 5);
        assert_eq!(corpus.chunk_count(), 250);
        let first = &corpus.documents[0];
        assert_eq!(first.label, "GST_Act_2017_Complete.pdf");
        assert_eq!(first.chunks[7], "Section 7: GST Compliance Rule 7");
        assert_eq!(first.chunk_id(7), "GST_Act_2017_Complete.pdf::chunk_7");
    }

    #[test]
    fn chunking_respects_char_boundaries() {
        let chunks = chunk_text("₹₹₹₹₹", 2);
        assert_eq!(chunks, vec!["₹₹", "₹₹", "₹"]);
    }

    #[test]
    fn whitespace_chunks_are_dropped() {
        assert_eq!(chunk_text("ab    ", 2), vec!["ab"]);
        assert!(chunk_text("abc", 0).is_empty());
    }

    #[test]
    fn missing_books_dir_falls_back_to_builtin() {
        let config = RetrievalConfig {
            books_dir: Some("/no/such/books".into()),
            ..Default::default()
        };
        let (corpus, event) = ReferenceCorpus::from_config(&config);
        assert_eq!(corpus.documents.len(), 5);
        assert_eq!(event.unwrap().fallback_used, "builtin corpus");
    }

    #[test]
    fn no_books_dir_is_not_a_degradation() {
        let (corpus, event) = ReferenceCorpus::from_config(&RetrievalConfig::default());
        assert_eq!(corpus.chunk_count(), 250);
        assert!(event.is_none());
    }
}
