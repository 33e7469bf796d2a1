//! # taxlens-retrieval
//!
//! Evidence retrieval and explanation for detected issues.
//!
//! ## Architecture
//!
//! ```text
//! ReferenceCorpus  (builtin books or a directory of .txt files)
//!        │ build
//!        ▼
//! VectorIndex (IEvidenceSearch)
//! ├── fragments: ordered, embedded at D
//! ├── by_id:     id → position
//! └── search:    cosine over the first `candidate_window` fragments,
//!                jitter, stable descending sort, top-k
//!
//! ExplanationComposer
//! ├── IEvidenceSearch     → relevant_evidence, context_relevance
//! ├── IConfidenceScorer   → model_confidence
//! └── templates           → narrative, recommendation
//! ```

pub mod corpus;
pub mod explain;
pub mod index;

pub use corpus::{ReferenceCorpus, ReferenceDocument};
pub use explain::ExplanationComposer;
pub use index::{IndexReport, VectorIndex};
