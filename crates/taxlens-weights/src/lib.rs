//! # taxlens-weights
//!
//! The confidence model. Loads up to three weight artifacts, composes them
//! into a single composite matrix, and scores query embeddings against the
//! loaded layers.
//!
//! ## Architecture
//!
//! ```text
//! WeightStore (IConfidenceScorer)
//! ├── loader     (directory scan, JSON artifact parsing)
//! ├── synthetic  (blake3-seeded normal matrices for unreadable artifacts)
//! ├── compose    (left fold of matrix products, identity on mismatch)
//! └── score      (mean |cosine| of query prefix vs. each matrix layer)
//! ```

pub mod artifact;
pub mod compose;
pub mod loader;
pub mod store;
pub mod synthetic;

pub use artifact::{LayerOrigin, WeightArtifact, WeightData, WeightLayer};
pub use store::{LoadReport, WeightSource, WeightStore};
