//! # taxlens-engine
//!
//! Detects rule violations on invoices and explains each one.
//!
//! ```text
//! Pipeline::init(config)
//! ├── WeightStore::load     (artifact dir or nothing)
//! └── VectorIndex::build    (books dir or builtin corpus)
//!
//! Pipeline::process(record)
//! ├── IAnomalyDetector::detect
//! └── ExplanationComposer::explain, once per issue
//! ```

pub mod detector;
pub mod pipeline;
pub mod tracing_setup;

pub use detector::RuleBasedDetector;
pub use pipeline::{Pipeline, PipelineBuilder, PipelineSummary};
