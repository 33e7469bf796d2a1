//! # taxlens-embeddings
//!
//! Text embeddings and the randomness behind them.
//!
//! ## Architecture
//!
//! ```text
//! CodepointEmbedder (IEmbeddingProvider)
//! ├── prefix: first 100 chars → code points (zero-padded)
//! ├── tail:   noise bytes from an INoiseSource
//! └── scale:  every component / 255
//!
//! INoiseSource
//! ├── SeededNoise   (production, StdRng)
//! └── Deterministic (test double, no noise)
//!
//! similarity
//! └── cosine with epsilon-padded norms, truncating to the shorter vector
//! ```

pub mod noise;
pub mod providers;
pub mod similarity;

pub use noise::{noise_from_config, Deterministic, SeededNoise};
pub use providers::CodepointEmbedder;
