//! Configuration for taxlens.
//! TOML-based; every section falls back to compiled defaults.

pub mod defaults;
pub mod embedding_config;
pub mod explanation_config;
pub mod noise_config;
pub mod observability_config;
pub mod retrieval_config;
pub mod taxlens_config;
pub mod weights_config;

pub use embedding_config::EmbeddingConfig;
pub use explanation_config::ExplanationConfig;
pub use noise_config::NoiseConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use taxlens_config::TaxlensConfig;
pub use weights_config::WeightsConfig;
