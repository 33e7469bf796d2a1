//! Error handling for taxlens.
//! One error enum per subsystem, `thiserror` only.
//!
//! None of these escape `Pipeline::init` or `Pipeline::process`: the weight
//! store and the index recover locally and record a `DegradationEvent`.

pub mod config_error;
pub mod embedding_error;
pub mod retrieval_error;
pub mod taxlens_error;
pub mod weight_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use retrieval_error::RetrievalError;
pub use taxlens_error::{TaxlensError, TaxlensResult};
pub use weight_error::WeightError;
