use super::{ConfigError, EmbeddingError, RetrievalError, WeightError};

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum TaxlensError {
    #[error("weight error: {0}")]
    Weight(#[from] WeightError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type TaxlensResult<T> = Result<T, TaxlensError>;
