/// Embedding subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("requested {requested} dimensions, below the {prefix}-character code-point prefix")]
    DimensionsBelowPrefix { requested: usize, prefix: usize },
}
