/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("fragment {id} has {actual} components, index expects {expected}")]
    DimensionMismatch {
        id: String,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate fragment id: {id}")]
    DuplicateFragment { id: String },

    #[error("failed to read reference document {path}: {reason}")]
    DocumentUnreadable { path: String, reason: String },
}
