/// Weight store errors.
#[derive(Debug, thiserror::Error)]
pub enum WeightError {
    #[error("artifact {id} could not be loaded: {reason}")]
    ArtifactLoad { id: String, reason: String },

    #[error("shape mismatch: cannot compose {left_rows}x{left_cols} with {right_rows}x{right_cols}")]
    ShapeMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("artifact directory unreadable: {path}: {reason}")]
    DirectoryUnreadable { path: String, reason: String },
}
