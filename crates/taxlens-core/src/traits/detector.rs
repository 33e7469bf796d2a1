use crate::models::{InvoiceRecord, Issue};

/// Produces rule violations for a record.
pub trait IAnomalyDetector: Send + Sync {
    /// Issues in a stable order. Empty means the record is compliant.
    fn detect(&self, record: &InvoiceRecord) -> Vec<Issue>;

    fn name(&self) -> &str;
}
