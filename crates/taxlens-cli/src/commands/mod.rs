pub mod demo;
pub mod generate;
pub mod process;

use serde::Serialize;
use taxlens_core::models::{InvoiceRecord, ProcessResult};

/// One line of CLI output: the invoice label next to its result.
#[derive(Serialize)]
pub struct RecordReport<'a> {
    pub invoice: &'a str,
    #[serde(flatten)]
    pub result: ProcessResult,
}

pub fn reports<'a>(records: &'a [InvoiceRecord], results: Vec<ProcessResult>) -> Vec<RecordReport<'a>> {
    records
        .iter()
        .zip(results)
        .map(|(record, result)| RecordReport {
            invoice: record.label(),
            result,
        })
        .collect()
}
