use anyhow::Result;
use taxlens_core::models::InvoiceRecord;
use taxlens_core::TaxlensConfig;
use taxlens_engine::Pipeline;
use tracing::info;

use super::reports;

/// The three reference invoices: an ITC over-claim, tax on a reverse-charge
/// invoice, and a clean one.
pub fn reference_invoices() -> Vec<InvoiceRecord> {
    vec![
        InvoiceRecord {
            invoice_number: Some("INV-2024-001".into()),
            itc_claimed: Some(15000.0),
            itc_eligible: Some(12000.0),
            reverse_charge: Some(false),
            cgst: 500.0,
            sgst: 500.0,
            ..Default::default()
        },
        InvoiceRecord {
            invoice_number: Some("INV-2024-002".into()),
            itc_claimed: Some(8000.0),
            itc_eligible: Some(10000.0),
            reverse_charge: Some(true),
            cgst: 300.0,
            sgst: 300.0,
            ..Default::default()
        },
        InvoiceRecord {
            invoice_number: Some("INV-2024-003".into()),
            itc_claimed: Some(5000.0),
            itc_eligible: Some(5000.0),
            reverse_charge: Some(false),
            cgst: 250.0,
            sgst: 250.0,
            ..Default::default()
        },
    ]
}

pub fn run(config: TaxlensConfig) -> Result<()> {
    let pipeline = Pipeline::init(config);
    let summary = pipeline.summary();
    info!(
        fragments = summary.fragments,
        artifacts = summary.artifacts_loaded + summary.artifacts_synthesized,
        "demo pipeline ready"
    );

    let records = reference_invoices();
    let results = pipeline.process_batch(&records);
    println!("{}", serde_json::to_string_pretty(&reports(&records, results))?);
    Ok(())
}
