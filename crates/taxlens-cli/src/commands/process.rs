use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use taxlens_core::models::InvoiceRecord;
use taxlens_core::TaxlensConfig;
use taxlens_engine::Pipeline;

use super::reports;

pub fn run(config: TaxlensConfig, input: &Path) -> Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let records = parse_records(&content).with_context(|| format!("parsing {}", input.display()))?;

    let pipeline = Pipeline::init(config);
    let results = pipeline.process_batch(&records);
    println!("{}", serde_json::to_string_pretty(&reports(&records, results))?);
    Ok(())
}

/// A JSON array of records, or a single record object.
pub fn parse_records(content: &str) -> Result<Vec<InvoiceRecord>> {
    let value: Value = serde_json::from_str(content)?;
    let records = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        other => vec![serde_json::from_value(other)?],
    };
    Ok(records)
}
