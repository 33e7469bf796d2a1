use serde::{Deserialize, Serialize};

/// An invoice as seen by the anomaly detector.
///
/// Every rule input is optional; a missing field skips the rule that needs
/// it. Unknown keys are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itc_claimed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itc_eligible: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse_charge: Option<bool>,
    #[serde(default)]
    pub cgst: f64,
    #[serde(default)]
    pub sgst: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_gstin: Option<String>,
}

impl InvoiceRecord {
    /// Label used in logs.
    pub fn label(&self) -> &str {
        self.invoice_number.as_deref().unwrap_or("UNKNOWN")
    }
}
