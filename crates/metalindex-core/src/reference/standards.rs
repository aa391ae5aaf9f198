use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

const STANDARDS_JSON: &str = include_str!("../../data/heavy-metal-standards.json");

static STANDARDS: LazyLock<StandardsTable> = LazyLock::new(|| {
    serde_json::from_str(STANDARDS_JSON).expect("embedded heavy-metal-standards.json is valid")
});

/// Permissible drinking-water limits and toxicological constants for display.
///
/// The calculators never read this table; it exists so clients can prefill
/// sample forms with the regulatory values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardsTable {
    /// Keyed by metal display name.
    pub metals: BTreeMap<String, MetalStandard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetalStandard {
    pub standard: Decimal,
    pub unit: String,
    /// Issuing body (e.g., "WHO").
    pub source: String,
    pub reference_dose: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope_factor: Option<Decimal>,
}

/// Get the heavy-metal standards table.
pub fn standards() -> &'static StandardsTable {
    &STANDARDS
}
