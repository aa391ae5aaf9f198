//! Toxicological constants keyed by metal display name.
//!
//! Lookups are exact string matches ("Lead (Pb)", not "lead" or "Pb").
//! Toxicity factors and reference doses are total: an unlisted metal gets the
//! documented default. Slope factors have no default because most metals are
//! not classified as carcinogens by ingestion.

pub mod standards;

pub use standards::{standards, MetalStandard, StandardsTable};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Toxicity factor used for metals missing from the RI table.
pub const DEFAULT_TOXICITY_FACTOR: Decimal = dec!(1.0);

/// Reference dose (mg/kg/day) used for metals missing from the RfD table.
pub const DEFAULT_REFERENCE_DOSE: Decimal = dec!(0.001);

/// Toxicity factor for the Risk Index.
pub fn toxicity_factor(name: &str) -> Decimal {
    tabled_toxicity_factor(name).unwrap_or(DEFAULT_TOXICITY_FACTOR)
}

/// Oral reference dose (EPA IRIS), mg/kg/day.
pub fn reference_dose(name: &str) -> Decimal {
    tabled_reference_dose(name).unwrap_or(DEFAULT_REFERENCE_DOSE)
}

/// Oral cancer slope factor (EPA), (mg/kg/day)^-1. `None` for metals without
/// an established ingestion slope factor.
pub fn slope_factor(name: &str) -> Option<Decimal> {
    match name {
        "Arsenic (As)" => Some(dec!(1.5)),
        "Cadmium (Cd)" => Some(dec!(6.3)),
        "Chromium (Cr)" => Some(dec!(42.0)),
        // lower-bound estimate
        "Lead (Pb)" => Some(dec!(0.0085)),
        "Nickel (Ni)" => Some(dec!(1.7)),
        _ => None,
    }
}

pub(crate) fn tabled_toxicity_factor(name: &str) -> Option<Decimal> {
    match name {
        "Lead (Pb)" => Some(dec!(5.0)),
        "Cadmium (Cd)" => Some(dec!(30.0)),
        "Mercury (Hg)" => Some(dec!(40.0)),
        "Arsenic (As)" => Some(dec!(10.0)),
        "Chromium (Cr)" => Some(dec!(2.0)),
        "Copper (Cu)" => Some(dec!(5.0)),
        "Zinc (Zn)" => Some(dec!(1.0)),
        "Nickel (Ni)" => Some(dec!(5.0)),
        "Iron (Fe)" => Some(dec!(1.0)),
        "Manganese (Mn)" => Some(dec!(1.0)),
        _ => None,
    }
}

pub(crate) fn tabled_reference_dose(name: &str) -> Option<Decimal> {
    match name {
        "Lead (Pb)" => Some(dec!(0.0036)),
        "Cadmium (Cd)" => Some(dec!(0.001)),
        "Mercury (Hg)" => Some(dec!(0.0003)),
        "Arsenic (As)" => Some(dec!(0.0003)),
        "Chromium (Cr)" => Some(dec!(0.003)),
        "Copper (Cu)" => Some(dec!(0.04)),
        "Zinc (Zn)" => Some(dec!(0.3)),
        "Nickel (Ni)" => Some(dec!(0.02)),
        "Iron (Fe)" => Some(dec!(0.7)),
        "Manganese (Mn)" => Some(dec!(0.14)),
        _ => None,
    }
}
