use crate::error::IndexError;
use crate::index::bands::{BandTable, Edge};
use crate::index::outcome::{MetalContribution, RiskIndexResult};
use crate::model::{validate_metals, MetalRecord};
use crate::reference::{self, DEFAULT_TOXICITY_FACTOR};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiClass {
    #[serde(rename = "Low risk")]
    Low,
    #[serde(rename = "Moderate risk")]
    Moderate,
    #[serde(rename = "High risk")]
    High,
    #[serde(rename = "Very high risk")]
    VeryHigh,
}

impl fmt::Display for RiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiClass::Low => write!(f, "Low risk"),
            RiClass::Moderate => write!(f, "Moderate risk"),
            RiClass::High => write!(f, "High risk"),
            RiClass::VeryHigh => write!(f, "Very high risk"),
        }
    }
}

pub const RI_BANDS: BandTable<RiClass> = BandTable {
    edge: Edge::Below,
    bounded: &[
        (dec!(150), RiClass::Low),
        (dec!(300), RiClass::Moderate),
        (dec!(600), RiClass::High),
    ],
    top: RiClass::VeryHigh,
};

/// Risk Index: RI = Σ(Ci × Ti), Ti from the toxicity table.
pub fn calculate_risk_index(metals: &[MetalRecord]) -> Result<RiskIndexResult, IndexError> {
    validate_metals(metals)?;

    let mut total = Decimal::ZERO;
    let mut individual_risks = Vec::with_capacity(metals.len());

    for metal in metals {
        if reference::tabled_toxicity_factor(&metal.name).is_none() {
            debug!(metal = %metal.name, factor = %DEFAULT_TOXICITY_FACTOR, "no toxicity factor, using default");
        }
        let risk = metal
            .concentration
            .checked_mul(reference::toxicity_factor(&metal.name))
            .ok_or_else(|| IndexError::out_of_range(&metal.name))?;
        total = total
            .checked_add(risk)
            .ok_or_else(|| IndexError::out_of_range(&metal.name))?;
        individual_risks.push(MetalContribution::new(&metal.name, risk.round_dp(3)));
    }

    let classification = RI_BANDS.classify(total);

    debug!(ri = %total, %classification, metals = metals.len(), "computed RI");

    Ok(RiskIndexResult {
        ri_value: total.round_dp(3),
        classification,
        individual_risks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_metal_uses_default_factor() {
        let result = calculate_risk_index(&[MetalRecord::new("Unknown", dec!(1.0), dec!(1))]).unwrap();
        assert_eq!(result.individual_risks[0].value, dec!(1.0));
        assert_eq!(result.ri_value, dec!(1.0));
        assert_eq!(result.classification, RiClass::Low);
    }

    #[test]
    fn test_toxicity_weighting() {
        // Hg 2 × 40 + Cd 3 × 30 = 170
        let metals = vec![
            MetalRecord::new("Mercury (Hg)", dec!(2), dec!(0.006)),
            MetalRecord::new("Cadmium (Cd)", dec!(3), dec!(0.003)),
        ];
        let result = calculate_risk_index(&metals).unwrap();
        assert_eq!(result.ri_value, dec!(170));
        assert_eq!(result.classification, RiClass::Moderate);
        assert_eq!(result.individual_risks[0].metal, "Mercury (Hg)");
        assert_eq!(result.individual_risks[0].value, dec!(80));
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(RI_BANDS.classify(dec!(149.999)), RiClass::Low);
        assert_eq!(RI_BANDS.classify(dec!(150)), RiClass::Moderate);
        assert_eq!(RI_BANDS.classify(dec!(300)), RiClass::High);
        assert_eq!(RI_BANDS.classify(dec!(600)), RiClass::VeryHigh);
    }

    #[test]
    fn test_exactly_150_is_moderate() {
        let metals = vec![MetalRecord::new("Lead (Pb)", dec!(30), dec!(0.01))];
        let result = calculate_risk_index(&metals).unwrap();
        assert_eq!(result.ri_value, dec!(150));
        assert_eq!(result.classification, RiClass::Moderate);
    }

    #[test]
    fn test_overflowing_risk_is_an_error() {
        let metals = vec![MetalRecord::new("Cadmium (Cd)", Decimal::MAX, dec!(0.003))];
        assert!(matches!(
            calculate_risk_index(&metals),
            Err(IndexError::InvalidInput(_))
        ));
    }
}
