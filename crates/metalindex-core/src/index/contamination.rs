//! Contamination-factor indices: MEI (mean of C/S) and MI (sum of C/S).

use crate::error::IndexError;
use crate::index::bands::{BandTable, Edge};
use crate::index::outcome::{MeiResult, MetalContribution, MetalIndexResult};
use crate::index::ratio_or_zero;
use crate::model::{validate_metals, MetalRecord};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeiClass {
    #[serde(rename = "Low contamination")]
    Low,
    #[serde(rename = "Moderate contamination")]
    Moderate,
    #[serde(rename = "Considerable contamination")]
    Considerable,
    #[serde(rename = "Very high contamination")]
    VeryHigh,
}

impl fmt::Display for MeiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeiClass::Low => write!(f, "Low contamination"),
            MeiClass::Moderate => write!(f, "Moderate contamination"),
            MeiClass::Considerable => write!(f, "Considerable contamination"),
            MeiClass::VeryHigh => write!(f, "Very high contamination"),
        }
    }
}

pub const MEI_BANDS: BandTable<MeiClass> = BandTable {
    edge: Edge::Below,
    bounded: &[
        (dec!(0.5), MeiClass::Low),
        (dec!(1.0), MeiClass::Moderate),
        (dec!(2.0), MeiClass::Considerable),
    ],
    top: MeiClass::VeryHigh,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MiClass {
    Uncontaminated,
    #[serde(rename = "Slightly contaminated")]
    Slightly,
    #[serde(rename = "Moderately contaminated")]
    Moderately,
    #[serde(rename = "Highly contaminated")]
    Highly,
    #[serde(rename = "Extremely contaminated")]
    Extremely,
}

impl fmt::Display for MiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MiClass::Uncontaminated => write!(f, "Uncontaminated"),
            MiClass::Slightly => write!(f, "Slightly contaminated"),
            MiClass::Moderately => write!(f, "Moderately contaminated"),
            MiClass::Highly => write!(f, "Highly contaminated"),
            MiClass::Extremely => write!(f, "Extremely contaminated"),
        }
    }
}

pub const MI_BANDS: BandTable<MiClass> = BandTable {
    edge: Edge::Below,
    bounded: &[
        (dec!(0.3), MiClass::Uncontaminated),
        (dec!(1.0), MiClass::Slightly),
        (dec!(2.0), MiClass::Moderately),
        (dec!(4.0), MiClass::Highly),
    ],
    top: MiClass::Extremely,
};

/// Contamination factor C/S, zero when the standard is not positive.
pub fn contamination_factor(metal: &MetalRecord) -> Result<Decimal, IndexError> {
    ratio_or_zero(metal.concentration, metal.standard, &metal.name)
}

/// Metal Evaluation Index: MEI = Σ(Ci/Si) / n.
pub fn calculate_mei(metals: &[MetalRecord]) -> Result<MeiResult, IndexError> {
    validate_metals(metals)?;

    let (total, contamination_factors) = sum_factors(metals)?;
    let mei = total / Decimal::from(metals.len());
    let classification = MEI_BANDS.classify(mei);

    debug!(mei = %mei, %classification, metals = metals.len(), "computed MEI");

    Ok(MeiResult {
        mei_value: mei.round_dp(3),
        classification,
        contamination_factors,
    })
}

/// Metal Index: MI = Σ(Ci/Si).
pub fn calculate_metal_index(metals: &[MetalRecord]) -> Result<MetalIndexResult, IndexError> {
    validate_metals(metals)?;

    let (total, individual_indices) = sum_factors(metals)?;
    let classification = MI_BANDS.classify(total);

    debug!(mi = %total, %classification, metals = metals.len(), "computed MI");

    Ok(MetalIndexResult {
        mi_value: total.round_dp(3),
        classification,
        individual_indices,
    })
}

/// Unrounded sum of C/S plus per-metal values rounded for display.
fn sum_factors(metals: &[MetalRecord]) -> Result<(Decimal, Vec<MetalContribution>), IndexError> {
    let mut total = Decimal::ZERO;
    let mut factors = Vec::with_capacity(metals.len());
    for metal in metals {
        let cf = contamination_factor(metal)?;
        total = total
            .checked_add(cf)
            .ok_or_else(|| IndexError::out_of_range(&metal.name))?;
        factors.push(MetalContribution::new(&metal.name, cf.round_dp(3)));
    }
    Ok((total, factors))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_metals() -> Vec<MetalRecord> {
        vec![
            MetalRecord::new("Lead (Pb)", dec!(0.08), dec!(0.01)),
            MetalRecord::new("Cadmium (Cd)", dec!(0.015), dec!(0.003)),
            MetalRecord::new("Arsenic (As)", dec!(0.045), dec!(0.01)),
        ]
    }

    #[test]
    fn test_metal_index_three_metals() {
        let result = calculate_metal_index(&three_metals()).unwrap();
        assert_eq!(result.mi_value, dec!(17.5));
        assert_eq!(result.classification, MiClass::Extremely);
        let values: Vec<Decimal> = result.individual_indices.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![dec!(8), dec!(5), dec!(4.5)]);
    }

    #[test]
    fn test_mei_three_metals() {
        // 17.5 / 3 = 5.8333...
        let result = calculate_mei(&three_metals()).unwrap();
        assert_eq!(result.mei_value, dec!(5.833));
        assert_eq!(result.classification, MeiClass::VeryHigh);
    }

    #[test]
    fn test_zero_standard_contributes_zero() {
        let metals = vec![
            MetalRecord::new("Iron (Fe)", dec!(0.15), dec!(0.3)),
            MetalRecord::new("Odd", dec!(5), Decimal::ZERO),
        ];
        let mi = calculate_metal_index(&metals).unwrap();
        assert_eq!(mi.individual_indices[1].value, Decimal::ZERO);
        assert_eq!(mi.mi_value, dec!(0.5));

        // Zero-standard metals still count towards n
        let mei = calculate_mei(&metals).unwrap();
        assert_eq!(mei.mei_value, dec!(0.25));
        assert_eq!(mei.classification, MeiClass::Low);
    }

    #[test]
    fn test_total_uses_unrounded_values() {
        // Each factor is 0.0004 and rounds to 0.000 for display,
        // but three of them still sum to 0.0012 -> 0.001.
        let metals: Vec<MetalRecord> = (0..3)
            .map(|i| MetalRecord::new(format!("M{i}"), dec!(0.0004), dec!(1)))
            .collect();
        let result = calculate_metal_index(&metals).unwrap();
        assert!(result.individual_indices.iter().all(|c| c.value.is_zero()));
        assert_eq!(result.mi_value, dec!(0.001));
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(MI_BANDS.classify(dec!(0.3)), MiClass::Slightly);
        assert_eq!(MI_BANDS.classify(dec!(4.0)), MiClass::Extremely);
        assert_eq!(MEI_BANDS.classify(dec!(0.4999)), MeiClass::Low);
        assert_eq!(MEI_BANDS.classify(dec!(2.0)), MeiClass::VeryHigh);
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(calculate_mei(&[]).is_err());
        assert!(calculate_metal_index(&[]).is_err());
    }

    #[test]
    fn test_overflowing_factor_is_not_reported_clean() {
        let metals = vec![MetalRecord::new(
            "Lead (Pb)",
            dec!(100000000000000000000),
            dec!(0.0000000001),
        )];
        assert!(matches!(
            calculate_metal_index(&metals),
            Err(IndexError::InvalidInput(_))
        ));
        assert!(matches!(
            calculate_mei(&metals),
            Err(IndexError::InvalidInput(_))
        ));
    }
}
