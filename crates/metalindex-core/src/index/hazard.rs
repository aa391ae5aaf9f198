//! Non-carcinogenic hazard: HQ, HI and the non-carcinogenic risk view.
//!
//! All three are one computation (Σ CDI/RfD) read through three different
//! band sets, so the per-metal math lives in [`hazard_quotients`] only.

use crate::error::IndexError;
use crate::exposure::{chronic_daily_intake, AveragingMode};
use crate::index::bands::{BandTable, Edge, RiskLevel};
use crate::index::outcome::{
    HazardIndexResult, HazardQuotientResult, MetalContribution, NonCarcinogenicRiskResult,
};
use crate::index::ratio_or_zero;
use crate::model::{validate_metals, MetalRecord};
use crate::reference::{self, DEFAULT_REFERENCE_DOSE};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HqClass {
    #[serde(rename = "Acceptable risk")]
    Acceptable,
    #[serde(rename = "Low risk")]
    Low,
    #[serde(rename = "Moderate risk")]
    Moderate,
    #[serde(rename = "High risk")]
    High,
}

impl fmt::Display for HqClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HqClass::Acceptable => write!(f, "Acceptable risk"),
            HqClass::Low => write!(f, "Low risk"),
            HqClass::Moderate => write!(f, "Moderate risk"),
            HqClass::High => write!(f, "High risk"),
        }
    }
}

pub const HQ_BANDS: BandTable<HqClass> = BandTable {
    edge: Edge::AtMost,
    bounded: &[
        (dec!(1.0), HqClass::Acceptable),
        (dec!(4.0), HqClass::Low),
        (dec!(10.0), HqClass::Moderate),
    ],
    top: HqClass::High,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HiClass {
    #[serde(rename = "No significant risk")]
    NoSignificant,
    #[serde(rename = "Low risk")]
    Low,
    #[serde(rename = "Moderate risk")]
    Moderate,
    #[serde(rename = "High risk")]
    High,
}

impl fmt::Display for HiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HiClass::NoSignificant => write!(f, "No significant risk"),
            HiClass::Low => write!(f, "Low risk"),
            HiClass::Moderate => write!(f, "Moderate risk"),
            HiClass::High => write!(f, "High risk"),
        }
    }
}

pub const HI_BANDS: BandTable<HiClass> = BandTable {
    edge: Edge::AtMost,
    bounded: &[
        (dec!(1.0), HiClass::NoSignificant),
        (dec!(4.0), HiClass::Low),
        (dec!(10.0), HiClass::Moderate),
    ],
    top: HiClass::High,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NcrClass {
    #[serde(rename = "No risk")]
    NoRisk,
    #[serde(rename = "Acceptable risk")]
    Acceptable,
    #[serde(rename = "Low risk")]
    Low,
    #[serde(rename = "Moderate risk")]
    Moderate,
    #[serde(rename = "High risk")]
    High,
}

impl NcrClass {
    pub fn risk_level(&self) -> RiskLevel {
        match self {
            NcrClass::NoRisk => RiskLevel::Safe,
            NcrClass::Acceptable => RiskLevel::Low,
            NcrClass::Low => RiskLevel::Moderate,
            NcrClass::Moderate => RiskLevel::High,
            NcrClass::High => RiskLevel::VeryHigh,
        }
    }
}

impl fmt::Display for NcrClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NcrClass::NoRisk => write!(f, "No risk"),
            NcrClass::Acceptable => write!(f, "Acceptable risk"),
            NcrClass::Low => write!(f, "Low risk"),
            NcrClass::Moderate => write!(f, "Moderate risk"),
            NcrClass::High => write!(f, "High risk"),
        }
    }
}

pub const NCR_BANDS: BandTable<NcrClass> = BandTable {
    edge: Edge::AtMost,
    bounded: &[
        (dec!(0.1), NcrClass::NoRisk),
        (dec!(1.0), NcrClass::Acceptable),
        (dec!(4.0), NcrClass::Low),
        (dec!(10.0), NcrClass::Moderate),
    ],
    top: NcrClass::High,
};

/// Per-metal hazard quotients for one sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HazardQuotients {
    /// HQ per metal, rounded to 4 decimals.
    pub individual: Vec<MetalContribution>,
    /// Sum of the unrounded quotients.
    pub total_raw: Decimal,
}

impl HazardQuotients {
    /// Reported total (4 decimals). HI and the non-carcinogenic view classify
    /// this rounded value; HQ classifies the raw sum.
    pub fn total(&self) -> Decimal {
        self.total_raw.round_dp(4)
    }

    pub fn quotient_result(&self) -> HazardQuotientResult {
        HazardQuotientResult {
            individual_hq: self.individual.clone(),
            total_hq: self.total(),
            classification: HQ_BANDS.classify(self.total_raw),
        }
    }

    pub fn index_result(&self) -> HazardIndexResult {
        let hi = self.total();
        HazardIndexResult {
            hi_value: hi,
            classification: HI_BANDS.classify(hi),
            individual_hq: self.individual.clone(),
        }
    }

    pub fn non_carcinogenic_result(&self) -> NonCarcinogenicRiskResult {
        let hi = self.total();
        let classification = NCR_BANDS.classify(hi);
        NonCarcinogenicRiskResult {
            individual_hq: self.individual.clone(),
            hazard_index: hi,
            classification,
            risk_level: classification.risk_level(),
        }
    }
}

/// The record's RfD override when positive, else the tabled value.
pub fn resolve_reference_dose(metal: &MetalRecord) -> Decimal {
    match metal.reference_dose {
        Some(rfd) if rfd > Decimal::ZERO => rfd,
        _ => {
            if reference::tabled_reference_dose(&metal.name).is_none() {
                debug!(metal = %metal.name, rfd = %DEFAULT_REFERENCE_DOSE, "no reference dose, using default");
            }
            reference::reference_dose(&metal.name)
        }
    }
}

/// HQi = CDI / RfD with CDI averaged over the exposure duration.
pub fn hazard_quotients(metals: &[MetalRecord]) -> Result<HazardQuotients, IndexError> {
    validate_metals(metals)?;

    let mut total_raw = Decimal::ZERO;
    let mut individual = Vec::with_capacity(metals.len());

    for metal in metals {
        let cdi = chronic_daily_intake(metal, AveragingMode::NonCarcinogenic)?;
        let hq = ratio_or_zero(cdi, resolve_reference_dose(metal), &metal.name)?;
        total_raw = total_raw
            .checked_add(hq)
            .ok_or_else(|| IndexError::out_of_range(&metal.name))?;
        individual.push(MetalContribution::new(&metal.name, hq.round_dp(4)));
    }

    debug!(total_hq = %total_raw, metals = metals.len(), "computed hazard quotients");

    Ok(HazardQuotients {
        individual,
        total_raw,
    })
}

/// Hazard Quotient: HQ = CDI / RfD per metal, summed.
pub fn calculate_hazard_quotient(
    metals: &[MetalRecord],
) -> Result<HazardQuotientResult, IndexError> {
    Ok(hazard_quotients(metals)?.quotient_result())
}

/// Hazard Index: HI = Σ HQi.
pub fn calculate_hazard_index(metals: &[MetalRecord]) -> Result<HazardIndexResult, IndexError> {
    Ok(hazard_quotients(metals)?.index_result())
}

/// Non-carcinogenic risk, the hazard index read through finer bands.
pub fn calculate_non_carcinogenic_risk(
    metals: &[MetalRecord],
) -> Result<NonCarcinogenicRiskResult, IndexError> {
    Ok(hazard_quotients(metals)?.non_carcinogenic_result())
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
    fn test_three_metal_quotients() {
        let result = calculate_hazard_quotient(&three_metals()).unwrap();
        let values: Vec<Decimal> = result.individual_hq.iter().map(|c| c.value).collect();
        // CDI = C × 2 / 70; Pb / 0.0036, Cd / 0.001, As / 0.0003
        assert_eq!(values, vec![dec!(0.6349), dec!(0.4286), dec!(4.2857)]);
        assert_eq!(result.total_hq, dec!(5.3492));
        assert_eq!(result.classification, HqClass::Moderate);
    }

    #[test]
    fn test_three_views_share_total() {
        let metals = three_metals();
        let hq = calculate_hazard_quotient(&metals).unwrap();
        let hi = calculate_hazard_index(&metals).unwrap();
        let ncr = calculate_non_carcinogenic_risk(&metals).unwrap();
        assert_eq!(hq.total_hq, hi.hi_value);
        assert_eq!(hq.total_hq, ncr.hazard_index);
        assert_eq!(hq.individual_hq, hi.individual_hq);
        assert_eq!(hi.classification, HiClass::Moderate);
        assert_eq!(ncr.classification, NcrClass::Moderate);
        assert_eq!(ncr.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_unknown_metal_default_rfd() {
        // CDI = 0.07 × 2 / 70 = 0.002; / 0.001 = 2
        let metals = vec![MetalRecord::new("Unknown", dec!(0.07), dec!(1))];
        let result = calculate_hazard_quotient(&metals).unwrap();
        assert_eq!(result.total_hq, dec!(2));
        assert_eq!(result.classification, HqClass::Low);
    }

    #[test]
    fn test_reference_dose_override() {
        let metal = MetalRecord::new("Lead (Pb)", dec!(0.07), dec!(0.01)).with_reference_dose(dec!(0.002));
        assert_eq!(resolve_reference_dose(&metal), dec!(0.002));
        assert_eq!(calculate_hazard_index(&[metal]).unwrap().hi_value, dec!(1));
    }

    #[test]
    fn test_zero_reference_dose_override_falls_back_to_table() {
        let metal = MetalRecord::new("Zinc (Zn)", dec!(1), dec!(3)).with_reference_dose(Decimal::ZERO);
        assert_eq!(resolve_reference_dose(&metal), dec!(0.3));
    }

    #[test]
    fn test_band_edges_inclusive() {
        assert_eq!(HQ_BANDS.classify(dec!(1.0)), HqClass::Acceptable);
        assert_eq!(HI_BANDS.classify(dec!(1.0)), HiClass::NoSignificant);
        assert_eq!(NCR_BANDS.classify(dec!(0.1)), NcrClass::NoRisk);
        assert_eq!(NCR_BANDS.classify(dec!(0.1001)), NcrClass::Acceptable);
        assert_eq!(HQ_BANDS.classify(dec!(10.0)), HqClass::Moderate);
        assert_eq!(HI_BANDS.classify(dec!(10.0001)), HiClass::High);
        assert_eq!(NCR_BANDS.classify(dec!(11)), NcrClass::High);
    }

    #[test]
    fn test_hi_classifies_rounded_total() {
        let hq = HazardQuotients {
            individual: vec![],
            total_raw: dec!(1.00004),
        };
        assert_eq!(hq.quotient_result().classification, HqClass::Low);
        assert_eq!(hq.index_result().classification, HiClass::NoSignificant);
        assert_eq!(hq.index_result().hi_value, dec!(1.0000));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(calculate_hazard_quotient(&[]).is_err());
        assert!(calculate_hazard_index(&[]).is_err());
        assert!(calculate_non_carcinogenic_risk(&[]).is_err());
    }

    #[test]
    fn test_overflowing_quotient_is_an_error() {
        let metal = MetalRecord::new("Lead (Pb)", dec!(1000000000000000000000), dec!(0.01))
            .with_reference_dose(dec!(0.0000000000000001));
        assert!(matches!(
            calculate_hazard_quotient(&[metal]),
            Err(IndexError::InvalidInput(_))
        ));
    }
}
