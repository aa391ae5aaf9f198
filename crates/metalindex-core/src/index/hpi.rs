use crate::error::IndexError;
use crate::index::bands::{BandTable, Edge, RiskLevel};
use crate::index::outcome::{HpiResult, MetalContribution};
use crate::index::ratio_or_zero;
use crate::model::{validate_metals, MetalRecord};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

const HUNDRED: Decimal = dec!(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HpiClass {
    Excellent,
    Good,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
    Unsuitable,
}

impl HpiClass {
    pub fn risk_level(&self) -> RiskLevel {
        match self {
            HpiClass::Excellent | HpiClass::Good => RiskLevel::Low,
            HpiClass::Poor => RiskLevel::Medium,
            HpiClass::VeryPoor => RiskLevel::High,
            HpiClass::Unsuitable => RiskLevel::Critical,
        }
    }
}

impl fmt::Display for HpiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HpiClass::Excellent => write!(f, "Excellent"),
            HpiClass::Good => write!(f, "Good"),
            HpiClass::Poor => write!(f, "Poor"),
            HpiClass::VeryPoor => write!(f, "Very Poor"),
            HpiClass::Unsuitable => write!(f, "Unsuitable"),
        }
    }
}

pub const HPI_BANDS: BandTable<HpiClass> = BandTable {
    edge: Edge::Below,
    bounded: &[
        (dec!(25), HpiClass::Excellent),
        (dec!(50), HpiClass::Good),
        (dec!(75), HpiClass::Poor),
        (dec!(100), HpiClass::VeryPoor),
    ],
    top: HpiClass::Unsuitable,
};

/// Heavy Metal Pollution Index (Prasad & Bascaran weighted arithmetic mean).
///
/// HPI = Σ(Wi × Qi) / Σ(Wi), with Wi = 1/Si unless an explicit weight is
/// given and Qi = 100 × (Mi − Ii) / (Si − Ii).
pub fn calculate_hpi(metals: &[MetalRecord]) -> Result<HpiResult, IndexError> {
    validate_metals(metals)?;

    let mut sum_weighted_quality = Decimal::ZERO;
    let mut sum_weights = Decimal::ZERO;
    let mut individual_ratings = Vec::with_capacity(metals.len());

    for metal in metals {
        let weight = relative_weight(metal)?;
        let quality = quality_rating(metal)?;

        sum_weighted_quality = weight
            .checked_mul(quality)
            .and_then(|wq| sum_weighted_quality.checked_add(wq))
            .ok_or_else(|| IndexError::out_of_range(&metal.name))?;
        sum_weights = sum_weights
            .checked_add(weight)
            .ok_or_else(|| IndexError::out_of_range(&metal.name))?;
        individual_ratings.push(MetalContribution::new(&metal.name, quality.round_dp(2)));
    }

    let hpi = ratio_or_zero(sum_weighted_quality, sum_weights, "sample total")?;
    let classification = HPI_BANDS.classify(hpi);

    debug!(hpi = %hpi, %classification, metals = metals.len(), "computed HPI");

    Ok(HpiResult {
        hpi_value: hpi.round_dp(2),
        classification,
        risk_level: classification.risk_level(),
        individual_ratings,
    })
}

/// Wi: the explicit weight, else 1/Si (zero when the standard is zero).
pub fn relative_weight(metal: &MetalRecord) -> Result<Decimal, IndexError> {
    match metal.weight {
        Some(weight) => Ok(weight),
        None => ratio_or_zero(Decimal::ONE, metal.standard, &metal.name),
    }
}

/// Qi, floored at zero but not capped at 100.
///
/// When the standard equals the ideal value the formula is undefined, so the
/// rating is 100 for any concentration above the ideal and 0 otherwise.
pub fn quality_rating(metal: &MetalRecord) -> Result<Decimal, IndexError> {
    if metal.standard == metal.ideal {
        return Ok(if metal.concentration > metal.ideal {
            HUNDRED
        } else {
            Decimal::ZERO
        });
    }

    let rating = metal
        .concentration
        .checked_sub(metal.ideal)
        .and_then(|excess| HUNDRED.checked_mul(excess))
        .zip(metal.standard.checked_sub(metal.ideal))
        .and_then(|(scaled, span)| scaled.checked_div(span))
        .ok_or_else(|| IndexError::out_of_range(&metal.name))?;
    Ok(rating.max(Decimal::ZERO))
}
