use crate::error::IndexError;
use crate::exposure::{chronic_daily_intake, AveragingMode};
use crate::index::bands::{BandTable, Edge, RiskLevel};
use crate::index::outcome::{CarcinogenicContribution, CarcinogenicRiskResult};
use crate::model::{validate_metals, MetalRecord};
use crate::reference;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrClass {
    #[serde(rename = "Negligible risk")]
    Negligible,
    #[serde(rename = "Low risk")]
    Low,
    #[serde(rename = "Moderate risk")]
    Moderate,
    #[serde(rename = "High risk")]
    High,
}

impl CrClass {
    pub fn risk_level(&self) -> RiskLevel {
        match self {
            CrClass::Negligible | CrClass::Low => RiskLevel::Acceptable,
            CrClass::Moderate => RiskLevel::Caution,
            CrClass::High => RiskLevel::Unacceptable,
        }
    }
}

impl fmt::Display for CrClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrClass::Negligible => write!(f, "Negligible risk"),
            CrClass::Low => write!(f, "Low risk"),
            CrClass::Moderate => write!(f, "Moderate risk"),
            CrClass::High => write!(f, "High risk"),
        }
    }
}

pub const CR_BANDS: BandTable<CrClass> = BandTable {
    edge: Edge::AtMost,
    bounded: &[
        (dec!(0.000001), CrClass::Negligible),
        (dec!(0.0001), CrClass::Low),
        (dec!(0.001), CrClass::Moderate),
    ],
    top: CrClass::High,
};

/// The record's slope factor override when positive, else the tabled value.
pub fn resolve_slope_factor(metal: &MetalRecord) -> Option<Decimal> {
    match metal.slope_factor {
        Some(sf) if sf > Decimal::ZERO => Some(sf),
        _ => reference::slope_factor(&metal.name),
    }
}

/// Lifetime carcinogenic risk: CR = CDI × SF, CDI averaged over 70 years.
///
/// Metals without a slope factor are reported with a risk of exactly zero and
/// listed in `unassessed_metals`.
pub fn calculate_carcinogenic_risk(
    metals: &[MetalRecord],
) -> Result<CarcinogenicRiskResult, IndexError> {
    validate_metals(metals)?;

    let mut total = Decimal::ZERO;
    let mut individual_cr = Vec::with_capacity(metals.len());
    let mut unassessed_metals = Vec::new();

    for metal in metals {
        let slope_factor = resolve_slope_factor(metal);
        let value = match slope_factor {
            Some(sf) => {
                let cr = chronic_daily_intake(metal, AveragingMode::Lifetime)?
                    .checked_mul(sf)
                    .ok_or_else(|| IndexError::out_of_range(&metal.name))?;
                total = total
                    .checked_add(cr)
                    .ok_or_else(|| IndexError::out_of_range(&metal.name))?;
                cr.round_dp(8)
            }
            None => {
                debug!(metal = %metal.name, "no slope factor, carcinogenic risk not assessed");
                unassessed_metals.push(metal.name.clone());
                Decimal::ZERO
            }
        };
        individual_cr.push(CarcinogenicContribution {
            metal: metal.name.clone(),
            value,
            slope_factor,
        });
    }

    let classification = CR_BANDS.classify(total);

    debug!(total_cr = %total, %classification, unassessed = unassessed_metals.len(), "computed CR");

    Ok(CarcinogenicRiskResult {
        individual_cr,
        total_cr: total.round_dp(8),
        classification,
        risk_level: classification.risk_level(),
        unassessed_metals,
    })
}
