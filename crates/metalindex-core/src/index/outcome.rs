use crate::index::bands::RiskLevel;
use crate::index::carcinogenic::CrClass;
use crate::index::contamination::{MeiClass, MiClass};
use crate::index::hazard::{HiClass, HqClass, NcrClass};
use crate::index::hpi::HpiClass;
use crate::index::risk::RiClass;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One metal's contribution to an index, in caller input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetalContribution {
    pub metal: String,
    pub value: Decimal,
}

impl MetalContribution {
    pub(crate) fn new(metal: &str, value: Decimal) -> Self {
        MetalContribution {
            metal: metal.to_string(),
            value,
        }
    }
}

/// Heavy Metal Pollution Index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HpiResult {
    /// Rounded to 2 decimals.
    pub hpi_value: Decimal,
    pub classification: HpiClass,
    pub risk_level: RiskLevel,
    /// Sub-index (quality rating) per metal, rounded to 2 decimals.
    pub individual_ratings: Vec<MetalContribution>,
}

/// Metal Evaluation Index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeiResult {
    /// Rounded to 3 decimals.
    pub mei_value: Decimal,
    pub classification: MeiClass,
    /// Contamination factor (C/S) per metal, rounded to 3 decimals.
    pub contamination_factors: Vec<MetalContribution>,
}

/// Metal Index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetalIndexResult {
    pub mi_value: Decimal,
    pub classification: MiClass,
    pub individual_indices: Vec<MetalContribution>,
}

/// Toxicity-weighted Risk Index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskIndexResult {
    pub ri_value: Decimal,
    pub classification: RiClass,
    pub individual_risks: Vec<MetalContribution>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardQuotientResult {
    /// HQ per metal, rounded to 4 decimals.
    pub individual_hq: Vec<MetalContribution>,
    /// Sum of unrounded HQs, rounded to 4 decimals.
    pub total_hq: Decimal,
    pub classification: HqClass,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardIndexResult {
    /// Equal to the hazard quotient total.
    pub hi_value: Decimal,
    pub classification: HiClass,
    pub individual_hq: Vec<MetalContribution>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonCarcinogenicRiskResult {
    pub individual_hq: Vec<MetalContribution>,
    /// Equal to the hazard quotient total.
    pub hazard_index: Decimal,
    pub classification: NcrClass,
    pub risk_level: RiskLevel,
}

/// A metal's lifetime cancer risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarcinogenicContribution {
    pub metal: String,
    /// Rounded to 8 decimals. Exactly zero when no slope factor is known.
    pub value: Decimal,
    /// The slope factor applied, or `None` when the metal was not assessed.
    pub slope_factor: Option<Decimal>,
}

impl CarcinogenicContribution {
    /// True when a slope factor was resolved and the risk was computed.
    pub fn is_assessed(&self) -> bool {
        self.slope_factor.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarcinogenicRiskResult {
    pub individual_cr: Vec<CarcinogenicContribution>,
    /// Rounded to 8 decimals.
    pub total_cr: Decimal,
    pub classification: CrClass,
    pub risk_level: RiskLevel,
    /// Metals with no slope factor (explicit or tabled).
    pub unassessed_metals: Vec<String>,
}

/// All eight indices for one sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComprehensiveReport {
    pub hpi: HpiResult,
    pub mei: MeiResult,
    pub metal_index: MetalIndexResult,
    pub risk_index: RiskIndexResult,
    pub hazard_quotient: HazardQuotientResult,
    pub hazard_index: HazardIndexResult,
    pub carcinogenic_risk: CarcinogenicRiskResult,
    pub non_carcinogenic_risk: NonCarcinogenicRiskResult,
}

/// HPI and MEI for one sample of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub sample_id: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub hpi: HpiResult,
    pub mei: MeiResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub results: Vec<BatchEntry>,
    pub count: usize,
}
