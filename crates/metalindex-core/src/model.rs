use crate::error::IndexError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One measured metal in one water sample.
///
/// `concentration`, `standard` and `ideal` share a unit (normally mg/L).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetalRecord {
    /// Display name, also the lookup key into the reference tables
    /// (e.g. "Lead (Pb)").
    pub name: String,
    pub concentration: Decimal,
    /// Regulatory permissible limit.
    pub standard: Decimal,
    /// Ideal (background) value.
    #[serde(default)]
    pub ideal: Decimal,
    /// Explicit HPI weight. Derived as `1 / standard` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,
    /// Reference dose override in mg/kg/day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_dose: Option<Decimal>,
    /// Cancer slope factor override in (mg/kg/day)^-1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope_factor: Option<Decimal>,
    /// Years of exposure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure_duration: Option<Decimal>,
    /// Kilograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_weight: Option<Decimal>,
    /// Litres of water per day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intake_rate: Option<Decimal>,
}

impl MetalRecord {
    /// A record with only the required fields set.
    pub fn new(name: impl Into<String>, concentration: Decimal, standard: Decimal) -> Self {
        MetalRecord {
            name: name.into(),
            concentration,
            standard,
            ideal: Decimal::ZERO,
            weight: None,
            reference_dose: None,
            slope_factor: None,
            exposure_duration: None,
            body_weight: None,
            intake_rate: None,
        }
    }

    pub fn with_ideal(mut self, ideal: Decimal) -> Self {
        self.ideal = ideal;
        self
    }

    pub fn with_weight(mut self, weight: Decimal) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_reference_dose(mut self, rfd: Decimal) -> Self {
        self.reference_dose = Some(rfd);
        self
    }

    pub fn with_slope_factor(mut self, sf: Decimal) -> Self {
        self.slope_factor = Some(sf);
        self
    }

    pub fn with_exposure(
        mut self,
        duration_years: Decimal,
        body_weight_kg: Decimal,
        intake_l_per_day: Decimal,
    ) -> Self {
        self.exposure_duration = Some(duration_years);
        self.body_weight = Some(body_weight_kg);
        self.intake_rate = Some(intake_l_per_day);
        self
    }
}

/// A geolocated water sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    pub latitude: f64,
    pub longitude: f64,
    pub metals: Vec<MetalRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_id: Option<String>,
}

/// Reject metal lists that no calculator can evaluate.
///
/// Every calculator calls this before touching the data, so an empty list or
/// a negative measurement fails the same way everywhere. Negative values are
/// rejected because every index is defined to be non-negative.
pub fn validate_metals(metals: &[MetalRecord]) -> Result<(), IndexError> {
    if metals.is_empty() {
        return Err(IndexError::InvalidInput("no metal data provided".into()));
    }

    for metal in metals {
        if metal.concentration < Decimal::ZERO {
            return Err(IndexError::InvalidInput(format!(
                "metal '{}' has negative concentration {}",
                metal.name, metal.concentration
            )));
        }
        if metal.standard < Decimal::ZERO {
            return Err(IndexError::InvalidInput(format!(
                "metal '{}' has negative standard {}",
                metal.name, metal.standard
            )));
        }
        if let Some(weight) = metal.weight.filter(|w| *w < Decimal::ZERO) {
            return Err(IndexError::InvalidInput(format!(
                "metal '{}' has negative weight {}",
                metal.name, weight
            )));
        }
    }

    Ok(())
}

/// The indices the engine can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndexKind {
    Hpi,
    Mei,
    MetalIndex,
    RiskIndex,
    HazardQuotient,
    HazardIndex,
    CarcinogenicRisk,
    NonCarcinogenicRisk,
}

impl IndexKind {
    pub const ALL: [IndexKind; 8] = [
        IndexKind::Hpi,
        IndexKind::Mei,
        IndexKind::MetalIndex,
        IndexKind::RiskIndex,
        IndexKind::HazardQuotient,
        IndexKind::HazardIndex,
        IndexKind::CarcinogenicRisk,
        IndexKind::NonCarcinogenicRisk,
    ];

    /// Stable identifier used on the command line and in JSON.
    pub fn key(&self) -> &'static str {
        match self {
            IndexKind::Hpi => "hpi",
            IndexKind::Mei => "mei",
            IndexKind::MetalIndex => "metal-index",
            IndexKind::RiskIndex => "risk-index",
            IndexKind::HazardQuotient => "hazard-quotient",
            IndexKind::HazardIndex => "hazard-index",
            IndexKind::CarcinogenicRisk => "carcinogenic-risk",
            IndexKind::NonCarcinogenicRisk => "non-carcinogenic-risk",
        }
    }

    /// Accepts the stable key as well as common abbreviations ("mi", "hq", "cr").
    pub fn from_str_loose(s: &str) -> Option<IndexKind> {
        let lower = s.trim().to_lowercase().replace('_', "-");
        match lower.as_str() {
            "hpi" => Some(IndexKind::Hpi),
            "mei" => Some(IndexKind::Mei),
            "mi" | "metal-index" => Some(IndexKind::MetalIndex),
            "ri" | "risk-index" => Some(IndexKind::RiskIndex),
            "hq" | "hazard-quotient" => Some(IndexKind::HazardQuotient),
            "hi" | "hazard-index" => Some(IndexKind::HazardIndex),
            "cr" | "carcinogenic-risk" => Some(IndexKind::CarcinogenicRisk),
            "ncr" | "non-carcinogenic-risk" => Some(IndexKind::NonCarcinogenicRisk),
            _ => None,
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Hpi => write!(f, "Heavy Metal Pollution Index"),
            IndexKind::Mei => write!(f, "Metal Evaluation Index"),
            IndexKind::MetalIndex => write!(f, "Metal Index"),
            IndexKind::RiskIndex => write!(f, "Risk Index"),
            IndexKind::HazardQuotient => write!(f, "Hazard Quotient"),
            IndexKind::HazardIndex => write!(f, "Hazard Index"),
            IndexKind::CarcinogenicRisk => write!(f, "Carcinogenic Risk"),
            IndexKind::NonCarcinogenicRisk => write!(f, "Non-Carcinogenic Risk"),
        }
    }
}
