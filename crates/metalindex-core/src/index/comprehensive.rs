use crate::error::IndexError;
use crate::index::bands::BandDescription;
use crate::index::outcome::{
    CarcinogenicRiskResult, ComprehensiveReport, HazardIndexResult, HazardQuotientResult,
    HpiResult, MeiResult, MetalContribution, MetalIndexResult, NonCarcinogenicRiskResult,
    RiskIndexResult,
};
use crate::index::{carcinogenic, contamination, hazard, hpi, risk};
use crate::model::{validate_metals, IndexKind, MetalRecord};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

/// Run every calculator against one sample.
///
/// Fails as a whole if the input is invalid; a partial report is never built.
/// The hazard quotients are computed once and read through the HQ, HI and
/// non-carcinogenic bands.
pub fn calculate_comprehensive(metals: &[MetalRecord]) -> Result<ComprehensiveReport, IndexError> {
    validate_metals(metals)?;

    let quotients = hazard::hazard_quotients(metals)?;

    let report = ComprehensiveReport {
        hpi: hpi::calculate_hpi(metals)?,
        mei: contamination::calculate_mei(metals)?,
        metal_index: contamination::calculate_metal_index(metals)?,
        risk_index: risk::calculate_risk_index(metals)?,
        hazard_quotient: quotients.quotient_result(),
        hazard_index: quotients.index_result(),
        carcinogenic_risk: carcinogenic::calculate_carcinogenic_risk(metals)?,
        non_carcinogenic_risk: quotients.non_carcinogenic_result(),
    };

    debug!(
        metals = metals.len(),
        hpi = %report.hpi.classification,
        hazard_index = %report.hazard_index.hi_value,
        "comprehensive assessment complete"
    );

    Ok(report)
}

/// Result of a single, caller-selected index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IndexOutcome {
    Hpi(HpiResult),
    Mei(MeiResult),
    MetalIndex(MetalIndexResult),
    RiskIndex(RiskIndexResult),
    HazardQuotient(HazardQuotientResult),
    HazardIndex(HazardIndexResult),
    CarcinogenicRisk(CarcinogenicRiskResult),
    NonCarcinogenicRisk(NonCarcinogenicRiskResult),
}

impl IndexOutcome {
    pub fn kind(&self) -> IndexKind {
        match self {
            IndexOutcome::Hpi(_) => IndexKind::Hpi,
            IndexOutcome::Mei(_) => IndexKind::Mei,
            IndexOutcome::MetalIndex(_) => IndexKind::MetalIndex,
            IndexOutcome::RiskIndex(_) => IndexKind::RiskIndex,
            IndexOutcome::HazardQuotient(_) => IndexKind::HazardQuotient,
            IndexOutcome::HazardIndex(_) => IndexKind::HazardIndex,
            IndexOutcome::CarcinogenicRisk(_) => IndexKind::CarcinogenicRisk,
            IndexOutcome::NonCarcinogenicRisk(_) => IndexKind::NonCarcinogenicRisk,
        }
    }

    /// The rounded scalar value.
    pub fn value(&self) -> Decimal {
        match self {
            IndexOutcome::Hpi(r) => r.hpi_value,
            IndexOutcome::Mei(r) => r.mei_value,
            IndexOutcome::MetalIndex(r) => r.mi_value,
            IndexOutcome::RiskIndex(r) => r.ri_value,
            IndexOutcome::HazardQuotient(r) => r.total_hq,
            IndexOutcome::HazardIndex(r) => r.hi_value,
            IndexOutcome::CarcinogenicRisk(r) => r.total_cr,
            IndexOutcome::NonCarcinogenicRisk(r) => r.hazard_index,
        }
    }

    pub fn classification(&self) -> String {
        match self {
            IndexOutcome::Hpi(r) => r.classification.to_string(),
            IndexOutcome::Mei(r) => r.classification.to_string(),
            IndexOutcome::MetalIndex(r) => r.classification.to_string(),
            IndexOutcome::RiskIndex(r) => r.classification.to_string(),
            IndexOutcome::HazardQuotient(r) => r.classification.to_string(),
            IndexOutcome::HazardIndex(r) => r.classification.to_string(),
            IndexOutcome::CarcinogenicRisk(r) => r.classification.to_string(),
            IndexOutcome::NonCarcinogenicRisk(r) => r.classification.to_string(),
        }
    }

    /// Risk level, for the indices that carry one.
    pub fn risk_level(&self) -> Option<String> {
        match self {
            IndexOutcome::Hpi(r) => Some(r.risk_level.to_string()),
            IndexOutcome::CarcinogenicRisk(r) => Some(r.risk_level.to_string()),
            IndexOutcome::NonCarcinogenicRisk(r) => Some(r.risk_level.to_string()),
            _ => None,
        }
    }

    /// Per-metal breakdown as `(metal, value)` pairs in input order.
    pub fn contributions(&self) -> Vec<(&str, Decimal)> {
        match self {
            IndexOutcome::Hpi(r) => pairs(&r.individual_ratings),
            IndexOutcome::Mei(r) => pairs(&r.contamination_factors),
            IndexOutcome::MetalIndex(r) => pairs(&r.individual_indices),
            IndexOutcome::RiskIndex(r) => pairs(&r.individual_risks),
            IndexOutcome::HazardQuotient(r) => pairs(&r.individual_hq),
            IndexOutcome::HazardIndex(r) => pairs(&r.individual_hq),
            IndexOutcome::NonCarcinogenicRisk(r) => pairs(&r.individual_hq),
            IndexOutcome::CarcinogenicRisk(r) => r
                .individual_cr
                .iter()
                .map(|c| (c.metal.as_str(), c.value))
                .collect(),
        }
    }
}

fn pairs(contributions: &[MetalContribution]) -> Vec<(&str, Decimal)> {
    contributions
        .iter()
        .map(|c| (c.metal.as_str(), c.value))
        .collect()
}

/// Run the calculator for one index.
pub fn calculate(kind: IndexKind, metals: &[MetalRecord]) -> Result<IndexOutcome, IndexError> {
    Ok(match kind {
        IndexKind::Hpi => IndexOutcome::Hpi(hpi::calculate_hpi(metals)?),
        IndexKind::Mei => IndexOutcome::Mei(contamination::calculate_mei(metals)?),
        IndexKind::MetalIndex => {
            IndexOutcome::MetalIndex(contamination::calculate_metal_index(metals)?)
        }
        IndexKind::RiskIndex => IndexOutcome::RiskIndex(risk::calculate_risk_index(metals)?),
        IndexKind::HazardQuotient => {
            IndexOutcome::HazardQuotient(hazard::calculate_hazard_quotient(metals)?)
        }
        IndexKind::HazardIndex => {
            IndexOutcome::HazardIndex(hazard::calculate_hazard_index(metals)?)
        }
        IndexKind::CarcinogenicRisk => {
            IndexOutcome::CarcinogenicRisk(carcinogenic::calculate_carcinogenic_risk(metals)?)
        }
        IndexKind::NonCarcinogenicRisk => {
            IndexOutcome::NonCarcinogenicRisk(hazard::calculate_non_carcinogenic_risk(metals)?)
        }
    })
}

/// The classification bands of an index, cleanest first.
pub fn describe_bands(kind: IndexKind) -> Vec<BandDescription> {
    match kind {
        IndexKind::Hpi => hpi::HPI_BANDS.describe(),
        IndexKind::Mei => contamination::MEI_BANDS.describe(),
        IndexKind::MetalIndex => contamination::MI_BANDS.describe(),
        IndexKind::RiskIndex => risk::RI_BANDS.describe(),
        IndexKind::HazardQuotient => hazard::HQ_BANDS.describe(),
        IndexKind::HazardIndex => hazard::HI_BANDS.describe(),
        IndexKind::CarcinogenicRisk => carcinogenic::CR_BANDS.describe(),
        IndexKind::NonCarcinogenicRisk => hazard::NCR_BANDS.describe(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> Vec<MetalRecord> {
        vec![
            MetalRecord::new("Lead (Pb)", dec!(0.08), dec!(0.01)),
            MetalRecord::new("Cadmium (Cd)", dec!(0.015), dec!(0.003)),
            MetalRecord::new("Arsenic (As)", dec!(0.045), dec!(0.01)),
        ]
    }

    #[test]
    fn test_report_matches_individual_calculators() {
        let metals = sample();
        let report = calculate_comprehensive(&metals).unwrap();
        assert_eq!(report.hpi, hpi::calculate_hpi(&metals).unwrap());
        assert_eq!(report.mei, contamination::calculate_mei(&metals).unwrap());
        assert_eq!(
            report.hazard_index,
            hazard::calculate_hazard_index(&metals).unwrap()
        );
        assert_eq!(
            report.non_carcinogenic_risk,
            hazard::calculate_non_carcinogenic_risk(&metals).unwrap()
        );
        assert_eq!(
            report.carcinogenic_risk,
            carcinogenic::calculate_carcinogenic_risk(&metals).unwrap()
        );
    }

    #[test]
    fn test_empty_sample_aborts() {
        assert!(matches!(
            calculate_comprehensive(&[]),
            Err(IndexError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_dispatch_by_kind() {
        let metals = sample();
        for kind in IndexKind::ALL {
            let outcome = calculate(kind, &metals).unwrap();
            assert_eq!(outcome.kind(), kind);
            assert_eq!(outcome.contributions().len(), 3);
        }
        let mi = calculate(IndexKind::MetalIndex, &metals).unwrap();
        assert_eq!(mi.value(), dec!(17.5));
        assert_eq!(mi.classification(), "Extremely contaminated");
        assert!(mi.risk_level().is_none());
    }

    #[test]
    fn test_every_index_has_bands() {
        for kind in IndexKind::ALL {
            assert!(describe_bands(kind).len() >= 4, "{kind} has too few bands");
        }
        let hpi = describe_bands(IndexKind::Hpi);
        assert_eq!(hpi[0].label, "Excellent");
        assert_eq!(hpi[4].range, ">= 100");
    }
}
