//! Chronic Daily Intake from drinking-water ingestion.
//!
//! CDI = (C × IR × EF × ED) / (BW × AT), in mg/kg/day.

use crate::error::IndexError;
use crate::model::MetalRecord;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Days per year of exposure (EF).
pub const EXPOSURE_FREQUENCY_DAYS: Decimal = dec!(365);

/// Years of exposure when the record does not say.
pub const DEFAULT_EXPOSURE_DURATION_YEARS: Decimal = dec!(30);

/// Adult body weight in kg.
pub const DEFAULT_BODY_WEIGHT_KG: Decimal = dec!(70);

/// Adult drinking-water intake in L/day.
pub const DEFAULT_INTAKE_RATE_L_PER_DAY: Decimal = dec!(2.0);

/// Lifetime used to average carcinogenic exposure.
pub const LIFETIME_YEARS: Decimal = dec!(70);

/// How the intake is averaged over time (AT).
///
/// The two modes share the formula but are not interchangeable: a 30-year
/// exposure averaged over a 70-year lifetime gives a smaller CDI than the same
/// exposure averaged over its own duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AveragingMode {
    /// AT = 365 × exposure duration.
    NonCarcinogenic,
    /// AT = 365 × 70 years.
    Lifetime,
}

/// Exposure parameters for one record with defaults applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExposureParams {
    pub intake_rate: Decimal,
    pub exposure_duration: Decimal,
    pub body_weight: Decimal,
}

impl ExposureParams {
    /// Resolve parameters from a record. Absent or non-positive values fall
    /// back to the population defaults.
    pub fn resolve(record: &MetalRecord) -> Self {
        ExposureParams {
            intake_rate: positive_or(record.intake_rate, DEFAULT_INTAKE_RATE_L_PER_DAY),
            exposure_duration: positive_or(
                record.exposure_duration,
                DEFAULT_EXPOSURE_DURATION_YEARS,
            ),
            body_weight: positive_or(record.body_weight, DEFAULT_BODY_WEIGHT_KG),
        }
    }

    /// Averaging time in days, `None` when the duration is too large to
    /// represent.
    pub fn averaging_time(&self, mode: AveragingMode) -> Option<Decimal> {
        match mode {
            AveragingMode::NonCarcinogenic => {
                EXPOSURE_FREQUENCY_DAYS.checked_mul(self.exposure_duration)
            }
            AveragingMode::Lifetime => Some(EXPOSURE_FREQUENCY_DAYS * LIFETIME_YEARS),
        }
    }
}

impl Default for ExposureParams {
    fn default() -> Self {
        ExposureParams {
            intake_rate: DEFAULT_INTAKE_RATE_L_PER_DAY,
            exposure_duration: DEFAULT_EXPOSURE_DURATION_YEARS,
            body_weight: DEFAULT_BODY_WEIGHT_KG,
        }
    }
}

/// Chronic Daily Intake for one record, mg/kg/day.
///
/// Fails with `InvalidInput` when an intermediate product overflows.
pub fn chronic_daily_intake(
    record: &MetalRecord,
    mode: AveragingMode,
) -> Result<Decimal, IndexError> {
    let params = ExposureParams::resolve(record);
    let out_of_range = || IndexError::out_of_range(&record.name);

    let numerator = record
        .concentration
        .checked_mul(params.intake_rate)
        .and_then(|v| v.checked_mul(EXPOSURE_FREQUENCY_DAYS))
        .and_then(|v| v.checked_mul(params.exposure_duration))
        .ok_or_else(out_of_range)?;
    // Both factors are positive after resolve(), so the divisor is never zero.
    let divisor = params
        .averaging_time(mode)
        .and_then(|at| params.body_weight.checked_mul(at))
        .ok_or_else(out_of_range)?;

    numerator.checked_div(divisor).ok_or_else(out_of_range)
}

/// Treat a non-positive override as absent.
pub(crate) fn positive_or(value: Option<Decimal>, default: Decimal) -> Decimal {
    match value {
        Some(v) if v > Decimal::ZERO => v,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(concentration: Decimal) -> MetalRecord {
        MetalRecord::new("Lead (Pb)", concentration, dec!(0.01))
    }

    #[test]
    fn test_defaults_applied() {
        let params = ExposureParams::resolve(&lead(dec!(0.08)));
        assert_eq!(params, ExposureParams::default());
    }

    #[test]
    fn test_non_positive_overrides_fall_back() {
        let record = lead(dec!(0.08)).with_exposure(dec!(0), dec!(-5), dec!(0));
        assert_eq!(ExposureParams::resolve(&record), ExposureParams::default());
    }

    #[test]
    fn test_non_carcinogenic_cdi_cancels_duration() {
        // 0.07 mg/L × 2 L/day / 70 kg = 0.002 mg/kg/day regardless of duration
        let short = lead(dec!(0.07)).with_exposure(dec!(5), dec!(70), dec!(2));
        let long = lead(dec!(0.07)).with_exposure(dec!(40), dec!(70), dec!(2));
        assert_eq!(
            chronic_daily_intake(&short, AveragingMode::NonCarcinogenic).unwrap(),
            dec!(0.002)
        );
        assert_eq!(
            chronic_daily_intake(&long, AveragingMode::NonCarcinogenic).unwrap(),
            dec!(0.002)
        );
    }

    #[test]
    fn test_lifetime_cdi_scales_with_duration() {
        // 0.07 × 2 × 365 × 35 / (70 × 365 × 70) = 0.001
        let record = lead(dec!(0.07)).with_exposure(dec!(35), dec!(70), dec!(2));
        assert_eq!(chronic_daily_intake(&record, AveragingMode::Lifetime).unwrap(), dec!(0.001));
    }

    #[test]
    fn test_modes_differ_for_default_duration() {
        let record = lead(dec!(0.07));
        let nc = chronic_daily_intake(&record, AveragingMode::NonCarcinogenic).unwrap();
        let lt = chronic_daily_intake(&record, AveragingMode::Lifetime).unwrap();
        assert!(lt < nc);
    }

    #[test]
    fn test_zero_concentration_gives_zero_intake() {
        let record = lead(Decimal::ZERO);
        assert!(chronic_daily_intake(&record, AveragingMode::Lifetime).unwrap().is_zero());
    }

    #[test]
    fn test_overflowing_intake_is_rejected() {
        let record = lead(Decimal::MAX);
        assert!(matches!(
            chronic_daily_intake(&record, AveragingMode::NonCarcinogenic),
            Err(IndexError::InvalidInput(_))
        ));

        let long = lead(dec!(0.07)).with_exposure(Decimal::MAX, dec!(70), dec!(2));
        assert!(chronic_daily_intake(&long, AveragingMode::NonCarcinogenic).is_err());
    }
}
