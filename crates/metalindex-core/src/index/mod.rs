pub mod bands;
pub mod carcinogenic;
pub mod comprehensive;
pub mod contamination;
pub mod hazard;
pub mod hpi;
pub mod outcome;
pub mod risk;

pub use carcinogenic::calculate_carcinogenic_risk;
pub use comprehensive::{calculate, calculate_comprehensive, describe_bands, IndexOutcome};
pub use contamination::{calculate_mei, calculate_metal_index};
pub use hazard::{
    calculate_hazard_index, calculate_hazard_quotient, calculate_non_carcinogenic_risk,
};
pub use hpi::calculate_hpi;
pub use outcome::{ComprehensiveReport, MetalContribution};
pub use risk::calculate_risk_index;

use crate::error::IndexError;
use rust_decimal::Decimal;

/// `numerator / denominator`, or zero when the denominator is not positive.
///
/// Overflow is an error attributed to `metal`, never a zero.
pub(crate) fn ratio_or_zero(
    numerator: Decimal,
    denominator: Decimal,
    metal: &str,
) -> Result<Decimal, IndexError> {
    if denominator <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    numerator
        .checked_div(denominator)
        .ok_or_else(|| IndexError::out_of_range(metal))
}
