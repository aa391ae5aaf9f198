pub mod error;
pub mod exposure;
pub mod index;
pub mod input;
pub mod model;
pub mod reference;

use error::IndexError;
use index::outcome::{BatchEntry, BatchResult, ComprehensiveReport};
use model::Sample;
use tracing::debug;

/// Main API entry point: every index for one sample.
pub fn assess_sample(sample: &Sample) -> Result<ComprehensiveReport, IndexError> {
    debug!(
        sample_id = sample.sample_id.as_deref().unwrap_or("unknown"),
        metals = sample.metals.len(),
        "assessing sample"
    );
    index::calculate_comprehensive(&sample.metals)
}

/// HPI and MEI for each sample of a survey.
///
/// One invalid sample fails the whole batch.
pub fn assess_batch(samples: &[Sample]) -> Result<BatchResult, IndexError> {
    let mut results = Vec::with_capacity(samples.len());
    for (i, sample) in samples.iter().enumerate() {
        let entry = assess_batch_entry(sample).map_err(|e| match e {
            IndexError::InvalidInput(reason) => IndexError::InvalidInput(format!(
                "sample {} ({}): {}",
                i + 1,
                sample.sample_id.as_deref().unwrap_or("no id"),
                reason
            )),
            other => other,
        })?;
        results.push(entry);
    }

    Ok(BatchResult {
        count: results.len(),
        results,
    })
}

fn assess_batch_entry(sample: &Sample) -> Result<BatchEntry, IndexError> {
    Ok(BatchEntry {
        sample_id: sample.sample_id.clone(),
        latitude: sample.latitude,
        longitude: sample.longitude,
        hpi: index::calculate_hpi(&sample.metals)?,
        mei: index::calculate_mei(&sample.metals)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::MetalRecord;
    use rust_decimal_macros::dec;

    fn sample(id: &str, metals: Vec<MetalRecord>) -> Sample {
        Sample {
            latitude: 12.972,
            longitude: 77.594,
            metals,
            sample_date: None,
            sample_id: Some(id.into()),
        }
    }

    #[test]
    fn test_batch_keeps_order_and_location() {
        let samples = vec![
            sample("A", vec![MetalRecord::new("Lead (Pb)", dec!(0.001), dec!(0.01))]),
            sample("B", vec![MetalRecord::new("Lead (Pb)", dec!(0.02), dec!(0.01))]),
        ];
        let batch = assess_batch(&samples).unwrap();
        assert_eq!(batch.count, 2);
        assert_eq!(batch.results[0].sample_id.as_deref(), Some("A"));
        assert_eq!(batch.results[0].hpi.hpi_value, dec!(10));
        assert_eq!(batch.results[1].hpi.hpi_value, dec!(200));
        assert_eq!(batch.results[1].mei.mei_value, dec!(2));
        assert_eq!(batch.results[1].latitude, 12.972);
    }

    #[test]
    fn test_batch_fails_on_empty_sample() {
        let samples = vec![
            sample("A", vec![MetalRecord::new("Lead (Pb)", dec!(0.001), dec!(0.01))]),
            sample("B", vec![]),
        ];
        let err = assess_batch(&samples).unwrap_err();
        assert!(err.to_string().contains("sample 2 (B)"));
    }

    #[test]
    fn test_empty_batch_is_empty_result() {
        let batch = assess_batch(&[]).unwrap();
        assert_eq!(batch.count, 0);
    }

    #[test]
    fn test_assess_sample_rejects_empty() {
        assert!(assess_sample(&sample("X", vec![])).is_err());
    }
}
