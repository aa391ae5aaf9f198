use metalindex_core::index::outcome::{BatchResult, ComprehensiveReport, MetalContribution};
use metalindex_core::index::IndexOutcome;
use metalindex_core::model::Sample;
use metalindex_core::reference::StandardsTable;
use rust_decimal::Decimal;

pub fn print_outcome(outcome: &IndexOutcome) {
    let kind = outcome.kind();
    println!("=== {} ===\n", kind);

    match outcome.risk_level() {
        Some(risk) => println!(
            "  Value: {}  -> {} (risk: {})\n",
            outcome.value(),
            outcome.classification(),
            risk
        ),
        None => println!(
            "  Value: {}  -> {}\n",
            outcome.value(),
            outcome.classification()
        ),
    }

    print_pairs(&outcome.contributions());

    if let IndexOutcome::CarcinogenicRisk(cr) = outcome {
        if !cr.unassessed_metals.is_empty() {
            println!(
                "  No slope factor (not assessed): {}\n",
                cr.unassessed_metals.join(", ")
            );
        }
    }
}

pub fn print_report(sample: &Sample, report: &ComprehensiveReport, verbose: bool) {
    println!(
        "--- Sample: {} ({}, {}) ---\n",
        sample.sample_id.as_deref().unwrap_or("unnamed"),
        sample.latitude,
        sample.longitude
    );
    if let Some(ref date) = sample.sample_date {
        println!("  Sampled: {date}\n");
    }

    let rows: [(&str, Decimal, String, Option<String>, &[MetalContribution]); 7] = [
        (
            "HPI",
            report.hpi.hpi_value,
            report.hpi.classification.to_string(),
            Some(report.hpi.risk_level.to_string()),
            report.hpi.individual_ratings.as_slice(),
        ),
        (
            "MEI",
            report.mei.mei_value,
            report.mei.classification.to_string(),
            None,
            report.mei.contamination_factors.as_slice(),
        ),
        (
            "MI",
            report.metal_index.mi_value,
            report.metal_index.classification.to_string(),
            None,
            report.metal_index.individual_indices.as_slice(),
        ),
        (
            "RI",
            report.risk_index.ri_value,
            report.risk_index.classification.to_string(),
            None,
            report.risk_index.individual_risks.as_slice(),
        ),
        (
            "HQ",
            report.hazard_quotient.total_hq,
            report.hazard_quotient.classification.to_string(),
            None,
            report.hazard_quotient.individual_hq.as_slice(),
        ),
        (
            "HI",
            report.hazard_index.hi_value,
            report.hazard_index.classification.to_string(),
            None,
            report.hazard_index.individual_hq.as_slice(),
        ),
        (
            "NCR",
            report.non_carcinogenic_risk.hazard_index,
            report.non_carcinogenic_risk.classification.to_string(),
            Some(report.non_carcinogenic_risk.risk_level.to_string()),
            report.non_carcinogenic_risk.individual_hq.as_slice(),
        ),
    ];

    for (label, value, class, risk, contributions) in &rows {
        print_row(label, *value, class, risk.as_deref());
        if verbose {
            let pairs: Vec<(&str, Decimal)> = contributions
                .iter()
                .map(|c| (c.metal.as_str(), c.value))
                .collect();
            print_pairs(&pairs);
        }
    }

    let cr = &report.carcinogenic_risk;
    print_row(
        "CR",
        cr.total_cr,
        &cr.classification.to_string(),
        Some(cr.risk_level.to_string().as_str()),
    );
    if verbose {
        let max_name = cr.individual_cr.iter().map(|c| c.metal.len()).max().unwrap_or(10);
        for c in &cr.individual_cr {
            match c.slope_factor {
                Some(sf) => println!(
                    "      {:<width$}  {}  (SF {})",
                    c.metal,
                    c.value,
                    sf,
                    width = max_name
                ),
                None => println!("      {:<width$}  not assessed", c.metal, width = max_name),
            }
        }
        println!();
    } else if !cr.unassessed_metals.is_empty() {
        println!(
            "      not assessed: {}",
            cr.unassessed_metals.join(", ")
        );
    }
    println!();
}

pub fn print_batch(batch: &BatchResult) {
    println!("=== Batch: {} sample(s) ===\n", batch.count);
    if batch.results.is_empty() {
        return;
    }

    let max_id = batch
        .results
        .iter()
        .map(|r| r.sample_id.as_deref().unwrap_or("-").len())
        .max()
        .unwrap_or(6)
        .max(6);

    println!(
        "  {:<width$}  {:>10}  {:>10}  {:>10}  {:<12}  {:>8}  MEI class",
        "Sample",
        "Lat",
        "Lon",
        "HPI",
        "HPI class",
        "MEI",
        width = max_id
    );
    println!("  {}", "-".repeat(max_id + 78));

    for entry in &batch.results {
        println!(
            "  {:<width$}  {:>10}  {:>10}  {:>10}  {:<12}  {:>8}  {}",
            entry.sample_id.as_deref().unwrap_or("-"),
            entry.latitude,
            entry.longitude,
            entry.hpi.hpi_value,
            entry.hpi.classification.to_string(),
            entry.mei.mei_value,
            entry.mei.classification,
            width = max_id
        );
    }
    println!();
}

pub fn print_standards(table: &StandardsTable) {
    println!("Heavy-metal drinking-water standards\n");

    let max_name = table.metals.keys().map(|k| k.len()).max().unwrap_or(20);

    println!(
        "  {:<width$}  {:<10}  {:<6}  {:<10}  {:<8}  Source",
        "Metal",
        "Standard",
        "Unit",
        "RfD",
        "SF",
        width = max_name
    );
    println!("  {}", "-".repeat(max_name + 50));

    for (name, standard) in &table.metals {
        let sf = standard
            .slope_factor
            .map(|sf| sf.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<width$}  {:<10}  {:<6}  {:<10}  {:<8}  {}",
            name,
            standard.standard.to_string(),
            standard.unit,
            standard.reference_dose.to_string(),
            sf,
            standard.source,
            width = max_name
        );
    }
    println!();
}

fn print_row(label: &str, value: Decimal, class: &str, risk: Option<&str>) {
    match risk {
        Some(risk) => println!("  {:<4} {:>14}  {}  (risk: {})", label, value.to_string(), class, risk),
        None => println!("  {:<4} {:>14}  {}", label, value.to_string(), class),
    }
}

fn print_pairs(pairs: &[(&str, Decimal)]) {
    if pairs.is_empty() {
        return;
    }
    let max_name = pairs.iter().map(|(m, _)| m.len()).max().unwrap_or(10);
    for (metal, value) in pairs {
        println!("      {:<width$}  {}", metal, value, width = max_name);
    }
    println!();
}
