//! Shared fixtures for variety index tests

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regional_variety::{CleanedPanel, EmploymentRecord};

/// Industry labels spanning several 1-digit sectors and 2-digit branches
pub const INDUSTRY_POOL: &[&str] = &[
    "0111", "0112", "0113", "0121", "0210", "1011", "1012", "1020", "2011", "2012", "2211",
    "2219", "4511", "4520", "4711", "4719", "6201", "6202", "7",
];

/// Tolerance used for floating point comparisons
pub const EPSILON: f64 = 1e-9;

/// Build a cleaned panel from (year, region, industry, employment) tuples
pub fn panel(records: &[(i32, &str, &str, f64)]) -> CleanedPanel {
    CleanedPanel::new(
        records
            .iter()
            .map(|&(year, region, industry, employment)| {
                EmploymentRecord::new(year, region, industry, employment)
            })
            .collect(),
    )
    .expect("fixture records are clean")
}

/// Generate a reproducible random panel
///
/// Every (year, region) group receives between one and all industries of the
/// pool, with occasional repeated rows for the same industry.
pub fn random_panel(seed: u64, years: &[i32], regions: &[&str]) -> CleanedPanel {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::new();

    for &year in years {
        for &region in regions {
            let count = rng.random_range(1..=INDUSTRY_POOL.len());
            for &industry in INDUSTRY_POOL.iter().take(count) {
                let employment = rng.random_range(1..=500) as f64;
                records.push(EmploymentRecord::new(year, region, industry, employment));
                if rng.random_bool(0.1) {
                    let extra = rng.random_range(1..=50) as f64;
                    records.push(EmploymentRecord::new(year, region, industry, extra));
                }
            }
        }
    }

    CleanedPanel::new(records).expect("generated records are clean")
}

/// Assert two floats agree within `EPSILON`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}
