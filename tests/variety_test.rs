//! Tests for the variety index pipeline on hand-built panels

mod utils;

use regional_variety::{
    ShortLabelPolicy, VarietyConfig, VarietyError, compute_variety_index,
};
use utils::{assert_close, panel};

#[test]
fn test_crops_and_animals_scenario() {
    let panel = panel(&[(2020, "A", "11 Crops", 60.0), (2020, "A", "12 Animal", 40.0)]);
    let index = compute_variety_index(&panel, &VarietyConfig::default()).unwrap();

    assert_eq!(index.len(), 1);
    let row = index.get(2020, "A").unwrap();
    let expected = -(0.6_f64 * 0.6_f64.log2() + 0.4_f64 * 0.4_f64.log2());
    assert_close(row.total_variety, expected);
    assert!((row.total_variety - 0.9710).abs() < 1e-4);
    assert_close(row.unrelated_variety, 0.0);
    assert_close(row.related_variety, 0.0);
}

#[test]
fn test_concentrated_versus_even_regions() {
    let panel = panel(&[
        (2020, "Concentrated", "4711", 400.0),
        (2020, "Even", "4711", 100.0),
        (2020, "Even", "4712", 100.0),
        (2020, "Even", "4713", 100.0),
        (2020, "Even", "4719", 100.0),
    ]);
    let index = compute_variety_index(&panel, &VarietyConfig::default()).unwrap();

    let concentrated = index.get(2020, "Concentrated").unwrap();
    assert_close(concentrated.total_variety, 0.0);
    assert_close(concentrated.related_variety, 0.0);
    assert_close(concentrated.unrelated_variety, 0.0);

    let even = index.get(2020, "Even").unwrap();
    assert_close(even.total_variety, 2.0);
    assert_close(even.related_variety, 2.0);
    assert_close(even.unrelated_variety, 0.0);
}

#[test]
fn test_uniform_shares_reach_log2_n() {
    let industries = ["0111", "1011", "2011", "4511", "6201"];
    let records: Vec<_> = industries.iter().map(|&i| (2019, "R", i, 7.0)).collect();
    let index = compute_variety_index(&panel(&records), &VarietyConfig::sequential()).unwrap();

    let row = index.get(2019, "R").unwrap();
    assert_close(row.total_variety, 5.0_f64.log2());
    // Every industry sits in its own sector and branch
    assert_close(row.unrelated_variety, 5.0_f64.log2());
    assert_close(row.related_variety, 0.0);
}

#[test]
fn test_output_sorted_by_year_then_region() {
    let panel = panel(&[
        (2021, "B", "11", 1.0),
        (2020, "C", "11", 1.0),
        (2021, "A", "11", 1.0),
        (2020, "A", "11", 1.0),
    ]);
    let index = compute_variety_index(&panel, &VarietyConfig::default()).unwrap();

    let keys: Vec<_> = index
        .records()
        .iter()
        .map(|r| (r.year, r.region.as_str()))
        .collect();
    assert_eq!(keys, vec![(2020, "A"), (2020, "C"), (2021, "A"), (2021, "B")]);
    assert_eq!(index.for_year(2021).count(), 2);
}

#[test]
fn test_empty_panel_yields_empty_index() {
    let index = compute_variety_index(&panel(&[]), &VarietyConfig::default()).unwrap();
    assert!(index.is_empty());
}

#[test]
fn test_short_label_policies() {
    let records = [(2020, "A", "7", 50.0), (2020, "A", "70", 50.0)];

    // Whole label: "7" and "70" are separate branches
    let whole = compute_variety_index(&panel(&records), &VarietyConfig::sequential()).unwrap();
    assert_close(whole.get(2020, "A").unwrap().related_variety, 0.0);

    // Padding merges "7" into branch "70"
    let config = VarietyConfig::sequential().with_short_label_policy(ShortLabelPolicy::PadWithZero);
    let padded = compute_variety_index(&panel(&records), &config).unwrap();
    assert_close(padded.get(2020, "A").unwrap().related_variety, 1.0);

    let config = VarietyConfig::sequential().with_short_label_policy(ShortLabelPolicy::Reject);
    let err = compute_variety_index(&panel(&records), &config).unwrap_err();
    assert!(matches!(err, VarietyError::DegenerateIndustryLabel { .. }));
}

#[test]
fn test_progress_and_thread_settings_do_not_change_values() {
    let records = [
        (2020, "A", "111", 3.0),
        (2020, "A", "112", 9.0),
        (2020, "A", "21", 4.0),
        (2020, "B", "31", 8.0),
    ];
    let baseline = compute_variety_index(&panel(&records), &VarietyConfig::sequential()).unwrap();
    let config = VarietyConfig::default()
        .with_num_threads(2)
        .with_progress(true);
    let parallel = compute_variety_index(&panel(&records), &config).unwrap();

    assert_eq!(baseline, parallel);
}
