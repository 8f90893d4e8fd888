//! Variety index output models

use std::collections::BTreeSet;

use arrow::datatypes::{DataType, Field, Schema};
use serde::{Deserialize, Serialize};

/// Related, unrelated and total variety for one (year, region) group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarietyIndexRecord {
    pub year: i32,
    pub region: String,
    /// Entropy within 2-digit groups, weighted by group share
    pub related_variety: f64,
    /// Entropy across 1-digit groups
    pub unrelated_variety: f64,
    /// Entropy across individual industries
    pub total_variety: f64,
}

impl VarietyIndexRecord {
    /// Get the Arrow schema for variety index records
    #[must_use]
    pub fn schema() -> Schema {
        Schema::new(vec![
            Field::new("year", DataType::Int32, false),
            Field::new("region", DataType::Utf8, false),
            Field::new("related_variety", DataType::Float64, false),
            Field::new("unrelated_variety", DataType::Float64, false),
            Field::new("total_variety", DataType::Float64, false),
        ])
    }
}

/// Variety indexes for a whole panel, ordered by (year, region)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VarietyIndex {
    records: Vec<VarietyIndexRecord>,
}

impl VarietyIndex {
    /// Wrap records, sorting them by (year, region)
    #[must_use]
    pub fn new(mut records: Vec<VarietyIndexRecord>) -> Self {
        records.sort_by(|a, b| (a.year, a.region.as_str()).cmp(&(b.year, b.region.as_str())));
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[VarietyIndexRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up the index for a single group
    #[must_use]
    pub fn get(&self, year: i32, region: &str) -> Option<&VarietyIndexRecord> {
        self.records
            .binary_search_by(|r| (r.year, r.region.as_str()).cmp(&(year, region)))
            .ok()
            .map(|i| &self.records[i])
    }

    /// Distinct years covered, ascending
    #[must_use]
    pub fn years(&self) -> BTreeSet<i32> {
        self.records.iter().map(|r| r.year).collect()
    }

    /// All regions observed in one year, in region order
    pub fn for_year(&self, year: i32) -> impl Iterator<Item = &VarietyIndexRecord> {
        self.records.iter().filter(move |r| r.year == year)
    }

    #[must_use]
    pub fn into_records(self) -> Vec<VarietyIndexRecord> {
        self.records
    }
}
