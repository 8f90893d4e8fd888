//! Employment record model
//!
//! One record attributes an employment headcount to a (year, region, industry)
//! triple. Records arrive already cleaned: trimmed labels, no missing values
//! and strictly positive employment.

use arrow::datatypes::{DataType, Field, Schema};
use serde::{Deserialize, Serialize};

/// Employment attributed to one industry in one region and year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentRecord {
    /// Observation period
    pub year: i32,
    /// Geographic unit
    pub region: String,
    /// Most granular industry label
    pub industry: String,
    /// Headcount, always positive
    pub employment: f64,
}

impl EmploymentRecord {
    /// Create a new employment record
    #[must_use]
    pub fn new(year: i32, region: impl Into<String>, industry: impl Into<String>, employment: f64) -> Self {
        Self {
            year,
            region: region.into(),
            industry: industry.into(),
            employment,
        }
    }

    /// Get the Arrow schema for employment records
    #[must_use]
    pub fn schema() -> Schema {
        Schema::new(vec![
            Field::new("year", DataType::Int32, false),
            Field::new("region", DataType::Utf8, false),
            Field::new("industry", DataType::Utf8, false),
            Field::new("employment", DataType::Float64, false),
        ])
    }

    /// Check the cleaned-panel guarantees, returning the violated one
    pub(crate) fn violation(&self) -> Option<&'static str> {
        if self.region.trim().is_empty() {
            Some("region is empty")
        } else if self.industry.trim().is_empty() {
            Some("industry is empty")
        } else if !self.employment.is_finite() {
            Some("employment is not finite")
        } else if self.employment <= 0.0 {
            Some("employment is not positive")
        } else {
            None
        }
    }
}
