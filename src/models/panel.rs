//! Cleaned employment panel
//!
//! The panel is the input boundary of the variety computation. It owns the
//! records handed over by the cleaning stage and refuses construction when
//! any of them breaks the cleaned-data guarantees.

use std::collections::BTreeSet;

use crate::error::{Result, VarietyError};
use crate::models::record::EmploymentRecord;

/// An immutable, validated collection of employment records
#[derive(Debug, Clone, Default)]
pub struct CleanedPanel {
    records: Vec<EmploymentRecord>,
}

impl CleanedPanel {
    /// Validate and wrap a set of cleaned records
    ///
    /// # Errors
    /// Returns `VarietyError::InvalidRecord` for the first record with an empty
    /// label or a non-positive or non-finite employment value.
    pub fn new(records: Vec<EmploymentRecord>) -> Result<Self> {
        if let Some((index, reason)) = records
            .iter()
            .enumerate()
            .find_map(|(i, record)| record.violation().map(|reason| (i, reason)))
        {
            return Err(VarietyError::invalid_record(index, reason));
        }

        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[EmploymentRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmploymentRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct years present in the panel, ascending
    #[must_use]
    pub fn years(&self) -> BTreeSet<i32> {
        self.records.iter().map(|r| r.year).collect()
    }

    /// Distinct regions present in the panel, ascending
    #[must_use]
    pub fn regions(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.region.as_str()).collect()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<EmploymentRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a CleanedPanel {
    type Item = &'a EmploymentRecord;
    type IntoIter = std::slice::Iter<'a, EmploymentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
