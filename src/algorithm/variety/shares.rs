//! Employment share calculation per (year, region) group
//!
//! Records are grouped by (year, region); records repeating an industry inside
//! a group are summed first, so every group holds one entry per distinct
//! industry label together with its resolved taxonomy codes.

use std::collections::BTreeMap;

use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::config::VarietyConfig;
use crate::error::{Result, VarietyError};
use crate::models::CleanedPanel;
use crate::taxonomy::{self, IndustryCode};

/// Key of a region-year group, ordered by year then region
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    pub year: i32,
    pub region: String,
}

impl GroupKey {
    #[must_use]
    pub fn new(year: i32, region: impl Into<String>) -> Self {
        Self {
            year,
            region: region.into(),
        }
    }
}

/// One industry's employment and share within its group
#[derive(Debug, Clone, PartialEq)]
pub struct IndustryShare {
    pub industry: String,
    pub code: IndustryCode,
    pub employment: f64,
    /// `employment / total_employment` of the owning group
    pub share: f64,
}

/// Aggregated employment of one (year, region) group
#[derive(Debug, Clone, PartialEq)]
pub struct RegionYearGroup {
    pub key: GroupKey,
    pub total_employment: f64,
    /// Distinct industries, ordered by label
    pub industries: Vec<IndustryShare>,
}

impl RegionYearGroup {
    /// Build a group from per-industry employment
    ///
    /// # Errors
    /// Returns `VarietyError::MalformedGroup` when the group has no members,
    /// a non-positive total, or shares that do not sum to 1 within `tolerance`.
    pub fn new(
        key: GroupKey,
        mut members: Vec<(String, IndustryCode, f64)>,
        tolerance: f64,
    ) -> Result<Self> {
        if members.is_empty() {
            return Err(VarietyError::malformed_group(
                key.year,
                &key.region,
                "group has no members",
            ));
        }

        members.sort_by(|a, b| a.0.cmp(&b.0));
        let total_employment: f64 = members.iter().map(|(_, _, employment)| employment).sum();
        if !(total_employment > 0.0 && total_employment.is_finite()) {
            return Err(VarietyError::malformed_group(
                key.year,
                &key.region,
                format!("total employment is {total_employment}"),
            ));
        }

        let industries: Vec<IndustryShare> = members
            .into_iter()
            .map(|(industry, code, employment)| IndustryShare {
                industry,
                code,
                employment,
                share: employment / total_employment,
            })
            .collect();

        let group = Self {
            key,
            total_employment,
            industries,
        };

        let share_sum = group.share_sum();
        if (share_sum - 1.0).abs() > tolerance {
            return Err(VarietyError::malformed_group(
                group.key.year,
                &group.key.region,
                format!("employment shares sum to {share_sum}"),
            ));
        }

        Ok(group)
    }

    /// Sum of all industry shares, 1.0 up to rounding
    #[must_use]
    pub fn share_sum(&self) -> f64 {
        self.industries.iter().map(|i| i.share).sum()
    }

    #[must_use]
    pub fn industry_count(&self) -> usize {
        self.industries.len()
    }

    /// Number of distinct 2-digit codes in the group
    #[must_use]
    pub fn two_digit_count(&self) -> usize {
        let mut codes: Vec<&str> = self
            .industries
            .iter()
            .map(|i| i.code.two_digit.as_str())
            .collect();
        codes.sort_unstable();
        codes.dedup();
        codes.len()
    }

    /// Number of distinct 1-digit codes in the group
    #[must_use]
    pub fn one_digit_count(&self) -> usize {
        let mut codes: Vec<&str> = self
            .industries
            .iter()
            .map(|i| i.code.one_digit.as_str())
            .collect();
        codes.sort_unstable();
        codes.dedup();
        codes.len()
    }
}

/// All region-year groups of a panel, ordered by key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShareTable {
    groups: Vec<RegionYearGroup>,
}

impl ShareTable {
    #[must_use]
    pub fn groups(&self) -> &[RegionYearGroup] {
        &self.groups
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[must_use]
    pub fn get(&self, year: i32, region: &str) -> Option<&RegionYearGroup> {
        self.groups
            .binary_search_by(|g| (g.key.year, g.key.region.as_str()).cmp(&(year, region)))
            .ok()
            .map(|i| &self.groups[i])
    }
}

/// Group a panel by (year, region) and compute every industry's employment share
///
/// # Errors
/// Returns an error when an industry label cannot be resolved under the
/// configured short-label policy, or when a group is malformed.
pub fn compute_shares(panel: &CleanedPanel, config: &VarietyConfig) -> Result<ShareTable> {
    // Resolve each distinct label once
    let mut codes: FxHashMap<&str, IndustryCode> = FxHashMap::default();
    for record in panel {
        if codes.contains_key(record.industry.as_str()) {
            continue;
        }
        let code = taxonomy::resolve(&record.industry, config.short_label_policy)?;
        if taxonomy::code_2digit(&record.industry).is_none() {
            warn!(
                "Industry label '{}' is shorter than the 2-digit prefix, using '{}' ({})",
                record.industry, code.two_digit, config.short_label_policy
            );
        }
        codes.insert(record.industry.as_str(), code);
    }

    let mut employment: BTreeMap<(i32, &str), BTreeMap<&str, f64>> = BTreeMap::new();
    for record in panel {
        *employment
            .entry((record.year, record.region.as_str()))
            .or_default()
            .entry(record.industry.as_str())
            .or_insert(0.0) += record.employment;
    }

    let groups = employment
        .into_iter()
        .map(|((year, region), industries)| {
            let members = industries
                .into_iter()
                .map(|(industry, employment)| -> Result<(String, IndustryCode, f64)> {
                    let code = codes.get(industry).cloned().ok_or_else(|| {
                        VarietyError::malformed_group(
                            year,
                            region,
                            format!("unresolved industry '{industry}'"),
                        )
                    })?;
                    Ok((industry.to_string(), code, employment))
                })
                .collect::<Result<Vec<_>>>()?;
            RegionYearGroup::new(GroupKey::new(year, region), members, config.share_tolerance)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Computed shares for {} region-year groups over {} distinct industries",
        groups.len(),
        codes.len()
    );

    Ok(ShareTable { groups })
}
