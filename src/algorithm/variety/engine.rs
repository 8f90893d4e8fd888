//! Related, unrelated and total variety
//!
//! Each measure folds independently over the share table, so the three can run
//! concurrently and every measure can run data-parallel over groups. Results
//! are keyed maps, which keeps the output order independent of scheduling.

use std::collections::BTreeMap;

use indicatif::ProgressBar;
use log::debug;
use rayon::prelude::*;
use smallvec::SmallVec;

use crate::algorithm::variety::entropy::{shannon_entropy, within_group_entropy};
use crate::algorithm::variety::shares::{GroupKey, RegionYearGroup, ShareTable};
use crate::error::{Result, VarietyError};

/// One measure's value for every group
pub type MeasureMap = BTreeMap<GroupKey, f64>;

/// The three measures computed over the same share table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measures {
    pub related: MeasureMap,
    pub unrelated: MeasureMap,
    pub total: MeasureMap,
}

fn ensure_members(group: &RegionYearGroup) -> Result<()> {
    if group.industries.is_empty() {
        return Err(VarietyError::malformed_group(
            group.key.year,
            &group.key.region,
            "group has no members",
        ));
    }
    Ok(())
}

/// Related variety of one group
///
/// Within each 2-digit branch the member shares are renormalized to an entropy,
/// which is then weighted by the branch's share of group employment.
pub fn group_related_variety(group: &RegionYearGroup) -> Result<f64> {
    ensure_members(group)?;

    let mut branches: BTreeMap<&str, SmallVec<[f64; 8]>> = BTreeMap::new();
    for industry in &group.industries {
        branches
            .entry(industry.code.two_digit.as_str())
            .or_default()
            .push(industry.share);
    }

    Ok(branches
        .values()
        .map(|members| {
            let branch_share: f64 = members.iter().sum();
            branch_share * within_group_entropy(members)
        })
        .sum())
}

/// Unrelated variety of one group: entropy across 1-digit sectors
pub fn group_unrelated_variety(group: &RegionYearGroup) -> Result<f64> {
    ensure_members(group)?;

    let mut sectors: BTreeMap<&str, f64> = BTreeMap::new();
    for industry in &group.industries {
        *sectors.entry(industry.code.one_digit.as_str()).or_insert(0.0) += industry.share;
    }

    Ok(shannon_entropy(sectors.into_values()))
}

/// Total variety of one group: entropy across individual industries
pub fn group_total_variety(group: &RegionYearGroup) -> Result<f64> {
    ensure_members(group)?;
    Ok(shannon_entropy(group.industries.iter().map(|i| i.share)))
}

fn measure<F>(
    table: &ShareTable,
    parallel: bool,
    progress: Option<&ProgressBar>,
    per_group: F,
) -> Result<MeasureMap>
where
    F: Fn(&RegionYearGroup) -> Result<f64> + Sync,
{
    let evaluate = |group: &RegionYearGroup| -> Result<(GroupKey, f64)> {
        let value = per_group(group)?;
        if let Some(pb) = progress {
            pb.inc(1);
        }
        Ok((group.key.clone(), value))
    };

    if parallel {
        table.groups().par_iter().map(evaluate).collect()
    } else {
        table.groups().iter().map(evaluate).collect()
    }
}

/// Related variety for every group in the table
pub fn related_variety(
    table: &ShareTable,
    parallel: bool,
    progress: Option<&ProgressBar>,
) -> Result<MeasureMap> {
    measure(table, parallel, progress, group_related_variety)
}

/// Unrelated variety for every group in the table
pub fn unrelated_variety(
    table: &ShareTable,
    parallel: bool,
    progress: Option<&ProgressBar>,
) -> Result<MeasureMap> {
    measure(table, parallel, progress, group_unrelated_variety)
}

/// Total variety for every group in the table
pub fn total_variety(
    table: &ShareTable,
    parallel: bool,
    progress: Option<&ProgressBar>,
) -> Result<MeasureMap> {
    measure(table, parallel, progress, group_total_variety)
}

/// Compute all three measures, concurrently when `parallel` is set
///
/// Runs on the ambient rayon pool; wrap the call in `ThreadPool::install` to
/// bound the worker count.
pub fn compute_measures(
    table: &ShareTable,
    parallel: bool,
    progress: Option<&ProgressBar>,
) -> Result<Measures> {
    let (related, unrelated, total) = if parallel {
        let (related, (unrelated, total)) = rayon::join(
            || related_variety(table, true, progress),
            || {
                rayon::join(
                    || unrelated_variety(table, true, progress),
                    || total_variety(table, true, progress),
                )
            },
        );
        (related?, unrelated?, total?)
    } else {
        (
            related_variety(table, false, progress)?,
            unrelated_variety(table, false, progress)?,
            total_variety(table, false, progress)?,
        )
    };

    debug!(
        "Computed related ({}), unrelated ({}) and total ({}) variety",
        related.len(),
        unrelated.len(),
        total.len()
    );

    Ok(Measures {
        related,
        unrelated,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::variety::shares::compute_shares;
    use crate::config::VarietyConfig;
    use crate::models::{CleanedPanel, EmploymentRecord};

    fn table(records: &[(&str, f64)]) -> ShareTable {
        let panel = CleanedPanel::new(
            records
                .iter()
                .map(|&(industry, employment)| EmploymentRecord::new(2020, "A", industry, employment))
                .collect(),
        )
        .unwrap();
        compute_shares(&panel, &VarietyConfig::sequential()).unwrap()
    }

    #[test]
    fn test_crops_and_animals() {
        let table = table(&[("11 Crops", 60.0), ("12 Animal", 40.0)]);
        let group = &table.groups()[0];

        let expected = -(0.6_f64 * 0.6_f64.log2() + 0.4_f64 * 0.4_f64.log2());
        assert!((group_total_variety(group).unwrap() - expected).abs() < 1e-12);
        assert!((group_total_variety(group).unwrap() - 0.9710).abs() < 1e-4);
        assert_eq!(group_unrelated_variety(group).unwrap(), 0.0);
        assert_eq!(group_related_variety(group).unwrap(), 0.0);
    }

    #[test]
    fn test_related_variety_weights_branches() {
        // Branch 11 holds half of employment, split evenly over two industries
        let table = table(&[("111", 25.0), ("112", 25.0), ("21", 50.0)]);
        let group = &table.groups()[0];

        assert!((group_related_variety(group).unwrap() - 0.5).abs() < 1e-12);
        assert!((group_unrelated_variety(group).unwrap() - 1.0).abs() < 1e-12);
        assert!((group_total_variety(group).unwrap() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_group_fails_fast() {
        let group = RegionYearGroup {
            key: GroupKey::new(2020, "A"),
            total_employment: 0.0,
            industries: Vec::new(),
        };
        assert!(group_total_variety(&group).is_err());
        assert!(group_related_variety(&group).is_err());
        assert!(group_unrelated_variety(&group).is_err());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let table = table(&[("111", 3.0), ("112", 5.0), ("21", 7.0), ("22", 11.0)]);
        let sequential = compute_measures(&table, false, None).unwrap();
        let parallel = compute_measures(&table, true, None).unwrap();
        assert_eq!(sequential, parallel);
    }
}
