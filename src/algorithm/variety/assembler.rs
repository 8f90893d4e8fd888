//! Assembly of the three measures into one index row per group
//!
//! The measures are always computed over the same share table, so their key
//! sets coincide. The assembler still walks the union of keys and refuses to
//! default a missing measure.

use itertools::Itertools;
use log::debug;

use crate::algorithm::variety::engine::{MeasureMap, Measures};
use crate::algorithm::variety::shares::GroupKey;
use crate::error::{Result, VarietyError};
use crate::models::{VarietyIndex, VarietyIndexRecord};

fn lookup(map: &MeasureMap, key: &GroupKey, measure: &'static str) -> Result<f64> {
    map.get(key).copied().ok_or_else(|| VarietyError::MissingMeasure {
        year: key.year,
        region: key.region.clone(),
        measure,
    })
}

/// Join related, unrelated and total variety on (year, region)
///
/// # Errors
/// Returns `VarietyError::GroupSetMismatch` when the measures cover a different
/// number of groups and `VarietyError::MissingMeasure` for the first group
/// lacking any of the three values.
pub fn assemble_index(measures: &Measures) -> Result<VarietyIndex> {
    let Measures {
        related,
        unrelated,
        total,
    } = measures;

    if related.len() != unrelated.len() || related.len() != total.len() {
        return Err(VarietyError::GroupSetMismatch {
            related: related.len(),
            unrelated: unrelated.len(),
            total: total.len(),
        });
    }

    let records = related
        .keys()
        .merge(unrelated.keys())
        .merge(total.keys())
        .dedup()
        .map(|key| -> Result<VarietyIndexRecord> {
            Ok(VarietyIndexRecord {
                year: key.year,
                region: key.region.clone(),
                related_variety: lookup(related, key, "related variety")?,
                unrelated_variety: lookup(unrelated, key, "unrelated variety")?,
                total_variety: lookup(total, key, "total variety")?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Assembled {} variety index rows", records.len());
    Ok(VarietyIndex::new(records))
}
