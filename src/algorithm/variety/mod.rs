//! Regional variety indexes
//!
//! Related, unrelated and total variety per (year, region), computed as a
//! pure pipeline over a cleaned employment panel:
//!
//! 1. resolve 1-digit and 2-digit codes for every industry label
//! 2. group by (year, region) and compute employment shares
//! 3. fold each entropy measure independently over the groups
//! 4. join the three measures on (year, region)

pub mod assembler;
pub mod engine;
pub mod entropy;
pub mod shares;

use std::time::Instant;

use rayon::ThreadPoolBuilder;

use crate::config::VarietyConfig;
use crate::error::{Result, VarietyError};
use crate::models::{CleanedPanel, VarietyIndex};
use crate::utils::logging::{
    create_main_progress_bar, finish_progress_bar, log_operation_complete, log_operation_start,
    log_warning,
};

// Re-export commonly used items
pub use assembler::assemble_index;
pub use engine::{
    MeasureMap, Measures, compute_measures, group_related_variety, group_total_variety,
    group_unrelated_variety, related_variety, total_variety, unrelated_variety,
};
pub use entropy::{entropy_term, shannon_entropy, within_group_entropy};
pub use shares::{GroupKey, IndustryShare, RegionYearGroup, ShareTable, compute_shares};

/// Compute the variety index for every (year, region) group of a panel
///
/// The output holds one row per group, sorted by (year, region). Parallel and
/// sequential runs produce identical values.
///
/// # Errors
/// Any failing group aborts the whole run; no partial index is returned.
pub fn compute_variety_index(panel: &CleanedPanel, config: &VarietyConfig) -> Result<VarietyIndex> {
    let start = Instant::now();
    log_operation_start(
        "Computing variety indexes for",
        &format!("{} employment records", panel.len()),
    );

    if panel.is_empty() {
        log_warning("Employment panel is empty, no variety indexes produced");
        return Ok(VarietyIndex::default());
    }

    let table = compute_shares(panel, config)?;

    let progress = config.show_progress.then(|| {
        create_main_progress_bar(
            (table.len() * 3) as u64,
            Some("Computing variety measures"),
        )
    });

    let measures = if config.parallel {
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.num_threads)
            .build()
            .map_err(|e| VarietyError::ThreadPool(e.to_string()))?;
        pool.install(|| compute_measures(&table, true, progress.as_ref()))?
    } else {
        compute_measures(&table, false, progress.as_ref())?
    };

    if let Some(pb) = &progress {
        finish_progress_bar(pb, Some("Variety measures complete"));
    }

    let index = assemble_index(&measures)?;

    log_operation_complete(
        "computed",
        "variety index rows",
        index.len(),
        Some(start.elapsed()),
    );
    Ok(index)
}
