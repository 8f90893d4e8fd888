//! Conversion between Arrow record batches and variety models
//!
//! Cleaned panels arrive as record batches carrying at least the `year`,
//! `region`, `industry` and `employment` columns. Compatible column types are
//! cast to the canonical schema before `serde_arrow` deserializes the rows.

use std::sync::Arc;

use arrow::datatypes::{FieldRef, SchemaRef};
use arrow::record_batch::RecordBatch;
use rayon::prelude::*;

use crate::error::{Result, VarietyError};
use crate::models::{CleanedPanel, EmploymentRecord, VarietyIndex, VarietyIndexRecord};
use crate::utils::arrow::array_utils::get_column;
use crate::utils::logging::log_operation_complete;

/// Canonical schema of a cleaned employment panel
#[must_use]
pub fn employment_schema() -> SchemaRef {
    Arc::new(EmploymentRecord::schema())
}

/// Schema of the variety index output
#[must_use]
pub fn variety_index_schema() -> SchemaRef {
    Arc::new(VarietyIndexRecord::schema())
}

/// Project and cast a batch onto the canonical employment schema
///
/// Columns outside the schema are dropped.
pub fn normalize_employment_batch(batch: &RecordBatch) -> Result<RecordBatch> {
    let schema = employment_schema();
    let columns = schema
        .fields()
        .iter()
        .map(|field| get_column(batch, field.name(), field.data_type()))
        .collect::<Result<Vec<_>>>()?;

    Ok(RecordBatch::try_new(schema, columns)?)
}

/// Convert one batch into employment records
pub fn records_from_batch(batch: &RecordBatch) -> Result<Vec<EmploymentRecord>> {
    let normalized = normalize_employment_batch(batch)?;
    serde_arrow::from_record_batch(&normalized)
        .map_err(|e| VarietyError::Conversion(format!("Failed to deserialize: {e}")))
}

/// Build a validated panel from cleaned record batches
///
/// Batches are converted in parallel; record order follows batch order.
///
/// # Errors
/// Returns an error if a batch lacks a required column, a column cannot be
/// cast, or a record breaks the panel guarantees.
pub fn panel_from_batches(batches: &[RecordBatch]) -> Result<CleanedPanel> {
    let start = std::time::Instant::now();

    let records: Vec<EmploymentRecord> = batches
        .par_iter()
        .map(records_from_batch)
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect();

    log_operation_complete(
        "converted",
        "employment records",
        records.len(),
        Some(start.elapsed()),
    );

    CleanedPanel::new(records)
}

/// Convert a variety index into a record batch
pub fn index_to_record_batch(index: &VarietyIndex) -> Result<RecordBatch> {
    let fields: Vec<FieldRef> = variety_index_schema()
        .fields()
        .iter()
        .map(Arc::clone)
        .collect();

    serde_arrow::to_record_batch(&fields, &index.records())
        .map_err(|e| VarietyError::Conversion(format!("Serialization error: {e}")))
}
