//! Utilities for working with Arrow arrays.
//!
//! This module provides utility functions for safely extracting columns from
//! record batches, adapting their data type where Arrow can cast losslessly.

use arrow::array::{Array, ArrayRef};
use arrow::compute::{CastOptions, can_cast_types, cast_with_options};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use log::debug;

use crate::error::{Result, VarietyError};

/// Get the column index by name from a record batch
///
/// # Errors
/// Returns `VarietyError::ColumnNotFound` if the column does not exist
pub fn get_column_index(batch: &RecordBatch, column_name: &str) -> Result<usize> {
    batch
        .schema()
        .index_of(column_name)
        .map_err(|_| VarietyError::ColumnNotFound {
            column: column_name.to_string(),
        })
}

/// Get a required, null-free column with the expected data type
///
/// If the column has a different type it is cast to `expected_type`. Casts
/// are checked: a value that does not fit the target type is an error rather
/// than a null.
///
/// # Arguments
///
/// * `batch` - The record batch containing the column
/// * `column_name` - The name of the column to extract
/// * `expected_type` - The expected data type for the column
///
/// # Errors
/// Returns an error if the column is missing, contains nulls, or cannot be
/// cast to `expected_type`.
pub fn get_column(
    batch: &RecordBatch,
    column_name: &str,
    expected_type: &DataType,
) -> Result<ArrayRef> {
    let column = batch.column(get_column_index(batch, column_name)?);

    if column.null_count() > 0 {
        return Err(VarietyError::Conversion(format!(
            "Column '{column_name}' contains {} null values",
            column.null_count()
        )));
    }

    let actual_type = column.data_type();
    if actual_type == expected_type {
        return Ok(column.clone());
    }

    if !can_cast_types(actual_type, expected_type) {
        return Err(VarietyError::Conversion(format!(
            "Column '{column_name}' has type {actual_type:?}, expected {expected_type:?}"
        )));
    }

    debug!("Converting column '{column_name}' from {actual_type:?} to {expected_type:?}");
    let options = CastOptions {
        safe: false,
        ..CastOptions::default()
    };
    Ok(cast_with_options(column, expected_type, &options)?)
}
