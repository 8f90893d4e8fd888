//! Arrow data handling utilities
//!
//! This module contains utilities for moving employment panels and variety
//! indexes across the Arrow record batch boundary.

pub mod array_utils;
pub mod conversion;

// Re-export commonly used functions for convenience
pub use array_utils::{get_column, get_column_index};
pub use conversion::{
    employment_schema, index_to_record_batch, normalize_employment_batch, panel_from_batches,
    records_from_batch, variety_index_schema,
};
