//! A Rust library for computing regional industrial-diversity indexes
//! (related, unrelated and total variety) from employment panels.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod taxonomy;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{ShortLabelPolicy, VarietyConfig};
pub use error::{Result, VarietyError};
pub use models::{CleanedPanel, EmploymentRecord, VarietyIndex, VarietyIndexRecord};
pub use taxonomy::IndustryCode;

// Variety computation
pub use algorithm::variety::{
    GroupKey, Measures, RegionYearGroup, ShareTable, assemble_index, compute_measures,
    compute_shares, compute_variety_index,
};

// Arrow types
pub use arrow::record_batch::RecordBatch;

// Arrow boundary
pub use utils::arrow::{index_to_record_batch, panel_from_batches};
