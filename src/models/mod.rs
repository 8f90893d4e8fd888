//! Domain models for regional variety analysis
//!
//! Input records and their validated panel on one side, per-group variety
//! indexes on the other.

pub mod index;
pub mod panel;
pub mod record;

// Re-export commonly used types
pub use index::{VarietyIndex, VarietyIndexRecord};
pub use panel::CleanedPanel;
pub use record::EmploymentRecord;
