//! Utility functions for the variety index crate
//!
//! Arrow boundary adapters and logging helpers shared by the algorithm
//! modules.

pub mod arrow;
pub mod logging;
