//! Logging utilities
//!
//! This module provides standardized logging functions for operations.

use std::time::Duration;

/// Install `env_logger` with an `info` default filter
///
/// Safe to call more than once; later calls leave the first logger in place.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `subject` - What the operation runs over
pub fn log_operation_start(operation: &str, subject: &str) {
    log::info!("{operation} {subject}");
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `subject` - What was produced
/// * `items` - Number of items processed
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    subject: &str,
    items: usize,
    elapsed: Option<Duration>,
) {
    if let Some(duration) = elapsed {
        log::info!("Successfully {operation} {items} {subject} in {duration:?}");
    } else {
        log::info!("Successfully {operation} {items} {subject}");
    }
}

/// Log an operation warning with consistent format
pub fn log_warning(message: &str) {
    log::warn!("{message}");
}
