//! Algorithm implementations for regional economic analysis
//!
//! This module contains the entropy-based variety computations over
//! employment panels.

pub mod variety;
