//! Configuration for variety index computation.

use std::fmt;

/// How to derive a 2-digit code from a label shorter than two characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShortLabelPolicy {
    /// Use the whole label as its own 2-digit code
    #[default]
    WholeLabel,
    /// Right-pad the label with `'0'` up to two characters
    PadWithZero,
    /// Fail with `VarietyError::DegenerateIndustryLabel`
    Reject,
}

impl fmt::Display for ShortLabelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::WholeLabel => "whole label",
            Self::PadWithZero => "pad with zero",
            Self::Reject => "reject",
        };
        f.write_str(label)
    }
}

/// Configuration for a variety index run
#[derive(Debug, Clone)]
pub struct VarietyConfig {
    /// Fallback for industry labels shorter than the 2-digit prefix
    pub short_label_policy: ShortLabelPolicy,
    /// Allowed deviation of a group's share sum from 1.0
    pub share_tolerance: f64,
    /// Compute measures concurrently and data-parallel over groups
    pub parallel: bool,
    /// Number of worker threads used when `parallel` is set
    pub num_threads: usize,
    /// Show a progress bar over the per-group computation
    pub show_progress: bool,
}

impl Default for VarietyConfig {
    fn default() -> Self {
        Self {
            short_label_policy: ShortLabelPolicy::default(),
            share_tolerance: 1e-9,
            parallel: true,
            num_threads: num_cpus::get(),
            show_progress: false,
        }
    }
}

impl VarietyConfig {
    /// Configuration that runs every stage on the calling thread
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            num_threads: 1,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_short_label_policy(mut self, policy: ShortLabelPolicy) -> Self {
        self.short_label_policy = policy;
        self
    }

    #[must_use]
    pub fn with_share_tolerance(mut self, tolerance: f64) -> Self {
        self.share_tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the worker count; zero is clamped to one
    #[must_use]
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads.max(1);
        self
    }

    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

impl fmt::Display for VarietyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Variety Configuration:")?;
        writeln!(f, "  Short Label Policy: {}", self.short_label_policy)?;
        writeln!(f, "  Share Tolerance: {:e}", self.share_tolerance)?;
        writeln!(f, "  Parallel: {}", self.parallel)?;
        if self.parallel {
            writeln!(f, "  Threads: {}", self.num_threads)?;
        }
        writeln!(f, "  Show Progress: {}", self.show_progress)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VarietyConfig::default();
        assert_eq!(config.short_label_policy, ShortLabelPolicy::WholeLabel);
        assert!((config.share_tolerance - 1e-9).abs() < f64::EPSILON);
        assert!(config.parallel);
        assert!(config.num_threads >= 1);
        assert!(!config.show_progress);
    }

    #[test]
    fn test_sequential_config() {
        let config = VarietyConfig::sequential().with_num_threads(0);
        assert!(!config.parallel);
        assert_eq!(config.num_threads, 1);
    }

    #[test]
    fn test_display_lists_policy() {
        let config = VarietyConfig::sequential().with_short_label_policy(ShortLabelPolicy::Reject);
        let rendered = config.to_string();
        assert!(rendered.contains("Short Label Policy: reject"));
        assert!(!rendered.contains("Threads"));
    }
}
