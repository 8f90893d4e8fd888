//! Industry taxonomy levels
//!
//! Industry labels are coarsened by truncation: the first character gives the
//! 1-digit sector and the first two characters the 2-digit branch. Only these
//! two fixed levels exist, so they are plain projections rather than a tree.

use std::fmt;

use crate::config::ShortLabelPolicy;
use crate::error::{Result, VarietyError};

/// Number of leading characters forming the 2-digit code
pub const TWO_DIGIT_LEN: usize = 2;

/// Coarser industry codes derived from one industry label
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndustryCode {
    /// First character of the label
    pub one_digit: String,
    /// First two characters of the label, or the configured fallback
    pub two_digit: String,
}

impl fmt::Display for IndustryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.one_digit, self.two_digit)
    }
}

/// Leading `n` characters of a label, respecting UTF-8 boundaries
fn prefix(label: &str, n: usize) -> &str {
    match label.char_indices().nth(n) {
        Some((end, _)) => &label[..end],
        None => label,
    }
}

/// 1-digit code: the first character of the label
#[must_use]
pub fn code_1digit(industry: &str) -> &str {
    prefix(industry, 1)
}

/// 2-digit code: the first two characters, or `None` for shorter labels
#[must_use]
pub fn code_2digit(industry: &str) -> Option<&str> {
    if industry.chars().count() < TWO_DIGIT_LEN {
        None
    } else {
        Some(prefix(industry, TWO_DIGIT_LEN))
    }
}

/// Resolve both taxonomy levels for an industry label
///
/// Labels shorter than two characters follow `policy`: `WholeLabel` keeps the
/// label as its own 2-digit code, `PadWithZero` right-pads it with `'0'`, and
/// `Reject` fails.
///
/// # Errors
/// Returns `VarietyError::DegenerateIndustryLabel` for a short label under
/// `ShortLabelPolicy::Reject`.
pub fn resolve(industry: &str, policy: ShortLabelPolicy) -> Result<IndustryCode> {
    let one_digit = code_1digit(industry).to_string();

    let two_digit = match code_2digit(industry) {
        Some(code) => code.to_string(),
        None => match policy {
            ShortLabelPolicy::WholeLabel => industry.to_string(),
            ShortLabelPolicy::PadWithZero => {
                let mut padded = industry.to_string();
                while padded.chars().count() < TWO_DIGIT_LEN {
                    padded.push('0');
                }
                padded
            }
            ShortLabelPolicy::Reject => {
                return Err(VarietyError::DegenerateIndustryLabel {
                    label: industry.to_string(),
                });
            }
        },
    };

    Ok(IndustryCode {
        one_digit,
        two_digit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_levels() {
        let code = resolve("11 Crops", ShortLabelPolicy::WholeLabel).unwrap();
        assert_eq!(code.one_digit, "1");
        assert_eq!(code.two_digit, "11");
        assert_eq!(code.to_string(), "1/11");
    }

    #[test]
    fn test_multibyte_labels() {
        assert_eq!(code_1digit("Øl"), "Ø");
        assert_eq!(code_2digit("Ølbrygning"), Some("Øl"));
    }

    #[test]
    fn test_short_label_policies() {
        assert_eq!(code_2digit("7"), None);

        let whole = resolve("7", ShortLabelPolicy::WholeLabel).unwrap();
        assert_eq!(whole.one_digit, "7");
        assert_eq!(whole.two_digit, "7");

        let padded = resolve("7", ShortLabelPolicy::PadWithZero).unwrap();
        assert_eq!(padded.two_digit, "70");

        let err = resolve("7", ShortLabelPolicy::Reject).unwrap_err();
        assert!(matches!(err, VarietyError::DegenerateIndustryLabel { label } if label == "7"));
    }

    #[test]
    fn test_two_char_label_is_not_short() {
        let code = resolve("45", ShortLabelPolicy::Reject).unwrap();
        assert_eq!(code.two_digit, "45");
    }
}
