//! Base-2 Shannon entropy primitives
//!
//! H = -Σᵢ pᵢ log2(pᵢ)
//!
//! Zero-probability terms contribute nothing; `log2(0)` is never evaluated.

/// Contribution of a single probability to the entropy sum
#[inline]
#[must_use]
pub fn entropy_term(p: f64) -> f64 {
    if p > 0.0 { -p * p.log2() } else { 0.0 }
}

/// Shannon entropy in bits of an already normalized distribution
#[must_use]
pub fn shannon_entropy<I>(probabilities: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    probabilities.into_iter().map(entropy_term).sum()
}

/// Entropy of member shares after normalizing them by their sum
///
/// A group with a single member has no internal diversity and yields 0
/// without evaluating the general formula.
#[must_use]
pub fn within_group_entropy(member_shares: &[f64]) -> f64 {
    match member_shares {
        [] | [_] => 0.0,
        members => {
            let group_share: f64 = members.iter().sum();
            if group_share <= 0.0 {
                return 0.0;
            }
            shannon_entropy(members.iter().map(|share| share / group_share))
        }
    }
}
