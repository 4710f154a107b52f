//! Numerically stable helpers for manipulating discrete distributions.

/// Tolerance used when checking that a vector sums to one.
pub const DISTRIBUTION_TOLERANCE: f64 = 1e-9;

/// Returns the uniform distribution over `num_states` states.
pub fn uniform(num_states: usize) -> Vec<f64> {
    if num_states == 0 {
        return Vec::new();
    }
    vec![1.0 / num_states as f64; num_states]
}

/// Index of the first maximal entry (0 for an empty slice).
pub fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (idx, &value) in values.iter().enumerate().skip(1) {
        if value > values[best] {
            best = idx;
        }
    }
    best
}

/// Normalised exponentials of `logits`, shifted by the maximum before exponentiation.
///
/// The largest logit maps to `exp(0) = 1`, so the normaliser is at least one
/// and the output is always a valid distribution for finite input.
pub fn stable_softmax(logits: &[f64]) -> Vec<f64> {
    if logits.is_empty() {
        return Vec::new();
    }
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|&logit| (logit - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|value| value / total).collect()
}

/// Clips negative entries to zero and rescales to unit mass.
///
/// Returns `None` when nothing positive survives the clip or the mass is not
/// finite.
pub fn clip_and_normalize(values: &[f64]) -> Option<Vec<f64>> {
    let clipped: Vec<f64> = values.iter().map(|&value| value.max(0.0)).collect();
    let total: f64 = clipped.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return None;
    }
    Some(clipped.into_iter().map(|value| value / total).collect())
}

/// Whether `values` is a probability vector within [`DISTRIBUTION_TOLERANCE`].
pub fn is_distribution(values: &[f64]) -> bool {
    if values.is_empty() {
        return false;
    }
    if values.iter().any(|value| !value.is_finite() || *value < 0.0) {
        return false;
    }
    let total: f64 = values.iter().sum();
    (total - 1.0).abs() <= DISTRIBUTION_TOLERANCE
}
