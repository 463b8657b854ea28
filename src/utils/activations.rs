//! Softmax activation for the classifier output.

/// Softmax applied in place to one activation vector.
///
/// Converts raw class scores to probabilities. Uses the max-subtraction
/// trick for numerical stability to avoid overflow with large scores; the
/// shift does not change the output distribution.
///
/// # Panics
///
/// Panics if `activations` is empty.
pub fn softmax_inplace(activations: &mut [f64]) {
    assert!(!activations.is_empty(), "softmax of an empty vector");

    let mut max_value = activations[0];
    for &value in activations.iter().skip(1) {
        if value > max_value {
            max_value = value;
        }
    }

    let mut sum = 0.0f64;
    for value in activations.iter_mut() {
        *value = (*value - max_value).exp();
        sum += *value;
    }

    for value in activations.iter_mut() {
        *value /= sum;
    }
}
