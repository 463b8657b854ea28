//! Argmax-based accuracy over a dataset.

use crate::data::Dataset;
use crate::model::SoftmaxModel;

/// Index of the maximum value, scanning left to right with strict `>`.
///
/// Ties resolve to the first-occurring (lowest) index.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn argmax(values: &[f64]) -> usize {
    assert!(!values.is_empty(), "argmax of an empty slice");

    let mut best = 0usize;
    let mut max_value = values[0];
    for (i, &value) in values.iter().enumerate().skip(1) {
        if value > max_value {
            max_value = value;
            best = i;
        }
    }
    best
}

/// Fraction of examples whose predicted class matches the label.
///
/// # Panics
///
/// Panics if the dataset is empty; evaluating an empty dataset is a caller
/// bug.
pub fn accuracy(dataset: &Dataset, model: &SoftmaxModel) -> f64 {
    assert!(!dataset.is_empty(), "accuracy requires a non-empty dataset");

    let mut correct = 0usize;
    for (image, &label) in dataset.images().iter().zip(dataset.labels()) {
        let activations = model.predict(image.pixels());
        if argmax(&activations) == label as usize {
            correct += 1;
        }
    }

    correct as f64 / dataset.len() as f64
}
