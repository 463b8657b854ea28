//! Gradient computation and the mini-batch training step.
//!
//! Training follows the analytic gradient of cross-entropy-with-softmax:
//! for each example, `delta_i = p_i - [i == label]` is summed into a
//! [`GradientAccumulator`] of the same shape as the model, and after the
//! whole batch the averaged, learning-rate-scaled update is applied once.

use crate::data::{Batch, Image};
use crate::model::SoftmaxModel;

/// Summed per-example gradients for one batch.
///
/// Ephemeral: created fresh (zeroed) per training step and discarded after
/// the update is applied.
pub struct GradientAccumulator {
    bias_grads: Vec<f64>,
    weight_grads: Vec<f64>,
}

impl GradientAccumulator {
    /// A zeroed accumulator shaped like `model`.
    pub fn zeroed(model: &SoftmaxModel) -> Self {
        Self {
            bias_grads: vec![0.0f64; model.num_classes()],
            weight_grads: vec![0.0f64; model.num_classes() * model.input_dim()],
        }
    }

    /// Summed bias gradients.
    pub fn bias_grads(&self) -> &[f64] {
        &self.bias_grads
    }

    /// Summed weight gradients, row-major like the model's weight matrix.
    pub fn weight_grads(&self) -> &[f64] {
        &self.weight_grads
    }
}

/// Accumulate the gradient of one example and return its loss.
///
/// The loss is `-ln(p[label])` under the model's predicted distribution. If
/// the predicted probability of the true class underflows to zero the loss
/// propagates as `+Inf`; no guard is applied.
pub fn gradient_update(
    image: &Image,
    model: &SoftmaxModel,
    gradient: &mut GradientAccumulator,
    label: u8,
) -> f64 {
    let activations = model.predict(image.pixels());
    let loss = -activations[label as usize].ln();

    let input_dim = model.input_dim();
    for (i, &activation) in activations.iter().enumerate() {
        let mut delta = activation;
        if i == label as usize {
            delta -= 1.0;
        }
        gradient.bias_grads[i] += delta;

        let row = &mut gradient.weight_grads[i * input_dim..(i + 1) * input_dim];
        for (grad, &pixel) in row.iter_mut().zip(image.pixels()) {
            *grad += delta * f64::from(pixel) / 255.0;
        }
    }

    loss
}

/// Run one mini-batch gradient descent step and return the summed loss.
///
/// Examples are visited in batch order (no shuffling). The accumulated
/// gradient is averaged over the batch and applied once, scaled by
/// `learning_rate`. Callers average the returned loss themselves by
/// dividing by the batch size.
///
/// # Panics
///
/// Panics if the batch is empty; passing one is a caller bug, not a
/// recoverable runtime condition.
pub fn training_step(batch: &Batch<'_>, model: &mut SoftmaxModel, learning_rate: f64) -> f64 {
    assert!(!batch.is_empty(), "training_step requires a non-empty batch");

    let mut gradient = GradientAccumulator::zeroed(model);
    let mut total_loss = 0.0f64;

    for (image, label) in batch.iter() {
        total_loss += gradient_update(image, model, &mut gradient, label);
    }

    model.apply_gradients(&gradient, learning_rate, batch.len());
    total_loss
}
