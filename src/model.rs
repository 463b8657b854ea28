//! Single-layer softmax model.
//!
//! The model is one linear transform followed by softmax: a bias vector of
//! length `num_classes` and a row-major weight matrix of shape
//! `num_classes x input_dim`. Pixels are normalized to [0, 1] inside
//! `predict`.

use crate::trainer::GradientAccumulator;
use crate::utils::{softmax_inplace, SimpleRng};

/// Multinomial logistic regression parameters.
///
/// # Example
///
/// ```
/// use mnist_softmax::model::SoftmaxModel;
/// use mnist_softmax::utils::SimpleRng;
///
/// let mut rng = SimpleRng::new(42);
/// let model = SoftmaxModel::new(10, 784, &mut rng);
/// assert_eq!(model.num_classes(), 10);
/// assert_eq!(model.input_dim(), 784);
/// ```
pub struct SoftmaxModel {
    num_classes: usize,
    input_dim: usize,
    biases: Vec<f64>,
    weights: Vec<f64>,
}

impl SoftmaxModel {
    /// Create a model with every bias and weight drawn independently and
    /// uniformly from [0, 1).
    ///
    /// Plain uniform initialization, not a zero-mean or variance-scaled
    /// scheme.
    pub fn new(num_classes: usize, input_dim: usize, rng: &mut SimpleRng) -> Self {
        let mut biases = vec![0.0f64; num_classes];
        let mut weights = vec![0.0f64; num_classes * input_dim];

        for bias in &mut biases {
            *bias = rng.next_f64();
        }
        for weight in &mut weights {
            *weight = rng.next_f64();
        }

        Self {
            num_classes,
            input_dim,
            biases,
            weights,
        }
    }

    /// Create a model from explicit parameters.
    ///
    /// `weights` is row-major: row `i` holds the `input_dim` weights of
    /// class `i`.
    ///
    /// # Panics
    ///
    /// Panics if `weights.len()` is not a multiple of `biases.len()`.
    pub fn with_parameters(biases: Vec<f64>, weights: Vec<f64>) -> Self {
        let num_classes = biases.len();
        assert!(num_classes > 0, "model needs at least one class");
        assert_eq!(
            weights.len() % num_classes,
            0,
            "weight matrix must have num_classes rows"
        );

        let input_dim = weights.len() / num_classes;
        Self {
            num_classes,
            input_dim,
            biases,
            weights,
        }
    }

    /// Number of output classes.
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Number of input features (pixels per image).
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// Bias vector.
    pub fn biases(&self) -> &[f64] {
        &self.biases
    }

    /// Row-major weight matrix.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Class probabilities for one image.
    ///
    /// Computes `a[i] = b[i] + sum_j w[i][j] * pixel[j] / 255.0` and applies
    /// the numerically stable softmax in place. The result is a probability
    /// distribution over classes.
    ///
    /// # Panics
    ///
    /// Panics if `pixels.len()` differs from the model's input dimension.
    pub fn predict(&self, pixels: &[u8]) -> Vec<f64> {
        assert_eq!(
            pixels.len(),
            self.input_dim,
            "pixel count must match model input dimension"
        );

        let mut activations = vec![0.0f64; self.num_classes];
        for (i, activation) in activations.iter_mut().enumerate() {
            let row = &self.weights[i * self.input_dim..(i + 1) * self.input_dim];
            let mut value = self.biases[i];
            for (weight, &pixel) in row.iter().zip(pixels.iter()) {
                value += weight * f64::from(pixel) / 255.0;
            }
            *activation = value;
        }

        softmax_inplace(&mut activations);
        activations
    }

    /// Apply a batched, averaged gradient update in place.
    ///
    /// Every parameter moves by `-learning_rate * gradient / batch_size`.
    ///
    /// # Panics
    ///
    /// Panics if the accumulator shape differs from the model shape or if
    /// `batch_size` is zero.
    pub fn apply_gradients(
        &mut self,
        gradient: &GradientAccumulator,
        learning_rate: f64,
        batch_size: usize,
    ) {
        assert!(batch_size > 0, "cannot average a gradient over zero examples");
        assert_eq!(
            gradient.bias_grads().len(),
            self.biases.len(),
            "gradient shape must match model shape"
        );
        assert_eq!(
            gradient.weight_grads().len(),
            self.weights.len(),
            "gradient shape must match model shape"
        );

        let scale = learning_rate / batch_size as f64;
        for (bias, grad) in self.biases.iter_mut().zip(gradient.bias_grads()) {
            *bias -= scale * grad;
        }
        for (weight, grad) in self.weights.iter_mut().zip(gradient.weight_grads()) {
            *weight -= scale * grad;
        }
    }
}
