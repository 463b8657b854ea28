//! MNIST Softmax Classifier Library
//!
//! This library loads the MNIST handwritten-digit dataset from its canonical
//! IDX binary format and trains a single-layer softmax (multinomial logistic
//! regression) classifier with mini-batch gradient descent.
//!
//! # Modules
//!
//! - `data`: IDX decoding, dataset storage and zero-copy batching
//! - `model`: softmax model (biases, weights, prediction)
//! - `trainer`: gradient accumulation and batched parameter updates
//! - `eval`: argmax accuracy over a dataset
//! - `config`: run configuration structures
//! - `error`: load-time error taxonomy
//! - `utils`: shared utilities (RNG, softmax)

pub mod config;
pub mod data;
pub mod error;
pub mod eval;
pub mod model;
pub mod trainer;
pub mod utils;
