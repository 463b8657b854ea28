//! Dataset loading and batching for MNIST.
//!
//! This module decodes the IDX binary container format used by the MNIST
//! dataset and exposes the decoded examples as a `Dataset` that can be
//! sliced into zero-copy mini-batches.

pub mod dataset;
pub mod idx;

pub use dataset::{Batch, Dataset, Image, IMAGE_COLS, IMAGE_ROWS, IMAGE_SIZE};
pub use idx::{decode_images, decode_labels};
