//! Shared utilities for the softmax classifier.
//!
//! This module provides the seedable random number generator used for
//! parameter initialization and the numerically stable softmax.

pub mod activations;
pub mod rng;

pub use activations::softmax_inplace;
pub use rng::SimpleRng;
