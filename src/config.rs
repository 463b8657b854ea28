//! Configuration structures for a training run.
//!
//! This module provides the run configuration parsed from JSON files. One
//! parameterized configuration replaces hard-coded training-run variants:
//! step count, batch size, learning rate, reporting interval, RNG seed, and
//! the optional loss-log file are all settings.

use serde::Deserialize;
use std::error::Error;
use std::fs;

/// Configuration for a training run.
///
/// Every field has a default, so an empty JSON object (`{}`) is a valid
/// configuration.
///
/// # Example
///
/// ```json
/// {
///   "steps": 5000,
///   "batch_size": 100,
///   "learning_rate": 0.5,
///   "print_interval": 50,
///   "seed": 42,
///   "loss_file": "loss_data.txt"
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Number of training steps to run (inclusive of step 0).
    #[serde(default = "default_steps")]
    pub steps: usize,

    /// Examples per mini-batch.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Step size for the averaged gradient update.
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,

    /// A persistent progress line is printed every `print_interval` steps;
    /// other steps refresh the line in place.
    #[serde(default = "default_print_interval")]
    pub print_interval: usize,

    /// Seed for parameter initialization; absent means time-seeded.
    pub seed: Option<u64>,

    /// Path of the append-only `step\taverage_loss` log; absent disables it.
    pub loss_file: Option<String>,
}

fn default_steps() -> usize {
    5000
}

fn default_batch_size() -> usize {
    100
}

fn default_learning_rate() -> f64 {
    0.5
}

fn default_print_interval() -> usize {
    50
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            batch_size: default_batch_size(),
            learning_rate: default_learning_rate(),
            print_interval: default_print_interval(),
            seed: None,
            loss_file: None,
        }
    }
}

/// Loads a run configuration from a JSON file.
///
/// Reads the file at `path` and deserializes its JSON contents into a
/// `RunConfig`, then validates the values.
///
/// # Returns
///
/// `Ok(RunConfig)` on success, or an error if the file cannot be read, the
/// JSON is invalid, or a value is out of range.
///
/// # Examples
///
/// ```no_run
/// use mnist_softmax::config::load_config;
///
/// let cfg = load_config("config/softmax.json").unwrap();
/// assert!(cfg.batch_size > 0);
/// ```
pub fn load_config(path: &str) -> Result<RunConfig, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    let config: RunConfig = serde_json::from_str(&contents)?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &RunConfig) -> Result<(), Box<dyn Error>> {
    if config.batch_size == 0 {
        return Err(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "batch_size must be positive",
        )));
    }

    if !(config.learning_rate > 0.0 && config.learning_rate.is_finite()) {
        return Err(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "learning_rate must be positive and finite",
        )));
    }

    if config.print_interval == 0 {
        return Err(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "print_interval must be positive",
        )));
    }

    Ok(())
}
