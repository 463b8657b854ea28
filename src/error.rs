//! Error taxonomy for dataset loading.
//!
//! All failures are load-time and deterministic: a missing or unreadable
//! file, a wrong magic number, unexpected image dimensions, or an
//! image/label count disagreement. None of them is retried; the first error
//! aborts the run before any training occurs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while decoding the MNIST IDX files.
#[derive(Error, Debug)]
pub enum MnistError {
    /// File missing, unreadable, or shorter than its header declares.
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Magic-number mismatch: wrong file or corruption.
    #[error("invalid magic number in {path}: {found:#010x} not {expected:#010x}")]
    InvalidMagic {
        path: PathBuf,
        expected: u32,
        found: u32,
    },

    /// Image file header declares dimensions other than 28x28.
    #[error("unexpected image dimensions in {path}: {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    UnexpectedDimensions {
        path: PathBuf,
        rows: u32,
        cols: u32,
        expected_rows: u32,
        expected_cols: u32,
    },

    /// Image and label files disagree on the number of examples.
    #[error("number of images does not match number of labels ({images} != {labels})")]
    CountMismatch { images: usize, labels: usize },
}

impl MnistError {
    /// Attach a path to a raw I/O error.
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        MnistError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
