//! Dataset storage and contiguous mini-batch views.
//!
//! A `Dataset` owns the decoded images and labels; a `Batch` is a non-owning
//! view over a contiguous index range of a `Dataset`. Slicing never copies
//! pixel data.

use std::path::Path;

use crate::data::idx::{decode_images, decode_labels};
use crate::error::MnistError;

/// Image height in pixels.
pub const IMAGE_ROWS: usize = 28;
/// Image width in pixels.
pub const IMAGE_COLS: usize = 28;
/// Pixels per image.
pub const IMAGE_SIZE: usize = IMAGE_ROWS * IMAGE_COLS;

/// A single decoded MNIST image: 784 pixel intensities, row-major.
///
/// Immutable after decode.
#[derive(Clone)]
pub struct Image {
    pixels: [u8; IMAGE_SIZE],
}

impl Image {
    /// Wrap a raw pixel array.
    pub fn new(pixels: [u8; IMAGE_SIZE]) -> Self {
        Self { pixels }
    }

    /// Pixel intensities in [0, 255], row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Decoded images paired 1:1 by index with their digit labels (0-9).
///
/// Invariant: `images.len() == labels.len()`, enforced at construction.
pub struct Dataset {
    images: Vec<Image>,
    labels: Vec<u8>,
}

impl Dataset {
    /// Build a dataset from already-decoded parts.
    ///
    /// Fails with [`MnistError::CountMismatch`] if the two sequences differ
    /// in length.
    pub fn new(images: Vec<Image>, labels: Vec<u8>) -> Result<Self, MnistError> {
        if images.len() != labels.len() {
            return Err(MnistError::CountMismatch {
                images: images.len(),
                labels: labels.len(),
            });
        }
        Ok(Self { images, labels })
    }

    /// Decode an IDX image/label file pair into a dataset.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mnist_softmax::data::Dataset;
    ///
    /// let train = Dataset::load("data/train-images-idx3-ubyte",
    ///                           "data/train-labels-idx1-ubyte").unwrap();
    /// assert_eq!(train.len(), 60000);
    /// ```
    pub fn load<P: AsRef<Path>>(image_path: P, label_path: P) -> Result<Self, MnistError> {
        let images = decode_images(image_path.as_ref())?;
        let labels = decode_labels(label_path.as_ref())?;
        Self::new(images, labels)
    }

    /// Number of examples.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the dataset holds no examples.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// All images, in file order.
    pub fn images(&self) -> &[Image] {
        &self.images
    }

    /// All labels, in file order.
    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    /// The `index`-th contiguous mini-batch of up to `size` examples.
    ///
    /// Returns the view over `[size * index, min(size * index + size, len))`.
    /// A start position at or past the end yields an empty batch, never an
    /// error; wrap-around (`index = step % batches`) is the caller's concern.
    pub fn batch(&self, size: usize, index: usize) -> Batch<'_> {
        let start = size * index;
        if start >= self.images.len() {
            return Batch {
                images: &[],
                labels: &[],
            };
        }

        let end = (start + size).min(self.images.len());
        Batch {
            images: &self.images[start..end],
            labels: &self.labels[start..end],
        }
    }
}

/// A non-owning view over a contiguous range of a [`Dataset`].
#[derive(Clone, Copy)]
pub struct Batch<'a> {
    images: &'a [Image],
    labels: &'a [u8],
}

impl<'a> Batch<'a> {
    /// Number of examples in the view.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the view is empty.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Images in the view, in dataset order.
    pub fn images(&self) -> &'a [Image] {
        self.images
    }

    /// Labels in the view, in dataset order.
    pub fn labels(&self) -> &'a [u8] {
        self.labels
    }

    /// Iterate over `(image, label)` pairs in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a Image, u8)> {
        self.images.iter().zip(self.labels.iter().copied())
    }
}
