//! Tests for the IDX decoder:
//! - decoding hand-constructed minimal valid label and image files
//! - magic-number mismatches
//! - truncated payloads
//! - header dimensions that disagree with the 28x28 constant
//! - image/label count disagreement when composing a dataset

use mnist_softmax::data::idx::{IMAGE_MAGIC, LABEL_MAGIC};
use mnist_softmax::data::{decode_images, decode_labels, Dataset, IMAGE_SIZE};
use mnist_softmax::error::MnistError;
use std::fs;
use std::path::PathBuf;

/// Write `bytes` to a unique temp file; removed on drop.
struct TempIdxFile {
    path: PathBuf,
}

impl TempIdxFile {
    fn new(name: &str, bytes: &[u8]) -> Self {
        let path = std::env::temp_dir().join(format!("mnist_softmax_{}_{}", process_id(), name));
        fs::write(&path, bytes).expect("failed to write temp IDX file");
        Self { path }
    }

    fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for TempIdxFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

fn process_id() -> u32 {
    std::process::id()
}

fn label_file_bytes(magic: u32, labels: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&magic.to_be_bytes());
    bytes.extend_from_slice(&(labels.len() as u32).to_be_bytes());
    bytes.extend_from_slice(labels);
    bytes
}

fn image_file_bytes(magic: u32, count: u32, rows: u32, cols: u32, pixels: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&magic.to_be_bytes());
    bytes.extend_from_slice(&count.to_be_bytes());
    bytes.extend_from_slice(&rows.to_be_bytes());
    bytes.extend_from_slice(&cols.to_be_bytes());
    bytes.extend_from_slice(pixels);
    bytes
}

// ============================================================================
// Label decoding
// ============================================================================

#[test]
fn test_label_round_trip() {
    let file = TempIdxFile::new(
        "labels_round_trip",
        &label_file_bytes(LABEL_MAGIC, &[0, 5, 9]),
    );

    let labels = decode_labels(file.path()).expect("valid label file must decode");
    assert_eq!(labels, vec![0, 5, 9]);
}

#[test]
fn test_label_wrong_magic_is_format_error() {
    let file = TempIdxFile::new(
        "labels_wrong_magic",
        &label_file_bytes(0x0000_0802, &[0, 5, 9]),
    );

    match decode_labels(file.path()) {
        Err(MnistError::InvalidMagic {
            expected, found, ..
        }) => {
            assert_eq!(expected, LABEL_MAGIC);
            assert_eq!(found, 0x0000_0802);
        }
        Ok(_) => panic!("wrong magic must not decode"),
        Err(other) => panic!("expected InvalidMagic, got {}", other),
    }
}

#[test]
fn test_label_truncated_payload_is_io_error() {
    // Header declares 10 labels but only 3 follow.
    let mut bytes = label_file_bytes(LABEL_MAGIC, &[]);
    bytes[4..8].copy_from_slice(&10u32.to_be_bytes());
    bytes.extend_from_slice(&[1, 2, 3]);
    let file = TempIdxFile::new("labels_truncated", &bytes);

    match decode_labels(file.path()) {
        Err(MnistError::Io { .. }) => {}
        Ok(_) => panic!("truncated file must not decode"),
        Err(other) => panic!("expected Io, got {}", other),
    }
}

#[test]
fn test_label_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("mnist_softmax_no_such_label_file");
    match decode_labels(&path) {
        Err(MnistError::Io { .. }) => {}
        Ok(_) => panic!("missing file must not decode"),
        Err(other) => panic!("expected Io, got {}", other),
    }
}

// ============================================================================
// Image decoding
// ============================================================================

#[test]
fn test_image_round_trip() {
    let mut pixels = vec![0u8; 2 * IMAGE_SIZE];
    pixels[0] = 17;
    pixels[IMAGE_SIZE] = 251;
    let file = TempIdxFile::new(
        "images_round_trip",
        &image_file_bytes(IMAGE_MAGIC, 2, 28, 28, &pixels),
    );

    let images = decode_images(file.path()).expect("valid image file must decode");
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].pixels()[0], 17);
    assert_eq!(images[0].pixels()[1], 0);
    assert_eq!(images[1].pixels()[0], 251);
}

#[test]
fn test_image_wrong_magic_is_format_error() {
    let file = TempIdxFile::new(
        "images_wrong_magic",
        &image_file_bytes(LABEL_MAGIC, 0, 28, 28, &[]),
    );

    match decode_images(file.path()) {
        Err(MnistError::InvalidMagic { expected, .. }) => assert_eq!(expected, IMAGE_MAGIC),
        Ok(_) => panic!("wrong magic must not decode"),
        Err(other) => panic!("expected InvalidMagic, got {}", other),
    }
}

#[test]
fn test_image_unexpected_dimensions_is_format_error() {
    let pixels = vec![0u8; 27 * 28];
    let file = TempIdxFile::new(
        "images_bad_dims",
        &image_file_bytes(IMAGE_MAGIC, 1, 27, 28, &pixels),
    );

    match decode_images(file.path()) {
        Err(MnistError::UnexpectedDimensions { rows, cols, .. }) => {
            assert_eq!(rows, 27);
            assert_eq!(cols, 28);
        }
        Ok(_) => panic!("misshaped file must not decode"),
        Err(other) => panic!("expected UnexpectedDimensions, got {}", other),
    }
}

#[test]
fn test_image_truncated_payload_is_io_error() {
    // Header declares 2 images but only one follows.
    let pixels = vec![0u8; IMAGE_SIZE];
    let file = TempIdxFile::new(
        "images_truncated",
        &image_file_bytes(IMAGE_MAGIC, 2, 28, 28, &pixels),
    );

    match decode_images(file.path()) {
        Err(MnistError::Io { .. }) => {}
        Ok(_) => panic!("truncated file must not decode"),
        Err(other) => panic!("expected Io, got {}", other),
    }
}

// ============================================================================
// Dataset composition
// ============================================================================

#[test]
fn test_load_dataset_pairs_images_with_labels() {
    let pixels = vec![3u8; 2 * IMAGE_SIZE];
    let images = TempIdxFile::new(
        "dataset_images",
        &image_file_bytes(IMAGE_MAGIC, 2, 28, 28, &pixels),
    );
    let labels = TempIdxFile::new("dataset_labels", &label_file_bytes(LABEL_MAGIC, &[4, 7]));

    let dataset = Dataset::load(images.path(), labels.path()).expect("matched pair must load");
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset.labels(), &[4, 7]);
    assert_eq!(dataset.images()[1].pixels()[0], 3);
}

#[test]
fn test_load_dataset_count_mismatch() {
    let pixels = vec![0u8; 2 * IMAGE_SIZE];
    let images = TempIdxFile::new(
        "mismatch_images",
        &image_file_bytes(IMAGE_MAGIC, 2, 28, 28, &pixels),
    );
    let labels = TempIdxFile::new(
        "mismatch_labels",
        &label_file_bytes(LABEL_MAGIC, &[1, 2, 3]),
    );

    match Dataset::load(images.path(), labels.path()) {
        Err(MnistError::CountMismatch { images: 2, labels: 3 }) => {}
        Ok(_) => panic!("mismatched pair must not load"),
        Err(other) => panic!("expected CountMismatch, got {}", other),
    }
}
