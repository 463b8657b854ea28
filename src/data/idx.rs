//! Decoder for the IDX binary container format used by MNIST.
//!
//! Both file kinds start with a big-endian 32-bit magic number followed by
//! big-endian 32-bit dimension fields, then the raw payload bytes:
//!
//! ```text
//! label file: u32 magic(0x00000801) | u32 count | u8[count] labels
//! image file: u32 magic(0x00000803) | u32 count | u32 rows | u32 cols
//!             | u8[count * rows * cols] pixels, row-major per image
//! ```
//!
//! The file handle is scoped to each decode call and released on every exit
//! path, including errors.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::data::dataset::{Image, IMAGE_COLS, IMAGE_ROWS, IMAGE_SIZE};
use crate::error::MnistError;

/// Magic number of an IDX1 label file.
pub const LABEL_MAGIC: u32 = 0x0000_0801;
/// Magic number of an IDX3 image file.
pub const IMAGE_MAGIC: u32 = 0x0000_0803;

fn read_be_u32(reader: &mut impl Read, path: &Path) -> Result<u32, MnistError> {
    let mut bytes = [0u8; 4];
    reader
        .read_exact(&mut bytes)
        .map_err(|e| MnistError::io(path, e))?;
    Ok(u32::from_be_bytes(bytes))
}

/// Decode an IDX1 label file into digit labels.
///
/// Fails with [`MnistError::InvalidMagic`] unless the file starts with
/// `0x00000801`, and with [`MnistError::Io`] on a missing file or a payload
/// shorter than the declared count.
pub fn decode_labels<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, MnistError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| MnistError::io(path, e))?;
    let mut reader = BufReader::new(file);

    let magic = read_be_u32(&mut reader, path)?;
    if magic != LABEL_MAGIC {
        return Err(MnistError::InvalidMagic {
            path: path.to_path_buf(),
            expected: LABEL_MAGIC,
            found: magic,
        });
    }

    let count = read_be_u32(&mut reader, path)? as usize;
    let mut labels = vec![0u8; count];
    reader
        .read_exact(&mut labels)
        .map_err(|e| MnistError::io(path, e))?;

    Ok(labels)
}

/// Decode an IDX3 image file into fixed-size 28x28 images.
///
/// Fails with [`MnistError::InvalidMagic`] unless the file starts with
/// `0x00000803`, with [`MnistError::UnexpectedDimensions`] if the header
/// declares anything other than 28 rows by 28 columns, and with
/// [`MnistError::Io`] on a missing file or a payload shorter than the
/// declared image count.
pub fn decode_images<P: AsRef<Path>>(path: P) -> Result<Vec<Image>, MnistError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| MnistError::io(path, e))?;
    let mut reader = BufReader::new(file);

    let magic = read_be_u32(&mut reader, path)?;
    if magic != IMAGE_MAGIC {
        return Err(MnistError::InvalidMagic {
            path: path.to_path_buf(),
            expected: IMAGE_MAGIC,
            found: magic,
        });
    }

    let count = read_be_u32(&mut reader, path)? as usize;
    let rows = read_be_u32(&mut reader, path)?;
    let cols = read_be_u32(&mut reader, path)?;

    // The pixel vector length is a compile-time constant; refuse files whose
    // header disagrees rather than silently misreading the payload.
    if rows as usize != IMAGE_ROWS || cols as usize != IMAGE_COLS {
        return Err(MnistError::UnexpectedDimensions {
            path: path.to_path_buf(),
            rows,
            cols,
            expected_rows: IMAGE_ROWS as u32,
            expected_cols: IMAGE_COLS as u32,
        });
    }

    let mut pixels = vec![0u8; count * IMAGE_SIZE];
    reader
        .read_exact(&mut pixels)
        .map_err(|e| MnistError::io(path, e))?;

    let images = pixels
        .chunks_exact(IMAGE_SIZE)
        .map(|chunk| {
            let mut buffer = [0u8; IMAGE_SIZE];
            buffer.copy_from_slice(chunk);
            Image::new(buffer)
        })
        .collect();

    Ok(images)
}
