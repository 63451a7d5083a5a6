//! Core data types for the artscan metadata pipeline.
//!
//! The model is append-only during extraction and frozen afterward:
//! [`ImageCollection`] is built once by the pipeline, and everything
//! downstream reads it as an immutable value.

use serde::{Deserialize, Serialize};

/// Pixel dimensions and channel count of a successfully decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Number of color channels (3 for RGB, 4 for RGBA, ...)
    pub channels: u8,
}

/// Metadata for one discovered file.
///
/// The dimensional fields are all `Some` or all `None`: decode success is
/// all-or-nothing, which the two constructors enforce. `file_size` comes
/// from filesystem metadata and is populated regardless of decode outcome.
///
/// Serialization keeps absent fields as explicit `null` (no
/// `skip_serializing_if`) — downstream table consumers rely on every column
/// being present, with a missing-value marker rather than a zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Base name of the file (no directory component)
    pub filename: String,

    /// Image height in pixels, if the file decoded
    pub height: Option<u32>,

    /// Image width in pixels, if the file decoded
    pub width: Option<u32>,

    /// Channel count, if the file decoded
    pub channels: Option<u8>,

    /// File size in bytes
    pub file_size: u64,
}

impl ImageRecord {
    /// Record for a file that decoded successfully.
    pub fn complete(filename: impl Into<String>, dims: Dimensions, file_size: u64) -> Self {
        Self {
            filename: filename.into(),
            height: Some(dims.height),
            width: Some(dims.width),
            channels: Some(dims.channels),
            file_size,
        }
    }

    /// Record for a file that could not be decoded. Size is still known.
    pub fn degraded(filename: impl Into<String>, file_size: u64) -> Self {
        Self {
            filename: filename.into(),
            height: None,
            width: None,
            channels: None,
            file_size,
        }
    }

    /// True when the dimensional fields are absent.
    pub fn is_degraded(&self) -> bool {
        self.width.is_none()
    }
}

/// The finalized, ordered record set for one scan.
///
/// One entry per file visited by the scanner, in processing order. Built by
/// the pipeline and read-only afterward; serializes as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageCollection {
    records: Vec<ImageRecord>,
}

impl ImageCollection {
    /// Append a record. Extraction-phase only.
    pub(crate) fn push(&mut self, record: ImageRecord) {
        self.records.push(record);
    }

    /// The records, in processing order.
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    /// Number of records, degraded ones included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ImageCollection {
    type Item = &'a ImageRecord;
    type IntoIter = std::slice::Iter<'a, ImageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<ImageRecord> for ImageCollection {
    fn from_iter<T: IntoIterator<Item = ImageRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
