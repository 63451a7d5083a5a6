//! Per-file metadata measurement: size from the filesystem, dimensions from
//! a decode attempt.

use image::GenericImageView;
use std::path::Path;

use crate::error::MeasureError;
use crate::types::{Dimensions, ImageRecord};

/// Outcome of measuring one candidate file.
///
/// A decode failure is an expected outcome, not an error: it carries the
/// degraded record plus the reason, and the batch continues.
#[derive(Debug)]
pub enum Measurement {
    /// The file decoded; all dimensional fields are known.
    Complete(ImageRecord),
    /// The file could not be decoded; only the size is known.
    Degraded { record: ImageRecord, reason: String },
}

impl Measurement {
    /// Extract the record, complete or degraded.
    pub fn into_record(self) -> ImageRecord {
        match self {
            Measurement::Complete(record) => record,
            Measurement::Degraded { record, .. } => record,
        }
    }
}

/// Measures a single candidate file.
pub struct MetadataReader;

impl MetadataReader {
    /// Produce a measurement for `path`.
    ///
    /// Size comes from filesystem metadata first; if that fails (the file
    /// vanished between discovery and now) the whole measurement fails with
    /// [`MeasureError::Unreadable`] and the caller omits the record. A
    /// decode failure afterwards degrades the record instead.
    ///
    /// Decoder resources are scoped to this call — nothing stays open after
    /// it returns.
    pub fn measure(path: &Path) -> Result<Measurement, MeasureError> {
        let meta = std::fs::metadata(path).map_err(|e| MeasureError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file_size = meta.len();

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        match Self::decode_dimensions(path) {
            Ok(dims) => Ok(Measurement::Complete(ImageRecord::complete(
                filename, dims, file_size,
            ))),
            Err(reason) => Ok(Measurement::Degraded {
                record: ImageRecord::degraded(filename, file_size),
                reason,
            }),
        }
    }

    /// Decode the image and read its dimensions and channel count.
    ///
    /// Format is detected from content, not the extension, so a misnamed
    /// but valid image still decodes.
    fn decode_dimensions(path: &Path) -> Result<Dimensions, String> {
        let reader = image::ImageReader::open(path)
            .map_err(|e| format!("cannot open: {e}"))?
            .with_guessed_format()
            .map_err(|e| format!("cannot detect format: {e}"))?;

        let image = reader.decode().map_err(|e| e.to_string())?;

        let (width, height) = image.dimensions();
        Ok(Dimensions {
            width,
            height,
            channels: image.color().channel_count(),
        })
    }
}
