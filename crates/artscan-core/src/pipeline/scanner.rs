//! Pipeline orchestration - discovery folded through measurement into a
//! finalized collection.

use std::path::Path;

use crate::config::Config;
use crate::error::ScanError;
use crate::types::ImageCollection;

use super::discovery::FileDiscovery;
use super::measure::{Measurement, MetadataReader};

/// The corpus scanner: walks a root, measures every candidate file and
/// returns the frozen record set.
pub struct CorpusScanner {
    discovery: FileDiscovery,
}

impl CorpusScanner {
    /// Create a scanner from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            discovery: FileDiscovery::new(config.scan.clone()),
        }
    }

    /// Run the full pipeline over `root`.
    ///
    /// Only the root-path condition is fatal. A file that vanishes between
    /// discovery and measurement is logged and omitted; a file that fails to
    /// decode is logged and kept as a degraded record. Every other candidate
    /// contributes exactly one record, in processing order.
    pub fn run(&self, root: &Path) -> Result<ImageCollection, ScanError> {
        self.run_with(root, |_| {})
    }

    /// Like [`run`](Self::run), invoking `on_file` after each measured path.
    /// Used by the CLI for progress reporting.
    pub fn run_with<F>(&self, root: &Path, mut on_file: F) -> Result<ImageCollection, ScanError>
    where
        F: FnMut(&Path),
    {
        let mut collection = ImageCollection::default();

        for path in self.discovery.scan(root)? {
            match MetadataReader::measure(&path) {
                Ok(Measurement::Complete(record)) => {
                    tracing::debug!(
                        "Measured {} ({}x{}, {} bytes)",
                        record.filename,
                        record.width.unwrap_or(0),
                        record.height.unwrap_or(0),
                        record.file_size
                    );
                    collection.push(record);
                }
                Ok(Measurement::Degraded { record, reason }) => {
                    tracing::warn!("Decode failed for {}: {}", record.filename, reason);
                    collection.push(record);
                }
                Err(e) => {
                    // Vanished since discovery — omitted, not degraded
                    tracing::warn!("{}", e);
                }
            }
            on_file(&path);
        }

        Ok(collection)
    }
}
