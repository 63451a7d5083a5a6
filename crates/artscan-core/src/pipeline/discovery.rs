//! File discovery for finding images under a scan root.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::error::ScanError;

/// Discovers image files under a root directory.
pub struct FileDiscovery {
    config: ScanConfig,
}

impl FileDiscovery {
    /// Create a new file discovery instance.
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Lazily enumerate all supported image files under `root`, at any depth.
    ///
    /// Fails with [`ScanError::PathNotFound`] when the root does not exist
    /// or is not a directory. Traversal errors on individual entries are
    /// logged and skipped; no ordering is guaranteed.
    pub fn scan<'a>(
        &'a self,
        root: &Path,
    ) -> Result<impl Iterator<Item = PathBuf> + 'a, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::PathNotFound(root.to_path_buf()));
        }

        let walker = WalkDir::new(root)
            .follow_links(self.config.follow_links)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(move |entry| {
                entry.file_type().is_file() && self.is_supported(entry.path())
            })
            .map(|entry| entry.into_path());

        Ok(walker)
    }

    /// Check if a file has a supported extension (case-insensitive).
    fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext_lower = ext.to_lowercase();
                self.config
                    .extensions
                    .iter()
                    .any(|allowed| allowed.to_lowercase() == ext_lower)
            })
            .unwrap_or(false)
    }
}
