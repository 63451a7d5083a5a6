//! The metadata extraction pipeline.
//!
//! - **discovery**: find candidate files under the scan root
//! - **measure**: per-file size + decode-and-measure
//! - **scanner**: orchestrates discovery → measure into a frozen collection

pub mod discovery;
pub mod measure;
pub mod scanner;

// Re-exports for convenient access
pub use discovery::FileDiscovery;
pub use measure::{Measurement, MetadataReader};
pub use scanner::CorpusScanner;
