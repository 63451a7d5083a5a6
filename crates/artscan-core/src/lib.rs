//! artscan core - batch image corpus metadata analysis.
//!
//! artscan is a one-shot pipeline that walks a directory tree, measures
//! every raster image it finds and aggregates the results:
//!
//! ```text
//! Root dir → Discover → Measure each (size + decode) → Collection → Stats
//! ```
//!
//! A file that fails to decode degrades to a partial record (size only)
//! instead of aborting the run; only an invalid scan root is fatal.
//!
//! # Usage
//!
//! ```rust,ignore
//! use artscan_core::{Config, CorpusScanner, SummaryStats};
//!
//! fn main() -> artscan_core::Result<()> {
//!     let config = Config::load()?;
//!     let scanner = CorpusScanner::new(&config);
//!
//!     let collection = scanner.run("./art".as_ref())?;
//!     let stats = SummaryStats::from_collection(&collection);
//!     println!("{} images", stats.total_images);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod stats;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ArtscanError, ConfigError, MeasureError, Result, ScanError};
pub use output::{OutputFormat, TableWriter};
pub use pipeline::{CorpusScanner, Measurement, MetadataReader};
pub use stats::SummaryStats;
pub use types::{Dimensions, ImageCollection, ImageRecord};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
