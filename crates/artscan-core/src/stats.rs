//! Aggregate statistics over a finalized collection.

use serde::{Deserialize, Serialize};

use crate::types::ImageCollection;

const BYTES_PER_MB: f64 = 1_048_576.0;

/// Summary statistics for one scan.
///
/// `avg_width`/`avg_height` average only the records whose field is present;
/// they are `None` when no record contributes (an empty or all-degraded
/// collection), which serializes as `null`. `total_size_mb` sums every
/// record, degraded ones included, since size is always known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Record count, degraded records included
    pub total_images: usize,

    /// Mean width over decoded records, if any decoded
    pub avg_width: Option<f64>,

    /// Mean height over decoded records, if any decoded
    pub avg_height: Option<f64>,

    /// Total size of all records in megabytes
    pub total_size_mb: f64,
}

impl SummaryStats {
    /// Derive statistics from a completed collection. Pure: the collection
    /// is not modified and the result depends on nothing else.
    pub fn from_collection(collection: &ImageCollection) -> Self {
        let total_bytes: u64 = collection.iter().map(|r| r.file_size).sum();

        Self {
            total_images: collection.len(),
            avg_width: mean(collection.iter().filter_map(|r| r.width)),
            avg_height: mean(collection.iter().filter_map(|r| r.height)),
            total_size_mb: total_bytes as f64 / BYTES_PER_MB,
        }
    }
}

/// Arithmetic mean; `None` for an empty selection.
fn mean(values: impl Iterator<Item = u32>) -> Option<f64> {
    let (sum, count) = values.fold((0u64, 0u64), |(s, c), v| (s + u64::from(v), c + 1));
    if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Dimensions, ImageRecord};

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions {
            width,
            height,
            channels: 3,
        }
    }

    #[test]
    fn test_empty_collection_has_no_averages() {
        let stats = SummaryStats::from_collection(&ImageCollection::default());
        assert_eq!(stats.total_images, 0);
        assert_eq!(stats.avg_width, None);
        assert_eq!(stats.avg_height, None);
        assert_eq!(stats.total_size_mb, 0.0);
    }

    #[test]
    fn test_all_degraded_collection_has_no_averages_but_sums_size() {
        let collection: ImageCollection = vec![
            ImageRecord::degraded("a.png", 1_048_576),
            ImageRecord::degraded("b.png", 1_048_576),
        ]
        .into_iter()
        .collect();

        let stats = SummaryStats::from_collection(&collection);
        assert_eq!(stats.total_images, 2);
        assert_eq!(stats.avg_width, None);
        assert!((stats.total_size_mb - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_averages_exclude_degraded_records() {
        // 3 records, 1 degraded: averages divide by 2, count stays 3
        let collection: ImageCollection = vec![
            ImageRecord::complete("a.jpg", dims(100, 50), 2048),
            ImageRecord::complete("b.jpg", dims(200, 150), 1024),
            ImageRecord::degraded("c.jpg", 10),
        ]
        .into_iter()
        .collect();

        let stats = SummaryStats::from_collection(&collection);
        assert_eq!(stats.total_images, 3);
        assert_eq!(stats.avg_width, Some(150.0));
        assert_eq!(stats.avg_height, Some(100.0));
        let expected_mb = 3082.0 / 1_048_576.0;
        assert!((stats.total_size_mb - expected_mb).abs() < 1e-12);
    }

    #[test]
    fn test_no_data_serializes_as_null() {
        let stats = SummaryStats::from_collection(&ImageCollection::default());
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"avg_width\":null"));
        assert!(json.contains("\"avg_height\":null"));
    }
}
