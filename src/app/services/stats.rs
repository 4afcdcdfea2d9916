//! Statistics engine
//!
//! Computes aggregate rating statistics over a catalog snapshot: mean,
//! median, min/max, and the full tie sets of best- and worst-rated titles.

use crate::app::models::RatingStats;
use crate::app::services::catalog::Catalog;
use crate::{Error, Result};
use tracing::debug;

/// Compute rating statistics for a catalog
///
/// Fails with `EmptyCatalog` if the catalog has no entries. Tie sets use
/// exact f64 equality against the extremal values (no epsilon) and list
/// titles in catalog order.
pub fn compute_stats(catalog: &Catalog) -> Result<RatingStats> {
    if catalog.is_empty() {
        return Err(Error::empty_catalog("compute statistics"));
    }

    let entries = catalog.entries();
    let count = entries.len();

    let sum: f64 = entries.iter().map(|e| e.rating).sum();
    let mean = sum / count as f64;

    let mut sorted: Vec<f64> = entries.iter().map(|e| e.rating).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).expect("ratings are never NaN"));

    let median = if count % 2 == 1 {
        sorted[count / 2]
    } else {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    };

    let min = sorted[0];
    let max = sorted[count - 1];

    let best: Vec<String> = entries
        .iter()
        .filter(|e| e.rating == max)
        .map(|e| e.title.clone())
        .collect();
    let worst: Vec<String> = entries
        .iter()
        .filter(|e| e.rating == min)
        .map(|e| e.title.clone())
        .collect();

    debug!(count, mean, median, min, max, "computed catalog stats");

    Ok(RatingStats {
        mean,
        median,
        min,
        max,
        best,
        worst,
    })
}
