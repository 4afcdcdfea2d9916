//! Histogram bucketing and rendering
//!
//! Partitions the rating domain into fixed-width bins and counts ratings
//! per bin. Rendering the counts to an image file is a separate capability
//! behind the [`HistogramRenderer`] trait; the bundled backend draws a bar
//! chart into an RGB buffer and saves it as an image.

use crate::app::models::Histogram;
use crate::app::services::catalog::Catalog;
use crate::constants::{HISTOGRAM_BINS, RATING_MAX, RATING_MIN};
use crate::{Error, Result};
use image::{Rgb, RgbImage};
use std::path::Path;
use tracing::{debug, info};

/// Count ratings into fixed-width bins spanning the rating domain
///
/// Bins are equal width (domain / bin count); the final bin is closed on
/// the right so the maximum rating lands in it. Fails with `EmptyCatalog`
/// when there are no ratings to bucket, before any renderer is invoked.
pub fn bucket_ratings(catalog: &Catalog) -> Result<Histogram> {
    if catalog.is_empty() {
        return Err(Error::empty_catalog("plot a histogram"));
    }

    let bins = HISTOGRAM_BINS;
    let width = (RATING_MAX - RATING_MIN) / bins as f64;

    let mut counts = vec![0usize; bins];
    for entry in catalog.entries() {
        let index = (((entry.rating - RATING_MIN) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    let edges: Vec<f64> = (0..=bins).map(|i| RATING_MIN + i as f64 * width).collect();

    debug!(total = catalog.len(), bins, "bucketed ratings");
    Ok(Histogram { counts, edges })
}

/// Capability for rendering a histogram to an output file
///
/// The core supplies bucket counts and boundaries and relays any failure
/// as `RenderIo` without retrying.
pub trait HistogramRenderer {
    fn render(&self, histogram: &Histogram, output_path: &Path) -> Result<()>;
}

/// Bar-chart renderer producing an image file
///
/// Draws one bar per bin with an axis frame on a white background and
/// saves to the given path; the image format is inferred from the file
/// extension. The save call owns the file handle, so the file is closed
/// and flushed on both success and failure paths.
#[derive(Debug, Clone)]
pub struct PngHistogramRenderer {
    /// Pixel width of each bar
    bar_width: u32,
    /// Pixel height of the plot area
    plot_height: u32,
    /// Margin around the plot area on every side
    margin: u32,
}

impl Default for PngHistogramRenderer {
    fn default() -> Self {
        Self {
            bar_width: 36,
            plot_height: 240,
            margin: 40,
        }
    }
}

impl PngHistogramRenderer {
    /// Create a renderer with default geometry
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistogramRenderer for PngHistogramRenderer {
    fn render(&self, histogram: &Histogram, output_path: &Path) -> Result<()> {
        const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
        const BAR_FILL: Rgb<u8> = Rgb([70, 130, 180]);
        const FRAME: Rgb<u8> = Rgb([0, 0, 0]);

        let bins = histogram.counts.len() as u32;
        let width = 2 * self.margin + bins * self.bar_width;
        let height = 2 * self.margin + self.plot_height;

        let mut img = RgbImage::from_pixel(width, height, BACKGROUND);

        let peak = histogram.peak().max(1) as f64;
        let base_y = self.margin + self.plot_height;

        // Bars, left to right, scaled against the tallest bin
        for (i, &count) in histogram.counts.iter().enumerate() {
            let bar_height = ((count as f64 / peak) * self.plot_height as f64).round() as u32;
            let x0 = self.margin + i as u32 * self.bar_width;

            for x in x0..x0 + self.bar_width {
                for y in base_y - bar_height..base_y {
                    let edge = x == x0
                        || x == x0 + self.bar_width - 1
                        || y == base_y - bar_height
                        || y == base_y - 1;
                    img.put_pixel(x, y, if edge && bar_height > 0 { FRAME } else { BAR_FILL });
                }
            }
        }

        // Axis frame
        for x in self.margin..width - self.margin {
            img.put_pixel(x, base_y, FRAME);
        }
        for y in self.margin..=base_y {
            img.put_pixel(self.margin, y, FRAME);
        }

        img.save(output_path)
            .map_err(|e| Error::render_io(output_path.display().to_string(), e.to_string()))?;

        info!(path = %output_path.display(), "saved rating histogram");
        Ok(())
    }
}
