//! Slicing driver: renders every pyramid level from a single source image.
//!
//! The driver walks levels from `max_level` (full resolution) down to 0,
//! halving a single working buffer between levels. Levels are strictly
//! sequential: each level's image is derived from the previous level's
//! halving, so the buffer is only reassigned after all of that level's
//! tiles are on disk. Within one level, tiles touch distinct output files
//! and only read the buffer, so they render in parallel on a rayon pool.

use std::fs;
use std::path::Path;
use std::time::Instant;

use image::imageops::FilterType;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::PyramidConfig;
use crate::error::SliceError;
use crate::pyramid::{enumerate_tiles, max_level};
use crate::tile::render_tile;

/// Counters from a completed slicing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceSummary {
    /// Full-resolution image width
    pub width: u32,
    /// Full-resolution image height
    pub height: u32,
    /// Number of levels produced (`max_level + 1`)
    pub levels: u32,
    /// Tiles written by this run
    pub tiles_written: usize,
    /// Tiles already present and skipped
    pub tiles_skipped: usize,
}

/// Generates the tile pyramid for one source image.
pub struct Slicer {
    config: PyramidConfig,
}

impl Slicer {
    /// Create a slicer from a validated configuration.
    pub fn new(config: PyramidConfig) -> Self {
        Self { config }
    }

    /// Generate all tiles.
    ///
    /// Decodes the source, then renders levels top to bottom, creating the
    /// per-level directories as it goes. Existing tiles are skipped, so an
    /// interrupted run can be resumed by invoking this again.
    ///
    /// # Errors
    ///
    /// Fails on source decode errors and on any tile encode or file write
    /// failure; a failed run leaves already-written tiles in place.
    pub fn slice(&self) -> Result<SliceSummary, SliceError> {
        let config = &self.config;
        let started = Instant::now();

        let source = image::open(&config.source_path).map_err(|e| SliceError::Decode {
            path: config.source_path.clone(),
            message: e.to_string(),
        })?;
        let (width, height) = (source.width(), source.height());
        let top = max_level(width, height);

        info!(
            width,
            height,
            top_level = top,
            "slicing {}",
            config.source_path.display()
        );

        let pool = build_worker_pool(config.workers)?;
        create_dir(&config.files_dir())?;

        let mut tiles_written = 0;
        let mut tiles_skipped = 0;

        // Single-owner working buffer, reassigned (not aliased) per level.
        let mut working = source;
        for level in (0..=top).rev() {
            create_dir(&config.level_dir(level))?;

            let (level_width, level_height) = (working.width(), working.height());
            let tiles =
                enumerate_tiles(level_width, level_height, config.tile_size, config.overlap);
            debug!(level, level_width, level_height, tiles = tiles.len(), "rendering level");

            let image = &working;
            let written = pool.install(|| {
                tiles
                    .par_iter()
                    .map(|tile| {
                        let dest = config.tile_path(level, tile.col, tile.row);
                        render_tile(image, tile, &dest, config.format, config.quality)
                    })
                    .collect::<Result<Vec<bool>, SliceError>>()
            })?;

            let written_count = written.iter().filter(|new| **new).count();
            tiles_written += written_count;
            tiles_skipped += written.len() - written_count;

            if level > 0 {
                working = working.resize_exact(
                    level_width.div_ceil(2),
                    level_height.div_ceil(2),
                    FilterType::Lanczos3,
                );
            }
        }
        drop(working);

        let summary = SliceSummary {
            width,
            height,
            levels: top + 1,
            tiles_written,
            tiles_skipped,
        };
        info!(
            levels = summary.levels,
            tiles_written,
            tiles_skipped,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "slicing complete"
        );
        Ok(summary)
    }
}

fn create_dir(path: &Path) -> Result<(), SliceError> {
    fs::create_dir_all(path).map_err(|source| SliceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn build_worker_pool(workers: usize) -> Result<rayon::ThreadPool, SliceError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| SliceError::WorkerPool(e.to_string()))
}
