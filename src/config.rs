//! Configuration for the DZI slicer.
//!
//! This module provides:
//! - Command-line arguments via clap, with `DZI_` environment variable
//!   fallbacks
//! - [`SlicerOptions`], the all-optional input record for programmatic use
//! - [`PyramidConfig`], the validated, immutable parameter set every other
//!   component works from
//!
//! # Environment Variables
//!
//! - `DZI_SOURCE` - Source image path (required)
//! - `DZI_OUTPUT` - Output root directory (required)
//! - `DZI_HANDLE` - Unique pyramid name (required)
//! - `DZI_TILE_SIZE` - Tile edge length in pixels (default: 512)
//! - `DZI_OVERLAP` - Overlap in pixels (default: 1)
//! - `DZI_QUALITY` - Encoding quality (default: 100)
//! - `DZI_FORMAT` - Tile format, jpg or png (default: jpg)
//! - `DZI_WORKERS` - Tile rendering threads, 0 = one per core (default: 0)

use std::path::PathBuf;

use clap::Parser;

use crate::error::ConfigError;
use crate::tile::TileFormat;

// =============================================================================
// Default Values
// =============================================================================

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 512;

/// Default overlap between adjacent tiles in pixels.
pub const DEFAULT_OVERLAP: u32 = 1;

/// Default encoding quality.
pub const DEFAULT_QUALITY: f32 = 100.0;

/// Default tile output format.
pub const DEFAULT_FORMAT: TileFormat = TileFormat::Jpeg;

// =============================================================================
// CLI Arguments
// =============================================================================

/// DZI Slicer - slice a raster image into a Deep Zoom tile pyramid.
///
/// Generates a multi-resolution tile tree plus a `.dzi` descriptor file
/// consumable by OpenSeadragon and other Deep Zoom viewers. Re-running the
/// same command is safe: existing tiles are skipped and the descriptor is
/// regenerated.
#[derive(Parser, Debug, Clone)]
#[command(name = "dzi-slicer")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Path to the source image.
    #[arg(long, env = "DZI_SOURCE")]
    pub source: PathBuf,

    /// Directory the pyramid is written into.
    #[arg(long, env = "DZI_OUTPUT")]
    pub output: PathBuf,

    /// Unique name for this pyramid; names the tile tree and the descriptor.
    #[arg(long, env = "DZI_HANDLE")]
    pub handle: String,

    /// Tile edge length in pixels.
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE, env = "DZI_TILE_SIZE")]
    pub tile_size: u32,

    /// Extra border pixels shared between adjacent tiles.
    #[arg(long, default_value_t = DEFAULT_OVERLAP, env = "DZI_OVERLAP")]
    pub overlap: u32,

    /// Encoding quality, 0-100 (or 0.0-1.0 as a fraction).
    #[arg(long, default_value_t = DEFAULT_QUALITY, env = "DZI_QUALITY")]
    pub quality: f32,

    /// Tile output format (jpg or png).
    #[arg(long, default_value = "jpg", env = "DZI_FORMAT")]
    pub format: String,

    /// Worker threads for tile rendering (0 = one per core).
    #[arg(long, default_value_t = 0, env = "DZI_WORKERS")]
    pub workers: usize,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Convert parsed CLI arguments into options for validated construction.
    pub fn into_options(self) -> SlicerOptions {
        SlicerOptions {
            source_path: Some(self.source),
            output_root: Some(self.output),
            handle: Some(self.handle),
            tile_size: Some(self.tile_size),
            overlap: Some(self.overlap),
            quality: Some(self.quality),
            format: Some(self.format),
            workers: Some(self.workers),
        }
    }
}

// =============================================================================
// Slicer Options
// =============================================================================

/// Input record for building a [`PyramidConfig`].
///
/// Every field is optional: unset optional parameters fall back to the
/// documented defaults, while missing required parameters surface as
/// distinct [`ConfigError`] variants from
/// [`PyramidConfig::from_options`].
#[derive(Debug, Clone, Default)]
pub struct SlicerOptions {
    pub source_path: Option<PathBuf>,
    pub output_root: Option<PathBuf>,
    pub handle: Option<String>,
    pub tile_size: Option<u32>,
    pub overlap: Option<u32>,
    pub quality: Option<f32>,
    pub format: Option<String>,
    pub workers: Option<usize>,
}

// =============================================================================
// Pyramid Config
// =============================================================================

/// Validated, immutable slicing parameters.
///
/// Constructed once via [`PyramidConfig::from_options`] and read-only for
/// the rest of the run. Also owns the filesystem layout: every path under
/// the output root is derived here and nowhere else.
#[derive(Debug, Clone)]
pub struct PyramidConfig {
    /// Path of the source image (verified to exist)
    pub source_path: PathBuf,
    /// Root directory the pyramid is written into
    pub output_root: PathBuf,
    /// Unique name identifying this pyramid
    pub handle: String,
    /// Tile edge length in pixels (> 0)
    pub tile_size: u32,
    /// Overlap between adjacent tiles in pixels (< tile_size)
    pub overlap: u32,
    /// Encoding quality in [0, 100]
    pub quality: f32,
    /// Tile output format
    pub format: TileFormat,
    /// Tile rendering threads (0 = one per core)
    pub workers: usize,
}

impl PyramidConfig {
    /// Validate `options` and build the immutable configuration.
    ///
    /// # Errors
    ///
    /// Returns a distinct [`ConfigError`] per failure: missing source path,
    /// missing output root, missing handle, nonexistent source file,
    /// zero tile size, overlap not smaller than the tile size, quality
    /// outside [0, 100], or an unrecognized format name.
    pub fn from_options(options: SlicerOptions) -> Result<Self, ConfigError> {
        let source_path = options.source_path.ok_or(ConfigError::MissingSourcePath)?;
        let output_root = options.output_root.ok_or(ConfigError::MissingOutputRoot)?;
        let handle = options
            .handle
            .filter(|handle| !handle.is_empty())
            .ok_or(ConfigError::MissingHandle)?;

        if !source_path.exists() {
            return Err(ConfigError::SourceNotFound { path: source_path });
        }

        let tile_size = options.tile_size.unwrap_or(DEFAULT_TILE_SIZE);
        if tile_size == 0 {
            return Err(ConfigError::InvalidTileSize);
        }

        let overlap = options.overlap.unwrap_or(DEFAULT_OVERLAP);
        if overlap >= tile_size {
            return Err(ConfigError::InvalidOverlap { overlap, tile_size });
        }

        let quality = options.quality.unwrap_or(DEFAULT_QUALITY);
        if !(0.0..=100.0).contains(&quality) {
            return Err(ConfigError::InvalidQuality { quality });
        }

        let format = match options.format {
            Some(name) => name.parse()?,
            None => DEFAULT_FORMAT,
        };

        Ok(Self {
            source_path,
            output_root,
            handle,
            tile_size,
            overlap,
            quality,
            format,
            workers: options.workers.unwrap_or(0),
        })
    }

    // =========================================================================
    // Filesystem Layout
    // =========================================================================

    /// Root directory holding every level of the tile tree:
    /// `<output_root>/<handle>_files/`.
    pub fn files_dir(&self) -> PathBuf {
        self.output_root.join(format!("{}_files", self.handle))
    }

    /// Directory holding one level's tiles:
    /// `<output_root>/<handle>_files/<level>/`.
    pub fn level_dir(&self, level: u32) -> PathBuf {
        self.files_dir().join(level.to_string())
    }

    /// Path of a single tile file:
    /// `<output_root>/<handle>_files/<level>/<col>_<row>.<format>`.
    pub fn tile_path(&self, level: u32, col: u32, row: u32) -> PathBuf {
        self.level_dir(level)
            .join(format!("{}_{}.{}", col, row, self.format.extension()))
    }

    /// Path of the DZI descriptor: `<output_root>/<handle>.dzi`.
    pub fn descriptor_path(&self) -> PathBuf {
        self.output_root.join(format!("{}.dzi", self.handle))
    }
}

// =============================================================================
// Tests
// =============================================================================
