//! # DZI Slicer
//!
//! Slice a raster image into a Deep Zoom Image (DZI) tile pyramid for
//! OpenSeadragon-style viewers.
//!
//! The slicer repeatedly halves the source image down to 1x1, writing each
//! resolution level as a grid of fixed-size (plus overlap) tiles, and emits
//! a JSON `.dzi` descriptor a viewer uses to locate them.
//!
//! ## Features
//!
//! - **Resumable runs**: tile writes are skip-if-exists, so an interrupted
//!   run can be re-invoked and only fills the gaps
//! - **Parallel rendering**: tiles within a level render on a rayon worker
//!   pool; levels stay sequential because each is derived from the last
//! - **Viewer-ready output**: Deep Zoom file layout
//!   (`<handle>_files/<level>/<col>_<row>.<format>`) plus descriptor
//!
//! ## Architecture
//!
//! - [`config`] - CLI and validated configuration, filesystem layout
//! - [`pyramid`] - level planning and tile-grid geometry
//! - [`tile`] - tile formats and rendering
//! - [`slicer`] - the level-by-level driver
//! - [`descriptor`] - the `.dzi` metadata file
//! - [`viewer`] - OpenSeadragon embed helper
//!
//! ## Example
//!
//! ```rust,no_run
//! use dzi_slicer::{write_descriptor, PyramidConfig, Slicer, SlicerOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PyramidConfig::from_options(SlicerOptions {
//!         source_path: Some("dragon.jpg".into()),
//!         output_root: Some("/var/tiles".into()),
//!         handle: Some("leafydragon".into()),
//!         tile_size: Some(256),
//!         ..Default::default()
//!     })?;
//!
//!     let summary = Slicer::new(config.clone()).slice()?;
//!     write_descriptor(&config, summary.width, summary.height)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod pyramid;
pub mod slicer;
pub mod tile;
pub mod viewer;

// Re-export commonly used types
pub use config::{
    Config, PyramidConfig, SlicerOptions, DEFAULT_FORMAT, DEFAULT_OVERLAP, DEFAULT_QUALITY,
    DEFAULT_TILE_SIZE,
};
pub use descriptor::{
    write_descriptor, DziDescriptor, DziImage, DziSize, DEEPZOOM_SCHEMA,
};
pub use error::{ConfigError, DescriptorError, SliceError, ViewerError};
pub use pyramid::{enumerate_tiles, level_dimensions, max_level, tile_dimensions, TileRect};
pub use slicer::{SliceSummary, Slicer};
pub use tile::{normalize_quality, render_tile, TileFormat, MAX_QUALITY, MIN_QUALITY};
pub use viewer::{viewer_script, ViewerOptions, DEFAULT_PREFIX_URL};
