use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors.
///
/// Each invalid input keeps its own variant so callers can match on the
/// exact failure. All of these are reported before any output is produced
/// and none of them is retryable.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No source image path was supplied
    #[error("a source path is required")]
    MissingSourcePath,

    /// No output root directory was supplied
    #[error("an output root is required")]
    MissingOutputRoot,

    /// No pyramid handle was supplied
    #[error("a handle is required")]
    MissingHandle,

    /// The source image path does not exist on disk
    #[error("source file doesn't exist: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// Tile size must be a positive number of pixels
    #[error("tile size must be greater than 0")]
    InvalidTileSize,

    /// Overlap must leave a positive cursor step when walking the grid
    #[error("overlap ({overlap}) must be smaller than tile size ({tile_size})")]
    InvalidOverlap { overlap: u32, tile_size: u32 },

    /// Quality must be within [0, 100] (or [0, 1] as a fraction)
    #[error("quality must be between 0 and 100, got {quality}")]
    InvalidQuality { quality: f32 },

    /// Unrecognized tile output format
    #[error("unsupported tile format: {format} (expected jpg or png)")]
    UnsupportedFormat { format: String },
}

/// Errors that can occur while generating the tile pyramid.
///
/// All of these abort the run; operators re-invoke the command and rely on
/// skip-if-exists tile writes to fill only the gaps.
#[derive(Debug, Error)]
pub enum SliceError {
    /// The source image could not be decoded
    #[error("failed to decode source image {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    /// A tile could not be encoded in the configured output format
    #[error("failed to encode tile {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },

    /// A directory or tile file could not be written
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rendering worker pool could not be created
    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),

    /// Descriptor serialization or write failure
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
}

/// Errors related to the DZI descriptor file.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The descriptor could not be serialized or parsed
    #[error("invalid descriptor: {0}")]
    Json(#[from] serde_json::Error),

    /// The descriptor file or its parent directory could not be written
    #[error("failed to write descriptor {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the viewer embed helper.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewerError {
    /// The mount-point element id is required
    #[error("a target element must be passed via `element_id`")]
    MissingElementId,

    /// The tile source reference is required
    #[error("a tile source must be passed via `tile_sources`")]
    MissingTileSource,
}
