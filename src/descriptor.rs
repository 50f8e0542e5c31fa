//! DZI descriptor: the `<handle>.dzi` metadata file.
//!
//! The descriptor tells a viewer everything it needs to locate tiles: the
//! tile format, tile size, overlap, and the full image dimensions. It is
//! a JSON rendition of the Deep Zoom `Image` element, with numeric fields
//! carried as decimal strings:
//!
//! ```json
//! {
//!   "Image": {
//!     "xmlns": "http://schemas.microsoft.com/deepzoom/2008",
//!     "Format": "jpg",
//!     "Overlap": "1",
//!     "TileSize": "512",
//!     "Size": {
//!       "Height": "600",
//!       "Width": "800"
//!     }
//!   }
//! }
//! ```
//!
//! Unlike tile files, the descriptor is not resumable: it is rewritten
//! unconditionally on every run.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::PyramidConfig;
use crate::error::DescriptorError;

/// Schema identifier carried in the descriptor's `xmlns` field.
pub const DEEPZOOM_SCHEMA: &str = "http://schemas.microsoft.com/deepzoom/2008";

/// The descriptor document: a single namespaced `Image` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DziDescriptor {
    #[serde(rename = "Image")]
    pub image: DziImage,
}

/// The `Image` element: pyramid parameters plus the full image size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DziImage {
    /// Schema identifier, always [`DEEPZOOM_SCHEMA`]
    pub xmlns: String,

    /// Tile file format extension ("jpg", "png")
    #[serde(rename = "Format")]
    pub format: String,

    /// Overlap in pixels between adjacent tiles
    #[serde(rename = "Overlap", with = "string_scalar")]
    pub overlap: u32,

    /// Tile edge length in pixels
    #[serde(rename = "TileSize", with = "string_scalar")]
    pub tile_size: u32,

    /// Full (top-level) image dimensions
    #[serde(rename = "Size")]
    pub size: DziSize,
}

/// Full image dimensions at the top pyramid level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DziSize {
    #[serde(rename = "Height", with = "string_scalar")]
    pub height: u32,

    #[serde(rename = "Width", with = "string_scalar")]
    pub width: u32,
}

impl DziDescriptor {
    /// Build a descriptor from pyramid parameters.
    pub fn new(format: &str, overlap: u32, tile_size: u32, width: u32, height: u32) -> Self {
        Self {
            image: DziImage {
                xmlns: DEEPZOOM_SCHEMA.to_string(),
                format: format.to_string(),
                overlap,
                tile_size,
                size: DziSize { height, width },
            },
        }
    }

    /// Serialize to the pretty-printed JSON written to disk.
    pub fn to_json(&self) -> Result<String, DescriptorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a descriptor back from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, DescriptorError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Write the descriptor for `config` and the given full-image dimensions.
///
/// Creates the output root if absent and overwrites any existing
/// descriptor. Returns the path written.
pub fn write_descriptor(
    config: &PyramidConfig,
    width: u32,
    height: u32,
) -> Result<PathBuf, DescriptorError> {
    fs::create_dir_all(&config.output_root).map_err(|source| DescriptorError::Io {
        path: config.output_root.clone(),
        source,
    })?;

    let descriptor = DziDescriptor::new(
        config.format.extension(),
        config.overlap,
        config.tile_size,
        width,
        height,
    );

    let path = config.descriptor_path();
    fs::write(&path, descriptor.to_json()?).map_err(|source| DescriptorError::Io {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "wrote DZI descriptor");
    Ok(path)
}

/// Viewers expect the numeric descriptor fields as strings; serialize
/// integers in decimal and parse them back on read.
mod string_scalar {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
