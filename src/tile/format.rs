//! Output encoding formats for tile files.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Encoding used for persisted tiles.
///
/// The format names both the codec and the file extension used in tile
/// paths and the descriptor's `Format` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileFormat {
    /// JPEG, encoded at the configured quality
    Jpeg,
    /// PNG, lossless (quality does not apply)
    Png,
}

impl TileFormat {
    /// File extension, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            TileFormat::Jpeg => "jpg",
            TileFormat::Png => "png",
        }
    }
}

impl FromStr for TileFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(TileFormat::Jpeg),
            "png" => Ok(TileFormat::Png),
            other => Err(ConfigError::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for TileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
