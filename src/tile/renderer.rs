//! Tile rendering: crop a level image and persist one encoded tile file.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::DynamicImage;
use tracing::trace;

use crate::error::SliceError;
use crate::pyramid::TileRect;

use super::format::TileFormat;

/// Minimum encoder quality.
pub const MIN_QUALITY: u8 = 1;

/// Maximum encoder quality.
pub const MAX_QUALITY: u8 = 100;

/// Normalize a configured quality value to the encoder's 1-100 scale.
///
/// Values below 1.0 follow the fractional 0.0-1.0 convention and are
/// scaled by 100, so both `0.8` and `80` mean the same thing.
pub fn normalize_quality(quality: f32) -> u8 {
    let quality = if quality < 1.0 { quality * 100.0 } else { quality };
    (quality.round() as i64).clamp(MIN_QUALITY as i64, MAX_QUALITY as i64) as u8
}

/// Crop `rect` out of the level image and write it to `dest`.
///
/// Returns `Ok(false)` without touching the filesystem when `dest` already
/// exists; returns `Ok(true)` after writing a new tile. The rectangle must
/// already be clipped to the image bounds (see
/// [`enumerate_tiles`](crate::pyramid::enumerate_tiles)).
pub fn render_tile(
    image: &DynamicImage,
    rect: &TileRect,
    dest: &Path,
    format: TileFormat,
    quality: f32,
) -> Result<bool, SliceError> {
    if dest.exists() {
        trace!(path = %dest.display(), "tile exists, skipping");
        return Ok(false);
    }

    let tile = image.crop_imm(rect.x, rect.y, rect.width, rect.height);
    encode_tile(&tile, dest, format, normalize_quality(quality))?;
    Ok(true)
}

fn encode_tile(
    tile: &DynamicImage,
    dest: &Path,
    format: TileFormat,
    quality: u8,
) -> Result<(), SliceError> {
    let file = File::create(dest).map_err(|source| SliceError::Io {
        path: dest.to_path_buf(),
        source,
    })?;
    let writer = BufWriter::new(file);

    match format {
        TileFormat::Jpeg => {
            // JPEG has no alpha channel; flatten before encoding.
            let rgb = tile.to_rgb8();
            let mut encoder = JpegEncoder::new_with_quality(writer, quality);
            encoder.encode_image(&rgb).map_err(|e| SliceError::Encode {
                path: dest.to_path_buf(),
                message: e.to_string(),
            })?;
        }
        TileFormat::Png => {
            let encoder = PngEncoder::new(writer);
            tile.write_with_encoder(encoder)
                .map_err(|e| SliceError::Encode {
                    path: dest.to_path_buf(),
                    message: e.to_string(),
                })?;
        }
    }

    Ok(())
}
