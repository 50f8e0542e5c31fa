//! Test utilities for integration tests.
//!
//! Provides scratch directories under the system temp dir and synthetic
//! source images for slicing.

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};

use dzi_slicer::{PyramidConfig, SlicerOptions};

/// Fresh scratch directory for one test, cleared before use.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("dzi-slicer-it-{name}"));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write a synthetic gradient image for use as a slicing source.
pub fn write_test_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    img.save(&path).unwrap();
    path
}

/// Build a validated configuration for a test pyramid.
pub fn pyramid_config(
    source: &Path,
    output_root: &Path,
    handle: &str,
    tile_size: u32,
    overlap: u32,
) -> PyramidConfig {
    PyramidConfig::from_options(SlicerOptions {
        source_path: Some(source.to_path_buf()),
        output_root: Some(output_root.to_path_buf()),
        handle: Some(handle.to_string()),
        tile_size: Some(tile_size),
        overlap: Some(overlap),
        ..Default::default()
    })
    .unwrap()
}

/// Number of entries in a directory.
pub fn dir_entry_count(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}
