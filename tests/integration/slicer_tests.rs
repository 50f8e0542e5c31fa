//! End-to-end slicing tests.

use std::path::PathBuf;

use dzi_slicer::{
    enumerate_tiles, max_level, ConfigError, PyramidConfig, Slicer, SlicerOptions,
};

use super::test_utils::{dir_entry_count, pyramid_config, scratch_dir, write_test_image};

#[test]
fn test_end_to_end_800x600() {
    let dir = scratch_dir("e2e");
    let source = write_test_image(&dir, "dragon.png", 800, 600);
    let config = pyramid_config(&source, &dir.join("tiles"), "leafydragon", 256, 1);

    let summary = Slicer::new(config.clone()).slice().unwrap();

    assert_eq!((summary.width, summary.height), (800, 600));
    assert_eq!(max_level(800, 600), 10);
    assert_eq!(summary.levels, 11);
    assert_eq!(summary.tiles_skipped, 0);

    // One directory per level index, 10 down to 0, and nothing else
    for level in 0..=10 {
        assert!(config.level_dir(level).is_dir(), "missing level {level}");
    }
    assert_eq!(dir_entry_count(&config.files_dir()), 11);

    // Full-resolution level holds the 4x3 grid, clipped at the edges
    assert_eq!(dir_entry_count(&config.level_dir(10)), 12);
    assert!(config.tile_path(10, 0, 0).is_file());
    assert!(config.tile_path(10, 3, 2).is_file());

    // The smallest level collapses to a single 1x1 tile
    assert_eq!(dir_entry_count(&config.level_dir(0)), 1);
    assert!(config.tile_path(0, 0, 0).is_file());
    let (w, h) = image::image_dimensions(config.tile_path(0, 0, 0)).unwrap();
    assert_eq!((w, h), (1, 1));
}

#[test]
fn test_tile_counts_match_grid() {
    let dir = scratch_dir("grid-counts");
    let source = write_test_image(&dir, "dragon.png", 700, 500);
    let config = pyramid_config(&source, &dir.join("tiles"), "counts", 256, 1);

    let summary = Slicer::new(config.clone()).slice().unwrap();

    // Each level directory holds exactly the tiles the grid enumerates
    // for that level's halved dimensions.
    let (mut width, mut height) = (700u32, 500u32);
    let mut total = 0usize;
    for level in (0..=max_level(700, 500)).rev() {
        let expected = enumerate_tiles(width, height, 256, 1).len();
        assert_eq!(
            dir_entry_count(&config.level_dir(level)),
            expected,
            "level {level} ({width}x{height})"
        );
        total += expected;
        width = width.div_ceil(2);
        height = height.div_ceil(2);
    }
    assert_eq!(summary.tiles_written, total);
}

#[test]
fn test_second_run_skips_everything() {
    let dir = scratch_dir("resume");
    let source = write_test_image(&dir, "dragon.png", 300, 200);
    let config = pyramid_config(&source, &dir.join("tiles"), "resume", 128, 1);

    let first = Slicer::new(config.clone()).slice().unwrap();
    assert!(first.tiles_written > 0);
    assert_eq!(first.tiles_skipped, 0);

    let second = Slicer::new(config).slice().unwrap();
    assert_eq!(second.tiles_written, 0);
    assert_eq!(second.tiles_skipped, first.tiles_written);
}

#[test]
fn test_partial_run_fills_only_gaps() {
    let dir = scratch_dir("gaps");
    let source = write_test_image(&dir, "dragon.png", 300, 200);
    let config = pyramid_config(&source, &dir.join("tiles"), "gaps", 128, 1);

    let first = Slicer::new(config.clone()).slice().unwrap();

    // Simulate an interrupted run by deleting a few tiles
    let removed = [config.tile_path(0, 0, 0), config.tile_path(1, 0, 0)];
    for path in &removed {
        std::fs::remove_file(path).unwrap();
    }

    let second = Slicer::new(config).slice().unwrap();
    assert_eq!(second.tiles_written, removed.len());
    assert_eq!(
        second.tiles_written + second.tiles_skipped,
        first.tiles_written
    );
    for path in &removed {
        assert!(path.is_file(), "gap not refilled: {}", path.display());
    }
}

#[test]
fn test_missing_source_fails_before_output() {
    let dir = scratch_dir("missing-source");
    let output_root = dir.join("tiles");

    let result = PyramidConfig::from_options(SlicerOptions {
        source_path: Some(PathBuf::from("/nonexistent/dragon.png")),
        output_root: Some(output_root.clone()),
        handle: Some("nope".to_string()),
        ..Default::default()
    });

    assert!(matches!(result, Err(ConfigError::SourceNotFound { .. })));
    assert!(!output_root.exists());
}

#[test]
fn test_png_pyramid() {
    let dir = scratch_dir("png");
    let source = write_test_image(&dir, "dragon.png", 100, 80);
    let config = PyramidConfig::from_options(SlicerOptions {
        source_path: Some(source),
        output_root: Some(dir.join("tiles")),
        handle: Some("pngdragon".to_string()),
        tile_size: Some(256),
        overlap: Some(2),
        format: Some("png".to_string()),
        ..Default::default()
    })
    .unwrap();

    let summary = Slicer::new(config.clone()).slice().unwrap();

    // 100x80 fits a single tile at every level
    assert_eq!(summary.levels, 8);
    assert_eq!(summary.tiles_written, 8);
    assert!(config.tile_path(7, 0, 0).is_file());
    let (w, h) = image::image_dimensions(config.tile_path(7, 0, 0)).unwrap();
    assert_eq!((w, h), (100, 80));
}

#[test]
fn test_worker_pool_override() {
    let dir = scratch_dir("workers");
    let source = write_test_image(&dir, "dragon.png", 300, 200);
    let config = PyramidConfig::from_options(SlicerOptions {
        source_path: Some(source),
        output_root: Some(dir.join("tiles")),
        handle: Some("workers".to_string()),
        tile_size: Some(128),
        workers: Some(2),
        ..Default::default()
    })
    .unwrap();

    let summary = Slicer::new(config).slice().unwrap();
    assert!(summary.tiles_written > 0);
}
