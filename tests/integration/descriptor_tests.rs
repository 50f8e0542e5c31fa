//! Descriptor write/read tests.

use std::fs;

use dzi_slicer::{write_descriptor, DziDescriptor, Slicer, DEEPZOOM_SCHEMA};

use super::test_utils::{pyramid_config, scratch_dir, write_test_image};

#[test]
fn test_write_creates_root_and_round_trips() {
    let dir = scratch_dir("descriptor");
    let source = write_test_image(&dir, "dragon.png", 16, 16);
    let output_root = dir.join("tiles");
    let config = pyramid_config(&source, &output_root, "leafydragon", 256, 2);

    // Output root does not exist yet; the writer creates it
    assert!(!output_root.exists());
    let path = write_descriptor(&config, 800, 600).unwrap();

    assert_eq!(path, output_root.join("leafydragon.dzi"));
    assert!(path.is_file());

    let parsed = DziDescriptor::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed.image.xmlns, DEEPZOOM_SCHEMA);
    assert_eq!(parsed.image.format, "jpg");
    assert_eq!(parsed.image.overlap, 2);
    assert_eq!(parsed.image.tile_size, 256);
    assert_eq!(parsed.image.size.width, 800);
    assert_eq!(parsed.image.size.height, 600);
}

#[test]
fn test_rewrite_is_identical_and_unconditional() {
    let dir = scratch_dir("descriptor-rewrite");
    let source = write_test_image(&dir, "dragon.png", 16, 16);
    let config = pyramid_config(&source, &dir.join("tiles"), "rewrite", 512, 1);

    let path = write_descriptor(&config, 1024, 768).unwrap();
    let first = fs::read(&path).unwrap();

    // Unchanged inputs produce identical bytes
    write_descriptor(&config, 1024, 768).unwrap();
    assert_eq!(fs::read(&path).unwrap(), first);

    // A clobbered descriptor is regenerated, not preserved
    fs::write(&path, b"garbage").unwrap();
    write_descriptor(&config, 1024, 768).unwrap();
    assert_eq!(fs::read(&path).unwrap(), first);
}

#[test]
fn test_descriptor_matches_sliced_source() {
    let dir = scratch_dir("descriptor-e2e");
    let source = write_test_image(&dir, "dragon.png", 120, 90);
    let config = pyramid_config(&source, &dir.join("tiles"), "sliced", 256, 1);

    let summary = Slicer::new(config.clone()).slice().unwrap();
    write_descriptor(&config, summary.width, summary.height).unwrap();

    let parsed =
        DziDescriptor::from_json(&fs::read_to_string(config.descriptor_path()).unwrap()).unwrap();
    assert_eq!(parsed.image.size.width, 120);
    assert_eq!(parsed.image.size.height, 90);
    assert_eq!(parsed.image.tile_size, 256);
    assert_eq!(parsed.image.overlap, 1);
}
