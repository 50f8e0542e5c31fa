//! DZI Slicer - slice a raster image into a Deep Zoom tile pyramid.
//!
//! This binary validates the configuration, generates the tiles, and
//! writes the descriptor.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dzi_slicer::{write_descriptor, Config, PyramidConfig, Slicer};

fn main() -> ExitCode {
    let cli = Config::parse();
    init_logging(cli.verbose);

    // Validate configuration before any work begins
    let config = match PyramidConfig::from_options(cli.into_options()) {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Configuration:");
    info!("  source: {}", config.source_path.display());
    info!("  output: {}", config.output_root.display());
    info!("  handle: {}", config.handle);
    info!("  tile size: {}px, overlap: {}px", config.tile_size, config.overlap);
    info!("  format: {}, quality: {}", config.format, config.quality);
    if config.workers > 0 {
        info!("  workers: {}", config.workers);
    }

    let slicer = Slicer::new(config.clone());
    let summary = match slicer.slice() {
        Ok(summary) => summary,
        Err(e) => {
            error!("Slicing failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // The descriptor is not resumable; regenerate it after the tiles.
    if let Err(e) = write_descriptor(&config, summary.width, summary.height) {
        error!("Descriptor write failed: {}", e);
        return ExitCode::FAILURE;
    }

    info!(
        "Done: {} level(s), {} tile(s) written, {} skipped",
        summary.levels, summary.tiles_written, summary.tiles_skipped
    );
    info!("  tiles: {}", config.files_dir().display());
    info!("  descriptor: {}", config.descriptor_path().display());

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "dzi_slicer=debug"
    } else {
        "dzi_slicer=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
