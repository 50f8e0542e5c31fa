//! Tile output: encoding format and rendering.
//!
//! A tile is a clipped crop of one pyramid level, persisted as a single
//! file named `<col>_<row>.<format>` inside that level's directory. Tile
//! writes are idempotent: an existing file is never touched, so an
//! interrupted run can be re-invoked and will only fill the gaps.

mod format;
mod renderer;

pub use format::TileFormat;
pub use renderer::{normalize_quality, render_tile, MAX_QUALITY, MIN_QUALITY};
