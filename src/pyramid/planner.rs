//! Level planning: how deep the pyramid goes and how big each level is.

/// Calculate the top (full-resolution) level index for an image.
///
/// Levels go from 0 (1x1) to `max_level` (full resolution), so this is also
/// the number of times the image can be halved before reaching 1x1:
/// `max_level = ceil(log2(max(width, height)))`.
pub fn max_level(width: u32, height: u32) -> u32 {
    let max_dim = width.max(height) as f64;
    if max_dim <= 1.0 {
        return 0;
    }
    max_dim.log2().ceil() as u32
}

/// Calculate image dimensions at a specific level.
///
/// At level L, the dimensions are the full dimensions divided by
/// `2^(max_level - L)`, rounded up and clamped to at least one pixel.
/// Returns `(0, 0)` for a level beyond `max_level`.
pub fn level_dimensions(width: u32, height: u32, level: u32, max_level: u32) -> (u32, u32) {
    if level > max_level {
        return (0, 0);
    }

    let scale = 1u32 << (max_level - level);
    let level_width = width.div_ceil(scale);
    let level_height = height.div_ceil(scale);

    (level_width.max(1), level_height.max(1))
}
