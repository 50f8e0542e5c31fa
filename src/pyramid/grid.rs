//! Tile grid enumeration for a single level.

/// Grid position and pixel rectangle of one tile within a level.
///
/// The rectangle is already clipped to the level bounds; edge tiles keep
/// only the remaining pixels instead of being padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    /// Column index (0-indexed from the left)
    pub col: u32,
    /// Row index (0-indexed from the top)
    pub row: u32,
    /// Left edge of the crop rectangle, in level pixels
    pub x: u32,
    /// Top edge of the crop rectangle, in level pixels
    pub y: u32,
    /// Clipped crop width
    pub width: u32,
    /// Clipped crop height
    pub height: u32,
}

/// Nominal (unclipped) tile dimensions at a grid position.
///
/// The first tile along an axis has no leading overlap and measures
/// `tile_size + overlap`; every subsequent tile carries overlap on both
/// sides and measures `tile_size + 2 * overlap`. The nominal dimension
/// also determines the cursor step when walking the grid, independent of
/// any clipping at the level edge.
pub fn tile_dimensions(x: u32, y: u32, tile_size: u32, overlap: u32) -> (u32, u32) {
    let overlapping_tile_size = tile_size + 2 * overlap;
    let border_tile_size = tile_size + overlap;
    let tile_width = if x > 0 { overlapping_tile_size } else { border_tile_size };
    let tile_height = if y > 0 { overlapping_tile_size } else { border_tile_size };
    (tile_width, tile_height)
}

/// Enumerate the tile grid covering a `level_width` x `level_height` level.
///
/// Walks columns left to right and, within each column, rows top to bottom.
/// At each position the nominal dimensions come from [`tile_dimensions`];
/// the stored rectangle is clipped to the remaining pixels, and the cursor
/// advances by `nominal - 2 * overlap` so that the non-overlap regions of
/// adjacent tiles meet exactly.
///
/// Requires `overlap < tile_size` (enforced at configuration time) so the
/// cursor always makes progress.
pub fn enumerate_tiles(
    level_width: u32,
    level_height: u32,
    tile_size: u32,
    overlap: u32,
) -> Vec<TileRect> {
    let mut tiles = Vec::new();
    if level_width == 0 || level_height == 0 {
        return tiles;
    }

    let mut x = 0;
    let mut col = 0;
    while x < level_width {
        let mut tile_width = tile_size;
        let mut y = 0;
        let mut row = 0;
        while y < level_height {
            let (width, height) = tile_dimensions(x, y, tile_size, overlap);
            tile_width = width;
            tiles.push(TileRect {
                col,
                row,
                x,
                y,
                width: width.min(level_width - x),
                height: height.min(level_height - y),
            });
            y += height - 2 * overlap;
            row += 1;
        }
        // The column step only depends on whether x is zero, so the last
        // row's width is the same as any other row's at this column.
        x += tile_width - 2 * overlap;
        col += 1;
    }

    tiles
}
