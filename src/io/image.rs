//! Board rendering to RGBA images and PNG export

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::engine::Board;
use crate::io::configuration::{
    BACKGROUND_COLOR, GRID_SIZE, TILE_GAP_PIXELS, TILE_PIXELS, tile_color,
};
use crate::io::error::{GameError, Result};

/// Edge length of a rendered board in pixels
pub const fn board_pixels() -> u32 {
    GRID_SIZE as u32 * TILE_PIXELS + (GRID_SIZE as u32 + 1) * TILE_GAP_PIXELS
}

const fn opaque(rgb: [u8; 3]) -> Rgba<u8> {
    Rgba([rgb[0], rgb[1], rgb[2], 255])
}

// Top-left pixel of the tile in the given row or column
const fn tile_origin(index: usize) -> u32 {
    TILE_GAP_PIXELS + index as u32 * (TILE_PIXELS + TILE_GAP_PIXELS)
}

/// Render the board as coloured tile squares on the board background
pub fn render_board(board: &Board) -> RgbaImage {
    let size = board_pixels();
    let mut img = RgbaImage::from_pixel(size, size, opaque(BACKGROUND_COLOR));

    for ((row, col), &tile) in board.view().indexed_iter() {
        let color = opaque(tile_color(tile));
        let (x0, y0) = (tile_origin(col), tile_origin(row));
        for y in y0..y0 + TILE_PIXELS {
            for x in x0..x0 + TILE_PIXELS {
                img.put_pixel(x, y, color);
            }
        }
    }

    img
}

/// Create the directory an output file will be written into
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn create_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GameError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}

/// Render the board and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_board_png(board: &Board, output_path: &Path) -> Result<()> {
    create_parent_dir(output_path)?;

    render_board(board)
        .save(output_path)
        .map_err(|e| GameError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
