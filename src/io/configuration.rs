//! Game constants and presentation defaults

/// Side length of the square board
pub const GRID_SIZE: usize = 4;

/// Tiles placed on an empty board by a new game
pub const INITIAL_TILES: usize = 2;

// Spawn distribution
/// Probability that a spawned tile is a 2 rather than a 4
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;
/// Value of the common spawn
pub const SPAWN_LOW_VALUE: u32 = 2;
/// Value of the rare spawn
pub const SPAWN_HIGH_VALUE: u32 = 4;

/// Tile value displayed as the classic winning tile
pub const WINNING_TILE: u32 = 2048;

/// Largest tile a preset board may hold
///
/// This is the biggest tile normal play can build on a 4x4 board. Presets
/// above it could merge past `u32::MAX`.
pub const MAX_TILE: u32 = 1 << 17;

// Colours shared by the terminal renderer and image export
/// Board background and gap colour
pub const BACKGROUND_COLOR: [u8; 3] = [187, 173, 160];
/// Colour of an empty cell
pub const EMPTY_TILE_COLOR: [u8; 3] = [205, 193, 180];
/// Colour for tiles above the winning tile
pub const SUPER_TILE_COLOR: [u8; 3] = [60, 58, 50];
/// Per-value tile colours up to the winning tile
pub const TILE_COLORS: [(u32, [u8; 3]); 11] = [
    (2, [238, 228, 218]),
    (4, [237, 224, 200]),
    (8, [242, 177, 121]),
    (16, [245, 149, 99]),
    (32, [246, 124, 95]),
    (64, [246, 94, 59]),
    (128, [237, 207, 114]),
    (256, [237, 204, 97]),
    (512, [237, 200, 80]),
    (1024, [237, 197, 63]),
    (2048, [237, 194, 46]),
];

/// Look up the display colour for a tile value
///
/// Zero maps to the empty colour; anything past the table maps to the super tile colour.
pub fn tile_color(value: u32) -> [u8; 3] {
    if value == 0 {
        return EMPTY_TILE_COLOR;
    }
    TILE_COLORS
        .iter()
        .find(|(tile, _)| *tile == value)
        .map_or(SUPER_TILE_COLOR, |(_, color)| *color)
}

/// Whether a tile value needs light text to stay readable on its colour
pub const fn uses_light_text(value: u32) -> bool {
    value >= 8
}

// Image export
/// Edge length of one tile in exported images (pixels)
pub const TILE_PIXELS: u32 = 100;
/// Gap between tiles and around the board in exported images (pixels)
pub const TILE_GAP_PIXELS: u32 = 10;

// Animation output
/// Delay between recorded GIF frames
pub const GIF_FRAME_DELAY_MS: u32 = 250;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;

// Terminal layout
/// Width of one rendered cell in terminal columns
pub const CELL_WIDTH: u16 = 7;
/// Height of one rendered cell in terminal rows
pub const CELL_HEIGHT: u16 = 3;
/// Rows reserved above the board for the score line
pub const HEADER_ROWS: u16 = 2;
/// Width of the "Try Again" button in terminal columns
pub const BUTTON_WIDTH: u16 = 14;
