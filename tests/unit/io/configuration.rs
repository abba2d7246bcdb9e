//! Tests for game constants and colour lookup

#[cfg(test)]
mod tests {
    use slide2048::io::configuration::{
        EMPTY_TILE_COLOR, GRID_SIZE, INITIAL_TILES, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE,
        SPAWN_TWO_PROBABILITY, SUPER_TILE_COLOR, TILE_COLORS, WINNING_TILE, tile_color,
        uses_light_text,
    };

    // Tests board geometry and opening tile count
    #[test]
    fn test_board_constants() {
        assert_eq!(GRID_SIZE, 4);
        assert_eq!(INITIAL_TILES, 2);
    }

    // Tests spawn values and probability
    #[test]
    fn test_spawn_constants() {
        assert_eq!(SPAWN_LOW_VALUE, 2);
        assert_eq!(SPAWN_HIGH_VALUE, 4);
        assert!((SPAWN_TWO_PROBABILITY - 0.9).abs() < f64::EPSILON);
    }

    // Tests the colour table covers every power of two up to the winning tile
    #[test]
    fn test_tile_colour_table() {
        let values: Vec<u32> = TILE_COLORS.iter().map(|(value, _)| *value).collect();
        let expected: Vec<u32> = (1..=11).map(|exp| 1 << exp).collect();
        assert_eq!(values, expected);
        assert_eq!(values.last().copied(), Some(WINNING_TILE));
    }

    // Tests lookup for empty, listed and oversized tiles
    #[test]
    fn test_tile_color_lookup() {
        assert_eq!(tile_color(0), EMPTY_TILE_COLOR);
        assert_eq!(tile_color(2), [238, 228, 218]);
        assert_eq!(tile_color(2048), [237, 194, 46]);
        assert_eq!(tile_color(4096), SUPER_TILE_COLOR);
    }

    // Tests text contrast switches at 8
    #[test]
    fn test_light_text_threshold() {
        assert!(!uses_light_text(4));
        assert!(uses_light_text(8));
    }
}
