//! Tests for terminal drawing and restart button hit-testing

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use slide2048::engine::GridEngine;
    use slide2048::io::configuration::{BUTTON_WIDTH, CELL_WIDTH, GRID_SIZE};
    use slide2048::io::input::Action;
    use slide2048::io::session::Session;
    use slide2048::io::terminal::{ButtonRect, action_for_mouse, board_width, draw};

    fn session(cells: [[u32; 4]; 4]) -> Session {
        Session::new(GridEngine::from_cells(cells, StdRng::seed_from_u64(0)).unwrap())
    }

    fn click(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    const BUTTON: ButtonRect = ButtonRect {
        col: 7,
        row: 20,
        width: 14,
        height: 1,
    };

    // Tests button bounds are inclusive at the origin and exclusive at the far edge
    #[test]
    fn test_button_contains() {
        assert!(BUTTON.contains(7, 20));
        assert!(BUTTON.contains(20, 20));
        assert!(!BUTTON.contains(21, 20));
        assert!(!BUTTON.contains(6, 20));
        assert!(!BUTTON.contains(10, 21));
    }

    // Tests only a left click inside a shown button restarts
    #[test]
    fn test_mouse_restart() {
        let down = MouseEventKind::Down(MouseButton::Left);
        assert_eq!(
            action_for_mouse(click(down, 10, 20), Some(BUTTON)),
            Some(Action::Restart)
        );
        assert_eq!(action_for_mouse(click(down, 0, 0), Some(BUTTON)), None);
        assert_eq!(action_for_mouse(click(down, 10, 20), None), None);
        assert_eq!(
            action_for_mouse(
                click(MouseEventKind::Down(MouseButton::Right), 10, 20),
                Some(BUTTON)
            ),
            None
        );
    }

    // Tests an active game draws the score and tiles with no button
    #[test]
    fn test_draw_active_game() {
        let s = session([[2, 0, 0, 0], [0, 2048, 0, 0], [0; 4], [0; 4]]);
        let mut out = Vec::new();
        let button = draw(&mut out, &s).unwrap();
        let text = String::from_utf8_lossy(&out);

        assert!(button.is_none());
        assert!(text.contains("Score: 0"));
        assert!(text.contains("2048"));
        assert!(!text.contains("Game Over"));
    }

    // Tests a finished game draws the overlay and returns a centred button
    #[test]
    fn test_draw_game_over_overlay() {
        let s = session([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let mut out = Vec::new();
        let button = draw(&mut out, &s).unwrap().unwrap();
        let text = String::from_utf8_lossy(&out);

        assert!(text.contains("Game Over"));
        assert!(text.contains("Try Again"));
        assert_eq!(button.width, BUTTON_WIDTH);
        assert_eq!(button.col, (board_width() - BUTTON_WIDTH) / 2);
        assert_eq!(board_width(), GRID_SIZE as u16 * CELL_WIDTH);
    }
}
