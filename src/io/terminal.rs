//! Interactive terminal front end
//!
//! Draws the board with crossterm, feeds key and mouse events to the
//! session, and shows a game-over overlay with a clickable restart button.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use rand::Rng;

use crate::io::configuration::{
    BUTTON_WIDTH, CELL_HEIGHT, CELL_WIDTH, GRID_SIZE, HEADER_ROWS, tile_color, uses_light_text,
};
use crate::io::error::{Result, terminal_error};
use crate::io::input::{Action, action_for_key};
use crate::io::session::{Outcome, Session};

const BUTTON_COLOR: Color = Color::Rgb {
    r: 50,
    g: 150,
    b: 50,
};

/// Screen rectangle of the restart button, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonRect {
    /// Leftmost column
    pub col: u16,
    /// Top row
    pub row: u16,
    /// Width in columns
    pub width: u16,
    /// Height in rows
    pub height: u16,
}

impl ButtonRect {
    /// Whether a terminal cell lies inside the button
    pub const fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.col
            && col < self.col + self.width
            && row >= self.row
            && row < self.row + self.height
    }
}

/// Width of the rendered board in terminal columns
pub const fn board_width() -> u16 {
    GRID_SIZE as u16 * CELL_WIDTH
}

// First row below the board
const fn footer_row() -> u16 {
    HEADER_ROWS + GRID_SIZE as u16 * CELL_HEIGHT + 1
}

/// Map a mouse event to a restart when it is a left click on the button
pub fn action_for_mouse(mouse: MouseEvent, button: Option<ButtonRect>) -> Option<Action> {
    let clicked = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
        && button.is_some_and(|rect| rect.contains(mouse.column, mouse.row));
    clicked.then_some(Action::Restart)
}

/// Draw one full frame: score, board and either the key hints or the game-over overlay
///
/// Returns the restart button rectangle when the overlay is shown.
///
/// # Errors
///
/// Returns an error if writing to the output fails
pub fn draw<W: Write, R: Rng>(
    out: &mut W,
    session: &Session<R>,
) -> io::Result<Option<ButtonRect>> {
    let engine = session.engine();
    queue!(
        out,
        ResetColor,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Print(format!("Score: {}", engine.score()))
    )?;

    for ((row, col), &tile) in engine.grid().indexed_iter() {
        draw_cell(out, row as u16, col as u16, tile)?;
    }

    let button = if session.is_game_over() {
        Some(draw_game_over(out, engine.score())?)
    } else {
        queue!(
            out,
            MoveTo(0, footer_row()),
            Print("arrows/wasd: move   q: quit")
        )?;
        None
    };

    out.flush()?;
    Ok(button)
}

fn draw_cell<W: Write>(out: &mut W, row: u16, col: u16, tile: u32) -> io::Result<()> {
    let [r, g, b] = tile_color(tile);
    let foreground = if uses_light_text(tile) {
        Color::White
    } else {
        Color::Black
    };
    let label = if tile == 0 {
        String::new()
    } else {
        tile.to_string()
    };
    let width = usize::from(CELL_WIDTH);
    let (x, y) = (col * CELL_WIDTH, HEADER_ROWS + row * CELL_HEIGHT);

    queue!(
        out,
        SetBackgroundColor(Color::Rgb { r, g, b }),
        SetForegroundColor(foreground)
    )?;
    for line in 0..CELL_HEIGHT {
        let text = if line == CELL_HEIGHT / 2 {
            format!("{label:^width$}")
        } else {
            " ".repeat(width)
        };
        queue!(out, MoveTo(x, y + line), Print(text))?;
    }
    queue!(out, ResetColor)
}

fn draw_game_over<W: Write>(out: &mut W, score: u64) -> io::Result<ButtonRect> {
    let top = footer_row();
    let button = ButtonRect {
        col: board_width().saturating_sub(BUTTON_WIDTH) / 2,
        row: top + 3,
        width: BUTTON_WIDTH,
        height: 1,
    };

    queue!(
        out,
        MoveTo(0, top),
        SetAttribute(Attribute::Bold),
        Print("Game Over"),
        SetAttribute(Attribute::Reset),
        MoveTo(0, top + 1),
        Print(format!("Score: {score}")),
        MoveTo(button.col, button.row),
        SetBackgroundColor(BUTTON_COLOR),
        SetForegroundColor(Color::White),
        Print(format!("{:^width$}", "Try Again", width = usize::from(BUTTON_WIDTH))),
        ResetColor,
        MoveTo(0, button.row + 2),
        Print("r: try again   q: quit")
    )?;

    Ok(button)
}

/// Run the interactive shell until the player quits
///
/// The terminal is restored even when the event loop fails.
///
/// # Errors
///
/// Returns an error if terminal setup, drawing, event reading or restoration fails
pub fn run<R: Rng>(session: &mut Session<R>) -> Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode().map_err(terminal_error("enable raw mode"))?;

    let result = execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)
        .map_err(terminal_error("enter alternate screen"))
        .and_then(|()| event_loop(&mut stdout, session));

    let restored = execute!(stdout, Show, DisableMouseCapture, LeaveAlternateScreen)
        .map_err(terminal_error("leave alternate screen"))
        .and_then(|()| disable_raw_mode().map_err(terminal_error("disable raw mode")));

    result.and(restored)
}

fn event_loop<W: Write, R: Rng>(out: &mut W, session: &mut Session<R>) -> Result<()> {
    let mut button = draw(out, session).map_err(terminal_error("draw"))?;

    loop {
        let action = match event::read().map_err(terminal_error("read event"))? {
            Event::Key(key) => action_for_key(key),
            Event::Mouse(mouse) => action_for_mouse(mouse, button),
            Event::Resize(..) => {
                button = draw(out, session).map_err(terminal_error("draw"))?;
                None
            }
            _ => None,
        };

        let Some(action) = action else {
            continue;
        };

        match session.apply(action) {
            Outcome::Quit => return Ok(()),
            Outcome::Moved { .. } | Outcome::Restarted => {
                button = draw(out, session).map_err(terminal_error("draw"))?;
            }
            Outcome::Blocked | Outcome::Ignored => {}
        }
    }
}
