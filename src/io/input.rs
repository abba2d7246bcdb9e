//! Translation of key presses and move scripts into game actions

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::engine::Direction;
use crate::io::error::Result;

/// A player request the session can act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Shift the board
    Move(Direction),
    /// Start a new game after the current one has ended
    Restart,
    /// Leave the shell
    Quit,
}

/// Map a key press to an action
///
/// Arrow keys, WASD and vi keys move; `r` restarts; `q`, Esc and Ctrl-C quit.
/// Key releases and repeats reported by some terminals are ignored.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a' | 'h') => Some(Action::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'l') => Some(Action::Move(Direction::Right)),
        KeyCode::Up | KeyCode::Char('w' | 'k') => Some(Action::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'j') => Some(Action::Move(Direction::Down)),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Parse a move script into directions
///
/// Tokens are separated by commas or whitespace. Each token is either a
/// direction name (`left`, `up`, ...) or a run of initials such as `LLUR`.
///
/// # Errors
///
/// Returns an error naming the first token that is not a valid direction
pub fn parse_script(script: &str) -> Result<Vec<Direction>> {
    let mut moves = Vec::new();

    for token in script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
    {
        match token.parse::<Direction>() {
            Ok(direction) => moves.push(direction),
            Err(err) => {
                if !token
                    .chars()
                    .all(|c| matches!(c.to_ascii_lowercase(), 'l' | 'r' | 'u' | 'd'))
                {
                    return Err(err);
                }
                for initial in token.chars() {
                    moves.push(initial.encode_utf8(&mut [0; 4]).parse()?);
                }
            }
        }
    }

    Ok(moves)
}
