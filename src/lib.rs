//! Sliding-tile merge puzzle (2048) on a fixed 4x4 board
//!
//! The grid engine owns the board and score and exposes a pure state-transition
//! API: moves slide and merge tiles, spawns add one random tile, and a terminal
//! check reports when no move remains. Front ends drive it through a session.

#![forbid(unsafe_code)]

/// Board, moves, spawning and game state
pub mod engine;
/// Terminal front end, exports and error handling
pub mod io;

pub use engine::{Board, Direction, GridEngine, MoveResult};
pub use io::error::{GameError, Result};
