//! Grid engine: the board, the move primitive and the game state built on them
//!
//! This module contains:
//! - Line compaction and merge rules
//! - Direction-to-axis mapping
//! - Board storage, moves and terminal detection
//! - Random tile spawning
//! - The game state owned by a front end

/// Board storage, directional moves and terminal detection
pub mod board;
/// Move directions and their axis layout
pub mod direction;
/// Game state combining board, score and random source
pub mod game;
/// Single-line slide and merge primitive
pub mod line;
/// Random tile placement
pub mod spawn;

pub use board::{Board, MoveResult};
pub use direction::Direction;
pub use game::GridEngine;
