//! Random tile placement

use log::debug;
use rand::Rng;

use crate::engine::board::Board;
use crate::io::configuration::{SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE, SPAWN_TWO_PROBABILITY};

/// A tile placed by the spawner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    /// Row of the new tile
    pub row: usize,
    /// Column of the new tile
    pub col: usize,
    /// Value of the new tile (2 or 4)
    pub value: u32,
}

/// Draw the value of a new tile: 2 with probability 0.9, otherwise 4
pub fn spawn_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.random::<f64>() < SPAWN_TWO_PROBABILITY {
        SPAWN_LOW_VALUE
    } else {
        SPAWN_HIGH_VALUE
    }
}

/// Pick a uniformly random empty cell and a tile value for it
///
/// Returns `None` when the board is full.
pub fn choose_spawn<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Spawn> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let &(row, col) = empty.get(rng.random_range(0..empty.len()))?;
    Some(Spawn {
        row,
        col,
        value: spawn_value(rng),
    })
}

/// Place one random tile on the board
///
/// Returns the placed tile, or `None` if there was no empty cell.
pub fn spawn_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<Spawn> {
    let spawn = choose_spawn(board, rng)?;
    let placed = board.set(spawn.row, spawn.col, spawn.value);
    debug!(
        "spawned {} at ({}, {})",
        spawn.value, spawn.row, spawn.col
    );
    placed.then_some(spawn)
}
