//! Game state: board, score and the random source for spawns
//!
//! `GridEngine` is a plain value owned by its caller. All randomness flows
//! through the injected generator, so a seeded engine replays identically.

use log::{debug, info, warn};
use ndarray::ArrayView2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::board::{Board, Cells, MoveResult};
use crate::engine::direction::Direction;
use crate::engine::spawn::spawn_tile;
use crate::io::configuration::INITIAL_TILES;
use crate::io::error::Result;

/// Owns the grid, the running score and the spawn generator
#[derive(Debug, Clone)]
pub struct GridEngine<R = StdRng> {
    board: Board,
    score: u64,
    rng: R,
}

impl GridEngine<StdRng> {
    /// Create a deterministic engine and start a game
    pub fn seeded(seed: u64) -> Self {
        let mut engine = Self::new(StdRng::seed_from_u64(seed));
        engine.new_game();
        engine
    }

    /// Create an engine seeded from the operating system and start a game
    pub fn from_entropy() -> Self {
        let mut engine = Self::new(StdRng::from_os_rng());
        engine.new_game();
        engine
    }
}

impl<R: Rng> GridEngine<R> {
    /// Create an engine with an empty board and zero score
    ///
    /// No tiles are spawned; call [`Self::new_game`] to start playing.
    pub fn new(rng: R) -> Self {
        Self {
            board: Board::empty(),
            score: 0,
            rng,
        }
    }

    /// Create an engine positioned on a preset board with zero score
    ///
    /// # Errors
    ///
    /// Returns an error if the cells violate the tile invariant
    pub fn from_cells(cells: Cells, rng: R) -> Result<Self> {
        let board =
            Board::from_cells(cells).inspect_err(|e| warn!("rejected preset board: {e}"))?;
        Ok(Self {
            board,
            score: 0,
            rng,
        })
    }

    /// Clear the board, reset the score and spawn the opening tiles
    pub fn new_game(&mut self) {
        self.board = Board::empty();
        self.score = 0;
        for _ in 0..INITIAL_TILES {
            self.spawn_tile();
        }
        info!("new game started");
    }

    /// Slide and merge toward `direction`, adding any merges to the score
    ///
    /// Never spawns. Callers place a tile with [`Self::spawn_tile`] only when
    /// the result reports a change, then check [`Self::is_terminal`].
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        let result = self.board.shift(direction);
        if result.changed {
            self.score += result.score_delta;
        }
        debug!(
            "move {direction}: changed={} score_delta={}",
            result.changed, result.score_delta
        );
        result
    }

    /// Place one random tile, returning false when the board is full
    pub fn spawn_tile(&mut self) -> bool {
        spawn_tile(&mut self.board, &mut self.rng).is_some()
    }

    /// Whether the board admits no further move
    pub fn is_terminal(&self) -> bool {
        self.board.is_terminal()
    }

    /// Read-only view of the grid, indexed `[row, col]`
    pub fn grid(&self) -> ArrayView2<'_, u32> {
        self.board.view()
    }

    /// Owned copy of the grid
    pub fn cells(&self) -> Cells {
        self.board.to_cells()
    }

    /// The board itself
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Points earned since the last new game
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Largest tile on the board
    pub fn max_tile(&self) -> u32 {
        self.board.max_tile()
    }
}
