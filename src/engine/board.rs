//! Fixed-size tile grid with directional moves and terminal detection
//!
//! The board stores tiles in an `Array2<u32>` where 0 marks an empty cell and
//! every other value is a power of two no smaller than 2. Moves extract each
//! row or column as an array lane, optionally invert it, and hand it to the
//! line compaction primitive.

use std::fmt;

use ndarray::{Array2, ArrayView2, Axis};

use crate::engine::direction::Direction;
use crate::engine::line::{Line, compact_line};
use crate::io::configuration::{GRID_SIZE, MAX_TILE};
use crate::io::error::{Result, invalid_board};

/// Plain row-major snapshot of the board
pub type Cells = [[u32; GRID_SIZE]; GRID_SIZE];

/// Outcome of applying one move to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    /// Whether any cell value differs from the pre-move board
    pub changed: bool,
    /// Sum of the tiles created by merges during this move
    pub score_delta: u64,
}

/// The 4x4 tile grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<u32>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Create a board with every cell empty
    pub fn empty() -> Self {
        Self {
            cells: Array2::zeros((GRID_SIZE, GRID_SIZE)),
        }
    }

    /// Create a board from row-major cell values
    ///
    /// # Errors
    ///
    /// Returns an error if any value is neither 0 nor a power of two between 2
    /// and [`MAX_TILE`]
    pub fn from_cells(cells: Cells) -> Result<Self> {
        for (row, values) in cells.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value != 0 && (value < 2 || !value.is_power_of_two()) {
                    return Err(invalid_board(&format!(
                        "cell ({row}, {col}) holds {value}, expected 0 or a power of two"
                    )));
                }
                if value > MAX_TILE {
                    return Err(invalid_board(&format!(
                        "cell ({row}, {col}) holds {value}, above the largest tile {MAX_TILE}"
                    )));
                }
            }
        }

        Ok(Self {
            cells: Array2::from(cells.to_vec()),
        })
    }

    /// Read-only view of the grid, indexed `[row, col]`
    pub fn view(&self) -> ArrayView2<'_, u32> {
        self.cells.view()
    }

    /// Copy the grid out as nested arrays
    pub fn to_cells(&self) -> Cells {
        let mut cells = [[0; GRID_SIZE]; GRID_SIZE];
        for (target, row) in cells.iter_mut().zip(self.cells.rows()) {
            for (slot, tile) in target.iter_mut().zip(row) {
                *slot = *tile;
            }
        }
        cells
    }

    /// Tile at a position, `None` when outside the board
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get([row, col]).copied()
    }

    /// Overwrite one cell, returning false when the position is outside the board
    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        self.cells.get_mut([row, col]).is_some_and(|cell| {
            *cell = value;
            true
        })
    }

    /// Empty positions as `(row, col)` in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .indexed_iter()
            .filter(|(_, tile)| **tile == 0)
            .map(|(position, _)| position)
            .collect()
    }

    /// Whether at least one cell is empty
    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(|&tile| tile == 0)
    }

    /// Whether two horizontally or vertically adjacent tiles hold the same non-zero value
    pub fn has_adjacent_pair(&self) -> bool {
        let equal_pair = |window: ArrayView2<'_, u32>| {
            let mut tiles = window.iter();
            matches!((tiles.next(), tiles.next()), (Some(a), Some(b)) if a == b && *a != 0)
        };

        self.cells.windows((1, 2)).into_iter().any(equal_pair)
            || self.cells.windows((2, 1)).into_iter().any(equal_pair)
    }

    /// Whether no move in any direction can change the board
    ///
    /// A full board can only change through a merge, and a merge on a full
    /// board needs two equal neighbours along the move axis, so checking for
    /// an empty cell and then for an adjacent equal pair is exact.
    pub fn is_terminal(&self) -> bool {
        !self.has_empty_cell() && !self.has_adjacent_pair()
    }

    /// Largest tile on the board, 0 when empty
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&tile| u64::from(tile)).sum()
    }

    /// Slide and merge every line toward `direction`
    ///
    /// Deterministic and free of randomness; spawning a new tile afterwards is
    /// the caller's decision.
    pub fn shift(&mut self, direction: Direction) -> MoveResult {
        let layout = direction.layout();
        let before = self.cells.clone();
        let mut score_delta = 0;

        for mut lane in self.cells.lanes_mut(layout.axis) {
            if layout.reversed {
                lane.invert_axis(Axis(0));
            }

            let mut line: Line = [0; GRID_SIZE];
            for (slot, tile) in line.iter_mut().zip(lane.iter()) {
                *slot = *tile;
            }

            let compaction = compact_line(line);
            for (tile, value) in lane.iter_mut().zip(compaction.values) {
                *tile = value;
            }
            score_delta += compaction.score;
        }

        MoveResult {
            changed: self.cells != before,
            score_delta,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let mut first = true;
            for &tile in row {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                if tile == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{tile:>5}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
