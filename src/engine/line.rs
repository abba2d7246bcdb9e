//! Single-line slide and merge
//!
//! Every directional move reduces to this primitive: the line is read in the
//! direction tiles travel, so merging always proceeds toward index zero.

use crate::io::configuration::GRID_SIZE;

/// One row or column of the board, ordered toward the side tiles move to
pub type Line = [u32; GRID_SIZE];

/// Result of compacting one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCompaction {
    /// Tiles after sliding and merging, padded with zeros at the end
    pub values: Line,
    /// Sum of every merged tile produced
    pub score: u64,
}

/// Slide non-zero tiles toward the front and merge equal neighbours once
///
/// Zeros are dropped first, then the compacted tiles are scanned front to back.
/// A pair of equal tiles becomes one tile of double value and the scan skips
/// past both, so a freshly merged tile never merges again in the same pass:
/// `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`, not `[8, 0, 0, 0]`.
pub fn compact_line(line: Line) -> LineCompaction {
    let mut tiles = line.into_iter().filter(|&tile| tile != 0).peekable();
    let mut values = [0; GRID_SIZE];
    let mut score = 0;

    for slot in &mut values {
        let Some(tile) = tiles.next() else {
            break;
        };
        if tiles.next_if_eq(&tile).is_some() {
            let merged = tile * 2;
            score += u64::from(merged);
            *slot = merged;
        } else {
            *slot = tile;
        }
    }

    LineCompaction { values, score }
}
