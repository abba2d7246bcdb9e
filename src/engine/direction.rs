//! Move directions and how each one reads the board

use std::fmt;
use std::str::FromStr;

use ndarray::Axis;

use crate::io::error::GameError;

/// Direction tiles travel during a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward column zero
    Left,
    /// Toward the last column
    Right,
    /// Toward row zero
    Up,
    /// Toward the last row
    Down,
}

/// Which lines a move operates on and in which order they are read
///
/// `axis` is the array axis each line runs along: rows run along axis 1,
/// columns along axis 0. A reversed line is read from its far end so that
/// compaction always moves tiles toward the front of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLayout {
    /// Array axis the extracted lines run along
    pub axis: Axis,
    /// Whether each line is reversed before compaction and restored after
    pub reversed: bool,
}

impl Direction {
    /// All four directions in a fixed order
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Axis selection and reversal used to reduce this move to line compaction
    pub const fn layout(self) -> LineLayout {
        match self {
            Self::Left => LineLayout {
                axis: Axis(1),
                reversed: false,
            },
            Self::Right => LineLayout {
                axis: Axis(1),
                reversed: true,
            },
            Self::Up => LineLayout {
                axis: Axis(0),
                reversed: false,
            },
            Self::Down => LineLayout {
                axis: Axis(0),
                reversed: true,
            },
        }
    }

    /// Lowercase name used in logs and move scripts
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            "up" | "u" => Ok(Self::Up),
            "down" | "d" => Ok(Self::Down),
            _ => Err(GameError::InvalidMove {
                input: s.to_string(),
            }),
        }
    }
}
