//! Error types for the game shell and its file outputs

use std::fmt;
use std::path::PathBuf;

/// Main error type for shell, rendering and export operations
///
/// Engine moves, spawns and terminal checks never fail; errors only
/// arise where the game meets user input, the terminal or the filesystem.
#[derive(Debug)]
pub enum GameError {
    /// A preset board violates the grid invariant
    InvalidBoard {
        /// Description of what's wrong with the board
        reason: String,
    },

    /// A move token could not be parsed as a direction
    InvalidMove {
        /// The offending token
        input: String,
    },

    /// Failed to encode or save an image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Terminal setup, drawing or event polling failed
    Terminal {
        /// Name of the terminal operation
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Animation export was requested before any frame was recorded
    EmptyRecording,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoard { reason } => write!(f, "Invalid board: {reason}"),
            Self::InvalidMove { input } => {
                write!(
                    f,
                    "Invalid move '{input}': expected left, right, up or down"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Terminal { operation, source } => {
                write!(f, "Terminal error during {operation}: {source}")
            }
            Self::EmptyRecording => write!(f, "No frames were recorded"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::Terminal { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for game results
pub type Result<T> = std::result::Result<T, GameError>;

impl From<image::ImageError> for GameError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid board error
pub fn invalid_board(reason: &impl ToString) -> GameError {
    GameError::InvalidBoard {
        reason: reason.to_string(),
    }
}

/// Wrap a terminal I/O failure with the operation that caused it
pub fn terminal_error(operation: &'static str) -> impl FnOnce(std::io::Error) -> GameError {
    move |source| GameError::Terminal { operation, source }
}
