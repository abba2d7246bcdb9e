//! Frame capture and GIF export of a played session

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

use crate::engine::Board;
use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{GameError, Result};
use crate::io::image::{create_parent_dir, render_board};

/// Captures board states for later animation
///
/// The session records one frame per new game and one per move that changed
/// the board, so the recording replays exactly what the player saw.
#[derive(Debug, Clone, Default)]
pub struct GameRecorder {
    frames: Vec<Board>,
}

impl GameRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current board
    pub fn capture(&mut self, board: &Board) {
        self.frames.push(board.clone());
    }

    /// All boards captured so far, oldest first
    pub fn frames(&self) -> &[Board] {
        &self.frames
    }

    /// Number of frames captured so far
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether nothing has been captured yet
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Export the captured frames as a looping GIF
    ///
    /// Delays shorter than viewers reliably honour are raised to that minimum.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - The parent directory or output file cannot be created
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(GameError::EmptyRecording);
        }

        create_parent_dir(output_path)?;
        let file = File::create(output_path).map_err(|e| GameError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let export_error = |e| GameError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        };

        let mut encoder = GifEncoder::new(BufWriter::new(file));
        encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;

        let delay = Delay::from_numer_denom_ms(frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS), 1);
        for board in &self.frames {
            let frame = Frame::from_parts(render_board(board), 0, 0, delay);
            encoder.encode_frame(frame).map_err(export_error)?;
        }

        Ok(())
    }
}
