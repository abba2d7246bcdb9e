//! Command-line interface for interactive and scripted play

use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::engine::GridEngine;
use crate::io::configuration::GIF_FRAME_DELAY_MS;
use crate::io::error::Result;
use crate::io::image::export_board_png;
use crate::io::input::{Action, parse_script};
use crate::io::session::Session;
use crate::io::terminal;
use crate::io::visualization::GameRecorder;

#[derive(Parser, Debug)]
#[command(name = "slide2048")]
#[command(version, about = "Play the 2048 sliding-tile puzzle in the terminal")]
/// Command-line arguments for the game
pub struct Cli {
    /// Random seed for a reproducible game (default: operating system entropy)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Play a move script instead of opening the interactive board, e.g. "LLUR" or "left,up"
    #[arg(short, long, value_name = "SCRIPT")]
    pub moves: Option<String>,

    /// Save the final board as a PNG image
    #[arg(short, long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Record every board state as an animated GIF
    #[arg(short, long, value_name = "PATH")]
    pub record: Option<PathBuf>,

    /// Suppress the final board printout in scripted mode
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check whether the game runs without a terminal front end
    pub const fn is_headless(&self) -> bool {
        self.moves.is_some()
    }
}

/// Drives one game session according to the CLI arguments
pub struct GameRunner {
    cli: Cli,
}

impl GameRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Play the game, then write any requested exports
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The move script contains an invalid token
    /// - The terminal cannot be driven
    /// - The PNG or GIF export fails
    pub fn run(&self) -> Result<()> {
        let engine: GridEngine = self
            .cli
            .seed
            .map_or_else(GridEngine::from_entropy, GridEngine::seeded);

        let mut session = Session::new(engine);
        if self.cli.record.is_some() {
            session = session.with_recorder(GameRecorder::new());
        }

        if let Some(script) = &self.cli.moves {
            let moves = parse_script(script)?;
            info!("playing {} scripted moves", moves.len());
            for direction in moves {
                session.apply(Action::Move(direction));
            }
            if !self.cli.quiet {
                Self::print_summary(&session);
            }
        } else {
            terminal::run(&mut session)?;
        }

        if let Some(path) = &self.cli.export {
            export_board_png(session.engine().board(), path)?;
        }

        if let (Some(path), Some(recorder)) = (&self.cli.record, session.recorder()) {
            recorder.export_gif(path, GIF_FRAME_DELAY_MS)?;
        }

        Ok(())
    }

    // Allow print for the final board in scripted mode
    #[allow(clippy::print_stdout)]
    fn print_summary(session: &Session) {
        let engine = session.engine();
        print!("{}", engine.board());
        println!("Score: {}", engine.score());
        if session.is_game_over() {
            println!("Game Over");
        }
    }
}
