//! Turn processing between player actions and the grid engine

use log::info;
use rand::Rng;
use rand::rngs::StdRng;

use crate::engine::GridEngine;
use crate::io::input::Action;
use crate::io::visualization::GameRecorder;

/// What happened in response to one action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The board changed and a tile was spawned
    Moved {
        /// Points earned by the move
        score_delta: u64,
        /// Whether the game ended with this move
        game_over: bool,
    },
    /// The move left the board unchanged; nothing was spawned
    Blocked,
    /// A new game was started
    Restarted,
    /// The action does not apply in the current state
    Ignored,
    /// The player asked to leave
    Quit,
}

/// One player's running game plus the game-over flag the front end displays
///
/// Each action is processed to completion before the next: a move that
/// changes the board is followed by exactly one spawn and a terminal check.
/// While the game is over only restart and quit are accepted.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    engine: GridEngine<R>,
    game_over: bool,
    recorder: Option<GameRecorder>,
}

impl<R: Rng> Session<R> {
    /// Wrap an engine, taking its current board as the starting state
    pub fn new(engine: GridEngine<R>) -> Self {
        let game_over = engine.is_terminal();
        Self {
            engine,
            game_over,
            recorder: None,
        }
    }

    /// Record every accepted state from here on, starting with the current one
    #[must_use]
    pub fn with_recorder(mut self, mut recorder: GameRecorder) -> Self {
        recorder.capture(self.engine.board());
        self.recorder = Some(recorder);
        self
    }

    /// Apply one player action
    pub fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::Quit => Outcome::Quit,
            Action::Restart if self.game_over => {
                self.engine.new_game();
                self.game_over = self.engine.is_terminal();
                self.record();
                Outcome::Restarted
            }
            // Restarting mid-game is not offered; moves stop once the game ends
            Action::Restart => Outcome::Ignored,
            Action::Move(_) if self.game_over => Outcome::Ignored,
            Action::Move(direction) => {
                let result = self.engine.apply_move(direction);
                if !result.changed {
                    return Outcome::Blocked;
                }

                // A changed move always leaves at least one empty cell
                let spawned = self.engine.spawn_tile();
                debug_assert!(spawned, "no empty cell after a changed move");
                self.game_over = self.engine.is_terminal();
                self.record();
                if self.game_over {
                    info!(
                        "game over: score {} max tile {}",
                        self.engine.score(),
                        self.engine.max_tile()
                    );
                }

                Outcome::Moved {
                    score_delta: result.score_delta,
                    game_over: self.game_over,
                }
            }
        }
    }

    fn record(&mut self) {
        if let Some(recorder) = &mut self.recorder {
            recorder.capture(self.engine.board());
        }
    }

    /// The underlying engine
    pub const fn engine(&self) -> &GridEngine<R> {
        &self.engine
    }

    /// Whether the current game has ended
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The active recorder, if recording was enabled
    pub const fn recorder(&self) -> Option<&GameRecorder> {
        self.recorder.as_ref()
    }
}
