//! Session state machine for a single walk through a maze.
//!
//! A [`Session`] owns the loaded [`Maze`] and the player position and answers one [`Command`] at a
//! time. It starts out [`Progress::Playing`] and moves to [`Progress::Won`] the moment a move lands
//! on the end cell; from then on it refuses every command.

use tracing::{debug, info};

use crate::{
    engine,
    map::Maze,
    types::{Command, Coordinate, MoveOutcome, Progress, RenderMode},
};

/// Answer of a session to one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// A move was attempted, or the input was not a command.
    Move(MoveOutcome),
    /// The map, rendered with the session's map mode.
    Map(Vec<String>),
    /// The player asked to leave.
    Quit,
    /// The session was already won and ignored the command.
    Finished,
}

/// One walk through a maze, from the start cell to the end cell.
#[derive(Clone, Debug)]
pub struct Session {
    /// Maze being walked.
    maze: Maze,
    /// Current player position.
    player: Coordinate,
    /// Current state of the walk.
    progress: Progress,
    /// Render mode answered to [`Command::ShowMap`].
    map_mode: RenderMode,
}

impl Session {
    /// Starts a session with the player on the start cell.
    #[must_use]
    pub fn new(maze: Maze, map_mode: RenderMode) -> Self {
        debug!(start = %maze.start(), ?map_mode, "session started");

        Self {
            player: maze.start(),
            progress: Progress::Playing,
            maze,
            map_mode,
        }
    }

    /// Applies a single command and reports what happened.
    ///
    /// Moves go through [`engine::attempt_move`] and are followed by a win check. Showing the map,
    /// quitting and invalid input never change the player position or the session state.
    pub fn apply(&mut self, command: Command) -> Reply {
        if self.progress == Progress::Won {
            return Reply::Finished;
        }

        match command {
            Command::Move(direction) => {
                let outcome = engine::attempt_move(&self.maze, &mut self.player, direction);
                if engine::has_won(&self.maze, self.player) {
                    info!(end = %self.player, "end reached");
                    self.progress = Progress::Won;
                }
                Reply::Move(outcome)
            }
            Command::ShowMap => {
                Reply::Map(engine::render(&self.maze, self.player, self.map_mode))
            }
            Command::Quit => Reply::Quit,
            Command::Invalid(key) => {
                debug!(?key, "invalid command");
                Reply::Move(MoveOutcome::Invalid(key))
            }
        }
    }

    /// Renders the maze with the player drawn on it.
    #[must_use]
    pub fn view(&self) -> Vec<String> {
        engine::render(&self.maze, self.player, RenderMode::Overlay)
    }

    /// Current player position.
    #[must_use]
    pub const fn player(&self) -> Coordinate {
        self.player
    }

    /// Current state of the walk.
    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    /// Maze being walked.
    #[must_use]
    pub const fn maze(&self) -> &Maze {
        &self.maze
    }
}
