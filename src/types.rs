//! Type definitions shared by the maze engine, the session and the front ends.

use std::fmt;

use clap::ValueEnum;

/// Character marking a wall cell.
pub const WALL: char = '#';

/// Character marking the start cell.
pub const START: char = 'S';

/// Character marking the end cell.
pub const END: char = 'E';

/// Character drawn over the player's cell in the overlay view.
pub const PLAYER: char = 'X';

/// Zero-indexed grid position.
///
/// Coordinates carry no bounds of their own; whether a coordinate lies inside a maze is decided by
/// the maze it is checked against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Column index, counted from the left edge.
    pub column: usize,
    /// Row index, counted from the top edge.
    pub row: usize,
}

impl Coordinate {
    /// Builds a coordinate from a column and a row index.
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Returns the neighbouring coordinate one step in `direction`.
    ///
    /// This function yields [`None`] when the step would leave the non-negative quadrant, which is
    /// always out of bounds for any maze. Steps past the right or bottom edge are left for the maze
    /// to reject.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        let Some(column) = self.column.checked_add_signed(dx) else {
            return None;
        };
        let Some(row) = self.row.checked_add_signed(dy) else {
            return None;
        };

        Some(Self { column, row })
    }
}

impl fmt::Display for Coordinate {
    #[expect(
        clippy::renamed_function_params,
        reason = "A one-letter formatter name is denied by min_ident_chars."
    )]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.column, self.row)
    }
}

/// Movement direction on the 4-connected grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards row zero.
    Up,
    /// Away from row zero.
    Down,
    /// Towards column zero.
    Left,
    /// Away from column zero.
    Right,
}

impl Direction {
    /// Returns the unit `(column, row)` offset of the direction.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Command vocabulary accepted by a session.
///
/// Front ends translate raw keystrokes into this enumeration; nothing past this boundary deals with
/// keys or characters except to report an unrecognized one back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Attempt a single step.
    Move(Direction),
    /// Render the whole map.
    ShowMap,
    /// End the session early.
    Quit,
    /// Input that maps to no command.
    Invalid(char),
}

impl Command {
    /// Maps a single key to a command, ignoring case.
    ///
    /// `W`, `A`, `S` and `D` move up, left, down and right, `M` shows the map and `Q` quits. Every
    /// other character is reported as [`Command::Invalid`].
    #[must_use]
    pub const fn from_key(key: char) -> Self {
        match key.to_ascii_uppercase() {
            'W' => Self::Move(Direction::Up),
            'A' => Self::Move(Direction::Left),
            'S' => Self::Move(Direction::Down),
            'D' => Self::Move(Direction::Right),
            'M' => Self::ShowMap,
            'Q' => Self::Quit,
            _ => Self::Invalid(key),
        }
    }
}

/// Reason a move attempt was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockReason {
    /// The target cell lies outside the grid.
    OutOfBounds,
    /// The target cell is a wall.
    Wall,
}

/// Result of a single movement attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player now stands on the contained coordinate.
    Moved(Coordinate),
    /// The player did not move.
    Blocked(BlockReason),
    /// The input did not name a direction.
    Invalid(char),
}

/// How a maze is turned into text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RenderMode {
    /// The raw grid, markers included, without the player.
    #[default]
    Plain,
    /// The grid with the player drawn on top of its cell.
    Overlay,
}

/// Progress of a session through its state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// The player has not reached the end yet.
    Playing,
    /// The player stands on the end cell. No further commands are accepted.
    Won,
}

/// Screen shown by the terminal interface.
///
/// This enumeration holds what the in-game area currently displays. It is used to determine what
/// to render and is reset to the player view by every move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// The maze with the player drawn on it.
    Maze,
    /// The map lines answered to the last map command.
    Map(Vec<String>),
}

/// How a front end left its command loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ending {
    /// The player reached the end cell.
    Won,
    /// The player asked to quit.
    Quit,
    /// The command source ran dry before either of the above.
    EndOfInput,
}
