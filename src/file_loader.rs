//! File loading and validation utilities for maze files.
//!
//! Loading runs in two passes over the raw text. [`measure`] settles the dimensions and rejects
//! ragged or out-of-bounds input, then [`parse`] copies the cells into a [`Maze`] and locates the
//! start and end markers.

use std::{
    error::Error,
    fmt, fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{
    map::Maze,
    types::{Coordinate, END, START},
};

/// Smallest accepted width or height, in cells.
pub const MIN_DIM: usize = 5;

/// Largest accepted width or height, in cells.
pub const MAX_DIM: usize = 100;

/// Inclusive range of accepted maze dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    /// Smallest accepted width or height.
    min: usize,
    /// Largest accepted width or height.
    max: usize,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: MIN_DIM,
            max: MAX_DIM,
        }
    }
}

impl Bounds {
    /// Builds a range of accepted dimensions.
    ///
    /// This function returns [`None`] if `min` is zero or larger than `max`, since no maze could
    /// satisfy such a range.
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Option<Self> {
        if min == 0 || min > max {
            None
        } else {
            Some(Self { min, max })
        }
    }

    /// Smallest accepted dimension.
    #[must_use]
    pub const fn min(self) -> usize {
        self.min
    }

    /// Largest accepted dimension.
    #[must_use]
    pub const fn max(self) -> usize {
        self.max
    }

    /// Checks whether `value` lies within the range, both ends included.
    #[must_use]
    pub const fn contains(self, value: usize) -> bool {
        self.min <= value && value <= self.max
    }
}

impl fmt::Display for Bounds {
    #[expect(
        clippy::renamed_function_params,
        reason = "A one-letter formatter name is denied by min_ident_chars."
    )]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}, {}]", self.min, self.max)
    }
}

/// Reasons a maze text is rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MalformedInput {
    /// The text contains no lines at all.
    Empty,
    /// The file content is not valid UTF-8 text.
    NotText,
    /// A row differs in length from the first row.
    RaggedRow {
        /// Zero-indexed row number.
        row: usize,
        /// Width taken from the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// The number of rows differs from the measured height.
    RowCount {
        /// Height the grid was measured at.
        expected: usize,
        /// Rows actually present.
        found: usize,
    },
    /// The first row is too narrow or too wide.
    Width {
        /// Measured width.
        width: usize,
        /// Accepted range.
        bounds: Bounds,
    },
    /// The grid has too few or too many rows.
    Height {
        /// Measured height.
        height: usize,
        /// Accepted range.
        bounds: Bounds,
    },
    /// A cell holds a control character.
    Unprintable {
        /// Position of the cell.
        at: Coordinate,
        /// The offending character.
        cell: char,
    },
    /// The start or end marker is absent.
    MissingMarker(char),
}

impl fmt::Display for MalformedInput {
    #[expect(
        clippy::renamed_function_params,
        reason = "A one-letter formatter name is denied by min_ident_chars."
    )]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(formatter, "the maze is empty"),
            Self::NotText => write!(formatter, "the maze is not valid UTF-8 text"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                formatter,
                "row {row} is {found} cells wide but the first row is {expected} cells wide"
            ),
            Self::RowCount { expected, found } => {
                write!(formatter, "expected {expected} rows but found {found}")
            }
            Self::Width { width, bounds } => {
                write!(formatter, "maze width {width} is outside of {bounds}")
            }
            Self::Height { height, bounds } => {
                write!(formatter, "maze height {height} is outside of {bounds}")
            }
            Self::Unprintable { at, cell } => {
                write!(formatter, "cell {at} holds unprintable character {cell:?}")
            }
            Self::MissingMarker(marker) => write!(formatter, "the maze has no '{marker}' cell"),
        }
    }
}

impl Error for MalformedInput {}

/// Failure to produce a maze from a file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened or read.
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The file was read but its content is not a valid maze.
    Malformed(MalformedInput),
}

impl fmt::Display for LoadError {
    #[expect(
        clippy::renamed_function_params,
        reason = "A one-letter formatter name is denied by min_ident_chars."
    )]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, .. } => write!(formatter, "failed to open {}", path.display()),
            Self::Malformed(_) => write!(formatter, "invalid maze"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Malformed(reason) => Some(reason),
        }
    }
}

impl From<MalformedInput> for LoadError {
    fn from(reason: MalformedInput) -> Self {
        Self::Malformed(reason)
    }
}

/// Splits a maze text into its rows.
///
/// A leading byte order mark is skipped and both `\n` and `\r\n` end a row, including a final
/// `\r` left without its `\n`.
fn rows(raw: &str) -> impl Iterator<Item = &str> {
    raw.strip_prefix('\u{feff}')
        .unwrap_or(raw)
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Measures the width and height of a maze text.
///
/// The width is the length in characters of the first line and the height is the number of lines,
/// line terminators excluded. A single terminator at the very end of the text does not count as an
/// extra, empty line, and a leading byte order mark is not part of the first row.
///
/// # Errors
///
/// This function returns [`MalformedInput`] if:
/// - The text has no lines
/// - Any line differs in length from the first one
/// - The width or height falls outside `bounds`
pub fn measure(raw: &str, bounds: Bounds) -> Result<(usize, usize), MalformedInput> {
    let mut lines = rows(raw);
    let Some(first) = lines.next() else {
        return Err(MalformedInput::Empty);
    };

    let width = first.chars().count();
    let mut height = 1;

    for line in lines {
        let found = line.chars().count();
        if found != width {
            return Err(MalformedInput::RaggedRow {
                row: height,
                expected: width,
                found,
            });
        }
        height += 1;
    }

    if !bounds.contains(width) {
        return Err(MalformedInput::Width { width, bounds });
    }
    if !bounds.contains(height) {
        return Err(MalformedInput::Height { height, bounds });
    }

    Ok((width, height))
}

/// Copies a measured maze text into a [`Maze`] and locates its markers.
///
/// Every cell is scanned left to right, top to bottom. Should a marker appear more than once, the
/// last occurrence in that order becomes the canonical one and each overridden occurrence is
/// logged as a warning.
///
/// # Errors
///
/// This function returns [`MalformedInput`] if:
/// - A row is not exactly `width` characters long
/// - The text does not hold exactly `height` rows
/// - A cell holds a control character
/// - There is no start (`S`) or no end (`E`) marker
pub fn parse(raw: &str, width: usize, height: usize) -> Result<Maze, MalformedInput> {
    let mut grid = Vec::with_capacity(height);
    let mut start = None;
    let mut end = None;

    for (row, line) in rows(raw).enumerate() {
        let cells: Vec<char> = line.chars().collect();
        if cells.len() != width {
            return Err(MalformedInput::RaggedRow {
                row,
                expected: width,
                found: cells.len(),
            });
        }

        for (column, &cell) in cells.iter().enumerate() {
            let at = Coordinate::new(column, row);
            if cell.is_control() {
                return Err(MalformedInput::Unprintable { at, cell });
            }
            match cell {
                START => record_marker(&mut start, START, at),
                END => record_marker(&mut end, END, at),
                _ => {}
            }
        }

        grid.push(cells);
    }

    if grid.len() != height {
        return Err(MalformedInput::RowCount {
            expected: height,
            found: grid.len(),
        });
    }

    let start = start.ok_or(MalformedInput::MissingMarker(START))?;
    let end = end.ok_or(MalformedInput::MissingMarker(END))?;

    // Both markers were found inside a non-empty rectangular grid, so this cannot fail.
    Maze::from_rows(grid, start, end).ok_or(MalformedInput::Empty)
}

/// Measures and parses a maze text in one go.
///
/// # Errors
///
/// This function returns the [`MalformedInput`] raised by either [`measure`] or [`parse`].
pub fn load(raw: &str, bounds: Bounds) -> Result<Maze, MalformedInput> {
    let (width, height) = measure(raw, bounds)?;
    let maze = parse(raw, width, height)?;

    info!(
        width,
        height,
        start = %maze.start(),
        end = %maze.end(),
        "maze loaded"
    );

    Ok(maze)
}

/// Reads a maze file from disk and loads it.
///
/// # Errors
///
/// This function returns [`LoadError::Open`] if the file cannot be read and
/// [`LoadError::Malformed`] if its content is not a valid maze.
pub fn read_maze_file(path: &Path, bounds: Bounds) -> Result<Maze, LoadError> {
    debug!(path = %path.display(), %bounds, "reading maze file");

    let bytes = fs::read(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = String::from_utf8(bytes).map_err(|_utf8| MalformedInput::NotText)?;

    load(&raw, bounds).map_err(LoadError::from)
}

/// Stores a marker position, warning if it replaces an earlier occurrence.
fn record_marker(slot: &mut Option<Coordinate>, marker: char, at: Coordinate) {
    if let Some(previous) = slot.replace(at) {
        warn!(%marker, %previous, kept = %at, "duplicate marker, keeping the last occurrence");
    }
}
