//! Maze data module.
//!
//! This module contains the [`Maze`] struct, the immutable grid produced by the loader and read by
//! the engine. A maze can only be built by the loader, which checks every invariant, so holding a
//! [`Maze`] means holding a rectangular grid with a start and an end inside it.

use crate::types::{Coordinate, WALL};

/// Validated, immutable labyrinth grid.
///
/// This structure owns the rows of the maze as fixed-width vectors of characters, together with
/// the positions of the start and end markers found while loading it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Grid content, one vector per row, each exactly [`width`](Maze::width) cells long.
    grid: Vec<Vec<char>>,
    /// Number of cells in every row.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Cell the player starts on.
    start: Coordinate,
    /// Cell the player has to reach.
    end: Coordinate,
}

impl Maze {
    /// Assembles a maze from already-measured rows and marker positions.
    ///
    /// This function returns [`None`] if the grid is not `height` rows of `width` cells, or if
    /// either marker lies outside of it. The loader is the only caller; it reports the failure with
    /// a more precise error of its own before ever getting here.
    pub(crate) fn from_rows(
        grid: Vec<Vec<char>>,
        start: Coordinate,
        end: Coordinate,
    ) -> Option<Self> {
        let height = grid.len();
        let width = grid.first().map_or(0, Vec::len);

        if height == 0 || width == 0 || grid.iter().any(|row| row.len() != width) {
            return None;
        }

        let maze = Self {
            grid,
            width,
            height,
            start,
            end,
        };

        (maze.contains(start) && maze.contains(end)).then_some(maze)
    }

    /// Number of columns in the maze.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows in the maze.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Position of the start marker.
    #[must_use]
    pub const fn start(&self) -> Coordinate {
        self.start
    }

    /// Position of the end marker.
    #[must_use]
    pub const fn end(&self) -> Coordinate {
        self.end
    }

    /// Checks whether `coordinate` lies within `[0, width) x [0, height)`.
    #[must_use]
    pub const fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.column < self.width && coordinate.row < self.height
    }

    /// Returns the character at `coordinate`, or [`None`] outside the grid.
    #[must_use]
    pub fn cell(&self, coordinate: Coordinate) -> Option<char> {
        self.grid
            .get(coordinate.row)
            .and_then(|row| row.get(coordinate.column))
            .copied()
    }

    /// Checks whether the cell at `coordinate` is a wall.
    #[must_use]
    pub fn is_wall(&self, coordinate: Coordinate) -> bool {
        self.cell(coordinate) == Some(WALL)
    }

    /// Iterates over the rows of the grid from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.grid.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds the grid of a small walled maze for testing.
    fn create_test_grid() -> Vec<Vec<char>> {
        ["#####", "#S..#", "#.#.#", "#..E#", "#####"]
            .iter()
            .map(|row| row.chars().collect())
            .collect()
    }

    #[test]
    fn test_from_rows_valid_grid() {
        let maze = Maze::from_rows(
            create_test_grid(),
            Coordinate::new(1, 1),
            Coordinate::new(3, 3),
        )
        .expect("a rectangular grid with both markers should build");

        assert_eq!(maze.width(), 5);
        assert_eq!(maze.height(), 5);
        assert_eq!(maze.start(), Coordinate::new(1, 1));
        assert_eq!(maze.end(), Coordinate::new(3, 3));
        assert_eq!(maze.rows().count(), 5);
        assert!(maze.rows().all(|row| row.len() == 5));
    }

    #[test]
    fn test_from_rows_ragged_grid() {
        let mut grid = create_test_grid();
        grid.last_mut().expect("grid has rows").push('#');

        assert!(Maze::from_rows(grid, Coordinate::new(1, 1), Coordinate::new(3, 3)).is_none());
    }

    #[test]
    fn test_from_rows_marker_outside_grid() {
        assert!(Maze::from_rows(
            create_test_grid(),
            Coordinate::new(1, 1),
            Coordinate::new(5, 3)
        )
        .is_none());
        assert!(Maze::from_rows(
            create_test_grid(),
            Coordinate::new(1, 9),
            Coordinate::new(3, 3)
        )
        .is_none());
    }

    #[test]
    fn test_from_rows_empty_grid() {
        assert!(Maze::from_rows(Vec::new(), Coordinate::new(0, 0), Coordinate::new(0, 0)).is_none());
    }

    #[test]
    fn test_cell_lookup() {
        let maze = Maze::from_rows(
            create_test_grid(),
            Coordinate::new(1, 1),
            Coordinate::new(3, 3),
        )
        .expect("test grid should build");

        assert_eq!(maze.cell(Coordinate::new(1, 1)), Some('S'));
        assert_eq!(maze.cell(Coordinate::new(3, 3)), Some('E'));
        assert_eq!(maze.cell(Coordinate::new(2, 1)), Some('.'));
        assert_eq!(maze.cell(Coordinate::new(5, 0)), None);
        assert_eq!(maze.cell(Coordinate::new(0, 5)), None);
        assert!(maze.is_wall(Coordinate::new(0, 0)));
        assert!(maze.is_wall(Coordinate::new(2, 2)));
        assert!(!maze.is_wall(Coordinate::new(1, 2)));
        assert!(!maze.is_wall(Coordinate::new(7, 7)));
    }

    #[test]
    fn test_contains() {
        let maze = Maze::from_rows(
            create_test_grid(),
            Coordinate::new(1, 1),
            Coordinate::new(3, 3),
        )
        .expect("test grid should build");

        assert!(maze.contains(Coordinate::new(0, 0)));
        assert!(maze.contains(Coordinate::new(4, 4)));
        assert!(!maze.contains(Coordinate::new(5, 4)));
        assert!(!maze.contains(Coordinate::new(4, 5)));
    }
}
