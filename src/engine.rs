//! Movement rules, win detection and text rendering.
//!
//! This module holds the single authoritative movement rule. Every function here is a pure
//! function of the maze and the player position, save for [`attempt_move`] updating the position
//! it is handed when, and only when, the move succeeds.

use tracing::trace;

use crate::{
    map::Maze,
    types::{BlockReason, Coordinate, Direction, MoveOutcome, RenderMode, PLAYER},
};

/// Attempts to move the player one cell in `direction`.
///
/// The candidate cell is the player's cell offset by one unit in the requested direction. Moves
/// leaving the grid are [`BlockReason::OutOfBounds`], moves onto a wall are [`BlockReason::Wall`],
/// and in both cases `player` is left untouched. Any other move succeeds and writes the candidate
/// back into `player`.
pub fn attempt_move(maze: &Maze, player: &mut Coordinate, direction: Direction) -> MoveOutcome {
    let outcome = match player.step(direction) {
        None => MoveOutcome::Blocked(BlockReason::OutOfBounds),
        Some(candidate) if !maze.contains(candidate) => {
            MoveOutcome::Blocked(BlockReason::OutOfBounds)
        }
        Some(candidate) if maze.is_wall(candidate) => MoveOutcome::Blocked(BlockReason::Wall),
        Some(candidate) => {
            *player = candidate;
            MoveOutcome::Moved(candidate)
        }
    };

    trace!(?direction, ?outcome, "move attempted");

    outcome
}

/// Checks whether `player` stands on the end cell of `maze`.
#[must_use]
pub fn has_won(maze: &Maze, player: Coordinate) -> bool {
    player == maze.end()
}

/// Renders the maze as one string per row, top to bottom.
///
/// [`RenderMode::Plain`] reproduces the grid as loaded. [`RenderMode::Overlay`] additionally draws
/// [`PLAYER`] over the cell the player stands on. The output always holds exactly
/// [`height`](Maze::height) lines of [`width`](Maze::width) characters each.
#[must_use]
pub fn render(maze: &Maze, player: Coordinate, mode: RenderMode) -> Vec<String> {
    maze.rows()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(column, &cell)| match mode {
                    RenderMode::Overlay if player == Coordinate::new(column, row) => PLAYER,
                    RenderMode::Plain | RenderMode::Overlay => cell,
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_loader::{self, Bounds};

    /// Creates the walled 5x5 maze used throughout these tests.
    fn create_test_maze() -> Maze {
        file_loader::load("#####\n#S..#\n#.#.#\n#..E#\n#####", Bounds::default())
            .expect("test maze should load")
    }

    /// Creates a maze whose start and end sit on the outer edge.
    fn create_open_maze() -> Maze {
        file_loader::load("S....\n.....\n.....\n.....\n....E", Bounds::default())
            .expect("open maze should load")
    }

    #[test]
    fn test_scenario_walk_to_end() {
        let maze = create_test_maze();
        let mut player = maze.start();

        for direction in [
            Direction::Down,
            Direction::Down,
            Direction::Right,
            Direction::Right,
        ] {
            assert!(matches!(
                attempt_move(&maze, &mut player, direction),
                MoveOutcome::Moved(_)
            ));
        }

        assert_eq!(player, maze.end());
        assert!(has_won(&maze, player));
    }

    #[test]
    fn test_move_into_wall_is_blocked() {
        let maze = create_test_maze();
        let mut player = maze.start();

        assert_eq!(
            attempt_move(&maze, &mut player, Direction::Left),
            MoveOutcome::Blocked(BlockReason::Wall)
        );
        assert_eq!(player, maze.start());

        assert_eq!(
            attempt_move(&maze, &mut player, Direction::Up),
            MoveOutcome::Blocked(BlockReason::Wall)
        );
        assert_eq!(player, maze.start());
    }

    #[test]
    fn test_move_reports_new_position() {
        let maze = create_test_maze();
        let mut player = maze.start();

        assert_eq!(
            attempt_move(&maze, &mut player, Direction::Right),
            MoveOutcome::Moved(Coordinate::new(2, 1))
        );
        assert_eq!(player, Coordinate::new(2, 1));
    }

    #[test]
    fn test_move_off_every_edge_is_out_of_bounds() {
        let maze = create_open_maze();
        let last_column = maze.width() - 1;
        let last_row = maze.height() - 1;

        for column in 0..maze.width() {
            let mut top = Coordinate::new(column, 0);
            assert_eq!(
                attempt_move(&maze, &mut top, Direction::Up),
                MoveOutcome::Blocked(BlockReason::OutOfBounds)
            );
            assert_eq!(top, Coordinate::new(column, 0));

            let mut bottom = Coordinate::new(column, last_row);
            assert_eq!(
                attempt_move(&maze, &mut bottom, Direction::Down),
                MoveOutcome::Blocked(BlockReason::OutOfBounds)
            );
            assert_eq!(bottom, Coordinate::new(column, last_row));
        }

        for row in 0..maze.height() {
            let mut left = Coordinate::new(0, row);
            assert_eq!(
                attempt_move(&maze, &mut left, Direction::Left),
                MoveOutcome::Blocked(BlockReason::OutOfBounds)
            );
            assert_eq!(left, Coordinate::new(0, row));

            let mut right = Coordinate::new(last_column, row);
            assert_eq!(
                attempt_move(&maze, &mut right, Direction::Right),
                MoveOutcome::Blocked(BlockReason::OutOfBounds)
            );
            assert_eq!(right, Coordinate::new(last_column, row));
        }
    }

    #[test]
    fn test_every_wall_blocks() {
        let maze = create_test_maze();

        for (row, cells) in maze.rows().enumerate() {
            for (column, &cell) in cells.iter().enumerate() {
                if cell != '#' {
                    continue;
                }
                let wall = Coordinate::new(column, row);
                let approaches = [
                    (wall.step(Direction::Up), Direction::Down),
                    (wall.step(Direction::Down), Direction::Up),
                    (wall.step(Direction::Left), Direction::Right),
                    (wall.step(Direction::Right), Direction::Left),
                ];

                for (origin, direction) in approaches {
                    let Some(origin) = origin.filter(|origin| maze.contains(*origin)) else {
                        continue;
                    };
                    let mut player = origin;
                    assert_eq!(
                        attempt_move(&maze, &mut player, direction),
                        MoveOutcome::Blocked(BlockReason::Wall)
                    );
                    assert_eq!(player, origin);
                }
            }
        }
    }

    #[test]
    fn test_has_won_only_on_end() {
        let maze = create_test_maze();

        for row in 0..maze.height() {
            for column in 0..maze.width() {
                let here = Coordinate::new(column, row);
                assert_eq!(has_won(&maze, here), here == Coordinate::new(3, 3));
            }
        }
    }

    #[test]
    fn test_render_plain_reproduces_grid() {
        let maze = create_test_maze();
        let lines = render(&maze, maze.start(), RenderMode::Plain);

        assert_eq!(lines, vec!["#####", "#S..#", "#.#.#", "#..E#", "#####"]);
    }

    #[test]
    fn test_render_overlay_draws_player() {
        let maze = create_test_maze();
        let lines = render(&maze, Coordinate::new(2, 1), RenderMode::Overlay);

        assert_eq!(lines, vec!["#####", "#SX.#", "#.#.#", "#..E#", "#####"]);
    }

    #[test]
    fn test_render_overlay_on_start() {
        let maze = create_test_maze();
        let lines = render(&maze, maze.start(), RenderMode::Overlay);

        assert_eq!(lines.get(1).map(String::as_str), Some("#X..#"));
    }

    #[test]
    fn test_render_dimensions_and_idempotence() {
        let maze = create_open_maze();
        let player = Coordinate::new(2, 2);

        let first = render(&maze, player, RenderMode::Plain);
        let second = render(&maze, player, RenderMode::Plain);

        assert_eq!(first, second);
        assert_eq!(first.len(), maze.height());
        assert!(first.iter().all(|line| line.chars().count() == maze.width()));
    }
}
