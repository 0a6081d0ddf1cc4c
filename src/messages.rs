//! User-facing text shared by the terminal and line front ends.

use crate::types::{BlockReason, MoveOutcome};

/// Shown once the end cell is reached.
pub const WON: &str = "Congratulations! You've won!";

/// Heading printed above the full map.
pub const MAP_HEADING: &str = "Full Map:";

/// Prompt asking for the next command.
pub const PROMPT: &str = "Enter your move (W/A/S/D/M for map, Q to quit): ";

/// Message explaining an unsuccessful move, or [`None`] for a successful one.
#[must_use]
pub const fn describe(outcome: MoveOutcome) -> Option<&'static str> {
    match outcome {
        MoveOutcome::Moved(_) => None,
        MoveOutcome::Blocked(BlockReason::OutOfBounds) => Some("Can't move in that direction!"),
        MoveOutcome::Blocked(BlockReason::Wall) => Some("Can't move through walls!"),
        MoveOutcome::Invalid(_) => Some("Invalid direction! Use WASD."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coordinate;

    #[test]
    fn test_describe_outcomes() {
        assert_eq!(describe(MoveOutcome::Moved(Coordinate::new(1, 1))), None);
        assert_eq!(
            describe(MoveOutcome::Blocked(BlockReason::Wall)),
            Some("Can't move through walls!")
        );
        assert_eq!(
            describe(MoveOutcome::Blocked(BlockReason::OutOfBounds)),
            Some("Can't move in that direction!")
        );
        assert_eq!(
            describe(MoveOutcome::Invalid('x')),
            Some("Invalid direction! Use WASD.")
        );
    }
}
