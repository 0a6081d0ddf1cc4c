//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use tracing::debug;

use crate::{
    messages,
    session::Reply,
    types::{Command, Direction, Ending, Progress, Screen},
    App,
};

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and forwards key presses to [`handle_key`]. It uses a
/// timeout to avoid blocking the UI.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            handle_key(app, key);
        }
    }

    Ok(())
}

/// Translates a key press into a command and applies it.
///
/// Letters go through [`Command::from_key`], so any unmapped character is an invalid command. The
/// arrow keys move as well and Esc quits. Key releases and keys carrying no character are ignored.
pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    let command = match key.code {
        KeyCode::Char(character) => Command::from_key(character),
        KeyCode::Up => Command::Move(Direction::Up),
        KeyCode::Down => Command::Move(Direction::Down),
        KeyCode::Left => Command::Move(Direction::Left),
        KeyCode::Right => Command::Move(Direction::Right),
        KeyCode::Esc => Command::Quit,
        _ => return,
    };

    apply_command(app, command);
}

/// Applies a command to the session and updates what the interface shows.
pub(crate) fn apply_command(app: &mut App, command: Command) {
    debug!(?command, "command received");

    match app.session.apply(command) {
        Reply::Move(outcome) => {
            app.screen = Screen::Maze;
            app.status = messages::describe(outcome);
        }
        Reply::Map(lines) => {
            app.screen = Screen::Map(lines);
            app.status = None;
        }
        Reply::Quit => app.ending = Some(Ending::Quit),
        Reply::Finished => app.ending = Some(Ending::Won),
    }

    if app.session.progress() == Progress::Won {
        app.ending = Some(Ending::Won);
    }
}
