//! Core application state and loop for the terminal interface.

use std::io;

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{
    events,
    session::Session,
    types::{Ending, Screen},
    ui,
};

/// Application state container for the terminal interface.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the maze and Crossterm events will help writing to.
pub struct App {
    /// Maze walk driven by the interface.
    ///
    /// This field holds the session that owns the maze and the player position. Every command the
    /// user types is forwarded to it.
    pub(crate) session: Session,
    /// Current screen being displayed to the user.
    ///
    /// This field holds what the maze area shows: the player view, or the map after the map
    /// command until the next move.
    pub(crate) screen: Screen,
    /// Message describing the last command.
    ///
    /// This field holds the text shown under the maze after a refused move or an invalid key. It is
    /// cleared by the next successful move.
    pub(crate) status: Option<&'static str>,
    /// Reason the loop should stop.
    ///
    /// This field starts off [`None`] and is set once the user quits or reaches the end cell, after
    /// which the loop returns it to the call site.
    pub(crate) ending: Option<Ending>,
    /// Title drawn on the maze border, usually the maze file name.
    pub(crate) title: String,
}

impl App {
    /// Creates a new application around a freshly started session.
    #[must_use]
    pub const fn new(session: Session, title: String) -> Self {
        Self {
            session,
            screen: Screen::Maze,
            status: None,
            ending: None,
            title,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function draws the current state, waits for input and applies it, until the session is
    /// won or the user quits. The reason is returned to the call site, which restores the terminal.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<Ending> {
        loop {
            if let Some(ending) = self.ending {
                return Ok(ending);
            }

            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(io::Error::other))?;
            events::handle_events(self)?;
        }
    }
}
