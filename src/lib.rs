//! Library crate for the mazestep maze walker.
//!
//! A maze is loaded once from text by [`file_loader`] into an immutable [`map::Maze`]. A
//! [`session::Session`] then walks it one [`types::Command`] at a time, using the movement rules
//! in [`engine`], until the player stands on the end cell. Two front ends drive a session: the
//! terminal interface in [`App`] and the line-oriented loop in [`prompt`].

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
pub mod cli;
pub mod engine;
mod events;
pub mod file_loader;
pub mod logging;
pub mod map;
pub mod messages;
pub mod prompt;
pub mod session;
pub mod types;
mod ui;

pub use app::App;
