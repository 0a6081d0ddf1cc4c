//! Command-line arguments and process exit statuses.

use std::{ffi::OsString, path::PathBuf, process::ExitCode};

use clap::{error::Error as ClapError, Parser};

use crate::{
    file_loader::{Bounds, LoadError, MAX_DIM, MIN_DIM},
    logging::Sink,
    types::RenderMode,
};

/// Walk a text maze from its start cell (S) to its end cell (E).
#[derive(Debug, Parser)]
#[command(name = "mazestep", version, about)]
pub struct Cli {
    /// Path to the maze file.
    pub maze_file: PathBuf,
    /// Smallest accepted maze width and height.
    #[arg(long, default_value_t = MIN_DIM)]
    pub min_dim: usize,
    /// Largest accepted maze width and height.
    #[arg(long, default_value_t = MAX_DIM)]
    pub max_dim: usize,
    /// View shown by the map command (m).
    #[arg(long, value_enum, default_value_t = RenderMode::Plain)]
    pub map_mode: RenderMode,
    /// Use the line-oriented prompt instead of the terminal interface.
    #[arg(long)]
    pub plain: bool,
    /// Write diagnostic logs to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Parses arguments from an explicit iterator, the first item being the binary name.
    ///
    /// # Errors
    ///
    /// This function returns the [`ClapError`] describing invalid arguments, or the help and
    /// version requests which clap also reports as errors.
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, ClapError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Accepted dimension range, or [`None`] if the two limits contradict each other.
    #[must_use]
    pub const fn bounds(&self) -> Option<Bounds> {
        Bounds::new(self.min_dim, self.max_dim)
    }

    /// Destination of diagnostic logs.
    ///
    /// An explicit log file always wins. Without one, the line front end logs to standard error
    /// while the terminal interface stays silent, since it owns the screen.
    #[must_use]
    pub fn log_sink(&self) -> Sink {
        match &self.log_file {
            Some(path) => Sink::File(path.clone()),
            None if self.plain => Sink::Stderr,
            None => Sink::Disabled,
        }
    }
}

/// Process exit status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The session ended normally.
    Success,
    /// The command line could not be parsed.
    BadArguments,
    /// The maze file could not be opened.
    FileOpen,
    /// The maze file is not a valid maze.
    MalformedMaze,
}

impl Status {
    /// Numeric exit code of the status.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::BadArguments => 1,
            Self::FileOpen => 2,
            Self::MalformedMaze => 3,
        }
    }

    /// Status to exit with after a failed load.
    #[must_use]
    pub const fn for_load_error(error: &LoadError) -> Self {
        match error {
            LoadError::Open { .. } => Self::FileOpen,
            LoadError::Malformed(_) => Self::MalformedMaze,
        }
    }

    /// Status to exit with after clap refused the command line.
    ///
    /// Help and version requests are reported by clap as errors written to standard output; they
    /// are not failures.
    #[must_use]
    pub fn for_clap_error(error: &ClapError) -> Self {
        if error.use_stderr() {
            Self::BadArguments
        } else {
            Self::Success
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        Self::from(status.code())
    }
}
