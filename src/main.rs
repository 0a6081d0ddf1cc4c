//! This crate contains the source code for the binary of the maze walker mazestep.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::{io, process::ExitCode};

use color_eyre::{eyre::Result, install};
use mazestep::{
    cli::{Cli, Status},
    file_loader::{self, LoadError},
    logging,
    messages::WON,
    prompt,
    session::Session,
    types::Ending,
    App,
};
use tracing::{error, info};

fn main() -> Result<ExitCode> {
    install()?;

    let cli = match Cli::parse_from_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            return Ok(Status::for_clap_error(&err).into());
        }
    };

    let Some(bounds) = cli.bounds() else {
        eprintln!(
            "error: --min-dim ({}) must be at least 1 and no larger than --max-dim ({})",
            cli.min_dim, cli.max_dim
        );
        return Ok(Status::BadArguments.into());
    };

    logging::init(cli.log_sink())?;

    let maze = match file_loader::read_maze_file(&cli.maze_file, bounds) {
        Ok(maze) => maze,
        Err(err) => {
            error!(error = %err, "maze could not be loaded");
            match &err {
                LoadError::Open { source, .. } => eprintln!("Error opening file! {err}: {source}"),
                LoadError::Malformed(reason) => eprintln!("Invalid maze! {reason}"),
            }
            return Ok(Status::for_load_error(&err).into());
        }
    };

    let mut session = Session::new(maze, cli.map_mode);

    let ending = if cli.plain {
        prompt::run(&mut session, io::stdin().lock(), &mut io::stdout().lock())?
    } else {
        let title = cli.maze_file.file_name().map_or_else(
            || cli.maze_file.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );

        let mut terminal = ratatui::init();
        let result = App::new(session, title).run(&mut terminal);
        ratatui::restore();

        let ending = result?;
        if ending == Ending::Won {
            println!("{WON}");
        }
        ending
    };

    info!(?ending, "session over");

    Ok(Status::Success.into())
}
