//! Diagnostic logging set-up.
//!
//! Logs are filtered through `RUST_LOG` and written either to a file or to standard error. The
//! terminal interface draws on the whole screen, so unless a file is requested it runs without a
//! subscriber at all.

use std::{fs::File, path::PathBuf, sync::Mutex};

use color_eyre::eyre::{Result, WrapErr as _};
use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

/// Where diagnostic logs go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sink {
    /// Append to the given file, without ANSI colours.
    File(PathBuf),
    /// Write to standard error.
    Stderr,
    /// Install no subscriber.
    Disabled,
}

/// Installs the global tracing subscriber for `sink`.
///
/// File logging defaults to the `info` level and standard error to `warn`; `RUST_LOG` overrides
/// either default.
///
/// # Errors
///
/// This function returns an error if the log file cannot be created or if a global subscriber was
/// already installed.
pub fn init(sink: Sink) -> Result<()> {
    match sink {
        Sink::File(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(&path)
                .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

            tracing_subscriber::registry()
                .with(filter("info"))
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .try_init()?;
        }
        Sink::Stderr => {
            tracing_subscriber::registry()
                .with(filter("warn"))
                .with(fmt::layer().with_writer(std::io::stderr).compact())
                .try_init()?;
        }
        Sink::Disabled => {}
    }

    Ok(())
}

/// Builds the level filter from `RUST_LOG`, falling back to `default`.
fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_env| EnvFilter::new(default))
}
