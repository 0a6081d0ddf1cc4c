//! Line-oriented front end.
//!
//! This front end prints the maze and a prompt, reads the next non-whitespace character from its
//! input and answers with plain text, one command at a time. It works on any [`BufRead`] and
//! [`Write`] pair, which makes it usable on pipes and easy to drive from tests.

use std::{
    collections::VecDeque,
    io::{self, BufRead, Lines, Write},
};

use tracing::info;

use crate::{
    messages::{self, MAP_HEADING, PROMPT, WON},
    session::{Reply, Session},
    types::{Command, Ending, Progress},
};

/// Runs the prompt loop until the session is won, the player quits or the input ends.
///
/// # Errors
///
/// This function returns any [`io::Error`] raised while reading from `input` or writing to
/// `output`.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
) -> io::Result<Ending> {
    let mut keys = Keys::new(input);

    write_lines(output, &session.view())?;

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(key) = keys.next_key()? else {
            writeln!(output)?;
            info!("input exhausted");
            return Ok(Ending::EndOfInput);
        };

        match session.apply(Command::from_key(key)) {
            Reply::Map(lines) => {
                writeln!(output, "\n{MAP_HEADING}")?;
                for line in &lines {
                    writeln!(output, "{line}")?;
                }
                writeln!(output)?;
            }
            Reply::Move(outcome) => {
                if let Some(message) = messages::describe(outcome) {
                    writeln!(output, "{message}")?;
                }
                write_lines(output, &session.view())?;
            }
            Reply::Quit => {
                info!("player quit");
                return Ok(Ending::Quit);
            }
            // Only a session handed over already won gets here.
            Reply::Finished => return Ok(Ending::Won),
        }

        if session.progress() == Progress::Won {
            writeln!(output, "{WON}")?;
            return Ok(Ending::Won);
        }
    }
}

/// Writes a rendered view preceded by an empty line.
fn write_lines<W: Write>(output: &mut W, lines: &[String]) -> io::Result<()> {
    writeln!(output)?;
    for line in lines {
        writeln!(output, "{line}")?;
    }

    Ok(())
}

/// Source of single-character commands read from line-based input.
struct Keys<R> {
    /// Remaining input lines.
    lines: Lines<R>,
    /// Characters of the current line not handed out yet.
    pending: VecDeque<char>,
}

impl<R: BufRead> Keys<R> {
    /// Wraps a reader.
    fn new(input: R) -> Self {
        Self {
            lines: input.lines(),
            pending: VecDeque::new(),
        }
    }

    /// Returns the next non-whitespace character, or [`None`] once the input is exhausted.
    fn next_key(&mut self) -> io::Result<Option<char>> {
        loop {
            if let Some(key) = self.pending.pop_front() {
                return Ok(Some(key));
            }

            let Some(line) = self.lines.next().transpose()? else {
                return Ok(None);
            };
            self.pending
                .extend(line.chars().filter(|key| !key.is_whitespace()));
        }
    }
}
