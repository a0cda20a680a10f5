//! Line-oriented name prompt

use crate::io::configuration::{EXIT_COMMAND, PROMPT_TEXT};
use crate::io::error::{FractalError, Result};
use std::io::{BufRead, Write};

/// What to do with one line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptCommand {
    /// Generate a fractal for the trimmed name
    Generate(String),
    /// Input was blank; ask again
    Retry,
    /// End the session
    Exit,
}

/// Interpret one line of input
///
/// Surrounding whitespace is ignored and the exit command matches in any case.
pub fn parse_input(line: &str) -> PromptCommand {
    let name = line.trim();
    if name.eq_ignore_ascii_case(EXIT_COMMAND) {
        PromptCommand::Exit
    } else if name.is_empty() {
        PromptCommand::Retry
    } else {
        PromptCommand::Generate(name.to_string())
    }
}

/// Interactive session over any reader and writer
pub struct PromptSession<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    /// Create a session reading names from `reader` and writing to `writer`
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Prompt for and read the next command
    ///
    /// End of input is treated as an exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written
    pub fn next_command(&mut self) -> Result<PromptCommand> {
        write!(self.writer, "{PROMPT_TEXT}").map_err(prompt_error)?;
        self.writer.flush().map_err(prompt_error)?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line).map_err(prompt_error)?;
        if read == 0 {
            writeln!(self.writer).map_err(prompt_error)?;
            return Ok(PromptCommand::Exit);
        }

        Ok(parse_input(&line))
    }

    /// Run the read loop, calling `handler` for every name until exit
    ///
    /// # Errors
    ///
    /// Returns the first console error or the first error from `handler`
    pub fn run<F>(&mut self, mut handler: F) -> Result<()>
    where
        F: FnMut(&str, &mut W) -> Result<()>,
    {
        loop {
            match self.next_command()? {
                PromptCommand::Exit => {
                    writeln!(self.writer, "Exiting program.").map_err(prompt_error)?;
                    return Ok(());
                }
                PromptCommand::Retry => {
                    writeln!(self.writer, "Please enter a valid name.").map_err(prompt_error)?;
                }
                PromptCommand::Generate(name) => handler(&name, &mut self.writer)?,
            }
        }
    }
}

fn prompt_error(source: std::io::Error) -> FractalError {
    FractalError::Prompt { source }
}
