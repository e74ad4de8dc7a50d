//! Prompting and styled status output
//!
//! `Terminal` is generic over its input and output so the whole interactive
//! flow can be driven from byte slices in tests and from stdin/stdout in the
//! binary.

use crate::cli::menu::MenuAction;
use std::io::{self, BufRead, Write};

const RESET: &str = "\x1b[0m";

/// Visual style of a status line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    Plain,
    /// Green text
    Success,
    /// Black on red
    Error,
    /// Black on blue
    Info,
    /// Black on green
    Highlight,
}

impl Style {
    fn ansi(self) -> Option<&'static str> {
        match self {
            Style::Plain => None,
            Style::Success => Some("\x1b[32m"),
            Style::Error => Some("\x1b[30;41m"),
            Style::Info => Some("\x1b[30;44m"),
            Style::Highlight => Some("\x1b[30;42m"),
        }
    }
}

/// Line-oriented terminal over any reader and writer
pub struct Terminal<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Create a terminal
    ///
    /// # Arguments
    ///
    /// * `input` - Source of user answers, one per line
    /// * `output` - Destination of prompts and status lines
    /// * `color` - Whether to emit ANSI styling
    pub fn new(input: R, output: W, color: bool) -> Self {
        Terminal {
            input,
            output,
            color,
        }
    }

    /// Ask a free-text question
    ///
    /// # Returns
    ///
    /// * `Ok(Some(answer))` - The line typed, without its line ending
    /// * `Ok(None)` - Input is closed
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "? {} ", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(answer))
    }

    /// Present a numbered list of choices and wait for a valid selection
    ///
    /// Unknown answers re-show the list.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(action))` - The selected choice
    /// * `Ok(None)` - Input is closed
    pub fn select(
        &mut self,
        question: &str,
        choices: &[MenuAction],
    ) -> io::Result<Option<MenuAction>> {
        loop {
            writeln!(self.output)?;
            self.say(Style::Plain, question)?;
            for (index, choice) in choices.iter().enumerate() {
                writeln!(self.output, "  {}) {}", index + 1, choice)?;
            }

            let Some(answer) = self.ask("Choose an option:")? else {
                return Ok(None);
            };

            match MenuAction::from_choice(&answer, choices) {
                Some(action) => return Ok(Some(action)),
                None => self.say(Style::Error, "Unknown option. Please choose from the list.")?,
            }
        }
    }

    /// Print one status line in the given style
    pub fn say(&mut self, style: Style, text: &str) -> io::Result<()> {
        match style.ansi().filter(|_| self.color) {
            Some(code) => writeln!(self.output, "{}{}{}", code, text, RESET),
            None => writeln!(self.output, "{}", text),
        }
    }
}
