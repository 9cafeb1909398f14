//! Interactive contact-book session.
//!
//! A menu-driven loop over any line-oriented input and any writer: add a
//! contact, search contacts, or exit. Console handling lives here so the
//! directory itself never touches I/O.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, info};

use crate::directory::SharedDirectory;
use crate::error::directory::DirectoryError;
use crate::error::{report_error, ContactsError, ContactsResult, ErrorContext};

const MENU: &str = "1) Add Contact    2) Search    3) Exit";
const INVALID_CHOICE: &str = "Please provide valid number. [1, 2 or 3]";
const LETTERS_ONLY: &str = "Name can have letters only.";
const NOT_FOUND: &str = "Not Found!";
const GOOD_BYE: &str = "Good Bye! Happy Searching...";
const OPERATION_FAILED: &str = "Invalid operation performed. Please try again.";

/// A selection from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add a contact
    Add,
    /// Search contacts
    Search,
    /// Leave the session
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u8>() {
            Ok(1) => Ok(Self::Add),
            Ok(2) => Ok(Self::Search),
            Ok(3) => Ok(Self::Exit),
            _ => Err(()),
        }
    }
}

/// One interactive session bound to an input, an output and a directory.
#[derive(Debug)]
pub struct Session<R, W> {
    input: R,
    output: W,
    directory: SharedDirectory,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading commands from `input` and writing to `output`.
    pub fn new(input: R, output: W, directory: SharedDirectory) -> Self {
        Self {
            input,
            output,
            directory,
        }
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> ContactsResult<()> {
        info!("Session started");
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(line) = self.read_line()? else {
                break;
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Add) => {
                    if !self.add_contact()? {
                        break;
                    }
                }
                Ok(MenuChoice::Search) => {
                    if !self.search()? {
                        break;
                    }
                }
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "{GOOD_BYE}")?;
                    break;
                }
                Err(()) => writeln!(self.output, "{INVALID_CHOICE}")?,
            }
        }
        self.output.flush()?;
        info!("Session finished");
        Ok(())
    }

    /// Returns the consumed output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line, or `None` at end of input.
    fn read_line(&mut self) -> ContactsResult<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Prompts for a value and returns it trimmed, or `None` at end of input.
    fn prompt(&mut self, label: &str) -> ContactsResult<Option<String>> {
        write!(self.output, "{label}")?;
        Ok(self.read_line()?.map(|line| line.trim().to_string()))
    }

    fn add_contact(&mut self) -> ContactsResult<bool> {
        let Some(name) = self.prompt("Enter Name :")? else {
            return Ok(false);
        };

        match self.directory.add(&name) {
            Ok(()) => debug!(name = %name, "Contact added"),
            Err(DirectoryError::RecordTooLong { max_length, .. }) => writeln!(
                self.output,
                "Name cannot be more than {max_length} characters."
            )?,
            Err(e) if e.is_invalid_record() => writeln!(self.output, "{LETTERS_ONLY}")?,
            Err(e) => {
                report_error(
                    ErrorContext::new(ContactsError::from(e), "session")
                        .with_details(format!("adding {name:?}")),
                );
                writeln!(self.output, "{OPERATION_FAILED}")?;
            }
        }
        Ok(true)
    }

    fn search(&mut self) -> ContactsResult<bool> {
        let Some(query) = self.prompt("Type query :")? else {
            return Ok(false);
        };

        let results = self.directory.search(&query);
        debug!(query = %query, results = results.len(), "Search finished");

        if results.is_empty() {
            writeln!(self.output, "{NOT_FOUND}")?;
        } else {
            for record in results {
                writeln!(self.output, "{record}")?;
            }
        }
        Ok(true)
    }
}
