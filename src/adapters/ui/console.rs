//! Implements ReportPort. Plain text lines on stdout (or any writer).

use crate::domain::{DomainError, Meeting, User};
use crate::ports::ReportPort;
use std::io::{self, Stdout, Write};

pub const COMPLETION_LINE: &str = "All participants loaded.";

/// Console adapter. One line per event, flushed as it is written.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) -> Result<(), DomainError> {
        writeln!(self.out, "{}", text)
            .and_then(|_| self.out.flush())
            .map_err(DomainError::Output)
    }
}

impl<W: Write> ReportPort for ConsoleReporter<W> {
    fn meeting_loaded(&mut self, meeting: &Meeting) -> Result<(), DomainError> {
        self.line(&format!("Meeting on {}, URL: {}", meeting.date, meeting.url))?;
        self.line(&format!("Description: {}", meeting.description))
    }

    fn user_loaded(&mut self, user: &User) -> Result<(), DomainError> {
        self.line(&format!("User {} (ID: {})", user.name, user.id))
    }

    fn finished(&mut self, _participants: usize) -> Result<(), DomainError> {
        self.line(COMPLETION_LINE)
    }

    fn unsupported_format(&mut self, tag: &str) -> Result<(), DomainError> {
        self.line(&format!("Unsupported file format '{}'. Use json or xml.", tag))
    }
}
