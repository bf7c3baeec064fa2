//! Report outbound port. Where the orchestrator sends what it loaded.

use crate::domain::{DomainError, Meeting, User};

/// Sink for run progress, called in load order.
///
/// Implemented by the console adapter; tests use in-memory writers.
pub trait ReportPort {
    /// The meeting document was loaded; called once, before any user.
    fn meeting_loaded(&mut self, meeting: &Meeting) -> Result<(), DomainError>;

    /// One participant was loaded.
    fn user_loaded(&mut self, user: &User) -> Result<(), DomainError>;

    /// All `participants` users were loaded.
    fn finished(&mut self, participants: usize) -> Result<(), DomainError>;

    /// The format tag was not recognized; nothing was loaded.
    fn unsupported_format(&mut self, tag: &str) -> Result<(), DomainError>;
}
