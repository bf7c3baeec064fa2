//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, Meeting, User};
use std::path::Path;

/// Reads entities from files of one format.
///
/// Each call opens, reads and closes the file before returning, including on error.
pub trait DataLoader: Send + Sync {
    /// Load a meeting document from `path`.
    fn load_meeting(&self, path: &Path) -> Result<Meeting, DomainError>;

    /// Load a user document from `path`.
    fn load_user(&self, path: &Path) -> Result<User, DomainError>;
}

/// Produces the loader for one format. Stateless; never touches the file system.
pub trait LoaderFactory: Send + Sync {
    fn create_loader(&self) -> Box<dyn DataLoader>;
}
