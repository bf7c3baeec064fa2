//! Core domain layer. No file-system dependencies.
//!
//! Entities, the format tag and errors live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod format;

pub use entities::{Meeting, User};
pub use errors::{DomainError, LoadError};
pub use format::DataFormat;
