//! Loader adapters. Implement DataLoader and LoaderFactory per file format.
//!
//! Both variants read the whole file first, then parse the in-memory text.

pub mod factory;
pub mod json_loader;
pub mod xml_loader;

pub use factory::{JsonLoaderFactory, XmlLoaderFactory, create_loader, factory_for};
pub use json_loader::JsonDataLoader;
pub use xml_loader::XmlDataLoader;

use crate::domain::LoadError;
use std::io::ErrorKind;
use std::path::Path;

/// Read a data file into memory. The handle is closed before this returns.
/// A leading UTF-8 byte-order mark is dropped.
pub(crate) fn read_document(path: &Path) -> Result<String, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound,
        _ => LoadError::Io(e),
    })?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}
