//! Infrastructure adapters. Implement outbound ports.
//!
//! File loaders and console output. Map errors to DomainError.

pub mod loaders;
pub mod ui;
