//! Port traits. API boundaries for the hexagon.
//!
//! - Outbound: loaders and their factories, called by the application
//! - Report: sink the application writes results into

pub mod outbound;
pub mod report;

pub use outbound::{DataLoader, LoaderFactory};
pub use report::ReportPort;
