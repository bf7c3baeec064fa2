//! meeting-loader: load a meeting and its participants from JSON or XML files.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
