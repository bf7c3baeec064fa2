//! Console output adapter.

pub mod console;

pub use console::ConsoleReporter;
