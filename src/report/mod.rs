//! Reporting utilities: run summary and curve table.

pub mod format;

pub use format::*;
