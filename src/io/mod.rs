//! Input/output helpers.
//!
//! - curve JSON read/write (`curve`)

pub mod curve;

pub use curve::*;
