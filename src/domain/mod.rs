//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - bounded parameters and range policies (`BoundedParam`, `RangePolicy`)
//! - curve styling (`CurveStyle`, `LineColor`, `LineStyle`)
//! - run configuration (`Variant`, `RenderConfig`)

pub mod types;

pub use types::*;
