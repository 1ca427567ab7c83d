//! Plot frames and draw plans.
//!
//! - `frame`: curve accumulator bound to the observable's axis
//! - `plan`: which mass values to draw, in which order and style

pub mod frame;
pub mod plan;

pub use frame::{Curve, FrameAxis, PlotFrame};
pub use plan::{DrawPlan, DrawStep};
