//! Numerical utilities: normal pdf/cdf, truncation, sampling grids.

pub mod normal;

pub use normal::*;
