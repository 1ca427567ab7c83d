//! `mass-curves` library crate.
//!
//! The binary (`gauss`) is a thin wrapper around this library so that:
//!
//! - the draw sequence is testable without spawning processes
//! - the plotting backend sits behind one trait (`render::FrameRenderer`)

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod render;
pub mod report;
