//! Command-line parsing for the mass-hypothesis curve renderer.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! model and rendering code. Every flag has a default, so `gauss` with no
//! arguments reproduces the canonical plot.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{RangePolicy, Variant};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "gauss",
    version,
    about = "Overlay Gaussian mass curves for several particle mass hypotheses"
)]
pub struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the model, draw the curves, and save the plot (default).
    Render(RenderArgs),
    /// Re-draw a curve JSON written by `render --export-curves`.
    Replot(ReplotArgs),
}

/// Options for `render`.
#[derive(Debug, Parser, Clone)]
pub struct RenderArgs {
    /// Output file (.pdf or .svg).
    #[arg(short, long, env = "GAUSS_OUTPUT", default_value = "gaussians.pdf")]
    pub output: PathBuf,

    /// Draw sequence to run.
    #[arg(long, value_enum, env = "GAUSS_VARIANT", default_value_t = Variant::Canonical)]
    pub variant: Variant,

    /// Mass to set before the exploratory pre-draw (the first scripts used 130).
    /// Ignored, with a warning, for the canonical variant.
    #[arg(long, value_name = "GEV")]
    pub prelude_mass: Option<f64>,

    /// Override the width parameter (must lie in [0, 20], > 0).
    #[arg(long, value_name = "GEV")]
    pub sigma: Option<f64>,

    /// Points sampled per curve.
    #[arg(long, env = "GAUSS_SAMPLES", default_value_t = 500)]
    pub samples: usize,

    /// What to do when a mass value falls outside its range.
    #[arg(long, value_enum, env = "GAUSS_RANGE_POLICY", default_value_t = RangePolicy::Extend)]
    pub range_policy: RangePolicy,

    #[command(flatten)]
    pub canvas: CanvasArgs,

    /// Also write the drawn curves to JSON.
    #[arg(long = "export-curves", value_name = "JSON")]
    pub export_curves: Option<PathBuf>,

    /// Do not print the summary table.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Options for `replot`.
#[derive(Debug, Parser, Clone)]
pub struct ReplotArgs {
    /// Curve JSON file produced by `gauss render --export-curves`.
    #[arg(long, value_name = "JSON")]
    pub curves: PathBuf,

    /// Output file (.pdf or .svg).
    #[arg(short, long, default_value = "gaussians.pdf")]
    pub output: PathBuf,

    #[command(flatten)]
    pub canvas: CanvasArgs,
}

/// Page size and decorations shared by both commands.
#[derive(Debug, Parser, Clone, Copy)]
pub struct CanvasArgs {
    /// Page width in points.
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Page height in points.
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Draw a legend with one entry per curve.
    #[arg(long)]
    pub legend: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_defaults_match_the_canonical_plot() {
        let cli = Cli::parse_from(["gauss", "render"]);
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.variant, Variant::Canonical);
        assert_eq!(args.range_policy, RangePolicy::Extend);
        assert_eq!(args.canvas.width, 640);
        assert!(!args.canvas.legend);
        assert_eq!(cli.log_level, tracing::Level::WARN);
    }

    #[test]
    fn replot_requires_curves() {
        assert!(Cli::try_parse_from(["gauss", "replot"]).is_err());
        let cli = Cli::try_parse_from(["gauss", "replot", "--curves", "c.json", "-o", "x.svg"]).unwrap();
        let Command::Replot(args) = cli.command else {
            panic!("expected replot");
        };
        assert_eq!(args.output, PathBuf::from("x.svg"));
    }
}
