//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` defaults
//! - parses CLI arguments and sets up logging
//! - runs the render pipeline or re-plots a saved curve file
//! - prints the summary

use clap::Parser;

use crate::cli::{Command, RenderArgs, ReplotArgs};
use crate::domain::RenderConfig;
use crate::error::AppError;
use crate::render::{SvgRenderer, renderer_for_path, save_frame};

pub mod pipeline;

/// Entry point for the `gauss` binary.
pub fn run() -> Result<(), AppError> {
    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();

    // We want plain `gauss` to behave like `gauss render`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Render(args) => handle_render(args),
        Command::Replot(args) => handle_replot(args),
    }
}

fn handle_render(args: RenderArgs) -> Result<(), AppError> {
    let config = render_config_from_args(&args);
    let run = pipeline::run_render(&config)?;

    if !config.quiet {
        println!("{}", crate::report::format_render_summary(&run));
        println!("Saved: {}", config.output.display());
    }
    Ok(())
}

fn handle_replot(args: ReplotArgs) -> Result<(), AppError> {
    let svg = SvgRenderer {
        width: args.canvas.width,
        height: args.canvas.height,
        legend: args.canvas.legend,
    };
    let renderer = renderer_for_path(&args.output, svg)?;

    let curves = crate::io::read_frame_json(&args.curves)?;
    tracing::info!(
        source = %args.curves.display(),
        tool = %curves.tool,
        generated_at = %curves.generated_at,
        "curve file loaded"
    );
    save_frame(&curves.frame, renderer.as_ref(), &args.output)?;

    println!("{}", crate::report::format_curve_table(&curves.frame));
    Ok(())
}

pub fn render_config_from_args(args: &RenderArgs) -> RenderConfig {
    RenderConfig {
        output: args.output.clone(),
        variant: args.variant,
        prelude_mass: args.prelude_mass,
        sigma: args.sigma,
        samples: args.samples.max(2),
        range_policy: args.range_policy,
        width: args.canvas.width,
        height: args.canvas.height,
        legend: args.canvas.legend,
        export_curves: args.export_curves.clone(),
        quiet: args.quiet,
    }
}

/// Rewrite argv so `gauss` defaults to `gauss render`.
///
/// Rules:
/// - `gauss`                      -> `gauss render`
/// - `gauss -o out.svg ...`       -> `gauss render -o out.svg ...`
/// - `gauss --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("render".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    if matches!(arg1.as_str(), "render" | "replot") {
        return argv;
    }

    // A leading flag is a render flag (global `--log-level` works either way).
    if arg1.starts_with('-') {
        argv.insert(1, "render".to_string());
    }
    argv
}
