//! Shared "render pipeline" logic used by the CLI commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! build model -> plot each draw step onto the frame -> render -> save
//!
//! `build_frame` stops before any I/O so tests can inspect the frame directly.

use crate::domain::{RenderConfig, Variant};
use crate::error::AppError;
use crate::models::MassModel;
use crate::plot::{DrawPlan, PlotFrame};
use crate::render::{SvgRenderer, renderer_for_path, save_frame};

/// All computed outputs of a single `gauss render` run.
#[derive(Debug, Clone)]
pub struct RenderRun {
    pub model: MassModel,
    pub frame: PlotFrame,
    /// Value of the ratio formula when the model was built (reported only).
    pub ratio: f64,
}

/// Build the model and draw every step of the configured plan onto a frame.
pub fn build_frame(config: &RenderConfig) -> Result<RenderRun, AppError> {
    // 1) Parameters, ratio formula and density.
    let mut model = MassModel::build()?;
    if let Some(sigma) = config.sigma {
        model.set_width(sigma)?;
    }
    let ratio = model.ratio.evaluate(&model.ws);

    // 2) Frame bound to the observable's range.
    let mut frame = PlotFrame::for_pdf(&model.gauss, &model.ws);

    // 3) Mutate the mass hypothesis and draw, step by step.
    if let (Variant::Canonical, Some(mass)) = (config.variant, config.prelude_mass) {
        tracing::warn!(prelude_mass = mass, "--prelude-mass only applies to the exploratory variant; ignored");
    }
    let plan = DrawPlan::for_variant(config.variant, config.prelude_mass);
    for step in plan.steps() {
        if let Some(mass) = step.mass {
            model.set_mass_hypothesis(mass, config.range_policy)?;
        }
        frame.plot_on(&model.gauss, &model.ws, step.style, config.samples)?;
    }

    tracing::info!(
        variant = ?config.variant,
        steps = plan.len(),
        curves = frame.curves().len(),
        mass_hypothesis = model.mass_hypothesis(),
        "frame built"
    );

    Ok(RenderRun {
        model,
        frame,
        ratio,
    })
}

/// Build the frame, save it to `config.output`, and write optional exports.
pub fn run_render(config: &RenderConfig) -> Result<RenderRun, AppError> {
    // Resolve the renderer first so a bad extension fails before any work.
    let renderer = renderer_for_path(&config.output, svg_options(config))?;

    let run = build_frame(config)?;
    save_frame(&run.frame, renderer.as_ref(), &config.output)?;

    if let Some(path) = &config.export_curves {
        crate::io::write_frame_json(path, &run.frame)?;
    }

    Ok(run)
}

pub fn svg_options(config: &RenderConfig) -> SvgRenderer {
    SvgRenderer {
        width: config.width,
        height: config.height,
        legend: config.legend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineColor, LineStyle, RangePolicy, Variant};

    #[test]
    fn canonical_draws_three_curves_in_order() {
        let run = build_frame(&RenderConfig::default()).unwrap();
        let means: Vec<f64> = run.frame.curves().iter().map(|c| c.mean).collect();
        assert_eq!(means, vec![125.0, 120.0, 115.0]);

        let colors: Vec<LineColor> = run.frame.curves().iter().map(|c| c.style.color).collect();
        assert_eq!(colors, vec![LineColor::Red, LineColor::Blue, LineColor::Green]);
        assert_eq!(run.frame.curves()[2].style.line, LineStyle::Dashed);

        assert_eq!(run.model.mass_hypothesis(), 115.0);
        assert!((run.ratio - 0.1).abs() < 1e-12);
    }

    #[test]
    fn exploratory_with_prelude_draws_four() {
        let config = RenderConfig {
            variant: Variant::Exploratory,
            prelude_mass: Some(130.0),
            ..RenderConfig::default()
        };
        let run = build_frame(&config).unwrap();
        let means: Vec<f64> = run.frame.curves().iter().map(|c| c.mean).collect();
        assert_eq!(means, vec![130.0, 125.0, 120.0, 115.0]);
        assert_eq!(run.frame.curves()[0].style.color, LineColor::DarkGreen);
    }

    #[test]
    fn prelude_mass_is_ignored_by_canonical() {
        let config = RenderConfig {
            prelude_mass: Some(130.0),
            ..RenderConfig::default()
        };
        let run = build_frame(&config).unwrap();
        let means: Vec<f64> = run.frame.curves().iter().map(|c| c.mean).collect();
        assert_eq!(means, vec![125.0, 120.0, 115.0]);
    }

    #[test]
    fn exploratory_without_prelude_draws_at_default() {
        let config = RenderConfig {
            variant: Variant::Exploratory,
            ..RenderConfig::default()
        };
        let run = build_frame(&config).unwrap();
        assert_eq!(run.frame.curves().len(), 4);
        assert_eq!(run.frame.curves()[0].mean, 125.0);
    }

    #[test]
    fn clamp_policy_pins_last_curve_to_lower_bound() {
        let config = RenderConfig {
            range_policy: RangePolicy::Clamp,
            ..RenderConfig::default()
        };
        let run = build_frame(&config).unwrap();
        assert_eq!(run.frame.curves()[2].mean, 120.0);
        assert_eq!(run.frame.curves()[1].points, run.frame.curves()[2].points);
    }

    #[test]
    fn reject_policy_fails_on_115() {
        let config = RenderConfig {
            range_policy: RangePolicy::Reject,
            ..RenderConfig::default()
        };
        let err = build_frame(&config).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn zero_width_fails_at_first_draw() {
        let config = RenderConfig {
            sigma: Some(0.0),
            ..RenderConfig::default()
        };
        assert!(build_frame(&config).is_err());
    }

    #[test]
    fn runs_are_deterministic() {
        let a = build_frame(&RenderConfig::default()).unwrap();
        let b = build_frame(&RenderConfig::default()).unwrap();
        assert_eq!(a.frame, b.frame);
    }

    #[test]
    fn run_render_writes_artifact_and_export() {
        let dir = tempfile::tempdir().unwrap();
        let config = RenderConfig {
            output: dir.path().join("gaussians.pdf"),
            export_curves: Some(dir.path().join("curves.json")),
            samples: 50,
            ..RenderConfig::default()
        };
        let run = run_render(&config).unwrap();

        assert!(std::fs::metadata(&config.output).unwrap().len() > 0);
        let reloaded = crate::io::read_frame_json(dir.path().join("curves.json").as_path()).unwrap();
        assert_eq!(reloaded.frame, run.frame);
    }

    #[test]
    fn bad_extension_fails_before_drawing() {
        let config = RenderConfig {
            output: "gaussians.png".into(),
            ..RenderConfig::default()
        };
        assert_eq!(run_render(&config).unwrap_err().exit_code(), 4);
    }
}
