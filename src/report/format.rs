//! Formatted terminal output for a render run.
//!
//! Kept apart from the model and plotting code so output changes stay
//! localized.

use crate::app::pipeline::RenderRun;
use crate::math::trapezoid;
use crate::plot::{Curve, PlotFrame};

/// Format the run summary (model, parameters, curve table).
pub fn format_render_summary(run: &RenderRun) -> String {
    let mut out = String::new();
    let model = &run.model;

    out.push_str("=== gauss - mass hypothesis curves ===\n");
    out.push_str(&format!("Model: {} {}\n", model.gauss.name(), model.gauss.title()));

    out.push_str("\nParameters:\n");
    for p in model.ws.params() {
        out.push_str(&format!(
            "  {:<6} {:>9.3} in [{:.3}, {:.3}]  {}\n",
            p.name(),
            p.value(),
            p.min(),
            p.max(),
            p.axis_title()
        ));
    }
    out.push_str(&format!(
        "  {:<6} {:>9.5} = {}\n",
        model.ratio.name(),
        run.ratio,
        model.ratio.expression(&model.ws)
    ));

    out.push('\n');
    out.push_str(&format_curve_table(&run.frame));
    out
}

/// One row per curve on the frame, in draw order.
pub fn format_curve_table(frame: &PlotFrame) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Frame: {} [{}, {}], {} curve(s)\n",
        frame.axis.name,
        frame.axis.min,
        frame.axis.max,
        frame.curves().len()
    ));

    out.push_str(
        format!(
            "{:>3} {:<12} {:<10} {:<7} {:>9} {:>10} {:>8}\n",
            "#", "label", "color", "line", "peak_x", "peak_pdf", "area"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<3} {:-<12} {:-<10} {:-<7} {:-<9} {:-<10} {:-<8}\n",
            "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for (i, curve) in frame.curves().iter().enumerate() {
        out.push_str(format_curve_row(i, curve).trim_end());
        out.push('\n');
    }

    out
}

fn format_curve_row(index: usize, curve: &Curve) -> String {
    let (peak_x, peak_y) = curve.peak().unwrap_or((f64::NAN, f64::NAN));
    format!(
        "{:>3} {:<12} {:<10} {:<7} {:>9.2} {:>10.5} {:>8.4}\n",
        index,
        curve.label,
        curve.style.color.display_name(),
        curve.style.line.display_name(),
        peak_x,
        peak_y,
        trapezoid(&curve.points)
    )
}
