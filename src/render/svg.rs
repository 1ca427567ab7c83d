//! Plotters-powered SVG rendering of a plot frame.
//!
//! The renderer is data-driven: every curve is already sampled on the frame,
//! so this module only maps styles to Plotters series and lays out the axes.

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::domain::LineStyle;
use crate::error::AppError;
use crate::plot::PlotFrame;
use crate::render::{FrameRenderer, OutputFormat};

/// Dash pattern (on, off) in pixels for dashed curves.
const DASH: (u32, u32) = (8, 5);

/// Headroom above the tallest curve.
const Y_HEADROOM: f64 = 1.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgRenderer {
    pub width: u32,
    pub height: u32,
    pub legend: bool,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            legend: false,
        }
    }
}

impl SvgRenderer {
    /// Draw the frame into an SVG document.
    pub fn render_svg(&self, frame: &PlotFrame) -> Result<String, AppError> {
        let (x0, x1) = (frame.axis.min, frame.axis.max);
        if !(x0.is_finite() && x1.is_finite()) || x1 <= x0 {
            return Err(AppError::render(format!(
                "Frame axis '{}' has an empty range [{x0}, {x1}].",
                frame.axis.name
            )));
        }

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height)).into_drawing_area();
            draw_frame(&root, frame, self.legend)
                .map_err(|e| AppError::render(format!("Failed to draw frame: {e}")))?;
            root.present()
                .map_err(|e| AppError::render(format!("Failed to finish SVG document: {e}")))?;
        }
        Ok(svg)
    }
}

impl FrameRenderer for SvgRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Svg
    }

    fn render(&self, frame: &PlotFrame) -> Result<Vec<u8>, AppError> {
        self.render_svg(frame).map(String::into_bytes)
    }
}

fn y_top(frame: &PlotFrame) -> f64 {
    let y_max = frame.y_max();
    if y_max.is_finite() && y_max > 0.0 {
        y_max * Y_HEADROOM
    } else {
        1.0
    }
}

fn draw_frame(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    frame: &PlotFrame,
    legend: bool,
) -> Result<(), DrawingAreaErrorKind<std::io::Error>> {
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&frame.model_title, ("sans-serif", 18))
        .margin(12)
        .set_label_area_size(LabelAreaPosition::Left, 64)
        .set_label_area_size(LabelAreaPosition::Bottom, 44)
        .build_cartesian_2d(frame.axis.min..frame.axis.max, 0.0..y_top(frame))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(frame.axis.title.as_str())
        .y_desc(format!("Projection of {}", frame.model_name))
        .x_labels(7)
        .y_labels(6)
        .y_label_formatter(&|v| format!("{v:.3}"))
        .label_style(("sans-serif", 12))
        .draw()?;

    for curve in frame.curves() {
        let (r, g, b) = curve.style.color.rgb();
        let style = RGBColor(r, g, b).stroke_width(2);
        let points = curve.points.iter().copied();

        let anno = match curve.style.line {
            LineStyle::Solid => chart.draw_series(LineSeries::new(points, style))?,
            LineStyle::Dashed => chart.draw_series(DashedLineSeries::new(points, DASH.0, DASH.1, style))?,
        };

        if legend {
            anno.label(curve.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }
    }

    if legend && !frame.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(("sans-serif", 12))
            .draw()?;
    }

    Ok(())
}
