//! Plot frame: an ordered accumulator of curves over one axis.
//!
//! A frame is bound to the observable's range when it is created. Each
//! `plot_on` call evaluates the density with the parameter values current at
//! that moment and appends a frozen copy of the curve, so later parameter
//! changes never alter curves already on the frame.
//!
//! Frames serialize to JSON so a rendered plot can be exported and re-drawn.

use serde::{Deserialize, Serialize};

use crate::domain::{BoundedParam, CurveStyle};
use crate::error::AppError;
use crate::models::{GaussianPdf, Workspace};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameAxis {
    pub name: String,
    pub title: String,
    pub min: f64,
    pub max: f64,
}

impl FrameAxis {
    pub fn from_param(param: &BoundedParam) -> Self {
        Self {
            name: param.name().to_string(),
            title: param.axis_title(),
            min: param.min(),
            max: param.max(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub label: String,
    /// Mean parameter value at draw time.
    pub mean: f64,
    /// Width parameter value at draw time.
    pub width: f64,
    pub style: CurveStyle,
    pub points: Vec<(f64, f64)>,
}

impl Curve {
    /// Highest sampled point `(x, density)`.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.points
            .iter()
            .copied()
            .filter(|p| p.1.is_finite())
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotFrame {
    pub axis: FrameAxis,
    pub model_name: String,
    pub model_title: String,
    curves: Vec<Curve>,
}

impl PlotFrame {
    pub fn new(axis: FrameAxis, model_name: impl Into<String>, model_title: impl Into<String>) -> Self {
        Self {
            axis,
            model_name: model_name.into(),
            model_title: model_title.into(),
            curves: Vec::new(),
        }
    }

    /// New empty frame over `pdf`'s observable.
    pub fn for_pdf(pdf: &GaussianPdf, ws: &Workspace) -> Self {
        Self::new(FrameAxis::from_param(ws.param(pdf.observable())), pdf.name(), pdf.title())
    }

    /// Evaluate `pdf` with the current parameter values and append the curve.
    pub fn plot_on(
        &mut self,
        pdf: &GaussianPdf,
        ws: &Workspace,
        style: CurveStyle,
        samples: usize,
    ) -> Result<&Curve, AppError> {
        let points = pdf.sample_curve(ws, samples)?;
        let mean = ws.param(pdf.mean());
        let curve = Curve {
            label: format!("{} = {}", mean.name(), mean.value()),
            mean: mean.value(),
            width: ws.value(pdf.sigma()),
            style,
            points,
        };

        tracing::debug!(
            index = self.curves.len(),
            label = %curve.label,
            color = curve.style.color.display_name(),
            line = curve.style.line.display_name(),
            "curve added to frame"
        );

        self.curves.push(curve);
        Ok(&self.curves[self.curves.len() - 1])
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Largest finite density across all curves (0 for an empty frame).
    pub fn y_max(&self) -> f64 {
        self.curves
            .iter()
            .filter_map(Curve::peak)
            .map(|p| p.1)
            .fold(0.0, f64::max)
    }
}
