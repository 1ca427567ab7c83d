//! Shared domain types.
//!
//! These are the value types the model, plot frame and renderers pass around:
//!
//! - bounded parameters and the policy for out-of-range sets
//! - curve styling (`LineColor`, `LineStyle`, `CurveStyle`)
//! - the run configuration derived from CLI flags (`RenderConfig`)

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// What `BoundedParam::set_val` does with a value outside `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Move the violated bound out to the new value and store it as given.
    Extend,
    /// Clip to the nearest bound.
    Clamp,
    /// Fail and leave the parameter untouched.
    Reject,
}

/// Outcome of a `set_val` call, mostly useful for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SetOutcome {
    InRange,
    Extended { min: f64, max: f64 },
    Clamped { requested: f64 },
}

/// A named real-valued quantity with an inclusive `[min, max]` range.
///
/// The current value is always inside the range; the only way to change the
/// value is `set_val`, which applies a `RangePolicy`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedParam {
    name: String,
    label: String,
    unit: Option<String>,
    value: f64,
    min: f64,
    max: f64,
}

impl BoundedParam {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        value: f64,
        min: f64,
        max: f64,
    ) -> Result<Self, AppError> {
        let name = name.into();
        if !(value.is_finite() && min.is_finite() && max.is_finite()) {
            return Err(AppError::param(format!(
                "Parameter '{name}' needs finite value and bounds, got {value} in [{min}, {max}]."
            )));
        }
        if min > max {
            return Err(AppError::param(format!(
                "Parameter '{name}' has inverted bounds [{min}, {max}]."
            )));
        }
        if value < min || value > max {
            return Err(AppError::param(format!(
                "Parameter '{name}' default {value} is outside [{min}, {max}]."
            )));
        }

        Ok(Self {
            name,
            label: label.into(),
            unit: None,
            value,
            min,
            max,
        })
    }

    /// Attach a unit (shown on plot axes as `label [unit]`).
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Axis title: `label [unit]`, or just the label.
    pub fn axis_title(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{} [{unit}]", self.label),
            None => self.label.clone(),
        }
    }

    /// Set the current value, resolving out-of-range values with `policy`.
    pub fn set_val(&mut self, value: f64, policy: RangePolicy) -> Result<SetOutcome, AppError> {
        if !value.is_finite() {
            return Err(AppError::param(format!(
                "Cannot set '{}' to non-finite value {value}.",
                self.name
            )));
        }

        if self.contains(value) {
            self.value = value;
            return Ok(SetOutcome::InRange);
        }

        match policy {
            RangePolicy::Extend => {
                self.min = self.min.min(value);
                self.max = self.max.max(value);
                self.value = value;
                tracing::warn!(
                    param = %self.name,
                    value,
                    min = self.min,
                    max = self.max,
                    "value outside range, bounds extended"
                );
                Ok(SetOutcome::Extended {
                    min: self.min,
                    max: self.max,
                })
            }
            RangePolicy::Clamp => {
                let clipped = value.clamp(self.min, self.max);
                tracing::warn!(
                    param = %self.name,
                    requested = value,
                    clipped,
                    "value outside range, clipped to bound"
                );
                self.value = clipped;
                Ok(SetOutcome::Clamped { requested: value })
            }
            RangePolicy::Reject => Err(AppError::param(format!(
                "Value {value} for '{}' is outside [{}, {}].",
                self.name, self.min, self.max
            ))),
        }
    }
}

/// Line colors used for curves.
///
/// The names follow the classic HEP plotting palette the curves were first
/// drawn with (`kRed`, `kBlue`, `kGreen`, `kGreen+3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineColor {
    Red,
    Blue,
    Green,
    DarkGreen,
}

impl LineColor {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            LineColor::Red => (255, 0, 0),
            LineColor::Blue => (0, 0, 255),
            LineColor::Green => (0, 255, 0),
            LineColor::DarkGreen => (0, 102, 0),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            LineColor::Red => "red",
            LineColor::Blue => "blue",
            LineColor::Green => "green",
            LineColor::DarkGreen => "dark green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
}

impl LineStyle {
    pub fn display_name(self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveStyle {
    pub color: LineColor,
    pub line: LineStyle,
}

impl CurveStyle {
    pub fn solid(color: LineColor) -> Self {
        Self {
            color,
            line: LineStyle::Solid,
        }
    }

    pub fn dashed(color: LineColor) -> Self {
        Self {
            color,
            line: LineStyle::Dashed,
        }
    }
}

/// Which draw sequence to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Three draws: 125, 120, 115 (last one dashed).
    Canonical,
    /// One extra draw at the current mass before the canonical three.
    Exploratory,
}

/// A full run's configuration as understood by the pipeline.
///
/// Derived from CLI flags (plus environment defaults).
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub output: PathBuf,
    pub variant: Variant,
    /// Mass to set before the exploratory pre-draw; `None` draws at the default.
    pub prelude_mass: Option<f64>,
    /// Width parameter override (must lie in the width range).
    pub sigma: Option<f64>,
    /// Points per curve across the domain range.
    pub samples: usize,
    pub range_policy: RangePolicy,
    pub width: u32,
    pub height: u32,
    pub legend: bool,
    pub export_curves: Option<PathBuf>,
    pub quiet: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("gaussians.pdf"),
            variant: Variant::Canonical,
            prelude_mass: None,
            sigma: None,
            samples: 500,
            range_policy: RangePolicy::Extend,
            width: 640,
            height: 480,
            legend: false,
            export_curves: None,
            quiet: false,
        }
    }
}
