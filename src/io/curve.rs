//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of a drawn frame:
//! - the axis (observable name, title, range)
//! - model name and title
//! - every curve with its style and sampled points
//!
//! `gauss replot` renders such a file without rebuilding the model.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::plot::PlotFrame;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub frame: PlotFrame,
}

/// Write a curve JSON file.
pub fn write_frame_json(path: &Path, frame: &PlotFrame) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create curve JSON '{}': {e}", path.display())))?;

    let curves = CurveFile {
        tool: "gauss".to_string(),
        generated_at: Utc::now(),
        frame: frame.clone(),
    };

    serde_json::to_writer_pretty(file, &curves)
        .map_err(|e| AppError::io(format!("Failed to write curve JSON: {e}")))?;

    tracing::info!(path = %path.display(), curves = frame.curves().len(), "curves exported");
    Ok(())
}

/// Read a curve JSON file.
pub fn read_frame_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open curve JSON '{}': {e}", path.display())))?;
    let curves: CurveFile =
        serde_json::from_reader(file).map_err(|e| AppError::io(format!("Invalid curve JSON: {e}")))?;

    let axis = &curves.frame.axis;
    if !(axis.min.is_finite() && axis.max.is_finite()) || axis.max <= axis.min {
        return Err(AppError::io(format!(
            "Invalid curve JSON: axis '{}' has range [{}, {}].",
            axis.name, axis.min, axis.max
        )));
    }
    Ok(curves)
}
