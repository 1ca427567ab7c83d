//! Gaussian density over a bounded domain variable.

use crate::error::AppError;
use crate::math::{linspace, truncated_normal_pdf};
use crate::models::workspace::{ParamId, Workspace};

/// Truncated Gaussian `N(μ, σ)` over `x`, normalized on `x`'s range.
///
/// Holds only parameter handles; values are read from the workspace on every
/// evaluation.
#[derive(Debug, Clone)]
pub struct GaussianPdf {
    name: String,
    title: String,
    x: ParamId,
    mean: ParamId,
    sigma: ParamId,
}

impl GaussianPdf {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        x: ParamId,
        mean: ParamId,
        sigma: ParamId,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            x,
            mean,
            sigma,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn observable(&self) -> ParamId {
        self.x
    }

    pub fn mean(&self) -> ParamId {
        self.mean
    }

    pub fn sigma(&self) -> ParamId {
        self.sigma
    }

    fn checked_shape(&self, ws: &Workspace) -> Result<(f64, f64), AppError> {
        let mu = ws.value(self.mean);
        let sigma = ws.value(self.sigma);
        if sigma.is_nan() || sigma <= 0.0 {
            return Err(AppError::param(format!(
                "Gaussian '{}' needs {} > 0, got {sigma}.",
                self.name,
                ws.param(self.sigma).name()
            )));
        }
        Ok((mu, sigma))
    }

    /// Normalized density at `x` with the current parameter values.
    pub fn density_at(&self, ws: &Workspace, x: f64) -> Result<f64, AppError> {
        let (mu, sigma) = self.checked_shape(ws)?;
        let (a, b) = ws.param(self.x).range();
        Ok(truncated_normal_pdf(x, mu, sigma, a, b))
    }

    /// Sample the density across the observable's full range.
    pub fn sample_curve(&self, ws: &Workspace, samples: usize) -> Result<Vec<(f64, f64)>, AppError> {
        let (mu, sigma) = self.checked_shape(ws)?;
        let (a, b) = ws.param(self.x).range();
        Ok(linspace(a, b, samples)
            .into_iter()
            .map(|x| (x, truncated_normal_pdf(x, mu, sigma, a, b)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BoundedParam, RangePolicy};
    use crate::math::trapezoid;

    fn setup() -> (Workspace, GaussianPdf) {
        let mut ws = Workspace::new();
        let mh = ws.add(BoundedParam::new("MH", "MH", 125.0, 120.0, 130.0).unwrap()).unwrap();
        let mass = ws.add(BoundedParam::new("mass", "mass", 100.0, 80.0, 200.0).unwrap()).unwrap();
        let sigma = ws.add(BoundedParam::new("sigma", "sigma", 10.0, 0.0, 20.0).unwrap()).unwrap();
        (ws, GaussianPdf::new("gauss", "f", mass, mh, sigma))
    }

    #[test]
    fn curve_peaks_at_mean_and_is_normalized() {
        let (ws, pdf) = setup();
        let curve = pdf.sample_curve(&ws, 1201).unwrap();
        assert_eq!(curve.len(), 1201);
        assert_eq!(curve.first().unwrap().0, 80.0);
        assert_eq!(curve.last().unwrap().0, 200.0);

        let peak = curve
            .iter()
            .copied()
            .fold((f64::NAN, f64::NEG_INFINITY), |acc, p| if p.1 > acc.1 { p } else { acc });
        assert!((peak.0 - 125.0).abs() < 0.2, "peak at {}", peak.0);
        assert!((trapezoid(&curve) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn evaluation_follows_parameter_changes() {
        let (mut ws, pdf) = setup();
        let before = pdf.density_at(&ws, 120.0).unwrap();
        ws.set_val(pdf.mean(), 120.0, RangePolicy::Reject).unwrap();
        let after = pdf.density_at(&ws, 120.0).unwrap();
        assert!(after > before);
    }

    #[test]
    fn zero_width_is_an_error() {
        let (mut ws, pdf) = setup();
        ws.set_val(pdf.sigma(), 0.0, RangePolicy::Reject).unwrap();
        let err = pdf.sample_curve(&ws, 10).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
