//! Derived ratio formula `R = @0 / @1`.

use crate::models::workspace::{ParamId, Workspace};

/// Ratio of two workspace parameters.
///
/// The mass model builds one of these (`sigma / mass`) alongside the density.
/// It is reported but never drawn.
#[derive(Debug, Clone)]
pub struct RatioFormula {
    name: String,
    numerator: ParamId,
    denominator: ParamId,
}

impl RatioFormula {
    pub fn new(name: impl Into<String>, numerator: ParamId, denominator: ParamId) -> Self {
        Self {
            name: name.into(),
            numerator,
            denominator,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expression in positional form, e.g. `sigma/mass`.
    pub fn expression(&self, ws: &Workspace) -> String {
        format!(
            "{}/{}",
            ws.param(self.numerator).name(),
            ws.param(self.denominator).name()
        )
    }

    /// Current value. A zero denominator yields an infinite or NaN ratio.
    pub fn evaluate(&self, ws: &Workspace) -> f64 {
        ws.value(self.numerator) / ws.value(self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BoundedParam;

    #[test]
    fn ratio_of_defaults() {
        let mut ws = Workspace::new();
        let mass = ws.add(BoundedParam::new("mass", "mass", 100.0, 80.0, 200.0).unwrap()).unwrap();
        let sigma = ws.add(BoundedParam::new("sigma", "sigma", 10.0, 0.0, 20.0).unwrap()).unwrap();
        let r = RatioFormula::new("R", sigma, mass);
        assert!((r.evaluate(&ws) - 0.1).abs() < 1e-12);
        assert_eq!(r.expression(&ws), "sigma/mass");
    }
}
