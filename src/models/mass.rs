//! The resonance mass model: a Gaussian over the decay-products invariant
//! mass, centred on a hypothetical particle mass.
//!
//! | name    | label                                | default | range      |
//! | ------- | ------------------------------------ | ------- | ---------- |
//! | `MH`    | mass of hypothetical particle        | 125     | [120, 130] |
//! | `mass`  | invariant mass of decay particles    | 100     | [80, 200]  |
//! | `sigma` | variance in mass of decay particles  | 10      | [0, 20]    |
//!
//! All three are in GeV.

use crate::domain::{BoundedParam, RangePolicy, SetOutcome};
use crate::error::AppError;
use crate::models::formula::RatioFormula;
use crate::models::gaussian::GaussianPdf;
use crate::models::workspace::{ParamId, Workspace};

pub const MH_DEFAULT: f64 = 125.0;
pub const MH_RANGE: (f64, f64) = (120.0, 130.0);
pub const MASS_DEFAULT: f64 = 100.0;
pub const MASS_RANGE: (f64, f64) = (80.0, 200.0);
pub const SIGMA_DEFAULT: f64 = 10.0;
pub const SIGMA_RANGE: (f64, f64) = (0.0, 20.0);

const UNIT: &str = "GeV";

/// Workspace plus the objects built on it.
#[derive(Debug, Clone)]
pub struct MassModel {
    pub ws: Workspace,
    pub mh: ParamId,
    pub mass: ParamId,
    pub sigma: ParamId,
    pub ratio: RatioFormula,
    pub gauss: GaussianPdf,
}

impl MassModel {
    /// Build the model with its construction-time defaults.
    pub fn build() -> Result<Self, AppError> {
        let mut ws = Workspace::new();

        let mh = ws.add(
            BoundedParam::new("MH", "mass of hypothetical particle", MH_DEFAULT, MH_RANGE.0, MH_RANGE.1)?
                .with_unit(UNIT),
        )?;
        let mass = ws.add(
            BoundedParam::new(
                "mass",
                "invariant mass of decay particles",
                MASS_DEFAULT,
                MASS_RANGE.0,
                MASS_RANGE.1,
            )?
            .with_unit(UNIT),
        )?;
        let sigma = ws.add(
            BoundedParam::new(
                "sigma",
                "variance in mass of decay particles",
                SIGMA_DEFAULT,
                SIGMA_RANGE.0,
                SIGMA_RANGE.1,
            )?
            .with_unit(UNIT),
        )?;

        let ratio = RatioFormula::new("R", sigma, mass);
        let gauss = GaussianPdf::new("gauss", "f(m|M_H,σ)", mass, mh, sigma);

        tracing::debug!(
            params = ws.params().len(),
            ratio = %ratio.expression(&ws),
            pdf = gauss.name(),
            "mass model built"
        );

        Ok(Self {
            ws,
            mh,
            mass,
            sigma,
            ratio,
            gauss,
        })
    }

    pub fn mass_hypothesis(&self) -> f64 {
        self.ws.value(self.mh)
    }

    pub fn set_mass_hypothesis(&mut self, value: f64, policy: RangePolicy) -> Result<SetOutcome, AppError> {
        self.ws.set_val(self.mh, value, policy)
    }

    /// Override the width. Out-of-range widths are always an error.
    pub fn set_width(&mut self, value: f64) -> Result<(), AppError> {
        self.ws.set_val(self.sigma, value, RangePolicy::Reject)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_lie_within_bounds() {
        let model = MassModel::build().unwrap();
        for p in model.ws.params() {
            assert!(p.min() <= p.value() && p.value() <= p.max(), "{} out of range", p.name());
        }
        assert_eq!(model.ws.param(model.mh).range(), (120.0, 130.0));
        assert_eq!(model.ws.param(model.mass).range(), (80.0, 200.0));
        assert_eq!(model.ws.param(model.sigma).range(), (0.0, 20.0));
        assert_eq!(model.mass_hypothesis(), 125.0);
    }

    #[test]
    fn mutation_sequence_ends_at_last_value() {
        let mut model = MassModel::build().unwrap();
        for v in [125.0, 120.0, 115.0] {
            model.set_mass_hypothesis(v, RangePolicy::Extend).unwrap();
        }
        assert_eq!(model.mass_hypothesis(), 115.0);
        assert_eq!(model.ws.param(model.mh).min(), 115.0);
    }

    #[test]
    fn width_override_is_range_checked() {
        let mut model = MassModel::build().unwrap();
        model.set_width(5.0).unwrap();
        assert_eq!(model.ws.value(model.sigma), 5.0);
        assert!(model.set_width(25.0).is_err());
        assert_eq!(model.ws.value(model.sigma), 5.0);
    }

    #[test]
    fn ratio_does_not_touch_the_density() {
        let model = MassModel::build().unwrap();
        let before = model.gauss.sample_curve(&model.ws, 50).unwrap();
        let r = model.ratio.evaluate(&model.ws);
        assert!(r.is_finite());
        let after = model.gauss.sample_curve(&model.ws, 50).unwrap();
        assert_eq!(before, after);
    }
}
