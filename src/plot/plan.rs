//! Draw plans: the ordered mass values and styles for each variant.

use crate::domain::{CurveStyle, LineColor, Variant};

/// One draw: optionally move the mass hypothesis, then plot with `style`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawStep {
    /// `None` plots at whatever the mass hypothesis currently is.
    pub mass: Option<f64>,
    pub style: CurveStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawPlan {
    steps: Vec<DrawStep>,
}

impl DrawPlan {
    /// 125 red, 120 blue, 115 green dashed.
    pub fn canonical() -> Self {
        Self {
            steps: vec![
                DrawStep {
                    mass: Some(125.0),
                    style: CurveStyle::solid(LineColor::Red),
                },
                DrawStep {
                    mass: Some(120.0),
                    style: CurveStyle::solid(LineColor::Blue),
                },
                DrawStep {
                    mass: Some(115.0),
                    style: CurveStyle::dashed(LineColor::Green),
                },
            ],
        }
    }

    /// Canonical plan preceded by a dark green draw at `prelude` (or at the
    /// current value when `prelude` is `None`).
    pub fn exploratory(prelude: Option<f64>) -> Self {
        let mut steps = vec![DrawStep {
            mass: prelude,
            style: CurveStyle::solid(LineColor::DarkGreen),
        }];
        steps.extend(Self::canonical().steps);
        Self { steps }
    }

    pub fn for_variant(variant: Variant, prelude: Option<f64>) -> Self {
        match variant {
            Variant::Canonical => Self::canonical(),
            Variant::Exploratory => Self::exploratory(prelude),
        }
    }

    pub fn steps(&self) -> &[DrawStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
