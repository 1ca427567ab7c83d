//! Model objects: parameter workspace, Gaussian density, ratio formula, and
//! the assembled mass model.
//!
//! Densities and formulas are small structs holding parameter handles so the
//! plotting code can stay generic over "evaluate with current values".

pub mod formula;
pub mod gaussian;
pub mod mass;
pub mod workspace;

pub use formula::RatioFormula;
pub use gaussian::GaussianPdf;
pub use mass::MassModel;
pub use workspace::{ParamId, Workspace};
