//! Parameter workspace.
//!
//! Owns every `BoundedParam` of a model. Densities and formulas refer to
//! parameters by `ParamId` and read the current values at evaluation time,
//! so mutating a parameter is immediately visible to everything built on it.

use crate::domain::{BoundedParam, RangePolicy, SetOutcome};
use crate::error::AppError;

/// Handle to a parameter inside a `Workspace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(usize);

#[derive(Debug, Clone, Default)]
pub struct Workspace {
    params: Vec<BoundedParam>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parameter. Names must be unique.
    pub fn add(&mut self, param: BoundedParam) -> Result<ParamId, AppError> {
        if self.find(param.name()).is_some() {
            return Err(AppError::param(format!(
                "Parameter '{}' is already defined.",
                param.name()
            )));
        }
        self.params.push(param);
        Ok(ParamId(self.params.len() - 1))
    }

    pub fn find(&self, name: &str) -> Option<ParamId> {
        self.params.iter().position(|p| p.name() == name).map(ParamId)
    }

    /// # Panics
    /// Panics if `id` came from a different workspace.
    pub fn param(&self, id: ParamId) -> &BoundedParam {
        &self.params[id.0]
    }

    pub fn value(&self, id: ParamId) -> f64 {
        self.param(id).value()
    }

    pub fn set_val(&mut self, id: ParamId, value: f64, policy: RangePolicy) -> Result<SetOutcome, AppError> {
        self.params[id.0].set_val(value, policy)
    }

    pub fn params(&self) -> &[BoundedParam] {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_names_are_rejected() {
        let mut ws = Workspace::new();
        ws.add(BoundedParam::new("a", "a", 0.0, -1.0, 1.0).unwrap()).unwrap();
        let err = ws.add(BoundedParam::new("a", "again", 0.0, -1.0, 1.0).unwrap()).unwrap_err();
        assert!(err.message().contains("already defined"));
    }

    #[test]
    fn set_through_id_is_visible() {
        let mut ws = Workspace::new();
        let id = ws.add(BoundedParam::new("a", "a", 0.0, -1.0, 1.0).unwrap()).unwrap();
        ws.set_val(id, 0.25, RangePolicy::Reject).unwrap();
        assert_eq!(ws.value(id), 0.25);
        assert_eq!(ws.find("a"), Some(id));
        assert_eq!(ws.find("b"), None);
    }
}
