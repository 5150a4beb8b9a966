//! Model error types.

use opal_expr::{ConstraintId, VariableId};

/// Errors that can occur while building a model.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Invalid variable bounds (`lower > upper` or NaN).
    InvalidVariableBounds { lower: f64, upper: f64 },
    /// A variable that this model did not create was referenced.
    UnknownVariable(VariableId),
    /// A constraint ID that this model did not issue was referenced.
    UnknownConstraint(ConstraintId),
    /// `minimize`/`maximize` called on a model that already has an objective.
    ObjectiveAlreadySet,
}

impl ModelError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::InvalidVariableBounds { .. } => "VARIABLE_INVALID_BOUNDS",
            ModelError::UnknownVariable(_) => "VARIABLE_UNKNOWN",
            ModelError::UnknownConstraint(_) => "CONSTRAINT_UNKNOWN",
            ModelError::ObjectiveAlreadySet => "OBJECTIVE_ALREADY_SET",
        }
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InvalidVariableBounds { lower, upper } => write!(
                f,
                "[{}] Variable bounds invalid: lower ({}) > upper ({})",
                self.code(),
                lower,
                upper
            ),
            ModelError::UnknownVariable(id) => write!(
                f,
                "[{}] Variable ID {} was not created by this model",
                self.code(),
                id.inner()
            ),
            ModelError::UnknownConstraint(id) => write!(
                f,
                "[{}] Constraint ID {} was not issued by this model",
                self.code(),
                id.inner()
            ),
            ModelError::ObjectiveAlreadySet => write!(
                f,
                "[{}] Model already has an objective; use set_objective to replace",
                self.code()
            ),
        }
    }
}

impl std::error::Error for ModelError {}
