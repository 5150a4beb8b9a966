//! Solver error types.
//!
//! Every backend failure propagates as one of these variants; backends never
//! terminate the process, and a backend that cannot solve at all returns an
//! error rather than an empty solution.

use crate::SolverStatus;

/// Error type covering backend construction, translation, and solving.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Model has no variables.
    EmptyModel,
    /// No objective function set.
    NoObjective,
    /// Variable ID does not exist in the model handed to the backend.
    InvalidVariableId(u32),
    /// Backend cannot represent the given variable type.
    UnsupportedVarType {
        /// ID of the offending variable.
        var_id: u32,
        /// Backend description of the unsupported type.
        vtype: String,
    },
    /// Backend cannot represent the given constraint sense.
    UnsupportedSense {
        /// Position of the offending constraint in the model.
        constraint_index: usize,
    },
    /// Backend or its external resources (license, native library) are not
    /// available. Fatal to this construction attempt; no silent retry.
    NotAvailable(String),
    /// Solver failed to produce a solution.
    SolveFailure {
        /// The solver status that caused the failure.
        status: SolverStatus,
    },
    /// Backend-specific error not covered by other variants.
    BackendSpecific(String),
}

impl SolverError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::EmptyModel => "SOLVER_EMPTY_MODEL",
            SolverError::NoObjective => "SOLVER_NO_OBJECTIVE",
            SolverError::InvalidVariableId(_) => "SOLVER_INVALID_VARIABLE_ID",
            SolverError::UnsupportedVarType { .. } => "SOLVER_UNSUPPORTED_VAR_TYPE",
            SolverError::UnsupportedSense { .. } => "SOLVER_UNSUPPORTED_SENSE",
            SolverError::NotAvailable(_) => "SOLVER_NOT_AVAILABLE",
            SolverError::SolveFailure { status } => match status {
                SolverStatus::Infeasible => "SOLVER_INFEASIBLE",
                SolverStatus::Unbounded => "SOLVER_UNBOUNDED",
                SolverStatus::TimeLimit => "SOLVER_TIME_LIMIT",
                SolverStatus::IterationLimit => "SOLVER_ITERATION_LIMIT",
                _ => "SOLVER_SOLVE_FAILURE",
            },
            SolverError::BackendSpecific(_) => "SOLVER_BACKEND_SPECIFIC",
        }
    }
}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::EmptyModel => write!(f, "[{}] Model has no variables", self.code()),
            SolverError::NoObjective => write!(f, "[{}] Model has no objective", self.code()),
            SolverError::InvalidVariableId(id) => {
                write!(f, "[{}] Variable ID {} does not exist", self.code(), id)
            }
            SolverError::UnsupportedVarType { var_id, vtype } => write!(
                f,
                "[{}] Backend cannot represent variable {} of type {}",
                self.code(),
                var_id,
                vtype
            ),
            SolverError::UnsupportedSense { constraint_index } => write!(
                f,
                "[{}] Backend cannot represent the sense of constraint #{}",
                self.code(),
                constraint_index
            ),
            SolverError::NotAvailable(msg) => {
                write!(f, "[{}] Solver not available: {}", self.code(), msg)
            }
            SolverError::SolveFailure { status } => {
                write!(f, "[{}] {}", self.code(), status_message(*status))
            }
            SolverError::BackendSpecific(msg) => {
                write!(f, "[{}] Solver error: {}", self.code(), msg)
            }
        }
    }
}

fn status_message(status: SolverStatus) -> &'static str {
    match status {
        SolverStatus::Infeasible => "Problem is infeasible",
        SolverStatus::Unbounded => "Problem is unbounded",
        SolverStatus::TimeLimit => "Solver reached time limit without a solution",
        SolverStatus::IterationLimit => "Solver reached iteration limit without a solution",
        SolverStatus::Unknown => "Solver status unknown",
        SolverStatus::Optimal => "Solver returned optimal",
    }
}

impl std::error::Error for SolverError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_model() {
        let msg = SolverError::EmptyModel.to_string();
        assert!(msg.contains("SOLVER_EMPTY_MODEL"));
        assert!(msg.contains("no variables"));
    }

    #[test]
    fn display_unsupported_var_type_names_the_variable() {
        let err = SolverError::UnsupportedVarType {
            var_id: 7,
            vtype: "semicontinuous".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("SOLVER_UNSUPPORTED_VAR_TYPE"));
        assert!(msg.contains("variable 7"));
        assert!(msg.contains("semicontinuous"));
    }

    #[test]
    fn display_unsupported_sense_names_the_constraint() {
        let err = SolverError::UnsupportedSense {
            constraint_index: 3,
        };
        assert!(err.to_string().contains("constraint #3"));
    }

    #[test]
    fn display_not_available() {
        let err = SolverError::NotAvailable("license expired".to_string());
        let msg = err.to_string();
        assert!(msg.contains("SOLVER_NOT_AVAILABLE"));
        assert!(msg.contains("license expired"));
    }

    #[test]
    fn solve_failure_codes_follow_status() {
        let infeasible = SolverError::SolveFailure {
            status: SolverStatus::Infeasible,
        };
        assert_eq!(infeasible.code(), "SOLVER_INFEASIBLE");
        assert!(infeasible.to_string().contains("infeasible"));

        let unbounded = SolverError::SolveFailure {
            status: SolverStatus::Unbounded,
        };
        assert_eq!(unbounded.code(), "SOLVER_UNBOUNDED");

        let timed_out = SolverError::SolveFailure {
            status: SolverStatus::TimeLimit,
        };
        assert_eq!(timed_out.code(), "SOLVER_TIME_LIMIT");
        assert!(timed_out.to_string().contains("time limit"));
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(SolverError::EmptyModel.code(), "SOLVER_EMPTY_MODEL");
        assert_eq!(SolverError::NoObjective.code(), "SOLVER_NO_OBJECTIVE");
        assert_eq!(
            SolverError::InvalidVariableId(0).code(),
            "SOLVER_INVALID_VARIABLE_ID"
        );
        assert_eq!(
            SolverError::BackendSpecific(String::new()).code(),
            "SOLVER_BACKEND_SPECIFIC"
        );
    }
}
