//! Expression construction errors.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// Variables and degrees (or coefficients) differ in length.
    MismatchedLengths,
    /// A coefficient is NaN or infinite.
    NonFiniteCoefficient,
    /// A per-variable view was requested of a non-linear expression.
    NonLinear,
}

impl ExprError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            ExprError::MismatchedLengths => "EXPR_MISMATCHED_LENGTHS",
            ExprError::NonFiniteCoefficient => "EXPR_NON_FINITE_COEFFICIENT",
            ExprError::NonLinear => "EXPR_NON_LINEAR",
        }
    }

    fn detail(&self) -> &'static str {
        match self {
            ExprError::MismatchedLengths => {
                "variables and degrees/coefficients must have the same length"
            }
            ExprError::NonFiniteCoefficient => "coefficients must be finite",
            ExprError::NonLinear => {
                "per-variable coefficients are only defined for linear expressions"
            }
        }
    }
}

impl std::fmt::Display for ExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.detail())
    }
}

impl std::error::Error for ExprError {}
