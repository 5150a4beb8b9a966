//! Solver status types.

/// Common status values that solver backends may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverStatus {
    /// Optimal solution found and certified.
    Optimal,
    /// Problem is infeasible.
    Infeasible,
    /// Problem is unbounded.
    Unbounded,
    /// Solver reached its time limit (may still hold a feasible solution).
    TimeLimit,
    /// Solver reached an iteration limit (may still hold a feasible solution).
    IterationLimit,
    /// Status is unknown or the solver did not complete.
    Unknown,
}

impl SolverStatus {
    /// Check if the status indicates a certified optimal solution.
    pub fn is_optimal(self) -> bool {
        matches!(self, SolverStatus::Optimal)
    }

    /// Check if the status can carry a feasible solution.
    pub fn is_feasible(self) -> bool {
        matches!(
            self,
            SolverStatus::Optimal | SolverStatus::TimeLimit | SolverStatus::IterationLimit
        )
    }

    /// Check if the status indicates infeasibility.
    pub fn is_infeasible(self) -> bool {
        matches!(self, SolverStatus::Infeasible)
    }

    /// Check if the status indicates unboundedness.
    pub fn is_unbounded(self) -> bool {
        matches!(self, SolverStatus::Unbounded)
    }

    /// Get a human-readable string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            SolverStatus::Optimal => "optimal",
            SolverStatus::Infeasible => "infeasible",
            SolverStatus::Unbounded => "unbounded",
            SolverStatus::TimeLimit => "time_limit",
            SolverStatus::IterationLimit => "iteration_limit",
            SolverStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
