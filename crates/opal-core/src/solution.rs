//! Solution: the backend's answer, keyed by variable identity.
//!
//! A solution references variable IDs rather than variable values or the
//! model itself, so it remains valid after the model that produced it is
//! torn down.

use opal_expr::{Expr, VariableId};

use crate::types::Variable;

/// Threshold above which an integral variable's value is treated as "one".
/// Guards against solver roundoff on integer variables.
pub const TINY_VALUE_THRESHOLD: f64 = 0.01;

/// The result of one solve invocation. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    values: Vec<f64>,
    /// Achieved objective value.
    pub objective: f64,
    /// True if the backend certifies optimal status.
    pub optimal: bool,
    /// Relative optimality gap; 0.0 when `optimal` is true.
    pub gap: f64,
}

impl Solution {
    /// Build a solution from per-variable values indexed by variable ID.
    pub fn new(values: Vec<f64>, objective: f64, optimal: bool, gap: f64) -> Self {
        Self {
            values,
            objective,
            optimal,
            gap,
        }
    }

    /// Value assigned to a variable, `None` if the backend reported no value
    /// for its ID.
    pub fn value(&self, var: &Variable) -> Option<f64> {
        self.value_of(var.id())
    }

    /// Value assigned to a variable ID.
    pub fn value_of(&self, id: VariableId) -> Option<f64> {
        self.values.get(id.inner() as usize).copied()
    }

    /// All values, indexed by variable ID.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// True if the variable is integral (Binary or Integer) and its value is
    /// strictly above [`TINY_VALUE_THRESHOLD`]. A convenience for reading
    /// indicator variables; not meaningful for continuous variables.
    pub fn is_one(&self, var: &Variable) -> bool {
        var.vtype().is_integral()
            && self
                .value(var)
                .is_some_and(|value| value > TINY_VALUE_THRESHOLD)
    }

    /// Evaluate an expression under this solution's assignment. Variables
    /// the backend reported no value for contribute 0.
    pub fn evaluate(&self, expr: &Expr) -> f64 {
        expr.evaluate(|id| self.value_of(id).unwrap_or(0.0))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::{Solution, TINY_VALUE_THRESHOLD};
    use crate::types::{Bounds, VarType, Variable};
    use opal_expr::{Expr, VariableId};

    fn variable(id: u32, vtype: VarType) -> Variable {
        Variable::new(VariableId::new(id), Bounds::new(-10.0, 10.0), vtype)
    }

    #[test]
    fn value_resolves_by_id() {
        let solution = Solution::new(vec![1.5, -3.0], -1.5, true, 0.0);
        assert_eq!(solution.value(&variable(0, VarType::Continuous)), Some(1.5));
        assert_eq!(solution.value(&variable(1, VarType::Continuous)), Some(-3.0));
        assert_eq!(solution.value(&variable(2, VarType::Continuous)), None);
    }

    #[test]
    fn is_one_requires_integral_type() {
        let solution = Solution::new(vec![1.0], 0.0, true, 0.0);
        assert!(solution.is_one(&variable(0, VarType::Binary)));
        assert!(solution.is_one(&variable(0, VarType::Integer)));
        assert!(!solution.is_one(&variable(0, VarType::Continuous)));
    }

    #[test]
    fn is_one_boundary_at_threshold() {
        let at_threshold = Solution::new(vec![TINY_VALUE_THRESHOLD], 0.0, true, 0.0);
        assert!(!at_threshold.is_one(&variable(0, VarType::Binary)));

        let just_above = Solution::new(vec![TINY_VALUE_THRESHOLD + 1e-6], 0.0, true, 0.0);
        assert!(just_above.is_one(&variable(0, VarType::Binary)));
    }

    #[test]
    fn is_one_missing_value_is_false() {
        let solution = Solution::new(Vec::new(), 0.0, false, f64::INFINITY);
        assert!(!solution.is_one(&variable(0, VarType::Binary)));
    }

    #[test]
    fn evaluate_folds_expression_over_values() {
        let solution = Solution::new(vec![2.0, 3.0], 0.0, true, 0.0);
        let expr = Expr::term(VariableId::new(0), 2.0) + Expr::term(VariableId::new(1), 1.0);
        assert_eq!(solution.evaluate(&expr), 7.0);
    }
}
