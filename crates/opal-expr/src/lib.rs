pub mod expr;
pub mod ids;

pub use expr::builders::{dot, sum, sum_vars};
pub use expr::{CanonicalConstraint, ComparisonSense, Constraint, Expr, ExprError, Monomial};
pub use ids::{ConstraintId, VariableId};
