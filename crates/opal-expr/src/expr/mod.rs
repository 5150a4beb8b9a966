//! Expression types for optimization modeling.
//!
//! - `monomial`   — Monomial: coefficient times a product of variable powers
//! - `core`       — Expr: an ordered sum of monomials
//! - `constraint` — Constraint and its canonical backend form
//! - `builders`   — dot / sum helpers over variable collections
//! - `error`      — Expression construction errors

pub mod builders;
pub mod constraint;
pub mod core;
pub mod error;
pub mod monomial;

pub use constraint::{CanonicalConstraint, ComparisonSense, Constraint};
pub use core::Expr;
pub use error::ExprError;
pub use monomial::Monomial;
