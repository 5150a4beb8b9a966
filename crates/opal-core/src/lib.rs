//! Model builder and solver backend contract for opal optimization.
//!
//! Callers create a [`Model`], register decision variables through it, build
//! expressions over them with `opal-expr`, attach constraints and an
//! objective, and hand the assembled model to a [`SolverBackend`] via
//! [`Model::optimize`].

pub mod model;
pub mod solution;
pub mod solver;
pub mod types;

pub use model::{Model, ModelError};
pub use solution::{Solution, TINY_VALUE_THRESHOLD};
pub use solver::{BackendGuard, SolverBackend};
pub use types::{Bounds, Objective, Sense, VarType, Variable};
