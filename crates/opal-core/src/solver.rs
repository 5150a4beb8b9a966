//! Solver backend contract and the model-to-backend hand-off.
//!
//! The core never solves anything: [`Model::optimize`] feeds the complete
//! model through [`SolverBackend`] and returns whatever solution the backend
//! reports, keyed by the original variable IDs.

use std::time::Instant;

use opal_solver::{SolverConfig, SolverError};
use tracing::{debug, warn};

use crate::model::Model;
use crate::solution::Solution;
use crate::types::{Objective, Variable};
use opal_expr::Constraint;

/// The interface an external solver backend must implement.
///
/// A backend owns the translation from this library's representation into
/// its internal one, including its own mapping from [`opal_expr::VariableId`]
/// to internal slots. Construction must be fallible (`-> Result<Backend,
/// SolverError>`); resource-acquisition failure is an error, never a panic.
///
/// Backends are scoped acquisitions: created, used for exactly one model's
/// lifetime, and explicitly released via [`SolverBackend::free`]. See
/// [`BackendGuard`] for automatic release on scope exit.
pub trait SolverBackend {
    /// Enable or disable diagnostic logging for subsequent operations.
    fn show_log(&mut self, enable: bool);

    /// Set a wall-clock time limit in seconds for the next solve. This is
    /// the only cancellation mechanism; there is no mid-solve interrupt.
    fn set_time_limit(&mut self, seconds: f64) -> Result<(), SolverError>;

    /// Apply a [`SolverConfig`] before solving.
    ///
    /// The default implementation covers the knobs expressible through this
    /// trait (`log_to_console`, `time_limit`); backends with native support
    /// for gap, threads, or tolerance settings override it.
    fn apply_config(&mut self, config: &SolverConfig) -> Result<(), SolverError> {
        if let Some(enable) = config.log_to_console {
            self.show_log(enable);
        }
        if let Some(seconds) = config.time_limit {
            self.set_time_limit(seconds)?;
        }
        Ok(())
    }

    /// Translate one variable. Fails with translation context (the
    /// offending variable ID) if the backend cannot represent it.
    fn add_var(&mut self, var: &Variable) -> Result<(), SolverError>;

    /// Translate a sequence of variables atomically: on mid-sequence
    /// failure the backend must roll back any partially inserted variables.
    fn add_vars(&mut self, vars: &[Variable]) -> Result<(), SolverError>;

    /// Translate one constraint. Fails with the constraint's position if
    /// the backend cannot represent its sense or terms.
    fn add_constr(&mut self, constraint: &Constraint) -> Result<(), SolverError>;

    /// Translate the objective.
    fn set_objective(&mut self, objective: &Objective) -> Result<(), SolverError>;

    /// Solve. Blocking; bounded only by the configured time limit. A
    /// backend that cannot solve at all must return an error, never an
    /// empty solution.
    fn optimize(&mut self) -> Result<Solution, SolverError>;

    /// Release external resources (licenses, native handles). Must be
    /// idempotent and safe to call even if `optimize` never ran.
    fn free(&mut self) -> Result<(), SolverError>;
}

impl Model {
    /// Hand the complete model to a backend and return its solution.
    ///
    /// Fails before touching the backend if the model has no variables or
    /// no objective; backend errors propagate unchanged.
    pub fn optimize<B: SolverBackend>(&self, backend: &mut B) -> Result<Solution, SolverError> {
        if self.num_variables() == 0 {
            return Err(SolverError::EmptyModel);
        }
        let objective = self.objective().ok_or(SolverError::NoObjective)?;

        let started = Instant::now();
        debug!(
            component = "model",
            operation = "optimize",
            status = "success",
            variables = self.num_variables(),
            constraints = self.num_constraints(),
            model_name = self.name().unwrap_or("unnamed"),
            "Handing model to backend"
        );

        let variables: Vec<Variable> = self.variables().copied().collect();
        backend.add_vars(&variables)?;

        for (index, constraint) in self.constraints().iter().enumerate() {
            backend.add_constr(constraint).map_err(|err| {
                warn!(
                    component = "model",
                    operation = "optimize",
                    status = "error",
                    constraint_index = index,
                    error = %err,
                    "Backend rejected constraint"
                );
                err
            })?;
        }

        backend.set_objective(objective)?;
        let solution = backend.optimize()?;

        debug!(
            component = "model",
            operation = "optimize",
            status = "success",
            objective = solution.objective,
            optimal = solution.optimal,
            gap = solution.gap,
            duration_ms = started.elapsed().as_secs_f64() * 1000.0,
            "Backend returned solution"
        );

        Ok(solution)
    }
}

/// Scoped backend ownership: releases the backend on drop.
///
/// [`BackendGuard::release`] remains available for callers that want to
/// observe teardown errors; a failure during drop is logged, never panicked
/// on or silently swallowed.
pub struct BackendGuard<B: SolverBackend> {
    backend: B,
    released: bool,
}

impl<B: SolverBackend> BackendGuard<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            released: false,
        }
    }

    /// Release the backend's resources now, surfacing any teardown error.
    pub fn release(&mut self) -> Result<(), SolverError> {
        self.released = true;
        self.backend.free()
    }
}

impl<B: SolverBackend> std::ops::Deref for BackendGuard<B> {
    type Target = B;

    fn deref(&self) -> &B {
        &self.backend
    }
}

impl<B: SolverBackend> std::ops::DerefMut for BackendGuard<B> {
    fn deref_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: SolverBackend> Drop for BackendGuard<B> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(err) = self.backend.free() {
            warn!(
                component = "solver",
                operation = "free",
                status = "error",
                error = %err,
                "Backend teardown failed during drop"
            );
        }
    }
}
