//! Constraint and objective assembly.

use opal_expr::{Constraint, ConstraintId, Expr};

use crate::model::error::ModelError;
use crate::model::Model;
use crate::types::{Objective, Sense};

impl Model {
    /// Add a constraint to the model.
    ///
    /// Every variable referenced by either side must have been created by
    /// this model; a constraint built over another model's variables is a
    /// usage error and is rejected, not silently accepted.
    pub fn add_constr(&mut self, constraint: Constraint) -> Result<ConstraintId, ModelError> {
        for var_id in constraint.vars() {
            self.ensure_variable_exists(var_id)?;
        }

        let id = ConstraintId::new(self.constraints.len() as u32);
        self.constraints.push(constraint);

        tracing::debug!(
            component = "model",
            operation = "add_constr",
            status = "success",
            constraint_id = id.inner(),
            num_constraints = self.constraints.len(),
            "Added constraint"
        );

        Ok(id)
    }

    /// Set the objective, replacing any previous one.
    ///
    /// Variable provenance is validated the same way as for constraints.
    pub fn set_objective(&mut self, expr: Expr, sense: Sense) -> Result<(), ModelError> {
        for var_id in expr.vars() {
            self.ensure_variable_exists(var_id)?;
        }

        self.objective = Some(Objective::new(sense, expr));
        tracing::debug!(
            component = "model",
            operation = "set_objective",
            status = "success",
            sense = sense.as_str(),
            "Set objective function"
        );
        Ok(())
    }

    /// Minimize an expression.
    ///
    /// Returns an error if the model already has an objective.
    pub fn minimize(&mut self, expr: Expr) -> Result<(), ModelError> {
        if self.objective.is_some() {
            return Err(ModelError::ObjectiveAlreadySet);
        }
        self.set_objective(expr, Sense::Minimize)
    }

    /// Maximize an expression.
    ///
    /// Returns an error if the model already has an objective.
    pub fn maximize(&mut self, expr: Expr) -> Result<(), ModelError> {
        if self.objective.is_some() {
            return Err(ModelError::ObjectiveAlreadySet);
        }
        self.set_objective(expr, Sense::Maximize)
    }
}
