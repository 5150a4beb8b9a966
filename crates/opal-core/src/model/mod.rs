//! Model: the container owning variables, constraints, and the objective
//! for one optimization problem instance.
//!
//! # Module Organization
//!
//! - [`error`]: model error types
//! - `registry`: decision-variable creation (sequential IDs)
//! - `builder`: constraints and objective
//! - `metadata`: model and variable naming
//! - `pretty`: human-readable ASCII rendering
//!
//! A model is the unit of construction and destruction: variables are owned
//! by the model that created them and are never destroyed individually.
//! Mutation is single-threaded by contract; callers needing concurrent
//! construction must synchronize externally.

mod builder;
mod error;
mod metadata;
mod pretty;
mod registry;

use std::collections::BTreeMap;

use opal_expr::{Constraint, ConstraintId, VariableId};

use crate::types::{Objective, Variable};

pub use error::ModelError;

#[derive(Debug, Clone, Default)]
pub struct Model {
    pub(crate) variables: BTreeMap<VariableId, Variable>,
    pub(crate) constraints: Vec<Constraint>,
    pub(crate) objective: Option<Objective>,
    pub(crate) next_variable_id: u32,
    name: Option<String>,
    // Lazy-allocated naming storage
    pub(crate) variable_names: Option<BTreeMap<VariableId, String>>,
}

impl Model {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty model with a name. Backends may use the name for
    /// diagnostic artifacts such as log files.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of variables created so far.
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Number of constraints added so far.
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Constraints in insertion order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// The objective, if one has been set.
    pub fn objective(&self) -> Option<&Objective> {
        self.objective.as_ref()
    }

    /// Look up a variable by ID.
    pub fn get_variable(&self, id: VariableId) -> Result<&Variable, ModelError> {
        self.variables.get(&id).ok_or(ModelError::UnknownVariable(id))
    }

    /// Look up a constraint by ID.
    pub fn get_constraint(&self, id: ConstraintId) -> Result<&Constraint, ModelError> {
        self.constraints
            .get(id.inner() as usize)
            .ok_or(ModelError::UnknownConstraint(id))
    }

    /// Variables in ID order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    pub(crate) fn ensure_variable_exists(&self, id: VariableId) -> Result<(), ModelError> {
        if self.variables.contains_key(&id) {
            Ok(())
        } else {
            Err(ModelError::UnknownVariable(id))
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::types::{Sense, VarType};
    use opal_expr::Expr;

    #[test]
    fn new_model_is_empty() {
        let model = Model::new();
        assert_eq!(model.num_variables(), 0);
        assert_eq!(model.num_constraints(), 0);
        assert!(model.objective().is_none());
        assert!(model.name().is_none());
    }

    #[test]
    fn with_name_carries_the_name() {
        let model = Model::with_name("production-plan");
        assert_eq!(model.name(), Some("production-plan"));
    }

    #[test]
    fn get_variable_resolves_created_ids() {
        let mut model = Model::new();
        let x = model.new_var(-1.0, 1.0, VarType::Continuous).unwrap();
        let stored = model.get_variable(x.id()).unwrap();
        assert_eq!(stored.lower(), -1.0);
        assert_eq!(stored.upper(), 1.0);
        assert_eq!(stored.vtype(), VarType::Continuous);
    }

    #[test]
    fn get_variable_rejects_foreign_id() {
        let model = Model::new();
        let result = model.get_variable(VariableId::new(5));
        assert_eq!(result, Err(ModelError::UnknownVariable(VariableId::new(5))));
    }

    #[test]
    fn get_constraint_resolves_issued_ids() {
        let mut model = Model::new();
        let x = model.new_var(0.0, 10.0, VarType::Continuous).unwrap();
        let id = model.add_constr(x.expr().le_scalar(5.0)).unwrap();
        assert!(model.get_constraint(id).is_ok());
        assert_eq!(
            model.get_constraint(ConstraintId::new(7)),
            Err(ModelError::UnknownConstraint(ConstraintId::new(7)))
        );
    }

    #[test]
    fn variables_iterate_in_id_order() {
        let mut model = Model::new();
        model.new_var(0.0, 1.0, VarType::Continuous).unwrap();
        model.new_var(0.0, 2.0, VarType::Continuous).unwrap();
        model.new_var(0.0, 3.0, VarType::Continuous).unwrap();

        let uppers: Vec<f64> = model.variables().map(Variable::upper).collect();
        assert_eq!(uppers, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn objective_visible_after_set() {
        let mut model = Model::new();
        let x = model.new_var(0.0, 1.0, VarType::Continuous).unwrap();
        model
            .set_objective(Expr::term(x.id(), 2.0), Sense::Maximize)
            .unwrap();

        let objective = model.objective().unwrap();
        assert_eq!(objective.sense, Sense::Maximize);
        assert_eq!(objective.expr.coeffs(), vec![2.0]);
    }
}
