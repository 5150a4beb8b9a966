//! Decision-variable creation.
//!
//! IDs start at 0 within a model, increase by 1 per creation, and are never
//! reused, even if a variable becomes logically unreferenced.

use opal_expr::VariableId;

use crate::model::error::ModelError;
use crate::model::Model;
use crate::types::{Bounds, VarType, Variable};

impl Model {
    /// Create a decision variable with the next unused ID.
    ///
    /// Fails if `lower > upper` or either bound is NaN.
    pub fn new_var(
        &mut self,
        lower: f64,
        upper: f64,
        vtype: VarType,
    ) -> Result<Variable, ModelError> {
        if lower.is_nan() || upper.is_nan() || lower > upper {
            return Err(ModelError::InvalidVariableBounds { lower, upper });
        }

        let id = VariableId::new(self.next_variable_id);
        self.next_variable_id += 1;

        let variable = Variable::new(id, Bounds::new(lower, upper), vtype);
        self.variables.insert(id, variable);

        Ok(variable)
    }

    /// Create `n` variables sharing the same bounds and type, with `n`
    /// consecutive previously-unused IDs in creation order.
    pub fn new_var_vector(
        &mut self,
        n: usize,
        lower: f64,
        upper: f64,
        vtype: VarType,
    ) -> Result<Vec<Variable>, ModelError> {
        let mut variables = Vec::with_capacity(n);
        for _ in 0..n {
            variables.push(self.new_var(lower, upper, vtype)?);
        }
        Ok(variables)
    }

    /// Create a binary variable with bounds [0, 1].
    pub fn new_binary_var(&mut self) -> Result<Variable, ModelError> {
        self.new_var(0.0, 1.0, VarType::Binary)
    }

    /// Create `n` binary variables with bounds [0, 1].
    pub fn new_binary_var_vector(&mut self, n: usize) -> Result<Vec<Variable>, ModelError> {
        self.new_var_vector(n, 0.0, 1.0, VarType::Binary)
    }
}
