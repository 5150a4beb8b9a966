//! Variable naming.
//!
//! Names are diagnostic only; backends label variables `x{id}` when no name
//! is set. Storage is allocated lazily so unnamed models pay nothing.

use std::collections::BTreeMap;

use opal_expr::VariableId;

use crate::model::error::ModelError;
use crate::model::Model;

impl Model {
    /// Set the display name for a variable.
    pub fn set_variable_name(&mut self, id: VariableId, name: String) -> Result<(), ModelError> {
        self.ensure_variable_exists(id)?;
        self.variable_names
            .get_or_insert_with(BTreeMap::new)
            .insert(id, name);
        Ok(())
    }

    /// Get the display name for a variable, if one was set.
    pub fn get_variable_name(&self, id: VariableId) -> Option<&str> {
        self.variable_names
            .as_ref()
            .and_then(|names| names.get(&id).map(String::as_str))
    }

    /// Look up a variable by display name.
    pub fn get_variable_by_name(&self, name: &str) -> Option<VariableId> {
        self.variable_names.as_ref().and_then(|names| {
            names
                .iter()
                .find_map(|(id, value)| (value == name).then_some(*id))
        })
    }

    /// The label a backend or renderer should use for a variable: the set
    /// name, or `x{id}`.
    pub fn variable_label(&self, id: VariableId) -> String {
        self.get_variable_name(id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("x{}", id.inner()))
    }
}
