//! Monomial: a coefficient times a product of variables raised to integer
//! exponents.
//!
//! `vars` and `degrees` are parallel sequences of the same length; entry `i`
//! contributes `value(vars[i]) ^ degrees[i]` to the product. A monomial with
//! no variables is a constant.

use serde::{Deserialize, Serialize};

use crate::expr::error::ExprError;
use crate::ids::VariableId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monomial {
    coeff: f64,
    vars: Vec<VariableId>,
    degrees: Vec<u32>,
}

impl Monomial {
    /// Build a monomial from parallel variable and degree sequences.
    ///
    /// Fails if the sequences differ in length or the coefficient is not
    /// finite.
    pub fn new(coeff: f64, vars: Vec<VariableId>, degrees: Vec<u32>) -> Result<Self, ExprError> {
        if vars.len() != degrees.len() {
            return Err(ExprError::MismatchedLengths);
        }
        if !coeff.is_finite() {
            return Err(ExprError::NonFiniteCoefficient);
        }
        Ok(Self {
            coeff,
            vars,
            degrees,
        })
    }

    /// A constant monomial with no variables.
    pub fn constant(coeff: f64) -> Self {
        Self {
            coeff,
            vars: Vec::new(),
            degrees: Vec::new(),
        }
    }

    /// A single variable with coefficient 1.
    pub fn var(var_id: VariableId) -> Self {
        Self::term(var_id, 1.0)
    }

    /// A single degree-1 term: `coeff * var`.
    pub fn term(var_id: VariableId, coeff: f64) -> Self {
        Self {
            coeff,
            vars: vec![var_id],
            degrees: vec![1],
        }
    }

    // ── Accessors ───────────────────────────────────────────

    pub fn coeff(&self) -> f64 {
        self.coeff
    }

    /// Variable occurrences in order, duplicates preserved.
    pub fn variables(&self) -> &[VariableId] {
        &self.vars
    }

    /// Exponents, parallel to [`Monomial::variables`].
    pub fn degrees(&self) -> &[u32] {
        &self.degrees
    }

    /// Number of variable occurrences (the length of the variable sequence,
    /// not a deduplicated count).
    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    /// The one-element coefficient sequence of this monomial.
    pub fn coeffs(&self) -> Vec<f64> {
        vec![self.coeff]
    }

    /// Total degree: the sum of all exponents.
    pub fn degree(&self) -> u32 {
        self.degrees.iter().sum()
    }

    /// True if no variable contributes (all exponents zero or no variables).
    pub fn is_constant(&self) -> bool {
        self.degrees.iter().all(|d| *d == 0)
    }

    // ── Operations ──────────────────────────────────────────

    /// Evaluate `coeff * product(value(var) ^ degree)` under a binding.
    pub fn evaluate<F>(&self, value_of: F) -> f64
    where
        F: Fn(VariableId) -> f64,
    {
        let mut product = self.coeff;
        for (var_id, degree) in self.vars.iter().zip(&self.degrees) {
            product *= value_of(*var_id).powi(*degree as i32);
        }
        product
    }

    /// Multiply two monomials: coefficients multiply, degrees of matching
    /// variables add, differing variables concatenate.
    pub fn mul(&self, other: &Monomial) -> Monomial {
        let mut vars = self.vars.clone();
        let mut degrees = self.degrees.clone();
        for (var_id, degree) in other.vars.iter().zip(&other.degrees) {
            match vars.iter().position(|v| v == var_id) {
                Some(index) => degrees[index] += degree,
                None => {
                    vars.push(*var_id);
                    degrees.push(*degree);
                }
            }
        }
        Monomial {
            coeff: self.coeff * other.coeff,
            vars,
            degrees,
        }
    }

    /// Scale the coefficient by a factor.
    pub fn scale(&self, by: f64) -> Monomial {
        Monomial {
            coeff: self.coeff * by,
            vars: self.vars.clone(),
            degrees: self.degrees.clone(),
        }
    }

    /// Canonical copy: duplicate variables merged (degrees summed),
    /// degree-0 factors dropped, variables sorted by ID. A zero coefficient
    /// collapses to the constant 0.
    pub fn normalized(&self) -> Monomial {
        if self.coeff == 0.0 {
            return Monomial::constant(0.0);
        }
        let signature = self.signature();
        let (vars, degrees) = signature.into_iter().unzip();
        Monomial {
            coeff: self.coeff,
            vars,
            degrees,
        }
    }

    /// Grouping key for like-term coalescing: merged `(variable, degree)`
    /// pairs, sorted by variable ID, degree-0 entries removed.
    pub fn signature(&self) -> Vec<(VariableId, u32)> {
        let mut merged: std::collections::BTreeMap<VariableId, u32> =
            std::collections::BTreeMap::new();
        for (var_id, degree) in self.vars.iter().zip(&self.degrees) {
            if *degree == 0 {
                continue;
            }
            *merged.entry(*var_id).or_insert(0) += degree;
        }
        merged.into_iter().collect()
    }
}
