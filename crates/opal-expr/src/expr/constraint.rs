//! Constraints: a comparison between two expressions, plus the canonical
//! `expr <sense> constant` form handed to solver backends.

use serde::{Deserialize, Serialize};

use crate::expr::core::Expr;
use crate::ids::VariableId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonSense {
    LessEqual,
    GreaterEqual,
    Equal,
}

impl ComparisonSense {
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonSense::LessEqual => "le",
            ComparisonSense::GreaterEqual => "ge",
            ComparisonSense::Equal => "eq",
        }
    }

    /// The comparison operator as written in a rendered model.
    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonSense::LessEqual => "<=",
            ComparisonSense::GreaterEqual => ">=",
            ComparisonSense::Equal => "=",
        }
    }
}

/// A relation `lhs <sense> rhs` with both sides stored as given.
///
/// Feasibility is not checked here; detecting contradictory constraints is
/// solver responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    lhs: Expr,
    sense: ComparisonSense,
    rhs: Expr,
}

impl Constraint {
    pub fn new(lhs: Expr, sense: ComparisonSense, rhs: Expr) -> Self {
        Self { lhs, sense, rhs }
    }

    pub fn lhs(&self) -> &Expr {
        &self.lhs
    }

    pub fn sense(&self) -> ComparisonSense {
        self.sense
    }

    pub fn rhs(&self) -> &Expr {
        &self.rhs
    }

    /// Variable occurrences across both sides, duplicates preserved.
    pub fn vars(&self) -> Vec<VariableId> {
        let mut vars = self.lhs.vars();
        vars.extend(self.rhs.vars());
        vars
    }

    /// Rewrite as the canonical `expr <sense> constant` form: all
    /// variable-bearing terms moved to the left and coalesced, all constants
    /// folded into a single right-hand value. Idempotent: normalizing an
    /// already-canonical constraint reproduces it.
    pub fn normalize(&self) -> CanonicalConstraint {
        let combined = self.lhs.add(&self.rhs.scale(-1.0)).normalize();
        let constant = combined.constant();
        CanonicalConstraint {
            expr: combined.without_constant(),
            sense: self.sense,
            rhs: -constant,
        }
    }
}

/// The normalized form every backend consumes: a constant-free expression
/// compared against a single float.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalConstraint {
    expr: Expr,
    sense: ComparisonSense,
    rhs: f64,
}

impl CanonicalConstraint {
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn sense(&self) -> ComparisonSense {
        self.sense
    }

    pub fn rhs(&self) -> f64 {
        self.rhs
    }

    pub fn into_parts(self) -> (Expr, ComparisonSense, f64) {
        (self.expr, self.sense, self.rhs)
    }

    /// Re-wrap as a constraint over expressions.
    pub fn to_constraint(&self) -> Constraint {
        Constraint::new(
            self.expr.clone(),
            self.sense,
            Expr::from_constant(self.rhs),
        )
    }
}
