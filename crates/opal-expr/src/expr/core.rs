//! Polynomial expression: an ordered sum of monomials.
//!
//! Insertion order is irrelevant to the value and matters only for stable
//! output. Addition concatenates monomial sequences; [`Expr::normalize`]
//! coalesces like terms. Evaluation is the sum over monomials of
//! `coeff * product(value(var) ^ degree)`.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::expr::constraint::{ComparisonSense, Constraint};
use crate::expr::error::ExprError;
use crate::expr::monomial::Monomial;
use crate::ids::VariableId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    monomials: Vec<Monomial>,
}

impl Expr {
    // ── Constructors ────────────────────────────────────────

    /// Just a constant, no variable terms.
    pub fn from_constant(constant: f64) -> Self {
        Self {
            monomials: vec![Monomial::constant(constant)],
        }
    }

    /// Single variable with coefficient 1.0.
    pub fn var(var_id: VariableId) -> Self {
        Self {
            monomials: vec![Monomial::var(var_id)],
        }
    }

    /// Single linear term: coeff * var.
    pub fn term(var_id: VariableId, coeff: f64) -> Self {
        Self {
            monomials: vec![Monomial::term(var_id, coeff)],
        }
    }

    /// From an explicit monomial sequence.
    pub fn from_monomials(monomials: Vec<Monomial>) -> Self {
        Self { monomials }
    }

    // ── Accessors ───────────────────────────────────────────

    pub fn monomials(&self) -> &[Monomial] {
        &self.monomials
    }

    pub fn into_monomials(self) -> Vec<Monomial> {
        self.monomials
    }

    /// Sum of all degree-0 (no-variable) monomials; 0.0 if none.
    pub fn constant(&self) -> f64 {
        self.monomials
            .iter()
            .filter(|m| m.is_constant())
            .map(Monomial::coeff)
            .sum()
    }

    /// Variable occurrences across all monomials, in monomial order,
    /// duplicates preserved. Callers needing a deduplicated set must use
    /// [`Expr::unique_vars`] explicitly.
    pub fn vars(&self) -> Vec<VariableId> {
        self.monomials
            .iter()
            .flat_map(|m| m.variables().iter().copied())
            .collect()
    }

    /// Deduplicated, sorted set of variables appearing in the expression.
    pub fn unique_vars(&self) -> Vec<VariableId> {
        let set: BTreeSet<VariableId> = self.vars().into_iter().collect();
        set.into_iter().collect()
    }

    /// Number of distinct variables referenced by the expression.
    pub fn num_vars(&self) -> usize {
        self.unique_vars().len()
    }

    /// One coefficient per monomial, in monomial order.
    ///
    /// This sequence is positionally aligned with [`Expr::vars`] only when
    /// the expression is linear (every monomial a single degree-1 variable);
    /// for higher-degree expressions use [`Expr::linear_terms`] or the
    /// monomials directly.
    pub fn coeffs(&self) -> Vec<f64> {
        self.monomials.iter().map(Monomial::coeff).collect()
    }

    /// Per-variable `(variable, coefficient)` pairs for a linear expression,
    /// in monomial order, constant monomials skipped. Like terms are not
    /// merged; normalize first if that is needed.
    ///
    /// Fails with [`ExprError::NonLinear`] if any monomial has total degree
    /// above 1.
    pub fn linear_terms(&self) -> Result<Vec<(VariableId, f64)>, ExprError> {
        let mut terms = Vec::new();
        for monomial in &self.monomials {
            let signature = monomial.signature();
            match signature.as_slice() {
                [] => continue,
                [(var_id, 1)] => terms.push((*var_id, monomial.coeff())),
                _ => return Err(ExprError::NonLinear),
            }
        }
        Ok(terms)
    }

    /// Max total degree of any monomial (0 = constant or empty).
    pub fn degree(&self) -> u32 {
        self.monomials
            .iter()
            .map(|m| m.signature().iter().map(|(_, d)| *d).sum::<u32>())
            .max()
            .unwrap_or(0)
    }

    pub fn is_linear(&self) -> bool {
        self.degree() <= 1
    }

    // ── Operations ──────────────────────────────────────────

    /// Add another expression by concatenating monomial sequences.
    pub fn add(&self, other: &Expr) -> Expr {
        let mut monomials = Vec::with_capacity(self.monomials.len() + other.monomials.len());
        monomials.extend_from_slice(&self.monomials);
        monomials.extend_from_slice(&other.monomials);
        Expr { monomials }
    }

    /// Add a constant offset.
    pub fn add_constant(&self, value: f64) -> Expr {
        self.add(&Expr::from_constant(value))
    }

    /// Multiply two expressions: the cross-product of their monomial
    /// sequences. The result is not coalesced; call [`Expr::normalize`] to
    /// merge like terms.
    pub fn mul(&self, other: &Expr) -> Expr {
        let mut monomials = Vec::with_capacity(self.monomials.len() * other.monomials.len());
        for left in &self.monomials {
            for right in &other.monomials {
                monomials.push(left.mul(right));
            }
        }
        Expr { monomials }
    }

    /// Scale every monomial's coefficient by a factor.
    pub fn scale(&self, by: f64) -> Expr {
        Expr {
            monomials: self.monomials.iter().map(|m| m.scale(by)).collect(),
        }
    }

    /// Copy with all constant monomials removed.
    pub fn without_constant(&self) -> Expr {
        Expr {
            monomials: self
                .monomials
                .iter()
                .filter(|m| !m.is_constant())
                .cloned()
                .collect(),
        }
    }

    /// Canonical copy: monomials grouped by `(variables, degrees)`
    /// signature, coefficients summed, exact-zero sums dropped. Constant
    /// monomials merge into at most one leading constant. Output order is
    /// the signature order, which is stable across calls.
    pub fn normalize(&self) -> Expr {
        let mut merged: BTreeMap<Vec<(VariableId, u32)>, f64> = BTreeMap::new();
        for monomial in &self.monomials {
            *merged.entry(monomial.signature()).or_insert(0.0) += monomial.coeff();
        }

        let mut monomials = Vec::with_capacity(merged.len());
        for (signature, coeff) in merged {
            if coeff == 0.0 {
                continue;
            }
            let (vars, degrees): (Vec<_>, Vec<_>) = signature.into_iter().unzip();
            // Lengths come from the same signature, so this cannot fail.
            if let Ok(monomial) = Monomial::new(coeff, vars, degrees) {
                monomials.push(monomial);
            }
        }
        Expr { monomials }
    }

    /// Evaluate under a binding of variables to values.
    pub fn evaluate<F>(&self, value_of: F) -> f64
    where
        F: Fn(VariableId) -> f64,
    {
        self.monomials.iter().map(|m| m.evaluate(&value_of)).sum()
    }

    // ── Comparison methods (produce Constraint) ─────────────

    pub fn le(&self, rhs: Expr) -> Constraint {
        Constraint::new(self.clone(), ComparisonSense::LessEqual, rhs)
    }

    pub fn ge(&self, rhs: Expr) -> Constraint {
        Constraint::new(self.clone(), ComparisonSense::GreaterEqual, rhs)
    }

    pub fn eq(&self, rhs: Expr) -> Constraint {
        Constraint::new(self.clone(), ComparisonSense::Equal, rhs)
    }

    pub fn le_scalar(&self, rhs: f64) -> Constraint {
        self.le(Expr::from_constant(rhs))
    }

    pub fn ge_scalar(&self, rhs: f64) -> Constraint {
        self.ge(Expr::from_constant(rhs))
    }

    pub fn eq_scalar(&self, rhs: f64) -> Constraint {
        self.eq(Expr::from_constant(rhs))
    }
}

impl From<Monomial> for Expr {
    fn from(monomial: Monomial) -> Self {
        Expr {
            monomials: vec![monomial],
        }
    }
}

// ── Operator overloads ──────────────────────────────────────

impl std::ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Self::Output {
        Expr::add(&self, &rhs)
    }
}

impl std::ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Self::Output {
        Expr::add(&self, &rhs.scale(-1.0))
    }
}

impl std::ops::Mul<f64> for Expr {
    type Output = Expr;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl std::ops::Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Self::Output {
        Expr::mul(&self, &rhs)
    }
}

impl std::ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::Expr;
    use crate::expr::error::ExprError;
    use crate::expr::monomial::Monomial;
    use crate::ids::VariableId;

    const TOLERANCE: f64 = 1e-9;

    fn x() -> VariableId {
        VariableId::new(0)
    }

    fn y() -> VariableId {
        VariableId::new(1)
    }

    #[test]
    fn from_constant() {
        let e = Expr::from_constant(5.0);
        assert_eq!(e.constant(), 5.0);
        assert!(e.vars().is_empty());
        assert_eq!(e.degree(), 0);
    }

    #[test]
    fn constant_sums_all_degree_zero_monomials() {
        let e = Expr::var(x()).add_constant(3.0).add_constant(4.0);
        assert_eq!(e.constant(), 7.0);
    }

    #[test]
    fn constant_is_zero_when_absent() {
        assert_eq!(Expr::var(x()).constant(), 0.0);
    }

    #[test]
    fn vars_preserves_duplicates_across_monomials() {
        let e = Expr::term(x(), 1.0) + Expr::term(y(), 2.0) + Expr::term(x(), 3.0);
        assert_eq!(e.vars(), vec![x(), y(), x()]);
        assert_eq!(e.unique_vars(), vec![x(), y()]);
        assert_eq!(e.num_vars(), 2);
    }

    #[test]
    fn coeffs_is_one_per_monomial() {
        let quadratic = Monomial::new(4.0, vec![x(), y()], vec![1, 1]).unwrap();
        let e = Expr::term(x(), 2.0) + Expr::from(quadratic);
        assert_eq!(e.coeffs(), vec![2.0, 4.0]);
    }

    #[test]
    fn linear_terms_aligns_vars_and_coeffs() {
        let e = Expr::term(x(), 2.0).add_constant(7.0) + Expr::term(y(), -1.5);
        let terms = e.linear_terms().unwrap();
        assert_eq!(terms, vec![(x(), 2.0), (y(), -1.5)]);
    }

    #[test]
    fn linear_terms_rejects_higher_degree() {
        let quadratic = Monomial::new(1.0, vec![x(), y()], vec![1, 1]).unwrap();
        let e = Expr::from(quadratic);
        assert_eq!(e.linear_terms().unwrap_err(), ExprError::NonLinear);
    }

    #[test]
    fn add_concatenates_then_normalize_coalesces() {
        let a = Expr::term(x(), 1.0);
        let b = Expr::term(x(), 2.0);
        let sum = a.clone() + b.clone();
        assert_eq!(sum.monomials().len(), 2);

        let normalized = sum.normalize();
        assert!(normalized.monomials().len() <= 2);

        let binding = |_: VariableId| 3.5;
        let expected = a.evaluate(binding) + b.evaluate(binding);
        assert!((normalized.evaluate(binding) - expected).abs() < TOLERANCE);
    }

    #[test]
    fn normalize_drops_cancelled_terms() {
        let e = Expr::term(x(), 2.0) + Expr::term(x(), -2.0) + Expr::term(y(), 4.0);
        let normalized = e.normalize();
        assert_eq!(normalized.monomials().len(), 1);
        assert_eq!(normalized.linear_terms().unwrap(), vec![(y(), 4.0)]);
    }

    #[test]
    fn normalize_merges_constants() {
        let e = Expr::from_constant(1.0) + Expr::term(x(), 1.0) + Expr::from_constant(2.0);
        let normalized = e.normalize();
        assert_eq!(normalized.constant(), 3.0);
        assert_eq!(normalized.monomials().len(), 2);
    }

    #[test]
    fn mul_is_monomial_cross_product() {
        // (3x) * (2y) = 6xy
        let product = Expr::term(x(), 3.0) * Expr::term(y(), 2.0);
        assert_eq!(product.monomials().len(), 1);
        let m = &product.monomials()[0];
        assert_eq!(m.coeff(), 6.0);
        assert_eq!(m.variables(), &[x(), y()]);
        assert_eq!(m.degrees(), &[1, 1]);
    }

    #[test]
    fn mul_distributes_over_sums() {
        // (x + 2) * (x + 3) = x^2 + 5x + 6
        let e = (Expr::var(x()).add_constant(2.0) * Expr::var(x()).add_constant(3.0)).normalize();
        let value = e.evaluate(|_| 4.0);
        assert!((value - (16.0 + 20.0 + 6.0)).abs() < TOLERANCE);
        assert_eq!(e.degree(), 2);
    }

    #[test]
    fn scale_and_neg() {
        let e = Expr::term(x(), 2.0).add_constant(3.0);
        let scaled = e.clone() * 2.0;
        assert_eq!(scaled.constant(), 6.0);
        let negated = -e;
        assert_eq!(negated.constant(), -3.0);
        assert_eq!(negated.evaluate(|_| 1.0), -5.0);
    }

    #[test]
    fn sub_is_add_of_negation() {
        let e = Expr::term(x(), 5.0) - Expr::term(x(), 2.0);
        assert_eq!(e.normalize().linear_terms().unwrap(), vec![(x(), 3.0)]);
    }

    #[test]
    fn evaluate_sums_monomials() {
        // 2x^2 + 3y + 1 at x=2, y=10 => 8 + 30 + 1
        let square = Monomial::new(2.0, vec![x()], vec![2]).unwrap();
        let e = Expr::from(square) + Expr::term(y(), 3.0) + Expr::from_constant(1.0);
        let value = e.evaluate(|id| if id == x() { 2.0 } else { 10.0 });
        assert_eq!(value, 39.0);
    }

    #[test]
    fn serde_roundtrip_preserves_evaluation() {
        let square = Monomial::new(2.0, vec![x()], vec![2]).unwrap();
        let e = Expr::from(square) + Expr::term(y(), -3.5) + Expr::from_constant(0.25);

        let encoded = serde_json::to_string(&e).unwrap();
        let decoded: Expr = serde_json::from_str(&encoded).unwrap();

        for sample in [-2.0, 0.0, 0.5, 7.0] {
            let binding = |id: VariableId| if id == x() { sample } else { -sample };
            assert!((e.evaluate(binding) - decoded.evaluate(binding)).abs() < TOLERANCE);
        }
        assert_eq!(e, decoded);
    }
}
