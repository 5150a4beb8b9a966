//! Builder functions for assembling expressions from variable collections.

use crate::expr::core::Expr;
use crate::expr::error::ExprError;
use crate::expr::monomial::Monomial;
use crate::ids::VariableId;

/// Inner product of a variable vector and a coefficient vector:
/// `sum(coeffs[i] * vars[i])`.
///
/// Returns an error if the vectors differ in length.
pub fn dot(vars: &[VariableId], coeffs: &[f64]) -> Result<Expr, ExprError> {
    if vars.len() != coeffs.len() {
        return Err(ExprError::MismatchedLengths);
    }
    let monomials = vars
        .iter()
        .zip(coeffs)
        .map(|(var_id, coeff)| Monomial::term(*var_id, *coeff))
        .collect();
    Ok(Expr::from_monomials(monomials))
}

/// Sum of a variable vector with unit coefficients.
pub fn sum_vars(vars: &[VariableId]) -> Expr {
    Expr::from_monomials(vars.iter().map(|var_id| Monomial::var(*var_id)).collect())
}

/// Combine multiple expressions into one by concatenating their monomial
/// sequences. Like terms are not merged; use `normalize()` on the result if
/// coalescing is needed.
pub fn sum(exprs: Vec<Expr>) -> Expr {
    let mut monomials = Vec::new();
    for expr in exprs {
        monomials.extend(expr.into_monomials());
    }
    Expr::from_monomials(monomials)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::{dot, sum, sum_vars};
    use crate::expr::core::Expr;
    use crate::expr::error::ExprError;
    use crate::ids::VariableId;

    fn ids(n: u32) -> Vec<VariableId> {
        (0..n).map(VariableId::new).collect()
    }

    #[test]
    fn dot_pairs_vars_with_coeffs() {
        let vars = ids(3);
        let expr = dot(&vars, &[1.0, -2.0, 0.5]).unwrap();
        assert_eq!(
            expr.linear_terms().unwrap(),
            vec![(vars[0], 1.0), (vars[1], -2.0), (vars[2], 0.5)]
        );
    }

    #[test]
    fn dot_rejects_mismatched_lengths() {
        let result = dot(&ids(2), &[1.0]);
        assert_eq!(result.unwrap_err(), ExprError::MismatchedLengths);
    }

    #[test]
    fn sum_vars_uses_unit_coefficients() {
        let vars = ids(4);
        let expr = sum_vars(&vars);
        assert_eq!(expr.coeffs(), vec![1.0; 4]);
        assert_eq!(expr.evaluate(|_| 2.0), 8.0);
    }

    #[test]
    fn sum_concatenates_monomials() {
        let vars = ids(2);
        let summed = sum(vec![
            Expr::term(vars[0], 1.0),
            Expr::term(vars[1], 2.0),
            Expr::from_constant(3.0),
        ]);
        assert_eq!(summed.monomials().len(), 3);
        assert_eq!(summed.constant(), 3.0);
    }
}
