//! Human-readable ASCII model rendering.
//!
//! Constraints are shown in their canonical `expr <sense> constant` form so
//! the output matches what a backend is handed.

use opal_expr::{Expr, Monomial};

use crate::model::Model;
use crate::types::{VarType, Variable};

impl Model {
    /// Render the model: objective line, constraints, variable bounds.
    pub fn format_ascii(&self) -> String {
        let mut lines = Vec::new();

        match self.objective() {
            Some(objective) => lines.push(format!(
                "{}: {}",
                objective.sense.as_str(),
                self.render_expr(&objective.expr)
            )),
            None => lines.push("objective: none".to_string()),
        }

        lines.push("s.t.".to_string());
        for (index, constraint) in self.constraints.iter().enumerate() {
            let canonical = constraint.normalize();
            lines.push(format!(
                "c{}: {} {} {}",
                index,
                self.render_expr(canonical.expr()),
                canonical.sense().symbol(),
                canonical.rhs()
            ));
        }

        lines.push("bounds:".to_string());
        for variable in self.variables() {
            lines.push(self.render_bounds(variable));
        }

        lines.join("\n")
    }

    fn render_expr(&self, expr: &Expr) -> String {
        let normalized = expr.normalize();
        if normalized.monomials().is_empty() {
            return "0".to_string();
        }

        let mut out = String::new();
        for (index, monomial) in normalized.monomials().iter().enumerate() {
            let negative = monomial.coeff() < 0.0;
            if index == 0 {
                if negative {
                    out.push('-');
                }
            } else {
                out.push_str(if negative { " - " } else { " + " });
            }
            out.push_str(&self.render_monomial(monomial));
        }
        out
    }

    // Renders the magnitude only; the caller places the sign.
    fn render_monomial(&self, monomial: &Monomial) -> String {
        let magnitude = monomial.coeff().abs();
        let factors: Vec<String> = monomial
            .variables()
            .iter()
            .zip(monomial.degrees())
            .filter(|(_, degree)| **degree > 0)
            .map(|(var_id, degree)| {
                let label = self.variable_label(*var_id);
                if *degree == 1 {
                    label
                } else {
                    format!("{label}^{degree}")
                }
            })
            .collect();

        if factors.is_empty() {
            return magnitude.to_string();
        }
        if magnitude == 1.0 {
            factors.join(" ")
        } else {
            format!("{} {}", magnitude, factors.join(" "))
        }
    }

    fn render_bounds(&self, variable: &Variable) -> String {
        let label = self.variable_label(variable.id());
        let suffix = match variable.vtype() {
            VarType::Continuous => "",
            VarType::Binary => " binary",
            VarType::Integer => " integer",
        };
        let lower = variable.lower();
        let upper = variable.upper();

        if lower.is_infinite() && upper.is_infinite() {
            format!("{label} free{suffix}")
        } else if lower.is_infinite() {
            format!("{label} <= {upper}{suffix}")
        } else if upper.is_infinite() {
            format!("{label} >= {lower}{suffix}")
        } else {
            format!("{lower} <= {label} <= {upper}{suffix}")
        }
    }
}
