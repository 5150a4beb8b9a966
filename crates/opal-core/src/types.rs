use opal_expr::{Expr, VariableId};

/// Optimization sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Minimize,
    Maximize,
}

impl Sense {
    pub fn as_str(self) -> &'static str {
        match self {
            Sense::Minimize => "minimize",
            Sense::Maximize => "maximize",
        }
    }
}

/// Decision variable type.
///
/// `Binary` implies conceptual {0, 1} bounds, but the type does not enforce
/// this; callers may set arbitrary bounds and backends are responsible for
/// rejecting nonsensical combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    Continuous,
    Binary,
    Integer,
}

impl VarType {
    pub fn as_str(self) -> &'static str {
        match self {
            VarType::Continuous => "continuous",
            VarType::Binary => "binary",
            VarType::Integer => "integer",
        }
    }

    /// True for types a backend treats as integral.
    pub fn is_integral(self) -> bool {
        matches!(self, VarType::Binary | VarType::Integer)
    }
}

/// Bounds for a variable, `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

/// A decision variable: stable identity, bounds, and type.
///
/// Variables are immutable values created only through a model's
/// registration path ([`crate::Model::new_var`] and friends); every
/// container stores the ID, and relationships resolve by lookup through the
/// owning model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variable {
    id: VariableId,
    bounds: Bounds,
    vtype: VarType,
}

impl Variable {
    pub(crate) fn new(id: VariableId, bounds: Bounds, vtype: VarType) -> Self {
        Self { id, bounds, vtype }
    }

    pub fn id(&self) -> VariableId {
        self.id
    }

    pub fn lower(&self) -> f64 {
        self.bounds.lower
    }

    pub fn upper(&self) -> f64 {
        self.bounds.upper
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn vtype(&self) -> VarType {
        self.vtype
    }

    /// A degree-1 expression over this variable with coefficient 1.
    pub fn expr(&self) -> Expr {
        Expr::var(self.id)
    }
}

/// Objective function: a sense and an expression.
#[derive(Debug, Clone)]
pub struct Objective {
    pub sense: Sense,
    pub expr: Expr,
}

impl Objective {
    pub fn new(sense: Sense, expr: Expr) -> Self {
        Self { sense, expr }
    }
}
