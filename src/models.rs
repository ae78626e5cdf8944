use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ---------- Problem types: validated, immutable after build ----------

/// A decision variable with explicit bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    pub name: String,
    pub lower: f64,
    pub upper: Option<f64>, // None = unbounded above
}

impl Variable {
    /// Create a variable with the standard LP bound `0 <= x`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lower: 0.0,
            upper: None,
        }
    }

    pub fn with_lower(mut self, lower: f64) -> Self {
        self.lower = lower;
        self
    }

    pub fn with_upper(mut self, upper: f64) -> Self {
        self.upper = Some(upper);
        self
    }

    /// Lower and upper bound as a pair, using infinity for a missing upper bound.
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper.unwrap_or(f64::INFINITY))
    }
}

/// Sum of `coefficient * variable` terms with unique variable names.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinearExpression {
    terms: Vec<(String, f64)>,
}

impl LinearExpression {
    pub(crate) fn from_terms(terms: Vec<(String, f64)>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[(String, f64)] {
        &self.terms
    }

    /// Coefficient of `name`, 0 when the variable is not part of the expression.
    pub fn coefficient(&self, name: &str) -> f64 {
        self.terms
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| *c)
            .unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintOp {
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "=")]
    Eq,
}

impl fmt::Display for ConstraintOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            ConstraintOp::Le => "<=",
            ConstraintOp::Ge => ">=",
            ConstraintOp::Eq => "=",
        };
        f.write_str(symbol)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constraint {
    pub expression: LinearExpression,
    pub op: ConstraintOp,
    pub rhs: f64,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverDirection {
    Maximize,
    Minimize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Objective {
    pub direction: SolverDirection,
    pub expression: LinearExpression,
}

/// A validated linear program. Only [`crate::domain::builder`] constructs one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Problem {
    variables: Vec<Variable>,
    objective: Objective,
    constraints: Vec<Constraint>,
}

impl Problem {
    pub(crate) fn new(
        variables: Vec<Variable>,
        objective: Objective,
        constraints: Vec<Constraint>,
    ) -> Self {
        Problem {
            variables,
            objective,
            constraints,
        }
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(|v| v.name.as_str())
    }
}

// ---------- Solve results ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Optimal,
    Infeasible,
    Unbounded,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Status::Optimal => "optimal",
            Status::Infeasible => "infeasible",
            Status::Unbounded => "unbounded",
            Status::Error => "error",
        };
        f.write_str(keyword)
    }
}

/// Backend-independent outcome of one solve call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SolveResult {
    Optimal {
        values: HashMap<String, f64>,
        objective: f64,
    },
    Infeasible,
    Unbounded,
    Error {
        message: String,
    },
}

impl SolveResult {
    pub fn status(&self) -> Status {
        match self {
            SolveResult::Optimal { .. } => Status::Optimal,
            SolveResult::Infeasible => Status::Infeasible,
            SolveResult::Unbounded => Status::Unbounded,
            SolveResult::Error { .. } => Status::Error,
        }
    }

    pub fn is_optimal(&self) -> bool {
        matches!(self, SolveResult::Optimal { .. })
    }

    pub fn objective(&self) -> Option<f64> {
        match self {
            SolveResult::Optimal { objective, .. } => Some(*objective),
            _ => None,
        }
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        match self {
            SolveResult::Optimal { values, .. } => values.get(name).copied(),
            _ => None,
        }
    }
}

// ---------- Wire types: serde-friendly problem files ----------

fn zero() -> f64 {
    0.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableInput {
    pub name: String,
    #[serde(default = "zero")]
    pub lower: f64,
    #[serde(default)]
    pub upper: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectiveInput {
    pub sense: SolverDirection,
    pub coefficients: HashMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintInput {
    #[serde(default)]
    pub label: Option<String>,
    pub coefficients: HashMap<String, f64>,
    pub op: ConstraintOp,
    pub rhs: f64,
}

/// Problem as read from a JSON file, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemInput {
    pub variables: Vec<VariableInput>,
    pub objective: ObjectiveInput,
    #[serde(default)]
    pub constraints: Vec<ConstraintInput>,
}
