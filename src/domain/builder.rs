use std::collections::{HashMap, HashSet};

use crate::domain::validate::{validate_rhs, validate_terms, validate_variables, ValidationError};
use crate::models::{
    Constraint, ConstraintOp, LinearExpression, Objective, Problem, ProblemInput, SolverDirection,
    Variable,
};

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Variable::new(name)
    }
}

impl From<String> for Variable {
    fn from(name: String) -> Self {
        Variable::new(name)
    }
}

/// One constraint as supplied by the caller: named coefficients, operator, rhs.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintRow {
    pub coefficients: Vec<(String, f64)>,
    pub op: ConstraintOp,
    pub rhs: f64,
    pub label: Option<String>,
}

impl ConstraintRow {
    pub fn new<I, K>(coefficients: I, op: ConstraintOp, rhs: f64) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        ConstraintRow {
            coefficients: collect_terms(coefficients),
            op,
            rhs,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn location(&self, index: usize) -> String {
        match &self.label {
            Some(label) => format!("constraint {}", label),
            None => format!("constraint #{}", index),
        }
    }
}

fn collect_terms<I, K>(coefficients: I) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = (K, f64)>,
    K: Into<String>,
{
    coefficients
        .into_iter()
        .map(|(name, coefficient)| (name.into(), coefficient))
        .collect()
}

/// Build a validated [`Problem`].
///
/// Terms of every expression are stored in the order of `variables`, so two calls
/// with the same input yield identical problems regardless of how the coefficient
/// mappings iterate. Constraint order is kept as given.
///
/// # Errors
///
/// Returns a [`ValidationError`] if a variable is declared twice, has invalid bounds,
/// or if any mapping references an undeclared name or holds a non-finite number.
pub fn build<V, I, K>(
    variables: impl IntoIterator<Item = V>,
    objective: I,
    direction: SolverDirection,
    rows: Vec<ConstraintRow>,
) -> Result<Problem, ValidationError>
where
    V: Into<Variable>,
    I: IntoIterator<Item = (K, f64)>,
    K: Into<String>,
{
    let variables: Vec<Variable> = variables.into_iter().map(Into::into).collect();
    validate_variables(&variables)?;

    let declared: HashSet<&str> = variables.iter().map(|v| v.name.as_str()).collect();
    let order: HashMap<&str, usize> = variables
        .iter()
        .enumerate()
        .map(|(i, v)| (v.name.as_str(), i))
        .collect();

    let objective_terms = collect_terms(objective);
    validate_terms(&declared, &objective_terms, "objective")?;

    for (index, row) in rows.iter().enumerate() {
        let location = row.location(index);
        validate_terms(&declared, &row.coefficients, &location)?;
        validate_rhs(row.rhs, &location)?;
    }

    let objective = Objective {
        direction,
        expression: canonical_expression(objective_terms, &order),
    };

    let constraints: Vec<Constraint> = rows
        .into_iter()
        .map(|row| Constraint {
            expression: canonical_expression(row.coefficients, &order),
            op: row.op,
            rhs: row.rhs,
            label: row.label,
        })
        .collect();

    Ok(Problem::new(variables, objective, constraints))
}

fn canonical_expression(
    mut terms: Vec<(String, f64)>,
    order: &HashMap<&str, usize>,
) -> LinearExpression {
    // Names were validated against `order` already
    terms.sort_by_key(|(name, _)| order.get(name.as_str()).copied().unwrap_or(usize::MAX));
    LinearExpression::from_terms(terms)
}

/// Fluent counterpart of [`build`].
#[derive(Debug, Default)]
pub struct ProblemBuilder {
    variables: Vec<Variable>,
    objective: Vec<(String, f64)>,
    direction: Option<SolverDirection>,
    rows: Vec<ConstraintRow>,
}

impl ProblemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a decision variable
    ///
    /// # Example
    ///
    /// ```
    /// use lp_compare::{ProblemBuilder, Variable};
    ///
    /// let builder = ProblemBuilder::new()
    ///     .variable("x1")
    ///     .variable(Variable::new("x2").with_upper(4.0));
    /// ```
    pub fn variable(mut self, variable: impl Into<Variable>) -> Self {
        self.variables.push(variable.into());
        self
    }

    pub fn variables<V: Into<Variable>>(mut self, variables: impl IntoIterator<Item = V>) -> Self {
        self.variables.extend(variables.into_iter().map(Into::into));
        self
    }

    /// Set the objective, replacing any previous one
    pub fn objective<I, K>(mut self, direction: SolverDirection, coefficients: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        self.direction = Some(direction);
        self.objective = collect_terms(coefficients);
        self
    }

    pub fn maximize<I, K>(self, coefficients: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        self.objective(SolverDirection::Maximize, coefficients)
    }

    pub fn minimize<I, K>(self, coefficients: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        self.objective(SolverDirection::Minimize, coefficients)
    }

    pub fn constraint(mut self, row: ConstraintRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Shorthand for an unlabelled constraint row.
    ///
    /// ```
    /// use lp_compare::{ConstraintOp, ProblemBuilder};
    ///
    /// let problem = ProblemBuilder::new()
    ///     .variables(["x", "y"])
    ///     .maximize([("x", 1.0), ("y", 1.0)])
    ///     .subject_to([("x", 1.0), ("y", 2.0)], ConstraintOp::Le, 4.0)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(problem.constraints().len(), 1);
    /// ```
    pub fn subject_to<I, K>(self, coefficients: I, op: ConstraintOp, rhs: f64) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        self.constraint(ConstraintRow::new(coefficients, op, rhs))
    }

    /// Build the problem
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No objective sense has been set
    /// - Any check performed by [`build`] fails
    pub fn build(self) -> Result<Problem, ValidationError> {
        let direction = self.direction.ok_or(ValidationError::MissingDirection)?;
        build(self.variables, self.objective, direction, self.rows)
    }
}

impl TryFrom<ProblemInput> for Problem {
    type Error = ValidationError;

    fn try_from(input: ProblemInput) -> Result<Self, Self::Error> {
        let variables = input.variables.into_iter().map(|v| Variable {
            name: v.name,
            lower: v.lower,
            upper: v.upper,
        });

        let rows: Vec<ConstraintRow> = input
            .constraints
            .into_iter()
            .map(|c| ConstraintRow {
                coefficients: c.coefficients.into_iter().collect(),
                op: c.op,
                rhs: c.rhs,
                label: c.label,
            })
            .collect();

        build(variables, input.objective.coefficients, input.objective.sense, rows)
    }
}
