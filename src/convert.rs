use crate::models::{ConstraintOp, Problem, SolverDirection};

/// Dense, index-based view of a [`Problem`] handed to backends.
///
/// Column `j` of every row, entry `j` of `objective` and entry `j` of `bounds`
/// all refer to `Problem::variables()[j]`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixForm {
    pub direction: SolverDirection,
    pub objective: Vec<f64>,
    pub rows: Vec<Vec<f64>>,
    pub ops: Vec<ConstraintOp>,
    pub rhs: Vec<f64>,
    pub bounds: Vec<(f64, f64)>, // (lower, upper), upper may be +inf
}

impl MatrixForm {
    pub fn ncols(&self) -> usize {
        self.objective.len()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Non-zero entries of one row as `(column, coefficient)` pairs.
    pub fn row_entries(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.rows[row]
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, v)| *v != 0.0)
    }

    /// Objective value of `columns` under this form's objective vector.
    pub fn evaluate(&self, columns: &[f64]) -> f64 {
        self.objective
            .iter()
            .zip(columns)
            .map(|(c, x)| c * x)
            .sum()
    }

    /// `max cᵀx` rewritten as `min (−c)ᵀx`. Minimize forms are returned unchanged.
    pub fn into_minimization(mut self) -> Self {
        if self.direction == SolverDirection::Maximize {
            self.objective = self.objective.into_iter().map(|c| -c).collect();
            self.direction = SolverDirection::Minimize;
        }
        self
    }
}

/// Convert the per-constraint coefficient mappings into dense rows, keeping the
/// problem's variable order.
pub fn to_matrix_form(problem: &Problem) -> MatrixForm {
    let ncols = problem.variables().len();
    let names: Vec<&str> = problem.variable_names().collect();

    let objective: Vec<f64> = names
        .iter()
        .map(|name| problem.objective().expression.coefficient(name))
        .collect();

    let rows: Vec<Vec<f64>> = problem
        .constraints()
        .iter()
        .map(|constraint| {
            let mut row = vec![0.0; ncols];
            for (col, name) in names.iter().enumerate() {
                row[col] = constraint.expression.coefficient(name);
            }
            row
        })
        .collect();

    MatrixForm {
        direction: problem.objective().direction,
        objective,
        rows,
        ops: problem.constraints().iter().map(|c| c.op).collect(),
        rhs: problem.constraints().iter().map(|c| c.rhs).collect(),
        bounds: problem.variables().iter().map(|v| v.bounds()).collect(),
    }
}
