use crate::convert::MatrixForm;
use crate::domain::solver::{RawSolution, RawStatus, Solver};
use crate::models::{ConstraintOp, SolverDirection};

use good_lp::{
    constraint, microlp, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolverModel, Variable,
};

/// good_lp backend: every row becomes an affine sum of `coefficient * variable`
/// terms, solved with the pure-Rust microlp engine.
pub struct SymbolicSolver;

impl SymbolicSolver {
    pub fn new() -> Self {
        SymbolicSolver
    }

    fn affine_sum(entries: impl Iterator<Item = (usize, f64)>, columns: &[Variable]) -> Expression {
        entries
            .map(|(col, coefficient)| coefficient * columns[col])
            .sum()
    }

    /// Convert a good_lp resolution error to our status vocabulary
    fn convert_error(error: ResolutionError) -> RawStatus {
        match error {
            ResolutionError::Infeasible => RawStatus::Infeasible,
            ResolutionError::Unbounded => RawStatus::Unbounded,
            other => RawStatus::Other(other.to_string()),
        }
    }
}

impl Default for SymbolicSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for SymbolicSolver {
    fn solve(&self, form: &MatrixForm) -> RawSolution {
        let mut vars = ProblemVariables::new();
        let columns: Vec<Variable> = form
            .bounds
            .iter()
            .map(|&(lower, upper)| {
                let definition = variable().min(lower);
                if upper.is_finite() {
                    vars.add(definition.max(upper))
                } else {
                    vars.add(definition)
                }
            })
            .collect();

        let objective = Self::affine_sum(form.objective.iter().copied().enumerate(), &columns);
        let mut model = match form.direction {
            SolverDirection::Maximize => vars.maximise(objective).using(microlp),
            SolverDirection::Minimize => vars.minimise(objective).using(microlp),
        };

        for row in 0..form.nrows() {
            let lhs = Self::affine_sum(form.row_entries(row), &columns);
            let rhs = form.rhs[row];
            model = model.with(match form.ops[row] {
                ConstraintOp::Le => constraint::leq(lhs, rhs),
                ConstraintOp::Ge => constraint::geq(lhs, rhs),
                ConstraintOp::Eq => constraint::eq(lhs, rhs),
            });
        }

        match model.solve() {
            Ok(solution) => {
                let values: Vec<f64> = columns.iter().map(|&v| solution.value(v)).collect();
                let objective = form.evaluate(&values);
                RawSolution::optimal(values, objective)
            }
            Err(error) => RawSolution::without_solution(Self::convert_error(error)),
        }
    }

    fn name(&self) -> &str {
        "good_lp"
    }
}
