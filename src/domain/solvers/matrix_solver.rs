use crate::convert::MatrixForm;
use crate::domain::solver::{RawSolution, RawStatus, Solver};
use crate::models::{ConstraintOp, SolverDirection};

use minilp::{ComparisonOp, OptimizationDirection, Problem, Variable};

/// minilp backend fed with the dense `(c, A, b)` triple, `linprog` style.
///
/// Only minimizes; the adapter negates maximize objectives before calling it.
pub struct MatrixSolver;

impl MatrixSolver {
    pub fn new() -> Self {
        MatrixSolver
    }

    fn comparison_op(op: ConstraintOp) -> ComparisonOp {
        match op {
            ConstraintOp::Le => ComparisonOp::Le,
            ConstraintOp::Ge => ComparisonOp::Ge,
            ConstraintOp::Eq => ComparisonOp::Eq,
        }
    }

    /// Convert a minilp error to our status vocabulary
    fn convert_error(error: minilp::Error) -> RawStatus {
        match error {
            minilp::Error::Infeasible => RawStatus::Infeasible,
            minilp::Error::Unbounded => RawStatus::Unbounded,
        }
    }
}

impl Default for MatrixSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for MatrixSolver {
    fn solve(&self, form: &MatrixForm) -> RawSolution {
        if form.direction != SolverDirection::Minimize {
            return RawSolution::without_solution(RawStatus::Other(
                "minilp backend only accepts minimization forms".to_string(),
            ));
        }

        let mut problem = Problem::new(OptimizationDirection::Minimize);
        let columns: Vec<Variable> = form
            .objective
            .iter()
            .zip(&form.bounds)
            .map(|(&cost, &bounds)| problem.add_var(cost, bounds))
            .collect();

        for row in 0..form.nrows() {
            let entries: Vec<(Variable, f64)> = form
                .row_entries(row)
                .map(|(col, coefficient)| (columns[col], coefficient))
                .collect();
            problem.add_constraint(
                entries.as_slice(),
                Self::comparison_op(form.ops[row]),
                form.rhs[row],
            );
        }

        match problem.solve() {
            Ok(solution) => {
                let values: Vec<f64> = columns.iter().map(|v| solution[*v]).collect();
                let objective = solution.objective();
                // minilp can hand back an "optimum" at infinity for unbounded rays
                if !objective.is_finite() || values.iter().any(|v| !v.is_finite()) {
                    return RawSolution::without_solution(RawStatus::Unbounded);
                }
                RawSolution::optimal(values, objective)
            }
            Err(error) => RawSolution::without_solution(Self::convert_error(error)),
        }
    }

    fn supports_maximize(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "minilp"
    }
}
