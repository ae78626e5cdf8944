use std::ops::Bound;

use crate::convert::MatrixForm;
use crate::domain::solver::{RawSolution, RawStatus, Solver};
use crate::models::{ConstraintOp, SolverDirection};

use ::highs::{Col, HighsModelStatus, RowProblem, Sense};

/// HiGHS solver implementation
pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        HighsSolver
    }

    /// Convert HiGHS status to our status vocabulary
    fn convert_status(model_status: HighsModelStatus) -> RawStatus {
        match model_status {
            HighsModelStatus::Optimal => RawStatus::Optimal,
            HighsModelStatus::Infeasible => RawStatus::Infeasible,
            HighsModelStatus::Unbounded => RawStatus::Unbounded,
            other => RawStatus::Other(format!("HiGHS model status {:?}", other)),
        }
    }

    fn row_bounds(op: ConstraintOp, rhs: f64) -> (Bound<f64>, Bound<f64>) {
        match op {
            ConstraintOp::Le => (Bound::Unbounded, Bound::Included(rhs)),
            ConstraintOp::Ge => (Bound::Included(rhs), Bound::Unbounded),
            ConstraintOp::Eq => (Bound::Included(rhs), Bound::Included(rhs)),
        }
    }

    fn column_bounds((lower, upper): (f64, f64)) -> (Bound<f64>, Bound<f64>) {
        let lower = if lower.is_finite() {
            Bound::Included(lower)
        } else {
            Bound::Unbounded
        };
        let upper = if upper.is_finite() {
            Bound::Included(upper)
        } else {
            Bound::Unbounded
        };
        (lower, upper)
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for HighsSolver {
    fn solve(&self, form: &MatrixForm) -> RawSolution {
        let mut problem = RowProblem::new();

        // Columns first, rows reference them
        let columns: Vec<Col> = form
            .objective
            .iter()
            .zip(&form.bounds)
            .map(|(&cost, &bounds)| problem.add_column(cost, Self::column_bounds(bounds)))
            .collect();

        for row in 0..form.nrows() {
            let factors: Vec<(Col, f64)> = form
                .row_entries(row)
                .map(|(col, coefficient)| (columns[col], coefficient))
                .collect();
            problem.add_row(Self::row_bounds(form.ops[row], form.rhs[row]), factors);
        }

        let sense = match form.direction {
            SolverDirection::Maximize => Sense::Maximise,
            SolverDirection::Minimize => Sense::Minimise,
        };

        // Presolve off so infeasible and unbounded models are told apart
        let mut model = problem.optimise(sense);
        model.set_option("presolve", "off");
        model.set_option("output_flag", false);
        let solved = model.solve();

        match Self::convert_status(solved.status()) {
            RawStatus::Optimal => {
                let values = solved.get_solution().columns().to_vec();
                RawSolution::optimal(values, solved.objective_value())
            }
            status => RawSolution::without_solution(status),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}
