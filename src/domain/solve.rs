use std::collections::HashMap;

use crate::convert::to_matrix_form;
use crate::domain::solver::{RawStatus, Solver};
use crate::models::{Problem, SolveResult, SolverDirection};

/// Dispatch `problem` to `backend` and normalize the answer.
///
/// Maximize problems sent to a minimize-only backend are negated on the way in and
/// the objective is negated once on the way out.
pub fn solve(problem: &Problem, backend: &dyn Solver) -> SolveResult {
    let form = to_matrix_form(problem);
    let flipped = form.direction == SolverDirection::Maximize && !backend.supports_maximize();
    let form = if flipped {
        log::debug!("{}: minimization only, negating objective", backend.name());
        form.into_minimization()
    } else {
        form
    };

    log::debug!(
        "{}: dispatching {} rows x {} cols ({:?})",
        backend.name(),
        form.nrows(),
        form.ncols(),
        form.direction
    );

    let raw = backend.solve(&form);

    match raw.status {
        RawStatus::Optimal => {
            if raw.columns.len() != form.ncols() {
                let message = format!(
                    "{} returned {} values for {} variables",
                    backend.name(),
                    raw.columns.len(),
                    form.ncols()
                );
                log::warn!("{}", message);
                return SolveResult::Error { message };
            }
            if !raw.objective.is_finite() || raw.columns.iter().any(|v| !v.is_finite()) {
                let message = format!(
                    "{} reported an optimum with non-finite values",
                    backend.name()
                );
                log::warn!("{}", message);
                return SolveResult::Error { message };
            }

            let values: HashMap<String, f64> = problem
                .variable_names()
                .map(str::to_string)
                .zip(raw.columns)
                .collect();
            let objective = if flipped { -raw.objective } else { raw.objective };

            SolveResult::Optimal { values, objective }
        }
        RawStatus::Infeasible => SolveResult::Infeasible,
        RawStatus::Unbounded => SolveResult::Unbounded,
        RawStatus::Other(message) => {
            log::warn!("{} failed: {}", backend.name(), message);
            SolveResult::Error { message }
        }
    }
}
