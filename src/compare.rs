//! Timed runs of one problem across several backends.

use std::time::{Duration, Instant};

use crate::domain::solve::solve;
use crate::domain::solver::Solver;
use crate::models::{Problem, SolveResult};
use crate::report::verify;

/// One backend's answer and how long the adapter call took.
#[derive(Debug, Clone)]
pub struct BackendRun {
    pub name: String,
    pub elapsed: Duration,
    pub result: SolveResult,
}

#[derive(Debug, Clone)]
pub struct Comparison {
    pub runs: Vec<BackendRun>,
    pub tolerance: f64,
}

impl Comparison {
    /// Every run verifies against the first one.
    pub fn consistent(&self) -> bool {
        match self.runs.split_first() {
            Some((first, rest)) => rest
                .iter()
                .all(|run| verify(&first.result, &run.result, self.tolerance)),
            None => true,
        }
    }

    /// `<name>: <status> in <elapsed>`, one line per backend.
    pub fn summary(&self) -> String {
        self.runs
            .iter()
            .map(|run| format!("{}: {} in {:?}\n", run.name, run.result.status(), run.elapsed))
            .collect()
    }

    pub fn fastest(&self) -> Option<&BackendRun> {
        self.runs.iter().min_by_key(|run| run.elapsed)
    }
}

pub fn compare(problem: &Problem, solvers: &[Box<dyn Solver>], tolerance: f64) -> Comparison {
    let runs = solvers
        .iter()
        .map(|solver| {
            let start = Instant::now();
            let result = solve(problem, solver.as_ref());
            let elapsed = start.elapsed();
            log::info!("{} finished ({}) in {:?}", solver.name(), result.status(), elapsed);

            BackendRun {
                name: solver.name().to_string(),
                elapsed,
                result,
            }
        })
        .collect();

    Comparison { runs, tolerance }
}
