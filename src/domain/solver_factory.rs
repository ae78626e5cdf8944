use std::str::FromStr;

use crate::domain::solver::Solver;
use crate::domain::solvers::{MatrixSolver, SymbolicSolver};
use crate::error::Error;

#[cfg(feature = "highs-solver")]
use crate::domain::solvers::HighsSolver;

/// Available solver backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverType {
    Symbolic,
    Matrix,
    #[cfg(feature = "highs-solver")]
    Highs,
}

impl FromStr for SolverType {
    type Err = Error;

    /// Parse solver type from string (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "symbolic" | "good_lp" | "goodlp" => Ok(SolverType::Symbolic),
            "matrix" | "minilp" | "linprog" => Ok(SolverType::Matrix),
            #[cfg(feature = "highs-solver")]
            "highs" => Ok(SolverType::Highs),
            _ => Err(Error::UnknownSolver(s.to_string())),
        }
    }
}

/// Parse a comma separated list such as `"symbolic,matrix"`.
pub fn parse_solver_list(list: &str) -> Result<Vec<SolverType>, Error> {
    list.split(',')
        .filter(|name| !name.trim().is_empty())
        .map(SolverType::from_str)
        .collect()
}

/// Create a solver instance based on the specified type
pub fn create_solver(solver_type: SolverType) -> Box<dyn Solver> {
    match solver_type {
        SolverType::Symbolic => Box::new(SymbolicSolver::new()),
        SolverType::Matrix => Box::new(MatrixSolver::new()),
        #[cfg(feature = "highs-solver")]
        SolverType::Highs => Box::new(HighsSolver::new()),
    }
}
