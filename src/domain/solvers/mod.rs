pub mod matrix_solver;
pub mod symbolic_solver;

#[cfg(feature = "highs-solver")]
pub mod highs_solver;

pub use matrix_solver::MatrixSolver;
pub use symbolic_solver::SymbolicSolver;

#[cfg(feature = "highs-solver")]
pub use highs_solver::HighsSolver;
