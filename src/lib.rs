//! # lp-compare
//!
//! Encode a small linear program once, solve it with interchangeable LP backends,
//! then report and cross-check the answers.
//!
//! ## Example
//!
//! ```
//! use lp_compare::{report, solve, verify, ConstraintOp, MatrixSolver, ProblemBuilder, SymbolicSolver};
//!
//! let problem = ProblemBuilder::new()
//!     .variables(["x1", "x2", "x3"])
//!     .maximize([("x1", 5.0), ("x2", 4.0), ("x3", 3.0)])
//!     .subject_to([("x1", 2.0), ("x2", 3.0), ("x3", 1.0)], ConstraintOp::Le, 5.0)
//!     .subject_to([("x1", 4.0), ("x2", 1.0), ("x3", 2.0)], ConstraintOp::Le, 11.0)
//!     .subject_to([("x1", 3.0), ("x2", 4.0), ("x3", 2.0)], ConstraintOp::Le, 8.0)
//!     .build()?;
//!
//! let symbolic = solve(&problem, &SymbolicSolver::new());
//! let matrix = solve(&problem, &MatrixSolver::new());
//!
//! assert!(verify(&symbolic, &matrix, 1e-6));
//! assert!(report(&symbolic, &problem).ends_with("z = 13.0"));
//! # Ok::<(), lp_compare::ValidationError>(())
//! ```

pub mod compare;
pub mod config;
pub mod convert;
pub mod domain;
pub mod error;
pub mod models;
pub mod problem_file;
pub mod report;
pub mod scenarios;

pub use compare::{compare, BackendRun, Comparison};
pub use config::Config;
pub use convert::{to_matrix_form, MatrixForm};
pub use domain::builder::{build, ConstraintRow, ProblemBuilder};
pub use domain::solve::solve;
pub use domain::solver::{RawSolution, RawStatus, Solver};
pub use domain::solver_factory::{create_solver, SolverType};
pub use domain::solvers::{MatrixSolver, SymbolicSolver};
pub use domain::validate::ValidationError;
pub use error::{Error, Result};
pub use models::{
    Constraint, ConstraintOp, LinearExpression, Objective, Problem, SolveResult, SolverDirection,
    Status, Variable,
};
pub use problem_file::{load_problem, parse_problem};
pub use report::{report, report_with_precision, verify};

#[cfg(feature = "highs-solver")]
pub use domain::solvers::HighsSolver;
