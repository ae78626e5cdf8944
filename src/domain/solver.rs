use crate::convert::MatrixForm;

/// Outcome vocabulary every backend translates its own statuses into.
#[derive(Debug, Clone, PartialEq)]
pub enum RawStatus {
    Optimal,
    Infeasible,
    Unbounded,
    /// Anything else the backend reported, with its diagnostic text
    Other(String),
}

/// What a backend hands back from one solve call.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSolution {
    pub status: RawStatus,
    /// Column values aligned to the form's variable order; empty unless optimal
    pub columns: Vec<f64>,
    pub objective: f64,
}

impl RawSolution {
    pub fn optimal(columns: Vec<f64>, objective: f64) -> Self {
        RawSolution {
            status: RawStatus::Optimal,
            columns,
            objective,
        }
    }

    pub fn without_solution(status: RawStatus) -> Self {
        RawSolution {
            status,
            columns: Vec::new(),
            objective: f64::NAN,
        }
    }
}

/// Common interface for LP backends
pub trait Solver: Send + Sync {
    /// Solve one linear program
    ///
    /// # Arguments
    /// * `form` - Dense objective, constraint rows with operator and rhs, and bounds.
    ///   The direction is always `Minimize` when [`Solver::supports_maximize`]
    ///   returns false.
    ///
    /// # Returns
    /// The backend's status, the column values and the objective value as the
    /// backend computed it for `form`
    fn solve(&self, form: &MatrixForm) -> RawSolution;

    /// Whether the backend accepts `Maximize` forms natively
    fn supports_maximize(&self) -> bool {
        true
    }

    /// Get the solver name for logging/debugging
    fn name(&self) -> &str;
}
