use std::env;

use crate::domain::solver_factory::{parse_solver_list, SolverType};
use crate::error::{Error, Result};
use crate::report::DEFAULT_PRECISION;

pub const DEFAULT_SOLVERS: &str = "symbolic,matrix";
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Runtime settings, read from the environment (and `.env` when `main` loaded it).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub solvers: Vec<SolverType>,
    pub tolerance: f64,
    pub precision: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            solvers: vec![SolverType::Symbolic, SolverType::Matrix],
            tolerance: DEFAULT_TOLERANCE,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl Config {
    /// `LP_SOLVERS`, `LP_TOLERANCE` and `LP_PRECISION`; missing or unparsable
    /// numbers fall back to the defaults, an unknown solver name is an error.
    pub fn from_env() -> Result<Self> {
        let solvers = env::var("LP_SOLVERS").unwrap_or_else(|_| DEFAULT_SOLVERS.to_string());

        let tolerance = env::var("LP_TOLERANCE")
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|t| t.is_finite() && *t >= 0.0)
            .unwrap_or(DEFAULT_TOLERANCE);

        let precision = env::var("LP_PRECISION")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(DEFAULT_PRECISION);

        Config {
            solvers: Vec::new(),
            tolerance,
            precision,
        }
        .with_solvers(&solvers)
    }

    /// Replace the backend list with a comma separated list of names.
    pub fn with_solvers(mut self, list: &str) -> Result<Self> {
        let solvers = parse_solver_list(list)?;
        if solvers.is_empty() {
            return Err(Error::Config("at least one solver is required".to_string()));
        }
        self.solvers = solvers;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear() {
        env::remove_var("LP_SOLVERS");
        env::remove_var("LP_TOLERANCE");
        env::remove_var("LP_PRECISION");
    }

    #[test]
    #[serial]
    fn test_from_env_given_nothing_set_should_use_defaults() {
        clear();
        assert_eq!(Config::from_env().unwrap(), Config::default());
    }

    #[test]
    #[serial]
    fn test_from_env_should_read_variables() {
        clear();
        env::set_var("LP_SOLVERS", "matrix");
        env::set_var("LP_TOLERANCE", "1e-3");
        env::set_var("LP_PRECISION", "4");

        let config = Config::from_env().unwrap();
        clear();

        assert_eq!(config.solvers, vec![SolverType::Matrix]);
        assert_eq!(config.tolerance, 1e-3);
        assert_eq!(config.precision, 4);
    }

    #[test]
    #[serial]
    fn test_from_env_given_garbage_numbers_should_fall_back() {
        clear();
        env::set_var("LP_TOLERANCE", "-1");
        env::set_var("LP_PRECISION", "many");

        let config = Config::from_env().unwrap();
        clear();

        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
        assert_eq!(config.precision, DEFAULT_PRECISION);
    }

    #[test]
    #[serial]
    fn test_from_env_given_unknown_solver_should_return_error() {
        clear();
        env::set_var("LP_SOLVERS", "cplex");
        let result = Config::from_env();
        clear();

        assert!(matches!(result, Err(Error::UnknownSolver(_))));
    }

    #[test]
    fn test_with_solvers_given_empty_list_should_return_error() {
        assert!(matches!(
            Config::default().with_solvers(" , "),
            Err(Error::Config(_))
        ));
    }
}
