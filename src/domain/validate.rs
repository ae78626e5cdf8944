use std::collections::HashSet;
use thiserror::Error;

use crate::models::Variable;

/// Malformed problem input, raised before any backend is invoked.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("problem has no variables")]
    NoVariables,

    #[error("objective sense (maximize/minimize) must be set")]
    MissingDirection,

    #[error("variable {0} is declared more than once")]
    DuplicateVariable(String),

    #[error("{location} references undeclared variable {name}")]
    UnknownVariable { name: String, location: String },

    #[error("{location} lists variable {name} more than once")]
    DuplicateTerm { name: String, location: String },

    #[error("{location} contains a non-finite number")]
    NonFinite { location: String },

    #[error("variable {name} has invalid bounds [{lower}, {upper}]")]
    InvalidBounds { name: String, lower: f64, upper: f64 },
}

pub fn validate_variables(variables: &[Variable]) -> Result<(), ValidationError> {
    if variables.is_empty() {
        return Err(ValidationError::NoVariables);
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(variables.len());
    for variable in variables {
        if !seen.insert(variable.name.as_str()) {
            return Err(ValidationError::DuplicateVariable(variable.name.clone()));
        }
        validate_bounds(variable)?;
    }

    Ok(())
}

fn validate_bounds(variable: &Variable) -> Result<(), ValidationError> {
    let (lower, upper) = variable.bounds();
    let invalid = lower.is_nan()
        || upper.is_nan()
        || lower == f64::INFINITY
        || upper == f64::NEG_INFINITY
        || lower > upper;

    if invalid {
        return Err(ValidationError::InvalidBounds {
            name: variable.name.clone(),
            lower,
            upper,
        });
    }
    Ok(())
}

/// Check one coefficient mapping against the declared variable names.
pub fn validate_terms(
    declared: &HashSet<&str>,
    terms: &[(String, f64)],
    location: &str,
) -> Result<(), ValidationError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(terms.len());

    for (name, coefficient) in terms {
        if !declared.contains(name.as_str()) {
            return Err(ValidationError::UnknownVariable {
                name: name.clone(),
                location: location.to_string(),
            });
        }
        if !seen.insert(name.as_str()) {
            return Err(ValidationError::DuplicateTerm {
                name: name.clone(),
                location: location.to_string(),
            });
        }
        if !coefficient.is_finite() {
            return Err(ValidationError::NonFinite {
                location: location.to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_rhs(rhs: f64, location: &str) -> Result<(), ValidationError> {
    if rhs.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite {
            location: location.to_string(),
        })
    }
}
