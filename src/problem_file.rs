use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{Problem, ProblemInput};

/// Parse a JSON problem and run it through the builder's validation.
pub fn parse_problem(json: &str) -> Result<Problem> {
    let input: ProblemInput = serde_json::from_str(json)?;
    Ok(Problem::try_from(input)?)
}

pub fn load_problem(path: impl AsRef<Path>) -> Result<Problem> {
    let path = path.as_ref();
    log::debug!("loading problem from {}", path.display());
    let json = fs::read_to_string(path)?;
    parse_problem(&json)
}
