//! Hard-coded reference problems.

use crate::domain::builder::{ConstraintRow, ProblemBuilder};
use crate::domain::validate::ValidationError;
use crate::error::Error;
use crate::models::{ConstraintOp, Problem};

/// Three-variable textbook LP with optimum `x = (2, 0, 1)`, `z = 13`.
pub fn textbook() -> Result<Problem, ValidationError> {
    textbook_builder().build()
}

/// [`textbook`] plus the contradictory pair `x1 >= 10`, `x1 <= 0`.
pub fn infeasible() -> Result<Problem, ValidationError> {
    textbook_builder()
        .constraint(ConstraintRow::new([("x1", 1.0)], ConstraintOp::Ge, 10.0).with_label("x1_min"))
        .constraint(ConstraintRow::new([("x1", 1.0)], ConstraintOp::Le, 0.0).with_label("x1_max"))
        .build()
}

fn textbook_builder() -> ProblemBuilder {
    ProblemBuilder::new()
        .variables(["x1", "x2", "x3"])
        .maximize([("x1", 5.0), ("x2", 4.0), ("x3", 3.0)])
        .constraint(
            ConstraintRow::new([("x1", 2.0), ("x2", 3.0), ("x3", 1.0)], ConstraintOp::Le, 5.0)
                .with_label("c1"),
        )
        .constraint(
            ConstraintRow::new([("x1", 4.0), ("x2", 1.0), ("x3", 2.0)], ConstraintOp::Le, 11.0)
                .with_label("c2"),
        )
        .constraint(
            ConstraintRow::new([("x1", 3.0), ("x2", 4.0), ("x3", 2.0)], ConstraintOp::Le, 8.0)
                .with_label("c3"),
        )
}

/// Look a scenario up by name.
pub fn by_name(name: &str) -> Result<Problem, Error> {
    match name.to_lowercase().as_str() {
        "textbook" => Ok(textbook()?),
        "infeasible" => Ok(infeasible()?),
        other => Err(Error::Config(format!("unknown scenario {}", other))),
    }
}
