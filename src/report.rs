//! Text rendering and cross-checking of [`SolveResult`]s.

use crate::models::{Problem, SolveResult};

/// Decimal places kept by [`report`].
pub const DEFAULT_PRECISION: u32 = 9;

const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0; // 2^53

/// Render `result` in the problem's variable order.
///
/// ```text
/// Variable x1 = 2.0
/// Variable x2 = 0.0
/// Variable x3 = 1.0
/// z = 13.0
/// ```
///
/// Non-optimal results render as the bare status keyword.
pub fn report(result: &SolveResult, problem: &Problem) -> String {
    report_with_precision(result, problem, DEFAULT_PRECISION)
}

pub fn report_with_precision(result: &SolveResult, problem: &Problem, precision: u32) -> String {
    let SolveResult::Optimal { values, objective } = result else {
        return result.status().to_string();
    };

    let mut lines: Vec<String> = problem
        .variable_names()
        .map(|name| {
            let value = values.get(name).copied().unwrap_or(f64::NAN);
            format!("Variable {} = {}", name, format_value(value, precision))
        })
        .collect();
    lines.push(format!("z = {}", format_value(*objective, precision)));
    lines.join("\n")
}

/// Round to `precision` decimals and print with `Debug` so integral values keep
/// their `.0`.
pub fn format_value(value: f64, precision: u32) -> String {
    if !value.is_finite() {
        return format!("{:?}", value);
    }
    let scale = 10f64.powi(precision.min(15) as i32);
    let scaled = value * scale;
    // Beyond 2^53 every f64 is already an integer, nothing left to round
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_INTEGER {
        return format!("{:?}", value + 0.0);
    }
    let rounded = scaled.round() / scale;
    // -0.0 + 0.0 == +0.0
    format!("{:?}", rounded + 0.0)
}

/// Whether two results agree: same status and, when optimal, objective and every
/// shared variable within `tolerance`.
pub fn verify(a: &SolveResult, b: &SolveResult, tolerance: f64) -> bool {
    match (a, b) {
        (
            SolveResult::Optimal {
                values: values_a,
                objective: objective_a,
            },
            SolveResult::Optimal {
                values: values_b,
                objective: objective_b,
            },
        ) => {
            within(*objective_a, *objective_b, tolerance)
                && values_a.iter().all(|(name, value_a)| match values_b.get(name) {
                    Some(value_b) => within(*value_a, *value_b, tolerance),
                    None => true,
                })
        }
        _ => a.status() == b.status(),
    }
}

fn within(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}
