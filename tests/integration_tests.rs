use lp_compare::{
    build, compare, create_solver, parse_problem, report, scenarios, solve, verify, ConstraintOp,
    ConstraintRow, MatrixSolver, Problem, ProblemBuilder, SolveResult, Solver, SolverDirection,
    SolverType, Status, SymbolicSolver, ValidationError, Variable,
};
use std::process::Command;

const TOLERANCE: f64 = 1e-6;

fn backends() -> Vec<Box<dyn Solver>> {
    #[allow(unused_mut)]
    let mut solvers = vec![
        create_solver(SolverType::Symbolic),
        create_solver(SolverType::Matrix),
    ];
    #[cfg(feature = "highs-solver")]
    solvers.push(create_solver(SolverType::Highs));
    solvers
}

fn assert_close(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("value should be present");
    assert!(
        (actual - expected).abs() <= TOLERANCE,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn lp_compare() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_lp-compare"));
    command
        .env_remove("LP_SOLVERS")
        .env_remove("LP_TOLERANCE")
        .env_remove("LP_PRECISION");
    command
}

#[test]
fn test_textbook_scenario_should_be_optimal_on_every_backend() {
    let problem = scenarios::textbook().unwrap();

    for backend in backends() {
        let result = solve(&problem, backend.as_ref());
        assert_eq!(result.status(), Status::Optimal, "backend {}", backend.name());
        assert_close(result.value("x1"), 2.0);
        assert_close(result.value("x2"), 0.0);
        assert_close(result.value("x3"), 1.0);
        assert_close(result.objective(), 13.0);
    }
}

#[test]
fn test_textbook_report_should_print_four_lines() {
    let problem = scenarios::textbook().unwrap();

    for backend in backends() {
        let result = solve(&problem, backend.as_ref());
        assert_eq!(
            report(&result, &problem),
            "Variable x1 = 2.0\nVariable x2 = 0.0\nVariable x3 = 1.0\nz = 13.0",
            "backend {}",
            backend.name()
        );
    }
}

#[test]
fn test_two_backends_should_verify_against_each_other() {
    let problem = scenarios::textbook().unwrap();
    let symbolic = solve(&problem, &SymbolicSolver::new());
    let matrix = solve(&problem, &MatrixSolver::new());

    assert!(verify(&symbolic, &matrix, TOLERANCE));
    assert!(verify(&matrix, &symbolic, TOLERANCE));
}

#[test]
fn test_infeasible_scenario_should_have_no_values() {
    let problem = scenarios::infeasible().unwrap();

    for backend in backends() {
        let result = solve(&problem, backend.as_ref());
        assert_eq!(result, SolveResult::Infeasible, "backend {}", backend.name());
        assert_eq!(result.value("x1"), None);
        assert_eq!(report(&result, &problem), "infeasible");
    }
}

#[test]
fn test_unbounded_problem_should_report_unbounded() {
    let problem = ProblemBuilder::new()
        .variables(["x1", "x2"])
        .maximize([("x1", 1.0), ("x2", 1.0)])
        .subject_to([("x1", 1.0), ("x2", -1.0)], ConstraintOp::Le, 1.0)
        .build()
        .unwrap();

    for backend in backends() {
        let result = solve(&problem, backend.as_ref());
        assert_eq!(result, SolveResult::Unbounded, "backend {}", backend.name());
        assert_eq!(report(&result, &problem), "unbounded");
    }
}

#[test]
fn test_sign_flip_should_match_pre_negated_minimization() {
    let maximize = scenarios::textbook().unwrap();
    let rows: Vec<ConstraintRow> = maximize
        .constraints()
        .iter()
        .map(|c| ConstraintRow::new(c.expression.terms().to_vec(), c.op, c.rhs))
        .collect();
    let negated: Problem = build(
        maximize.variables().to_vec(),
        maximize
            .objective()
            .expression
            .terms()
            .iter()
            .map(|(name, coefficient)| (name.clone(), -coefficient)),
        SolverDirection::Minimize,
        rows,
    )
    .unwrap();

    let matrix = MatrixSolver::new();
    let flipped = solve(&maximize, &matrix);
    let direct = solve(&negated, &matrix);

    assert_close(flipped.objective(), 13.0);
    assert_close(direct.objective(), -13.0);
    assert_close(flipped.objective(), -direct.objective().unwrap());
}

#[test]
fn test_bounds_and_equalities_should_be_honoured_by_every_backend() {
    // min 2x + y  s.t. x + y = 3, x >= -2, 0 <= y <= 1  =>  x = 2, y = 1, z = 5
    let problem = build(
        [
            Variable::new("x").with_lower(-2.0),
            Variable::new("y").with_upper(1.0),
        ],
        [("x", 2.0), ("y", 1.0)],
        SolverDirection::Minimize,
        vec![ConstraintRow::new([("x", 1.0), ("y", 1.0)], ConstraintOp::Eq, 3.0)],
    )
    .unwrap();

    let comparison = compare(&problem, &backends(), TOLERANCE);
    assert!(comparison.consistent());
    for run in &comparison.runs {
        assert_close(run.result.value("x"), 2.0);
        assert_close(run.result.value("y"), 1.0);
        assert_close(run.result.objective(), 5.0);
    }
}

#[test]
fn test_build_given_undeclared_name_should_fail_before_solving() {
    let result = ProblemBuilder::new()
        .variables(["x1", "x2"])
        .maximize([("x1", 1.0)])
        .subject_to([("x1", 1.0), ("x4", 1.0)], ConstraintOp::Le, 1.0)
        .build();

    assert!(matches!(
        result,
        Err(ValidationError::UnknownVariable { name, .. }) if name == "x4"
    ));
}

#[test]
fn test_problem_file_should_solve_like_builtin() {
    let problem = parse_problem(
        r#"{
            "variables": [{"name": "x1"}, {"name": "x2"}, {"name": "x3"}],
            "objective": {"sense": "maximize", "coefficients": {"x3": 3, "x1": 5, "x2": 4}},
            "constraints": [
                {"coefficients": {"x1": 2, "x2": 3, "x3": 1}, "op": "<=", "rhs": 5},
                {"coefficients": {"x1": 4, "x2": 1, "x3": 2}, "op": "<=", "rhs": 11},
                {"coefficients": {"x1": 3, "x2": 4, "x3": 2}, "op": "<=", "rhs": 8}
            ]
        }"#,
    )
    .unwrap();

    let from_file = solve(&problem, &SymbolicSolver::new());
    let builtin = solve(&scenarios::textbook().unwrap(), &SymbolicSolver::new());
    assert!(verify(&from_file, &builtin, TOLERANCE));
}

#[test]
fn test_cli_textbook_should_print_reports_and_exit_zero() {
    let output = lp_compare().output().expect("Failed to run lp-compare");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Variable x1 = 2.0\nVariable x2 = 0.0\nVariable x3 = 1.0\nz = 13.0"));
    assert!(stdout.contains("good_lp: optimal in "));
    assert!(stdout.contains("minilp: optimal in "));
    assert_eq!(stdout.lines().last(), Some("consistent"));
}

#[test]
fn test_cli_infeasible_scenario_should_print_keyword() {
    let output = lp_compare()
        .args(["--scenario", "infeasible", "--solver", "matrix"])
        .output()
        .expect("Failed to run lp-compare");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|line| line == "infeasible"));
    assert!(!stdout.contains("Variable"));
}

#[test]
fn test_cli_json_output_should_parse() {
    let output = lp_compare()
        .args(["--json", "--solver", "symbolic"])
        .output()
        .expect("Failed to run lp-compare");

    assert!(output.status.success());
    let body: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Failed to parse JSON output");
    assert_eq!(body["consistent"], true);
    assert_eq!(body["runs"][0]["solver"], "good_lp");
    assert_eq!(body["runs"][0]["result"]["status"], "optimal");
    assert_eq!(body["runs"][0]["result"]["values"]["x1"].as_f64().map(f64::round), Some(2.0));
}

#[test]
fn test_cli_unknown_solver_should_fail() {
    let output = lp_compare()
        .args(["--solver", "cplex"])
        .output()
        .expect("Failed to run lp-compare");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown solver: cplex"));
}

#[test]
fn test_cli_missing_problem_file_should_fail() {
    let output = lp_compare()
        .arg("/definitely/not/here.json")
        .output()
        .expect("Failed to run lp-compare");

    assert!(!output.status.success());
}
