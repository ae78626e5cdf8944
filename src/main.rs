use clap::Parser;
use dotenv::dotenv;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use lp_compare::{
    compare, create_solver, load_problem, report_with_precision, scenarios, Config, Error,
    Solver, SolveResult,
};

#[derive(Parser)]
#[command(name = "lp-compare")]
#[command(about = "Solve one LP with several backends and compare the answers", long_about = None)]
struct Cli {
    /// JSON problem file; the built-in scenario is used when omitted
    problem: Option<PathBuf>,

    /// Built-in scenario (textbook, infeasible)
    #[arg(long, default_value = "textbook")]
    scenario: String,

    /// Backends to run, comma separated or repeated (overrides LP_SOLVERS)
    #[arg(short, long = "solver")]
    solvers: Vec<String>,

    /// Allowed difference between backends (overrides LP_TOLERANCE)
    #[arg(short, long)]
    tolerance: Option<f64>,

    /// Decimal places in reports (overrides LP_PRECISION)
    #[arg(short, long)]
    precision: Option<u32>,

    /// Print results as JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Microseconds for JSON output, saturating instead of truncating the `u128`.
fn elapsed_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

fn run(cli: Cli) -> Result<bool, Error> {
    let mut config = Config::from_env()?;
    if !cli.solvers.is_empty() {
        config = config.with_solvers(&cli.solvers.join(","))?;
    }
    if let Some(tolerance) = cli.tolerance {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(Error::Config(format!("tolerance must be >= 0, got {}", tolerance)));
        }
        config.tolerance = tolerance;
    }
    if let Some(precision) = cli.precision {
        config.precision = precision;
    }

    let problem = match &cli.problem {
        Some(path) => load_problem(path)?,
        None => scenarios::by_name(&cli.scenario)?,
    };

    let solvers: Vec<Box<dyn Solver>> = config.solvers.iter().map(|&s| create_solver(s)).collect();
    let comparison = compare(&problem, &solvers, config.tolerance);
    let consistent = comparison.consistent();

    if cli.json {
        let runs: Vec<serde_json::Value> = comparison
            .runs
            .iter()
            .map(|run| {
                serde_json::json!({
                    "solver": run.name,
                    "elapsed_us": elapsed_micros(run.elapsed),
                    "result": run.result,
                })
            })
            .collect();
        let output = serde_json::json!({ "runs": runs, "consistent": consistent });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(consistent);
    }

    for run in &comparison.runs {
        println!("== {} ({:?})", run.name, run.elapsed);
        println!("{}", report_with_precision(&run.result, &problem, config.precision));
        if let SolveResult::Error { message } = &run.result {
            eprintln!("{}: {}", run.name, message);
        }
        println!();
    }
    print!("{}", comparison.summary());
    println!("{}", if consistent { "consistent" } else { "inconsistent" });

    Ok(consistent)
}

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
