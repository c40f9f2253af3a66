//! Lodestar CLI - command-line interface for the SAT solver.

use anyhow::Context;
use clap::Parser;
use lodestar_cdcl::{LogTracer, Solver};
use lodestar_format::DimacsCnf;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lodestar")]
#[command(author, version, about = "CDCL SAT solver", long_about = None)]
struct Cli {
    /// Input file in DIMACS CNF format
    input: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit solver trace lines through the logger
    #[arg(long)]
    trace: bool,

    /// Print the satisfying assignment when one exists
    #[arg(short, long)]
    model: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let file = File::open(&cli.input)
        .with_context(|| format!("error opening {}", cli.input.display()))?;
    let problem = DimacsCnf::from_reader(file).context("error parsing cnf file")?;

    tracing::info!(
        "loaded {}: {} variables, {} clauses declared",
        cli.input.display(),
        problem.num_vars,
        problem.num_clauses
    );

    let mut solver = Solver::new();
    if cli.trace {
        solver.set_tracer(Box::new(LogTracer));
    }
    solver.add_formula(problem.clauses);

    let start = Instant::now();
    let sat = solver.solve();
    let elapsed = start.elapsed();

    let stats = solver.stats();
    tracing::info!(
        "solved in {elapsed:?}: {} decisions, {} conflicts, {} propagations, {} learned",
        stats.decisions,
        stats.conflicts,
        stats.propagations,
        stats.learned_clauses
    );

    println!("SAT: {sat}");

    if sat && cli.model {
        let mut model: Vec<(u32, bool)> = solver.assignments().into_iter().collect();
        model.sort_unstable();
        for (var, value) in model {
            println!("{var} = {value}");
        }
    }

    Ok(())
}
