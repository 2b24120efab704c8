use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, info, LevelFilter};

use dckp_solver::experiment::{self, BatchPhase, ExperimentError, ExperimentRecord};

#[derive(Debug, Parser)]
#[command(author, version, about = "Heuristic solver for the Disjunctively Constrained Knapsack Problem", long_about = None)]
struct Args {
    /// Enables debug-level log output.
    #[arg(short = 'v', long = "verbose", global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Runs every method on a single instance.
    Single {
        /// Instance file to solve.
        instance: PathBuf,
        /// Optional CSV output path.
        csv: Option<PathBuf>,
    },
    /// Runs the constructive layer and both local searches on every
    /// instance under a directory.
    Batch {
        dir: PathBuf,
        csv: PathBuf,
    },
    /// Constructive layer only: the four greedy strategies plus GRASP.
    BatchEtapa1 {
        dir: PathBuf,
        csv: PathBuf,
    },
    /// GRASP, then hill climbing and VND seeded from the GRASP
    /// solution.
    BatchEtapa2 {
        dir: PathBuf,
        csv: PathBuf,
    },
    /// Calibrates the GRASP alpha parameter on one instance.
    Tune {
        instance: PathBuf,
        csv: Option<PathBuf>,
    },
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new().filter_level(level_filter).init();
}

fn report(records: &[ExperimentRecord]) {
    for record in records {
        info!(
            "{}: profit={} weight={} items={} time={:.4}s feasible={}",
            record.method,
            record.profit,
            record.weight,
            record.num_items,
            record.time,
            if record.feasible { "Yes" } else { "No" },
        );
    }
}

fn save(records: &[ExperimentRecord], csv: Option<&PathBuf>) -> Result<(), ExperimentError> {
    if let Some(path) = csv {
        experiment::write_csv(records, path)?;
        info!("results written to {}", path.display());
    }
    Ok(())
}

fn run(command: &Command) -> Result<(), ExperimentError> {
    match command {
        Command::Single { instance, csv } => {
            let records = experiment::run_single(instance)?;
            report(&records);
            save(&records, csv.as_ref())?;
        }
        Command::Batch { dir, csv } => {
            let records = experiment::run_batch(dir, BatchPhase::Full)?;
            save(&records, Some(csv))?;
        }
        Command::BatchEtapa1 { dir, csv } => {
            let records = experiment::run_batch(dir, BatchPhase::Constructive)?;
            save(&records, Some(csv))?;
        }
        Command::BatchEtapa2 { dir, csv } => {
            let records = experiment::run_batch(dir, BatchPhase::LocalSearch)?;
            save(&records, Some(csv))?;
        }
        Command::Tune { instance, csv } => {
            let records = experiment::tune_alpha(instance, 20)?;
            report(&records);
            save(&records, csv.as_ref())?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    configure_logging(args.verbose);

    match run(&args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("execution failed: {error}");
            ExitCode::FAILURE
        }
    }
}
