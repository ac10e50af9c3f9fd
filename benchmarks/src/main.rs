use std::path::PathBuf;

use clap::Parser;
use vector_math::{Compiled, Fallback};

use benchmarks::config::{DEFAULT_SAMPLES, DEFAULT_T_FINAL};
use benchmarks::harness::run_pass;
use benchmarks::{BenchConfig, BenchmarkErrors};

/// Times the spring pendulum equations of motion under the compiled and
/// fallback numeric backends, single-call and through a full integration.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of dense output samples across the time grid
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// End of the integration interval in seconds
    #[arg(long, default_value_t = DEFAULT_T_FINAL)]
    t_final: f64,

    /// Folder to write per-mode trajectory CSVs into
    #[arg(long)]
    save_folder: Option<PathBuf>,
}

fn main() -> Result<(), BenchmarkErrors> {
    let cli = Cli::parse();

    let mut config = BenchConfig::new(cli.samples, cli.t_final);
    if let Some(folder) = cli.save_folder {
        config = config.with_save_folder(folder);
    }

    // Each pass is reported before the next one starts, so a failure in a
    // later pass never withholds a completed measurement.
    let compiled = run_pass(&config, Compiled)?;
    print!("{compiled}");

    let fallback = run_pass(&config, Fallback)?;
    println!("---");
    print!("{fallback}");

    Ok(())
}
