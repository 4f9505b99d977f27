//! bam-verify CLI: check every matmul kernel against the reference model.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use bam_core::config::{BOUND, DIM, INPUT_WIDTH, RESULT_WIDTH};
use bam_core::Strategy;
use bam_verify::{run_default, write_report, HarnessConfig, Verdict};
use clap::{Parser, ValueEnum};
use log::{error, info};

#[derive(Parser)]
#[command(name = "bam-verify")]
#[command(about = "Equivalence check of bit-accurate matmul kernels against a reference model")]
#[command(version)]
struct Cli {
    /// Number of bounded-random scenarios
    #[arg(short, long, default_value_t = bam_verify::config::DEFAULT_TRIALS)]
    trials: usize,

    /// Random seed for reproducibility (drawn at random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write the text report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Kernels to compare against the reference
    #[arg(short, long, value_enum, default_value = "both")]
    strategy: StrategyArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Both,
    Transpose,
    Fused,
}

impl StrategyArg {
    fn strategies(self) -> Vec<Strategy> {
        match self {
            StrategyArg::Both => Strategy::ALL.to_vec(),
            StrategyArg::Transpose => vec![Strategy::TransposeThenMultiply],
            StrategyArg::Fused => vec![Strategy::Fused],
        }
    }
}

fn run(cli: Cli) -> bam_verify::Result<Verdict> {
    let mut config = match cli.seed {
        Some(seed) => HarnessConfig::with_seed(seed),
        None => HarnessConfig::default(),
    };
    config.trials = cli.trials;
    config.strategies = cli.strategy.strategies();
    info!(
        "N={} bound={} input width={} result width={} seed={}",
        DIM, BOUND, INPUT_WIDTH, RESULT_WIDTH, config.seed
    );

    let report = run_default(&config)?;

    if let Some(path) = &cli.output {
        let mut out = BufWriter::new(File::create(path)?);
        write_report(&mut out, &report)?;
        out.flush()?;
        info!("report written to {}", path.display());
    }

    let verdict = report.verdict();
    writeln!(io::stdout(), "{}", verdict)?;
    Ok(verdict)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(Verdict::Pass) => ExitCode::SUCCESS,
        Ok(Verdict::Fail) => ExitCode::from(1),
        Err(e) => {
            error!("{}", e);
            ExitCode::from(2)
        }
    }
}
