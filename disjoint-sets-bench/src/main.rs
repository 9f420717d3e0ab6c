use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use disjoint_sets_bench::demo;
use disjoint_sets_bench::report::{self, BenchReport};
use disjoint_sets_bench::timing::{self, BenchConfig};
use disjoint_sets_bench::verify::{self, VerifyConfig};

#[derive(Parser)]
#[command(
    name = "disjoint-sets-bench",
    about = "Disjoint-set differential test harness and benchmark"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk through merging a five-element universe.
    Demo,
    /// Compare against the list-based reference for every size below a bound.
    Verify {
        /// Check universe sizes 0..max_n.
        #[arg(long, default_value_t = 100)]
        max_n: usize,
        /// Base seed for the random merge sequences.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Output format: terminal, json.
        #[arg(long, default_value = "terminal")]
        format: String,
    },
    /// Time merges for universe sizes 2^min_exp through 2^max_exp.
    Bench {
        /// Smallest size exponent.
        #[arg(long, default_value_t = 5)]
        min_exp: u32,
        /// Largest size exponent.
        #[arg(long, default_value_t = 19)]
        max_exp: u32,
        /// Base seed for the random merge sequences.
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Output format: terminal, json.
        #[arg(long, default_value = "terminal")]
        format: String,
        /// Also write the JSON report to this file.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Demo => {
            demo::print(&demo::walkthrough());
            Ok(())
        }
        Command::Verify {
            max_n,
            seed,
            format,
        } => cmd_verify(VerifyConfig { max_n, seed }, &format),
        Command::Bench {
            min_exp,
            max_exp,
            seed,
            format,
            output,
        } => cmd_bench(
            BenchConfig {
                min_exp,
                max_exp,
                seed,
            },
            &format,
            output,
        ),
    }
}

fn cmd_verify(config: VerifyConfig, format: &str) -> Result<()> {
    let result = verify::run(&config);

    match format {
        "json" => println!("{}", report::to_json(&result)),
        _ => report::print_verify(&result),
    }

    if !result.passed() {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_bench(config: BenchConfig, format: &str, output: Option<PathBuf>) -> Result<()> {
    anyhow::ensure!(
        config.min_exp <= config.max_exp,
        "--min-exp ({}) must not exceed --max-exp ({})",
        config.min_exp,
        config.max_exp
    );
    anyhow::ensure!(
        config.max_exp < usize::BITS,
        "--max-exp ({}) is too large",
        config.max_exp
    );

    let full = BenchReport::new(config.seed, timing::run(&config));

    match format {
        "json" => println!("{}", report::to_json(&full)),
        _ => report::print_terminal(&full),
    }

    if let Some(path) = output {
        std::fs::write(&path, report::to_json(&full))
            .with_context(|| format!("failed to write report: {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote report");
    }

    Ok(())
}
