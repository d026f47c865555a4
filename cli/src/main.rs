//! zerochase entry point for the proof-of-work demonstration.

use clap::Parser;
use zerochase_utils::format_ms;
use zerochase_work::{ParallelSearcher, SearchOutcome, WorkSearcher};

#[derive(Parser)]
#[command(
    name = "zerochase",
    about = "Brute-force a nonce whose SHA-256 digest starts with N zero hex digits"
)]
struct Cli {
    /// Witness text prepended to each candidate nonce.
    #[arg(long, default_value = "Hello, Blockchain!", env = "ZEROCHASE_WITNESS")]
    witness: String,

    /// Difficulty levels to search, in order (count of leading zero hex
    /// digits). Levels above 64 can never be satisfied and never return.
    #[arg(
        long = "difficulty",
        default_values_t = vec![4usize, 5],
        env = "ZEROCHASE_DIFFICULTY",
        value_delimiter = ','
    )]
    difficulties: Vec<usize>,

    /// Split the nonce space across all CPU cores.
    #[arg(long, env = "ZEROCHASE_PARALLEL")]
    parallel: bool,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "ZEROCHASE_LOG_LEVEL")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    zerochase_utils::init_tracing(&cli.log_level);

    tracing::debug!(
        witness = %cli.witness,
        difficulties = ?cli.difficulties,
        parallel = cli.parallel,
        "starting demonstration"
    );

    for &leading_zeros in &cli.difficulties {
        println!("Searching for a hash with {leading_zeros} leading zeros...");

        let outcome = if cli.parallel {
            ParallelSearcher.search(&cli.witness, leading_zeros)?
        } else {
            WorkSearcher.search(&cli.witness, leading_zeros)
        };

        report(&outcome);
        tracing::info!(
            leading_zeros,
            nonce = outcome.nonce,
            elapsed_ms = outcome.elapsed.as_millis() as u64,
            "search complete"
        );
    }

    Ok(())
}

fn report(outcome: &SearchOutcome) {
    println!("Found a matching hash!");
    println!("Elapsed: {}", format_ms(outcome.elapsed));
    println!("Input: {}", outcome.input);
    println!("Hash: {}", outcome.digest_hex);
    println!("Nonce: {}", outcome.nonce);
    println!("----------------------------------");
}
