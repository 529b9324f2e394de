use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use rootwalk_domain::{CliOverrides, ResolutionOutcome};
use std::time::Instant;
use tracing::debug;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "rootwalk")]
#[command(version)]
#[command(about = "Resolve a domain to an IPv4 address by walking the DNS hierarchy yourself, or via the system resolver")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Per-query timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Maximum iterative steps before giving up
    #[arg(long, value_name = "STEPS")]
    max_steps: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Walk the delegation chain starting from the root servers
    Iterative {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        domain: String,
    },
    /// Hand the whole lookup to the system's recursive resolver
    Recursive {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        domain: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        query_timeout_secs: cli.timeout,
        max_steps: cli.max_steps,
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let services = di::Services::new(&config);
    let started = Instant::now();

    // A failed resolution is a reported outcome, not a process error;
    // only usage problems exit nonzero.
    match cli.mode {
        Mode::Iterative { domain } => {
            let resolution = services.iterative.execute(&domain).await;
            debug!(hops = resolution.referral_hops, "Iterative walk finished");

            match resolution.outcome {
                ResolutionOutcome::Answered(address) => println!("{} -> {}", domain, address),
                ResolutionOutcome::Failed(reason) => println!("Resolution failed: {}", reason),
            }
        }
        Mode::Recursive { domain } => match services.recursive.execute(&domain).await {
            Ok(address) => println!("{} -> {}", domain, address),
            Err(e) => println!("Recursive lookup failed: {}", e),
        },
    }

    println!("Time taken: {:.3} seconds", started.elapsed().as_secs_f64());
    Ok(())
}
