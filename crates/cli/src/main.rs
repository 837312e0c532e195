//! approx-pi CLI
//!
//! Times a truncated Leibniz-series approximation of π and prints the
//! estimate, its absolute error against the f64 π constant, and the
//! elapsed computation time.

use clap::Parser;
use pi_cli::{DriverConfig, driver, report};
use pi_core::ParseMode;
use std::process;

#[derive(Parser)]
#[command(name = "approx-pi")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Approximate pi with a truncated Leibniz series", long_about = None)]
struct Cli {
    /// Number of series terms to sum (atoi-style parse; missing or
    /// unparsable input counts as 0)
    #[arg(allow_negative_numbers = true)]
    intervals: Option<String>,

    /// Require the argument to be a well-formed base-10 integer
    #[arg(long)]
    strict: bool,
}

fn main() {
    // Diagnostics go to stderr; stdout carries only the report lines
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mode = if cli.strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };
    let config = DriverConfig::new().with_parse_mode(mode);

    match driver::run(cli.intervals.as_deref(), &config) {
        Ok(outcome) => {
            println!("{}", report::estimate_line(outcome.estimate, outcome.error));
            println!("{}", report::time_line(outcome.elapsed));
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
