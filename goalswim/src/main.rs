//! # goalswim
//!
//! Roll out a random policy in the goal swimmer environment and report the
//! episode diagnostics. Set `RUST_LOG` to control log verbosity.

use anyhow::Result;
use clap::Parser;
use goalswim::app::{self, RunOptions};
use goalswim::cli::Args;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.env_config()?;
    let options = RunOptions {
        episodes: args.episodes,
        max_steps: args.max_steps,
        goal: args.goal,
        seed: args.seed,
    };

    let diagnostics = app::run(&config, &options)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
    }
    Ok(())
}
