//! Bondval CLI - Command-line valuation of annual fixed-coupon bonds.
//!
//! # Usage
//!
//! ```bash
//! # Discounted cash flow table
//! bondval schedule --settlement 05-09-2024 --maturity 18-09-2030 --yield 0.09596 --coupon 7.75
//!
//! # Price, accrued interest and duration
//! bondval price --settlement 05-09-2024 --maturity 18-09-2030 --yield 0.09596 --coupon 7.75
//!
//! # Yield implied by a clean price
//! bondval --format json solve --settlement 05-09-2024 --maturity 18-09-2030 --coupon 7.75 --price 91.8157
//! ```
//!
//! Set `RUST_LOG=debug` to see solver progress on stderr.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;
    tracing::debug!(?config, "loaded pricing configuration");

    // Execute command
    match cli.command {
        Commands::Schedule(args) => commands::schedule::execute(&args, &config, cli.format)?,
        Commands::Price(args) => commands::price::execute(&args, &config, cli.format)?,
        Commands::Solve(args) => commands::solve::execute(&args, &config, cli.format)?,
    }

    Ok(())
}
