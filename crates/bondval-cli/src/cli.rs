//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{PriceArgs, ScheduleArgs, SolveArgs};

/// Bondval - Annual fixed-coupon bond valuation
#[derive(Parser)]
#[command(name = "bondval")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Pricing configuration file (TOML)
    #[arg(short, long, env = "BONDVAL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the coupon schedule with discounted cash flows
    Schedule(ScheduleArgs),

    /// Price a bond at a yield (dirty, clean, accrued, duration)
    Price(PriceArgs),

    /// Solve for the yield implied by a clean price
    Solve(SolveArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the headline value)
    Minimal,
}
