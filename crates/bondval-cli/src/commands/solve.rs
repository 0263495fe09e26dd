//! Solve command implementation.
//!
//! Finds the yield implied by a clean price.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use bondval_config::{PricingConfig, Validate};

use crate::cli::OutputFormat;
use crate::commands::{validate_price, BondArgs};
use crate::error::CliError;
use crate::output::{print_header, print_output, print_single, KeyValue};

/// Arguments for the solve command.
#[derive(Args, Debug)]
pub struct SolveArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Clean price to match
    #[arg(long, allow_hyphen_values = true)]
    pub price: f64,

    /// Starting yield (overrides the configured initial guess)
    #[arg(long = "yield", allow_hyphen_values = true)]
    pub yield_value: Option<f64>,

    /// Maximum Newton iterations
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Absolute dirty-price tolerance
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Forward-difference step for the price derivative
    #[arg(long)]
    pub difference_step: Option<f64>,
}

/// Yield solve result.
#[derive(Debug, Serialize)]
pub struct SolveOutput {
    pub clean_price: f64,
    pub accrued_interest: f64,
    pub dirty_price: f64,
    pub yield_value: f64,
    pub iterations: u32,
    pub residual: f64,
}

/// Execute the solve command.
pub fn execute(args: &SolveArgs, config: &PricingConfig, format: OutputFormat) -> Result<()> {
    let price = validate_price(args.price)?;

    let mut settings = config.solver;
    if let Some(guess) = args.yield_value {
        settings.initial_guess = guess;
    }
    if let Some(max_iterations) = args.max_iterations {
        settings.max_iterations = max_iterations;
    }
    if let Some(tolerance) = args.tolerance {
        settings.tolerance = tolerance;
    }
    if let Some(step) = args.difference_step {
        settings.difference_step = step;
    }

    let problems = settings.validate();
    if !problems.is_empty() {
        let message = problems
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(CliError::InvalidSettings(message).into());
    }

    let bond = args.bond.to_bond(settings.initial_guess, config)?;
    let accrued = bond.accrued_interest()?.amount;
    let result = bond
        .solve_yield(price, &settings.to_yield_solver())
        .with_context(|| format!("no yield reprices the bond to {price}"))?;

    let output = SolveOutput {
        clean_price: price,
        accrued_interest: accrued,
        dirty_price: price + accrued,
        yield_value: result.yield_value,
        iterations: result.iterations,
        residual: result.residual,
    };

    match format {
        OutputFormat::Table => {
            print_header("Yield to Maturity");
            let rows = vec![
                KeyValue::from_f64("Clean Price (Input)", output.clean_price, 6),
                KeyValue::from_f64("Accrued Interest", output.accrued_interest, 6),
                KeyValue::from_f64("Dirty Price", output.dirty_price, 6),
                KeyValue::from_percent("Yield to Maturity", output.yield_value),
                KeyValue::new("Iterations", output.iterations.to_string()),
                KeyValue::new("Residual", format!("{:.2e}", output.residual)),
            ];
            print_output(&rows, format)?;
        }
        OutputFormat::Json | OutputFormat::Csv => print_single(&output, format)?,
        OutputFormat::Minimal => println!("{:.8}", output.yield_value),
    }

    Ok(())
}
