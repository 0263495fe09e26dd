//! Price command implementation.
//!
//! Values a bond at a given yield.

use anyhow::Result;
use clap::Args;

use bondval_bonds::pricing::Valuation;
use bondval_config::PricingConfig;

use crate::cli::OutputFormat;
use crate::commands::BondArgs;
use crate::output::{print_header, print_output, print_single, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Yield to maturity as a decimal (e.g., 0.05 for 5%)
    #[arg(long = "yield", allow_hyphen_values = true)]
    pub yield_value: f64,
}

fn summary(valuation: &Valuation) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Settlement", valuation.settlement.to_dmy_string()),
        KeyValue::new("Maturity", valuation.maturity.to_dmy_string()),
        KeyValue::new("Previous Coupon", valuation.previous_coupon.to_dmy_string()),
        KeyValue::new("Next Coupon", valuation.next_coupon.to_dmy_string()),
        KeyValue::from_percent("Yield", valuation.yield_value),
        KeyValue::from_f64("Dirty Price", valuation.dirty_price, 6),
        KeyValue::from_f64("Accrued Interest", valuation.accrued_interest, 6),
        KeyValue::from_f64("Clean Price", valuation.clean_price, 6),
        KeyValue::from_f64("Macaulay Duration", valuation.macaulay_duration, 6),
        KeyValue::from_f64("Modified Duration", valuation.modified_duration, 6),
    ]
}

/// Execute the price command.
pub fn execute(args: &PriceArgs, config: &PricingConfig, format: OutputFormat) -> Result<()> {
    let bond = args.bond.to_bond(args.yield_value, config)?;
    let valuation = bond.valuation()?;

    match format {
        OutputFormat::Table => {
            print_header("Bond Valuation");
            print_output(&summary(&valuation), format)?;
        }
        OutputFormat::Json | OutputFormat::Csv => print_single(&valuation, format)?,
        OutputFormat::Minimal => println!("{:.6}", valuation.clean_price),
    }

    Ok(())
}
