//! Schedule command implementation.
//!
//! Prints every remaining payment with its year fraction and present value.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bondval_bonds::cashflows::CashFlowRow;
use bondval_config::PricingConfig;

use crate::cli::OutputFormat;
use crate::commands::BondArgs;
use crate::output::{print_header, print_output};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Yield to maturity as a decimal (e.g., 0.05 for 5%)
    #[arg(long = "yield", allow_hyphen_values = true)]
    pub yield_value: f64,
}

/// One line of the cash flow table.
#[derive(Debug, Serialize, Tabled)]
pub struct ScheduleRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Days")]
    pub days: i64,
    #[tabled(rename = "Basis")]
    pub basis: u32,
    #[tabled(rename = "Years", display_with = "fixed6")]
    pub years: f64,
    #[tabled(rename = "Discount Factor", display_with = "fixed6")]
    pub discount_factor: f64,
    #[tabled(rename = "Cash Flow", display_with = "fixed4")]
    pub cash_flow: f64,
    #[tabled(rename = "Present Value", display_with = "fixed4")]
    pub present_value: f64,
}

fn fixed6(value: &f64) -> String {
    format!("{value:.6}")
}

fn fixed4(value: &f64) -> String {
    format!("{value:.4}")
}

impl From<&CashFlowRow> for ScheduleRow {
    fn from(row: &CashFlowRow) -> Self {
        Self {
            date: row.date.to_dmy_string(),
            days: row.days,
            basis: row.basis,
            years: row.cumulative_years,
            discount_factor: row.discount_factor,
            cash_flow: row.cash_flow,
            present_value: row.discounted_cash_flow,
        }
    }
}

/// Execute the schedule command.
pub fn execute(args: &ScheduleArgs, config: &PricingConfig, format: OutputFormat) -> Result<()> {
    let bond = args.bond.to_bond(args.yield_value, config)?;
    let table = bond.cash_flow_table()?;
    let rows: Vec<ScheduleRow> = table.iter().map(ScheduleRow::from).collect();

    match format {
        OutputFormat::Table => {
            print_header("Cash Flow Schedule");
            print_output(&rows, format)?;
            println!("Dirty price: {:.6}", table.dirty_price());
        }
        OutputFormat::Json | OutputFormat::Csv => print_output(&rows, format)?,
        OutputFormat::Minimal => {
            for row in &rows {
                println!("{}", row.date);
            }
        }
    }

    Ok(())
}
