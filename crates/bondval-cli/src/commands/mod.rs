//! CLI command implementations.

pub mod price;
pub mod schedule;
pub mod solve;

pub use price::PriceArgs;
pub use schedule::ScheduleArgs;
pub use solve::SolveArgs;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use bondval_bonds::instruments::FixedBond;
use bondval_config::PricingConfig;

use crate::error::{CliError, CliResult};

/// Bond terms shared by every command.
#[derive(Args, Debug, Clone)]
pub struct BondArgs {
    /// Settlement date (DD-MM-YYYY)
    #[arg(long)]
    pub settlement: String,

    /// Maturity date (DD-MM-YYYY)
    #[arg(long)]
    pub maturity: String,

    /// Annual coupon amount in currency units (e.g., 7.75)
    #[arg(long)]
    pub coupon: f64,

    /// Par (redemption) value
    #[arg(long, default_value = "100")]
    pub par: f64,
}

impl BondArgs {
    /// Builds the bond at `yield_value` with the configured conventions.
    pub fn to_bond(&self, yield_value: f64, config: &PricingConfig) -> Result<FixedBond> {
        let bond = FixedBond::from_strings(
            &self.settlement,
            &self.maturity,
            yield_value,
            self.coupon,
            self.par,
        )
        .context("invalid bond terms")?;
        Ok(bond.with_conventions(config.conventions))
    }
}

/// Loads the pricing configuration, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<PricingConfig> {
    match path {
        Some(path) => PricingConfig::from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Ok(PricingConfig::default()),
    }
}

/// Validates a price value.
pub fn validate_price(price: f64) -> CliResult<f64> {
    if !(price.is_finite() && price > 0.0) {
        return Err(CliError::InvalidPrice(price));
    }
    Ok(price)
}
