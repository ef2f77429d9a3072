//! Price command implementation
//!
//! Prices a single contract at a given volatility with Black-Scholes.

use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::{OptionContract, OptionKind};
use serde::Serialize;
use tracing::info;

use super::{render_table, ContractArgs};
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Forward pricing result
#[derive(Debug, Clone, Serialize)]
pub struct PriceRow {
    pub kind: OptionKind,
    pub spot: f64,
    pub strike: f64,
    pub rate: f64,
    pub expiry: f64,
    pub volatility: f64,
    pub price: f64,
    pub vega: f64,
}

/// Price `contract` at `volatility`
pub fn build(contract: &OptionContract, volatility: f64) -> Result<PriceRow> {
    let model = BlackScholes::new(contract.spot(), contract.rate(), volatility)?;

    Ok(PriceRow {
        kind: contract.kind(),
        spot: contract.spot(),
        strike: contract.strike(),
        rate: contract.rate(),
        expiry: contract.expiry(),
        volatility,
        price: model.price_option(contract),
        vega: model.vega(contract.strike(), contract.expiry()),
    })
}

/// Render a pricing result in the requested format
pub fn render(row: &PriceRow, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(row)?),
        OutputFormat::Table => Ok(render_table(
            &["Kind", "Spot", "Strike", "Rate", "Expiry", "Vol", "Price", "Vega"],
            &[vec![
                row.kind.to_string(),
                row.spot.to_string(),
                row.strike.to_string(),
                row.rate.to_string(),
                format!("{:.6}", row.expiry),
                row.volatility.to_string(),
                format!("{:.6}", row.price),
                format!("{:.6}", row.vega),
            ]],
        )),
    }
}

/// Run the price command
pub fn run(args: &ContractArgs, volatility: f64, config: &CliConfig) -> Result<()> {
    let contract = args.to_contract()?;
    info!(kind = %contract.kind(), volatility, "Pricing contract");

    let row = build(&contract, volatility)?;
    print!("{}", render(&row, config.format)?);

    info!(price = row.price, "Pricing complete");
    Ok(())
}
