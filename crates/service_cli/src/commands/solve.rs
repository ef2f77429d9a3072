//! Solve command implementation
//!
//! Finds the implied volatility of a single contract.

use tracing::info;

use super::{render_solve_rows, solve_row, ContractArgs};
use crate::config::CliConfig;
use crate::Result;

/// Run the solve command
pub fn run(args: &ContractArgs, target_price: f64, config: &CliConfig) -> Result<()> {
    let contract = args.to_contract()?;
    let solver_config = config.implied_vol_config();

    info!(
        kind = %contract.kind(),
        target_price,
        lower_vol = solver_config.lower_vol,
        upper_vol = solver_config.upper_vol,
        "Solving implied volatility"
    );

    let row = solve_row(&contract, target_price, &solver_config)?;
    print!("{}", render_solve_rows(&[row], config.format)?);
    Ok(())
}
