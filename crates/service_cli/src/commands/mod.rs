//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Shared contract
//! arguments and output rendering live here.

pub mod price;
pub mod report;
pub mod solve;

use clap::Args;
use pricer_models::implied_vol::{ImpliedVolConfig, ImpliedVolSolver, VolatilityEstimate};
use pricer_models::instruments::{year_fraction_from_days, OptionContract, OptionKind};
use serde::Serialize;
use tracing::info;

use crate::config::OutputFormat;
use crate::{CliError, Result};

/// Contract terms shared by `price` and `solve`
#[derive(Debug, Clone, Args)]
pub struct ContractArgs {
    /// Spot price of the underlying
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    #[command(flatten)]
    pub expiry: ExpiryArgs,

    /// Option kind (call, put)
    #[arg(short, long, default_value = "call")]
    pub kind: OptionKind,
}

/// Time to expiry, in calendar days or in years
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct ExpiryArgs {
    /// Days to expiry (ACT/365)
    #[arg(long)]
    pub expiry_days: Option<f64>,

    /// Years to expiry
    #[arg(long)]
    pub expiry_years: Option<f64>,
}

impl ExpiryArgs {
    /// Time to expiry in years
    pub fn years(&self) -> Result<f64> {
        match (self.expiry_days, self.expiry_years) {
            (Some(days), None) => Ok(year_fraction_from_days(days)),
            (None, Some(years)) => Ok(years),
            _ => Err(CliError::InvalidArgument(
                "exactly one of --expiry-days or --expiry-years is required".to_string(),
            )),
        }
    }
}

impl ContractArgs {
    /// Build a validated contract
    pub fn to_contract(&self) -> Result<OptionContract> {
        let expiry = self.expiry.years()?;
        Ok(OptionContract::new(
            self.spot,
            self.strike,
            self.rate,
            expiry,
            self.kind,
        )?)
    }
}

/// One implied volatility search and its outcome
#[derive(Debug, Clone, Serialize)]
pub struct SolveRow {
    pub kind: OptionKind,
    pub spot: f64,
    pub strike: f64,
    pub rate: f64,
    pub expiry: f64,
    pub target_price: f64,
    pub estimate: VolatilityEstimate,
}

impl SolveRow {
    fn table_cells(&self) -> Vec<String> {
        vec![
            self.kind.to_string(),
            format!("{:.4}", self.target_price),
            format!("{:.6}", self.estimate),
            self.estimate.iterations().to_string(),
        ]
    }
}

const SOLVE_HEADERS: [&str; 4] = ["Kind", "Target", "Implied Vol", "Iterations"];

/// Solve `contract` at `target_price` and record the result
pub(crate) fn solve_row(
    contract: &OptionContract,
    target_price: f64,
    config: &ImpliedVolConfig,
) -> Result<SolveRow> {
    let estimate = ImpliedVolSolver::new(*config).solve(contract, target_price)?;

    match estimate {
        VolatilityEstimate::Converged {
            volatility,
            iterations,
        } => info!(kind = %contract.kind(), volatility, iterations, "implied volatility found"),
        VolatilityEstimate::NotFound { iterations } => {
            info!(kind = %contract.kind(), iterations, "implied volatility not found")
        }
    }

    Ok(SolveRow {
        kind: contract.kind(),
        spot: contract.spot(),
        strike: contract.strike(),
        rate: contract.rate(),
        expiry: contract.expiry(),
        target_price,
        estimate,
    })
}

/// Render solve results in the requested format
pub(crate) fn render_solve_rows(rows: &[SolveRow], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Table => {
            let cells: Vec<Vec<String>> = rows.iter().map(SolveRow::table_cells).collect();
            Ok(render_table(&SOLVE_HEADERS, &cells))
        }
    }
}

/// Box-drawn table with left-aligned columns
pub(crate) fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, segments.join(mid), right)
    };
    let line = |cells: Vec<&str>| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!(" {:<width$} ", cell, width = width))
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let mut out = rule("┌", "┬", "┐");
    out.push_str(&line(headers.to_vec()));
    out.push_str(&rule("├", "┼", "┤"));
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}
