//! Report command implementation
//!
//! Solves the call and put implied volatilities of one underlying and
//! prints both.

use clap::Args;
use pricer_models::instruments::{year_fraction_from_days, OptionContract, OptionKind};
use tracing::info;

use super::{render_solve_rows, solve_row, SolveRow};
use crate::config::CliConfig;
use crate::Result;

/// Market inputs of the report. Defaults reproduce the reference quote.
#[derive(Debug, Clone, Args)]
pub struct ReportArgs {
    /// Spot price of the underlying
    #[arg(long, default_value_t = 2.651)]
    pub spot: f64,

    /// Strike price
    #[arg(long, default_value_t = 2.65)]
    pub strike: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, default_value_t = 0.03, allow_negative_numbers = true)]
    pub rate: f64,

    /// Days to expiry (ACT/365)
    #[arg(long, default_value_t = 28.0)]
    pub expiry_days: f64,

    /// Observed call price
    #[arg(long, default_value_t = 0.1205)]
    pub call_price: f64,

    /// Observed put price
    #[arg(long, default_value_t = 0.1134)]
    pub put_price: f64,
}

/// Solve both legs of the report
pub fn build(args: &ReportArgs, config: &CliConfig) -> Result<Vec<SolveRow>> {
    let call = OptionContract::new(
        args.spot,
        args.strike,
        args.rate,
        year_fraction_from_days(args.expiry_days),
        OptionKind::Call,
    )?;
    let put = call.with_kind(OptionKind::Put);
    let solver_config = config.implied_vol_config();

    Ok(vec![
        solve_row(&call, args.call_price, &solver_config)?,
        solve_row(&put, args.put_price, &solver_config)?,
    ])
}

/// Run the report command
pub fn run(args: &ReportArgs, config: &CliConfig) -> Result<()> {
    info!("Generating implied volatility report...");
    info!(
        spot = args.spot,
        strike = args.strike,
        rate = args.rate,
        expiry_days = args.expiry_days,
        "Report inputs"
    );

    let rows = build(args, config)?;
    print!("{}", render_solve_rows(&rows, config.format)?);

    info!("Report complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use approx::assert_relative_eq;
    use clap::Parser;
    use pricer_models::implied_vol::VolatilityEstimate;

    #[derive(Parser)]
    struct ReportCommand {
        #[command(flatten)]
        args: ReportArgs,
    }

    fn args_from(flags: &[&str]) -> ReportArgs {
        let argv = std::iter::once("report").chain(flags.iter().copied());
        ReportCommand::parse_from(argv).args
    }

    #[test]
    fn test_default_flags_are_reference_quote() {
        let args = args_from(&[]);
        assert_eq!(args.spot, 2.651);
        assert_eq!(args.strike, 2.65);
        assert_eq!(args.rate, 0.03);
        assert_eq!(args.expiry_days, 28.0);
        assert_eq!(args.call_price, 0.1205);
        assert_eq!(args.put_price, 0.1134);
    }

    #[test]
    fn test_reference_report() {
        let rows = build(&args_from(&[]), &CliConfig::default()).unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0].kind, OptionKind::Call);
        assert_relative_eq!(
            rows[0].estimate.volatility().unwrap(),
            0.3998910522460938,
            epsilon = 1e-12
        );
        assert_eq!(rows[0].estimate.iterations(), 15);

        assert_eq!(rows[1].kind, OptionKind::Put);
        assert_relative_eq!(
            rows[1].estimate.volatility().unwrap(),
            0.39986083984375004,
            epsilon = 1e-12
        );
        assert_eq!(rows[1].estimate.iterations(), 12);
    }

    #[test]
    fn test_report_table() {
        let rows = build(&args_from(&[]), &CliConfig::default()).unwrap();
        let table = render_solve_rows(&rows, OutputFormat::Table).unwrap();
        assert!(table.contains("│ call │ 0.1205 │ 0.399891    │ 15         │"));
        assert!(table.contains("│ put  │ 0.1134 │ 0.399861    │ 12         │"));
    }

    #[test]
    fn test_unreachable_price_reports_not_found() {
        let args = args_from(&["--call-price", "0.30"]);
        let mut config = CliConfig::default();
        config.solver.check_bracket = true;

        let rows = build(&args, &config).unwrap();
        assert_eq!(rows[0].estimate, VolatilityEstimate::NotFound { iterations: 0 });
        assert!(rows[1].estimate.is_converged());
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let args = args_from(&["--expiry-days", "0"]);
        assert!(build(&args, &CliConfig::default()).is_err());
    }
}
