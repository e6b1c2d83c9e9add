use serde_json::Value;
use stockmine_core::{compare_volatility, AnalysisConfig, AnalysisError, EnvelopeError};
use tracing::info;

use crate::cli::VolatilityArgs;
use crate::error::CliError;

use super::{load_history, CommandResult};

pub fn run(args: &VolatilityArgs, config: &AnalysisConfig) -> Result<CommandResult, CliError> {
    let first = load_history(&args.first_symbol, &args.first_file)?;
    let second = load_history(&args.second_symbol, &args.second_file)?;

    let symbols = vec![first.symbol.clone(), second.symbol.clone()];
    let record_count = first.records.len() + second.records.len();

    match compare_volatility(&first, &second, config.grouping) {
        Ok(report) => {
            info!(winner = ?report.verdict.winner(), "volatility comparison finished");
            let data = serde_json::to_value(&report)?;
            Ok(CommandResult::ok(data, symbols, record_count))
        }
        Err(error @ AnalysisError::InsufficientData { .. }) => {
            Ok(CommandResult::ok(Value::Null, symbols, record_count)
                .with_error(EnvelopeError::from(&error)))
        }
        Err(error) => Err(error.into()),
    }
}
