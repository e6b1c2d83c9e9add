use stockmine_core::{aggregate_history, AnalysisConfig};

use crate::cli::StockArgs;
use crate::error::CliError;

use super::{load_stock, split_month_warnings, CommandResult};

pub fn run(args: &StockArgs, config: &AnalysisConfig) -> Result<CommandResult, CliError> {
    let history = load_stock(args)?;
    let series = aggregate_history(&history, config.grouping)?;
    let warnings = split_month_warnings(&series);

    let data = serde_json::to_value(&series)?;
    Ok(CommandResult::ok(data, vec![history.symbol], history.records.len())
        .with_warnings(warnings))
}
