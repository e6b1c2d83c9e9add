use serde_json::{json, Map, Value};
use stockmine_core::{aggregate_history, best_months, worst_months, AnalysisConfig};

use crate::cli::StockArgs;
use crate::error::CliError;

use super::{load_stock, split_month_warnings, CommandResult};

/// Which end(s) of the ranking a command reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKind {
    Best,
    Worst,
    Both,
}

impl RankKind {
    const fn includes_best(self) -> bool {
        matches!(self, Self::Best | Self::Both)
    }

    const fn includes_worst(self) -> bool {
        matches!(self, Self::Worst | Self::Both)
    }
}

pub fn run(
    args: &StockArgs,
    config: &AnalysisConfig,
    kind: RankKind,
) -> Result<CommandResult, CliError> {
    let history = load_stock(args)?;
    let series = aggregate_history(&history, config.grouping)?;
    let warnings = split_month_warnings(&series);

    let mut data = Map::new();
    data.insert(String::from("symbol"), json!(history.symbol));
    data.insert(String::from("months"), json!(series.len()));
    if kind.includes_best() {
        let best = best_months(&series, config.top_n);
        data.insert(String::from("best"), serde_json::to_value(best)?);
    }
    if kind.includes_worst() {
        let worst = worst_months(&series, config.top_n);
        data.insert(String::from("worst"), serde_json::to_value(worst)?);
    }

    Ok(
        CommandResult::ok(Value::Object(data), vec![history.symbol], history.records.len())
            .with_warnings(warnings),
    )
}
