mod monthly;
mod rank;
mod volatility;

use serde_json::Value;
use stockmine_core::{
    split_months, AnalysisConfig, Envelope, EnvelopeError, EnvelopeMeta, JsonFileSource,
    MonthlySeries, PriceHistory, RecordSource, Symbol,
};
use tracing::warn;
use uuid::Uuid;

use crate::cli::{Cli, Command, StockArgs};
use crate::error::CliError;

use self::rank::RankKind;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
    pub symbols: Vec<Symbol>,
    pub record_count: usize,
}

impl CommandResult {
    pub fn ok(data: Value, symbols: Vec<Symbol>, record_count: usize) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
            symbols,
            record_count,
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn with_error(mut self, error: EnvelopeError) -> Self {
        self.errors.push(error);
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let config = resolve_config(cli)?;

    let CommandResult {
        data,
        warnings,
        errors,
        symbols,
        record_count,
    } = match &cli.command {
        Command::Monthly(args) => monthly::run(args, &config)?,
        Command::Best(args) => rank::run(args, &config, RankKind::Best)?,
        Command::Worst(args) => rank::run(args, &config, RankKind::Worst)?,
        Command::Report(args) => rank::run(args, &config, RankKind::Both)?,
        Command::Volatility(args) => volatility::run(args, &config)?,
    };

    let mut meta = EnvelopeMeta::new(
        Uuid::new_v4().to_string(),
        symbols,
        record_count,
        config.grouping,
    )?;
    for warning in warnings {
        meta.push_warning(warning);
    }

    Envelope::with_errors(meta, data, errors).map_err(CliError::from)
}

/// Environment settings first, then command-line flags on top.
fn resolve_config(cli: &Cli) -> Result<AnalysisConfig, CliError> {
    let mut config = AnalysisConfig::from_env()?;
    if let Some(top) = cli.top {
        config = config.with_top_n(top)?;
    }
    if let Some(grouping) = cli.grouping {
        config = config.with_grouping(grouping.into());
    }
    Ok(config)
}

fn load_history(symbol: &str, file: &std::path::Path) -> Result<PriceHistory, CliError> {
    let symbol = Symbol::parse(symbol)?;
    Ok(JsonFileSource::new(symbol, file).load()?)
}

fn load_stock(args: &StockArgs) -> Result<PriceHistory, CliError> {
    load_history(&args.symbol, &args.file)
}

/// One warning per month that was split into several entries.
fn split_month_warnings(series: &MonthlySeries) -> Vec<String> {
    let label = series
        .symbol
        .as_ref()
        .map_or_else(|| String::from("input"), ToString::to_string);

    split_months(series)
        .into_iter()
        .map(|month| {
            warn!(symbol = %label, %month, "month records are not contiguous");
            format!("{label}: records for {month} are not contiguous; the month appears more than once")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use clap::Parser;
    use serde_json::json;
    use stockmine_core::MonthGrouping;

    use super::*;

    const TWO_MONTHS: &str = r#"[
        {"Date": "2005-01-03", "Close": "200.00", "Volume": "100"},
        {"Date": "2005-01-04", "Close": "210.00", "Volume": "300"},
        {"Date": "2005-02-01", "Close": "190.00", "Volume": "50"},
        {"Date": "2005-02-02", "Close": "195.00", "Volume": "50"}
    ]"#;

    const SPLIT_MONTH: &str = r#"[
        {"Date": "2005-01-03", "Close": 100, "Volume": 10},
        {"Date": "2005-02-01", "Close": 200, "Volume": 10},
        {"Date": "2005-01-04", "Close": 300, "Volume": 10}
    ]"#;

    fn write(dir: &Path, name: &str, contents: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, contents).expect("write fixture");
        path.display().to_string()
    }

    fn run_args(args: &[&str]) -> Result<Envelope<Value>, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("stockmine").chain(args.iter().copied()))
            .expect("valid arguments");
        run(&cli)
    }

    #[test]
    fn monthly_lists_every_month() {
        let dir = tempfile::tempdir().expect("temp dir");
        let file = write(dir.path(), "goog.json", TWO_MONTHS);

        let envelope = run_args(&["monthly", "goog", &file]).expect("command succeeds");

        assert_eq!(
            envelope.data["months"],
            json!([["2005/01", 207.5], ["2005/02", 192.5]])
        );
        assert_eq!(envelope.data["symbol"], json!("GOOG"));
        assert_eq!(envelope.meta.record_count, 4);
        assert!(envelope.is_clean());
    }

    #[test]
    fn report_respects_top_flag() {
        let dir = tempfile::tempdir().expect("temp dir");
        let file = write(dir.path(), "goog.json", TWO_MONTHS);

        let envelope = run_args(&["report", "GOOG", &file, "--top", "1"]).expect("succeeds");

        assert_eq!(envelope.data["best"], json!([["2005/01", 207.5]]));
        assert_eq!(envelope.data["worst"], json!([["2005/02", 192.5]]));
    }

    #[test]
    fn split_months_become_warnings_unless_merged() {
        let dir = tempfile::tempdir().expect("temp dir");
        let file = write(dir.path(), "split.json", SPLIT_MONTH);

        let envelope = run_args(&["monthly", "GOOG", &file]).expect("succeeds");
        assert_eq!(envelope.meta.warnings.len(), 1);
        assert!(envelope.meta.warnings[0].contains("2005/01"));

        let envelope =
            run_args(&["monthly", "GOOG", &file, "--grouping", "merged"]).expect("succeeds");
        assert!(envelope.meta.warnings.is_empty());
        assert_eq!(
            envelope.data["months"],
            json!([["2005/01", 200.0], ["2005/02", 200.0]])
        );
    }

    #[test]
    fn volatility_reports_insufficient_data_as_envelope_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let goog = write(dir.path(), "goog.json", TWO_MONTHS);
        let short = write(
            dir.path(),
            "short.json",
            r#"[{"Date": "2005-01-03", "Close": 10, "Volume": 1}]"#,
        );

        let envelope =
            run_args(&["volatility", "GOOG", &goog, "NEW", &short]).expect("succeeds");

        assert_eq!(envelope.data, Value::Null);
        assert_eq!(envelope.errors.len(), 1);
        assert_eq!(envelope.errors[0].code, "insufficient_data");
        assert_eq!(envelope.errors[0].symbol.as_ref().map(Symbol::as_str), Some("NEW"));
    }

    #[test]
    fn volatility_of_a_stock_against_itself_has_no_difference() {
        let dir = tempfile::tempdir().expect("temp dir");
        let goog = write(dir.path(), "goog.json", TWO_MONTHS);

        let envelope = run_args(&["volatility", "GOOG", &goog, "GOOG", &goog]).expect("succeeds");

        assert_eq!(envelope.data["verdict"]["outcome"], json!("no_difference"));
        assert_eq!(envelope.meta.symbols.len(), 2);
    }

    #[test]
    fn volatility_follows_grouping_flag() {
        let dir = tempfile::tempdir().expect("temp dir");
        let goog = write(dir.path(), "goog.json", TWO_MONTHS);
        let split = write(dir.path(), "split.json", SPLIT_MONTH);

        let envelope =
            run_args(&["volatility", "GOOG", &goog, "SPLT", &split]).expect("succeeds");
        assert_eq!(envelope.data["second"]["months"], json!(3));
        assert_eq!(envelope.data["second"]["std_dev"], json!(100.0));
        assert_eq!(envelope.data["verdict"]["symbol"], json!("SPLT"));

        let envelope = run_args(&[
            "volatility", "GOOG", &goog, "SPLT", &split, "--grouping", "merged",
        ])
        .expect("succeeds");
        assert_eq!(envelope.meta.grouping, MonthGrouping::Merged);
        assert_eq!(envelope.data["second"]["months"], json!(2));
        assert_eq!(envelope.data["second"]["std_dev"], json!(0.0));
        assert_eq!(envelope.data["verdict"]["symbol"], json!("GOOG"));
    }

    #[test]
    fn empty_file_fails_with_analysis_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let file = write(dir.path(), "empty.json", "[]");

        let err = run_args(&["best", "GOOG", &file]).expect_err("must fail");
        assert!(matches!(err, CliError::Analysis(_)));
    }

    #[test]
    fn bad_symbol_is_a_validation_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let file = write(dir.path(), "goog.json", TWO_MONTHS);

        let err = run_args(&["best", "1GOOG", &file]).expect_err("must fail");
        assert_eq!(err.exit_code(), 2);
    }
}
