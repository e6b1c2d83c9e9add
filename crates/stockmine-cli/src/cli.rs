//! CLI argument definitions for stockmine.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `monthly` | Volume-weighted average close for every month |
//! | `best` | Months with the highest averages |
//! | `worst` | Months with the lowest averages |
//! | `report` | Best and worst months together |
//! | `volatility` | Which of two stocks has more volatile monthly averages |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, ndjson, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors |
//! | `--grouping` | `STOCKMINE_GROUPING` or `contiguous` | Month grouping mode |
//! | `--top` | `STOCKMINE_TOP_N` or `6` | Length of best/worst lists |
//!
//! # Examples
//!
//! ```bash
//! stockmine report GOOG data/GOOG.json --pretty
//! stockmine best GOOG data/GOOG.json --top 3 --format table
//! stockmine volatility GOOG data/GOOG.json AAPL data/AAPL.json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use stockmine_core::MonthGrouping;

/// Monthly price analysis for daily stock data.
#[derive(Debug, Parser)]
#[command(
    name = "stockmine",
    author,
    version,
    about = "Monthly volume-weighted price analysis for daily stock data"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and errors as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// How daily records are grouped into months.
    ///
    /// - contiguous: follow input order; a month that reappears later is a
    ///   separate entry
    /// - merged: sort by date first so each month is one entry
    #[arg(long, global = true, value_enum)]
    pub grouping: Option<GroupingArg>,

    /// Number of months in best/worst lists.
    #[arg(long, global = true)]
    pub top: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for terminal display.
    Table,
    /// Single JSON object output.
    Json,
    /// Newline-delimited JSON.
    Ndjson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupingArg {
    Contiguous,
    Merged,
}

impl From<GroupingArg> for MonthGrouping {
    fn from(value: GroupingArg) -> Self {
        match value {
            GroupingArg::Contiguous => Self::Contiguous,
            GroupingArg::Merged => Self::Merged,
        }
    }
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Volume-weighted average close for every month in the file.
    ///
    ///   stockmine monthly GOOG data/GOOG.json
    Monthly(StockArgs),

    /// Months with the highest averages.
    ///
    ///   stockmine best GOOG data/GOOG.json --top 6
    Best(StockArgs),

    /// Months with the lowest averages.
    Worst(StockArgs),

    /// Best and worst months in one response.
    Report(StockArgs),

    /// Compare two stocks by the standard deviation of their monthly averages.
    ///
    ///   stockmine volatility GOOG data/GOOG.json AAPL data/AAPL.json
    Volatility(VolatilityArgs),
}

/// One stock and the JSON file holding its daily records.
#[derive(Debug, Args)]
pub struct StockArgs {
    /// Ticker symbol (e.g., GOOG).
    pub symbol: String,

    /// JSON file with daily records.
    pub file: PathBuf,
}

/// Arguments for the `volatility` command.
#[derive(Debug, Args)]
pub struct VolatilityArgs {
    pub first_symbol: String,
    pub first_file: PathBuf,
    pub second_symbol: String,
    pub second_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "stockmine",
            "best",
            "GOOG",
            "data/GOOG.json",
            "--top",
            "3",
            "--grouping",
            "merged",
            "--format",
            "table",
        ])
        .expect("valid arguments");

        assert_eq!(cli.top, Some(3));
        assert_eq!(cli.grouping, Some(GroupingArg::Merged));
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(matches!(cli.command, Command::Best(ref args) if args.symbol == "GOOG"));
    }

    #[test]
    fn volatility_needs_two_stocks() {
        let err = Cli::try_parse_from(["stockmine", "volatility", "GOOG", "data/GOOG.json"])
            .expect_err("must fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
