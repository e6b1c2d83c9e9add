//! # Stockmine Core
//!
//! Monthly price analysis for daily stock records.
//!
//! ## Overview
//!
//! - **Aggregation**: volume-weighted average close per calendar month
//! - **Ranking**: best and worst months by average
//! - **Volatility**: which of two stocks has the larger sample standard
//!   deviation of monthly averages
//! - **Record sources**: JSON files or in-memory records
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`aggregate`] | Monthly Aggregator |
//! | [`config`] | Analysis configuration and environment overrides |
//! | [`domain`] | Domain models (DailyRecord, MonthlyAverage, Symbol) |
//! | [`envelope`] | Response envelope with metadata |
//! | [`error`] | Core error types |
//! | [`rank`] | Best/worst month ranking |
//! | [`source`] | Record source trait and JSON decoding |
//! | [`stats`] | Rounding, mean, sample standard deviation |
//! | [`volatility`] | Volatility Comparator |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stockmine_core::{aggregate, JsonFileSource, RecordSource, Symbol};
//!
//! # fn main() -> Result<(), stockmine_core::CoreError> {
//! let source = JsonFileSource::new(Symbol::parse("GOOG")?, "data/GOOG.json");
//! let history = source.load()?;
//! let series = aggregate(&history.records)?;
//!
//! for month in series.best(6) {
//!     println!("{} {:.2}", month.month, month.average);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use stockmine_core::{higher_volatility, AnalysisError, PriceHistory, Symbol};
//!
//! let empty = PriceHistory::new(Symbol::parse("GOOG").unwrap(), Vec::new());
//! match higher_volatility(&empty, &empty) {
//!     Err(AnalysisError::EmptyInput) => {}
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod rank;
pub mod source;
pub mod stats;
pub mod volatility;

pub use aggregate::{aggregate, aggregate_history, aggregate_with, split_months};
pub use config::{AnalysisConfig, MonthGrouping, DEFAULT_RANK_COUNT};
pub use domain::{
    DailyRecord, MonthlyAverage, MonthlySeries, PriceHistory, Symbol, TradeDate, YearMonth,
};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta, SCHEMA_VERSION};
pub use error::{AnalysisError, CoreError, SourceError, ValidationError};
pub use rank::{best_months, worst_months};
pub use source::{parse_records, JsonFileSource, MemorySource, RecordSource};
pub use volatility::{
    compare_volatility, higher_volatility, higher_volatility_with, StockVolatility,
    VolatilityReport, VolatilityVerdict,
};
