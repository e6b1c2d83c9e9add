//! Comparison of two stocks by how much their monthly averages move.
//!
//! Each history is aggregated on its own and the sample standard deviation
//! of its monthly averages is rounded to two places before comparing. The
//! time ranges of the two histories are not aligned or checked for overlap.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::aggregate_history;
use crate::stats::{round2, sample_std_dev};
use crate::{AnalysisConfig, AnalysisError, MonthGrouping, PriceHistory, Symbol};

/// Outcome of a volatility comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VolatilityVerdict {
    /// `symbol` has the larger rounded standard deviation.
    Higher {
        symbol: Symbol,
        std_dev: f64,
        other_std_dev: f64,
    },
    /// Both rounded standard deviations are equal.
    NoDifference { std_dev: f64 },
}

impl VolatilityVerdict {
    pub fn winner(&self) -> Option<&Symbol> {
        match self {
            Self::Higher { symbol, .. } => Some(symbol),
            Self::NoDifference { .. } => None,
        }
    }
}

/// Per-stock figures behind a verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockVolatility {
    pub symbol: Symbol,
    pub months: usize,
    pub std_dev: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityReport {
    pub first: StockVolatility,
    pub second: StockVolatility,
    pub verdict: VolatilityVerdict,
}

/// Which of the two stocks has the more volatile monthly averages.
pub fn higher_volatility(
    first: &PriceHistory,
    second: &PriceHistory,
) -> Result<VolatilityVerdict, AnalysisError> {
    compare_volatility(first, second, MonthGrouping::Contiguous).map(|report| report.verdict)
}

/// Same as [`higher_volatility`], grouping months as `config` says.
pub fn higher_volatility_with(
    config: &AnalysisConfig,
    first: &PriceHistory,
    second: &PriceHistory,
) -> Result<VolatilityVerdict, AnalysisError> {
    compare_volatility(first, second, config.grouping).map(|report| report.verdict)
}

/// Full comparison report using the given month grouping.
pub fn compare_volatility(
    first: &PriceHistory,
    second: &PriceHistory,
    grouping: MonthGrouping,
) -> Result<VolatilityReport, AnalysisError> {
    let first = measure(first, grouping)?;
    let second = measure(second, grouping)?;

    let verdict = if first.std_dev == second.std_dev {
        VolatilityVerdict::NoDifference {
            std_dev: first.std_dev,
        }
    } else {
        let (higher, lower) = if first.std_dev > second.std_dev {
            (&first, &second)
        } else {
            (&second, &first)
        };
        VolatilityVerdict::Higher {
            symbol: higher.symbol.clone(),
            std_dev: higher.std_dev,
            other_std_dev: lower.std_dev,
        }
    };

    debug!(
        first = %first.symbol,
        first_std_dev = first.std_dev,
        second = %second.symbol,
        second_std_dev = second.std_dev,
        "compared volatility"
    );

    Ok(VolatilityReport {
        first,
        second,
        verdict,
    })
}

fn measure(
    history: &PriceHistory,
    grouping: MonthGrouping,
) -> Result<StockVolatility, AnalysisError> {
    let series = aggregate_history(history, grouping)?;
    let averages = series.averages();
    let std_dev = sample_std_dev(&averages).ok_or_else(|| AnalysisError::InsufficientData {
        symbol: history.symbol.clone(),
        months: averages.len(),
    })?;

    Ok(StockVolatility {
        symbol: history.symbol.clone(),
        months: averages.len(),
        std_dev: round2(std_dev),
    })
}
