use serde::{Deserialize, Serialize};

use crate::{Symbol, TradeDate, YearMonth};

/// One trading day of a single stock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: TradeDate,
    pub close: f64,
    pub volume: u64,
}

impl DailyRecord {
    pub const fn new(date: TradeDate, close: f64, volume: u64) -> Self {
        Self {
            date,
            close,
            volume,
        }
    }

    pub fn year_month(&self) -> YearMonth {
        self.date.year_month()
    }

    /// Traded value of the session, `close * volume`.
    pub fn turnover(&self) -> f64 {
        self.close * self.volume as f64
    }
}

/// Volume-weighted average close of one calendar month.
///
/// Serialized as the pair `["YYYY/MM", average]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(YearMonth, f64)", into = "(YearMonth, f64)")]
pub struct MonthlyAverage {
    pub month: YearMonth,
    pub average: f64,
}

impl MonthlyAverage {
    pub const fn new(month: YearMonth, average: f64) -> Self {
        Self { month, average }
    }
}

impl From<(YearMonth, f64)> for MonthlyAverage {
    fn from((month, average): (YearMonth, f64)) -> Self {
        Self { month, average }
    }
}

impl From<MonthlyAverage> for (YearMonth, f64) {
    fn from(value: MonthlyAverage) -> Self {
        (value.month, value.average)
    }
}

/// Monthly averages in the order their months were first met in the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<Symbol>,
    pub months: Vec<MonthlyAverage>,
}

impl MonthlySeries {
    pub fn new(months: Vec<MonthlyAverage>) -> Self {
        Self {
            symbol: None,
            months,
        }
    }

    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = Some(symbol);
        self
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MonthlyAverage> {
        self.months.iter()
    }

    /// Averages alone, month labels dropped.
    pub fn averages(&self) -> Vec<f64> {
        self.months.iter().map(|entry| entry.average).collect()
    }

    pub fn best(&self, n: usize) -> Vec<MonthlyAverage> {
        crate::rank::best_months(self, n)
    }

    pub fn worst(&self, n: usize) -> Vec<MonthlyAverage> {
        crate::rank::worst_months(self, n)
    }
}

impl<'a> IntoIterator for &'a MonthlySeries {
    type Item = &'a MonthlyAverage;
    type IntoIter = std::slice::Iter<'a, MonthlyAverage>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Daily records of one stock as handed over by a record source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    pub symbol: Symbol,
    pub records: Vec<DailyRecord>,
}

impl PriceHistory {
    pub fn new(symbol: Symbol, records: Vec<DailyRecord>) -> Self {
        Self { symbol, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
