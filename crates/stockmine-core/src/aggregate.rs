//! Monthly volume-weighted averaging.
//!
//! A single pass over daily records keeps a running `Σ close × volume` and
//! `Σ volume` for the month being read. When the month key changes the
//! running totals are closed into a [`MonthlyAverage`] and restarted from
//! the record that opened the new month. The month still open when the
//! records run out is closed as well.
//!
//! With [`MonthGrouping::Contiguous`] a month that shows up again after
//! another month produces a second entry; [`split_months`] reports those.

use std::collections::HashSet;

use tracing::debug;

use crate::stats::round2;
use crate::{
    AnalysisError, DailyRecord, MonthGrouping, MonthlyAverage, MonthlySeries, PriceHistory,
    YearMonth,
};

/// Running totals of the month currently being read.
#[derive(Debug, Clone, Copy)]
struct MonthAccumulator {
    month: YearMonth,
    weighted_close: f64,
    volume: u64,
}

impl MonthAccumulator {
    fn start(record: &DailyRecord) -> Self {
        Self {
            month: record.year_month(),
            weighted_close: record.turnover(),
            volume: record.volume,
        }
    }

    fn add(&mut self, record: &DailyRecord) {
        self.weighted_close += record.turnover();
        self.volume = self.volume.saturating_add(record.volume);
    }

    fn close(self) -> MonthlyAverage {
        let average = if self.volume == 0 {
            0.0
        } else {
            self.weighted_close / self.volume as f64
        };
        let entry = MonthlyAverage::new(self.month, round2(average));
        debug!(month = %entry.month, average = entry.average, volume = self.volume, "closed month");
        entry
    }
}

/// Aggregate records that are already in ascending date order.
pub fn aggregate(records: &[DailyRecord]) -> Result<MonthlySeries, AnalysisError> {
    aggregate_with(records, MonthGrouping::Contiguous)
}

/// Aggregate records using the requested grouping.
pub fn aggregate_with(
    records: &[DailyRecord],
    grouping: MonthGrouping,
) -> Result<MonthlySeries, AnalysisError> {
    match grouping {
        MonthGrouping::Contiguous => aggregate_in_order(records.iter()),
        MonthGrouping::Merged => {
            let mut sorted = records.to_vec();
            sorted.sort_by_key(|record| record.date);
            aggregate_in_order(sorted.iter())
        }
    }
}

/// Aggregate a full price history; the resulting series carries its symbol.
pub fn aggregate_history(
    history: &PriceHistory,
    grouping: MonthGrouping,
) -> Result<MonthlySeries, AnalysisError> {
    let series = aggregate_with(&history.records, grouping)?;
    debug!(
        symbol = %history.symbol,
        records = history.len(),
        months = series.len(),
        "aggregated price history"
    );
    Ok(series.with_symbol(history.symbol.clone()))
}

fn aggregate_in_order<'a, I>(records: I) -> Result<MonthlySeries, AnalysisError>
where
    I: IntoIterator<Item = &'a DailyRecord>,
{
    let mut records = records.into_iter();
    let first = records.next().ok_or(AnalysisError::EmptyInput)?;

    let mut months = Vec::new();
    let mut current = MonthAccumulator::start(first);

    for record in records {
        if record.year_month() == current.month {
            current.add(record);
        } else {
            months.push(current.close());
            current = MonthAccumulator::start(record);
        }
    }
    months.push(current.close());

    Ok(MonthlySeries::new(months))
}

/// Months that occur in more than one entry, in order of their second
/// appearance.
pub fn split_months(series: &MonthlySeries) -> Vec<YearMonth> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    series
        .iter()
        .filter_map(|entry| {
            if !seen.insert(entry.month) && reported.insert(entry.month) {
                Some(entry.month)
            } else {
                None
            }
        })
        .collect()
}
