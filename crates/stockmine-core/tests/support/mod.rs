//! Shared fixtures for the behaviour tests.
#![allow(dead_code)]

use stockmine_core::{DailyRecord, MonthlyAverage, PriceHistory, Symbol, TradeDate};

/// Monthly averages of the GOOG reference history, 2004/09 through 2008/06.
pub const GOOG_MONTHS: &[(i32, u8, f64)] = &[
    (2004, 9, 116.38),
    (2004, 10, 164.52),
    (2004, 11, 177.09),
    (2004, 12, 181.01),
    (2005, 1, 192.96),
    (2005, 2, 195.25),
    (2005, 3, 181.18),
    (2005, 4, 203.99),
    (2005, 5, 245.1),
    (2005, 6, 287.95),
    (2005, 7, 300.15),
    (2005, 8, 286.55),
    (2005, 9, 306.33),
    (2005, 10, 323.93),
    (2005, 11, 398.73),
    (2005, 12, 418.74),
    (2006, 1, 437.41),
    (2006, 2, 372.16),
    (2006, 3, 359.63),
    (2006, 4, 410.27),
    (2006, 5, 383.81),
    (2006, 6, 389.02),
    (2006, 7, 398.11),
    (2006, 8, 378.92),
    (2006, 9, 400.43),
    (2006, 10, 435.24),
    (2006, 11, 492.58),
    (2006, 12, 471.51),
    (2007, 1, 495.83),
    (2007, 2, 469.06),
    (2007, 3, 452.78),
    (2007, 4, 471.39),
    (2007, 5, 479.42),
    (2007, 6, 518.31),
    (2007, 7, 523.55),
    (2007, 8, 510.91),
    (2007, 9, 547.65),
    (2007, 10, 637.38),
    (2007, 11, 676.55),
    (2007, 12, 693.76),
    (2008, 1, 599.42),
    (2008, 2, 497.08),
    (2008, 3, 446.34),
    (2008, 4, 491.27),
    (2008, 5, 576.29),
    (2008, 6, 555.34),
];

pub fn symbol(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("valid symbol")
}

pub fn day(year: i32, month: u8, day: u8) -> TradeDate {
    TradeDate::from_calendar_date(year, month, day).expect("valid date")
}

/// Two sessions per month whose volume-weighted close is exactly `average`:
/// a third of the volume two dollars below it, two thirds one dollar above.
pub fn month_records(year: i32, month: u8, average: f64) -> [DailyRecord; 2] {
    [
        DailyRecord::new(day(year, month, 3), average - 2.0, 1_000),
        DailyRecord::new(day(year, month, 17), average + 1.0, 2_000),
    ]
}

pub fn history_from_months(ticker: &str, months: &[(i32, u8, f64)]) -> PriceHistory {
    let records = months
        .iter()
        .flat_map(|&(year, month, average)| month_records(year, month, average))
        .collect();
    PriceHistory::new(symbol(ticker), records)
}

pub fn goog_history() -> PriceHistory {
    history_from_months("GOOG", GOOG_MONTHS)
}

pub fn goog_2005_history() -> PriceHistory {
    let months: Vec<_> = GOOG_MONTHS
        .iter()
        .copied()
        .filter(|&(year, month, _)| year == 2005 && month >= 2)
        .collect();
    history_from_months("GOOG2005", &months)
}

pub fn pairs(months: &[MonthlyAverage]) -> Vec<(String, f64)> {
    months
        .iter()
        .map(|entry| (entry.month.to_string(), entry.average))
        .collect()
}

pub fn owned(expected: &[(&str, f64)]) -> Vec<(String, f64)> {
    expected
        .iter()
        .map(|(month, average)| ((*month).to_owned(), *average))
        .collect()
}
