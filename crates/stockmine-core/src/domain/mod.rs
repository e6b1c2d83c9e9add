//! # Domain Models
//!
//! Strongly-typed values the analysis works on.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated stock ticker |
//! | [`TradeDate`] | Calendar day of a session (`YYYY-MM-DD`) |
//! | [`YearMonth`] | Calendar month key (`YYYY/MM`) |
//! | [`DailyRecord`] | Close price and traded volume for one day |
//! | [`PriceHistory`] | Daily records of one stock |
//! | [`MonthlyAverage`] | Volume-weighted average close of one month |
//! | [`MonthlySeries`] | Monthly averages in input order |

mod models;
mod symbol;
mod trade_date;
mod year_month;

pub use models::{DailyRecord, MonthlyAverage, MonthlySeries, PriceHistory};
pub use symbol::Symbol;
pub use trade_date::TradeDate;
pub use year_month::YearMonth;
