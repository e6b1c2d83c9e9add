//! Record sources: where daily records come from.
//!
//! The analysis only needs the calendar month, close and volume of each day,
//! in ascending date order. JSON input is an array of objects in the shape
//! of a Yahoo-style CSV export:
//!
//! ```json
//! [{"Date": "2004-08-19", "Open": "100.00", "Close": "100.34", "Volume": "22351900"}]
//! ```
//!
//! Keys may also be lower-case. `Close` and `Volume` may be JSON numbers or
//! numeric strings; any other key is ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::{DailyRecord, PriceHistory, SourceError, Symbol, TradeDate, ValidationError};

/// Anything that can hand over the daily records of one stock.
pub trait RecordSource {
    fn symbol(&self) -> &Symbol;
    fn load(&self) -> Result<PriceHistory, SourceError>;
}

/// JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    symbol: Symbol,
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(symbol: Symbol, path: impl Into<PathBuf>) -> Self {
        Self {
            symbol,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    fn load(&self) -> Result<PriceHistory, SourceError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let records = parse_records(&contents)?;
        info!(
            symbol = %self.symbol,
            path = %self.path.display(),
            records = records.len(),
            "loaded daily records"
        );
        Ok(PriceHistory::new(self.symbol.clone(), records))
    }
}

/// Records already held in memory.
#[derive(Debug, Clone)]
pub struct MemorySource {
    symbol: Symbol,
    records: Vec<DailyRecord>,
}

impl MemorySource {
    pub fn new(symbol: Symbol, records: Vec<DailyRecord>) -> Self {
        Self { symbol, records }
    }
}

impl RecordSource for MemorySource {
    fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    fn load(&self) -> Result<PriceHistory, SourceError> {
        Ok(PriceHistory::new(self.symbol.clone(), self.records.clone()))
    }
}

/// Decode a JSON array of daily entries, keeping input order.
pub fn parse_records(json: &str) -> Result<Vec<DailyRecord>, SourceError> {
    let entries: Vec<RawDailyEntry> =
        serde_json::from_str(json).map_err(|source| SourceError::Decode { source })?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| entry.into_record(index))
        .collect()
}

#[derive(Debug, Deserialize)]
struct RawDailyEntry {
    #[serde(rename = "Date", alias = "date")]
    date: String,
    #[serde(rename = "Close", alias = "close")]
    close: RawNumber,
    #[serde(rename = "Volume", alias = "volume")]
    volume: RawNumber,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(serde_json::Number),
    Text(String),
}

impl RawDailyEntry {
    fn into_record(self, index: usize) -> Result<DailyRecord, SourceError> {
        let date = TradeDate::parse(&self.date).map_err(|error| SourceError::InvalidField {
            index,
            field: "date",
            reason: error.to_string(),
        })?;
        let close = self.close.to_price().ok_or_else(|| SourceError::InvalidField {
            index,
            field: "close",
            reason: String::from("is not a number"),
        })?;
        if !close.is_finite() {
            return Err(SourceError::InvalidField {
                index,
                field: "close",
                reason: ValidationError::NonFiniteValue { field: "close" }.to_string(),
            });
        }
        let volume = self.volume.to_volume().ok_or_else(|| SourceError::InvalidField {
            index,
            field: "volume",
            reason: String::from("is not a non-negative integer"),
        })?;

        Ok(DailyRecord::new(date, close, volume))
    }
}

impl RawNumber {
    fn to_price(&self) -> Option<f64> {
        match self {
            Self::Number(number) => number.as_f64(),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
        }
    }

    fn to_volume(&self) -> Option<u64> {
        match self {
            Self::Number(number) => number
                .as_u64()
                .or_else(|| number.as_f64().and_then(whole_non_negative)),
            Self::Text(text) => text.trim().parse::<u64>().ok(),
        }
    }
}

fn whole_non_negative(value: f64) -> Option<u64> {
    (value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64).then_some(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_yahoo_style_strings() {
        let json = r#"[
            {"Date": "2004-08-19", "Open": "100.00", "High": "104.06", "Low": "95.96",
             "Close": "100.34", "Volume": "22351900", "Adj Close": "100.34"}
        ]"#;
        let records = parse_records(json).expect("must parse");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date.to_string(), "2004-08-19");
        assert_eq!(records[0].close, 100.34);
        assert_eq!(records[0].volume, 22_351_900);
    }

    #[test]
    fn parses_lowercase_numeric_entries() {
        let json = r#"[{"date": "2005-01-03", "close": 202.71, "volume": 15844200}]"#;
        let records = parse_records(json).expect("must parse");
        assert_eq!(records[0].close, 202.71);
        assert_eq!(records[0].volume, 15_844_200);
    }

    #[test]
    fn accepts_whole_float_volume() {
        let json = r#"[{"Date": "2005-01-03", "Close": 1, "Volume": 1.0e3}]"#;
        let records = parse_records(json).expect("must parse");
        assert_eq!(records[0].volume, 1_000);
    }

    #[test]
    fn reports_bad_fields_with_index() {
        let json = r#"[
            {"Date": "2005-01-03", "Close": "1", "Volume": "1"},
            {"Date": "2005-01-04", "Close": "n/a", "Volume": "1"}
        ]"#;
        let err = parse_records(json).expect_err("must fail");
        assert!(matches!(
            err,
            SourceError::InvalidField {
                index: 1,
                field: "close",
                ..
            }
        ));

        let json = r#"[{"Date": "2005-01-03", "Close": "1", "Volume": "-5"}]"#;
        assert!(matches!(
            parse_records(json),
            Err(SourceError::InvalidField { field: "volume", .. })
        ));

        let json = r#"[{"Date": "03/01/2005", "Close": "1", "Volume": "5"}]"#;
        assert!(matches!(
            parse_records(json),
            Err(SourceError::InvalidField { field: "date", .. })
        ));
    }

    #[test]
    fn rejects_non_finite_closes() {
        for close in ["NaN", "inf", "-infinity"] {
            let json = format!(r#"[{{"Date": "2005-01-03", "Close": "{close}", "Volume": "5"}}]"#);
            let err = parse_records(&json).expect_err("non-finite close must fail");
            match err {
                SourceError::InvalidField {
                    index: 0,
                    field: "close",
                    reason,
                } => assert!(reason.contains("finite"), "{close}: {reason}"),
                other => panic!("{close}: unexpected error {other}"),
            }
        }
    }

    #[test]
    fn rejects_volume_beyond_u64() {
        let json = r#"[{"Date": "2005-01-03", "Close": 1, "Volume": 18446744073709551616.0}]"#;
        assert!(matches!(
            parse_records(json),
            Err(SourceError::InvalidField { field: "volume", .. })
        ));
    }

    #[test]
    fn rejects_non_array_payloads() {
        assert!(matches!(
            parse_records(r#"{"Date": "2005-01-03"}"#),
            Err(SourceError::Decode { .. })
        ));
        assert!(matches!(
            parse_records(r#"[{"Date": "2005-01-03", "Close": "1"}]"#),
            Err(SourceError::Decode { .. })
        ));
    }

    #[test]
    fn memory_source_hands_out_its_records() {
        let symbol = Symbol::parse("GOOG").expect("valid");
        let records = parse_records(r#"[{"Date": "2005-01-03", "Close": 1, "Volume": 2}]"#)
            .expect("must parse");
        let source = MemorySource::new(symbol.clone(), records.clone());
        let history = source.load().expect("loads");
        assert_eq!(source.symbol(), &symbol);
        assert_eq!(history.records, records);
    }
}
