use std::env;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Environment variable overriding [`AnalysisConfig::top_n`].
pub const TOP_N_ENV: &str = "STOCKMINE_TOP_N";
/// Environment variable overriding [`AnalysisConfig::grouping`].
pub const GROUPING_ENV: &str = "STOCKMINE_GROUPING";

/// Length of the best/worst month lists when nothing else is configured.
pub const DEFAULT_RANK_COUNT: usize = 6;

/// How daily records are grouped into months.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthGrouping {
    /// Records are taken in input order; each contiguous run of one month
    /// becomes one entry.
    #[default]
    Contiguous,
    /// Records are sorted by date first, so every month yields one entry.
    Merged,
}

impl MonthGrouping {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contiguous => "contiguous",
            Self::Merged => "merged",
        }
    }
}

impl Display for MonthGrouping {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MonthGrouping {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "contiguous" => Ok(Self::Contiguous),
            "merged" => Ok(Self::Merged),
            other => Err(ValidationError::InvalidGrouping {
                value: other.to_owned(),
            }),
        }
    }
}

/// Knobs shared by every analysis operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub top_n: usize,
    pub grouping: MonthGrouping,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_RANK_COUNT,
            grouping: MonthGrouping::default(),
        }
    }
}

impl AnalysisConfig {
    /// Defaults overridden by `STOCKMINE_TOP_N` / `STOCKMINE_GROUPING`.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(TOP_N_ENV) {
            let top_n = raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ValidationError::InvalidSetting {
                    key: TOP_N_ENV,
                    value: raw.clone(),
                })?;
            config = config.with_top_n(top_n)?;
        }

        if let Some(raw) = lookup(GROUPING_ENV) {
            config.grouping = raw.parse()?;
        }

        Ok(config)
    }

    pub fn with_top_n(mut self, top_n: usize) -> Result<Self, ValidationError> {
        if top_n == 0 {
            return Err(ValidationError::InvalidRankCount);
        }
        self.top_n = top_n;
        Ok(self)
    }

    pub fn with_grouping(mut self, grouping: MonthGrouping) -> Self {
        self.grouping = grouping;
        self
    }
}
