use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString},
};

/// Window requested by the daily transactions panel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum TimeRange {
    #[default]
    #[strum(serialize = "1m")]
    #[serde(rename = "1m")]
    OneMonth,
    #[strum(serialize = "6m")]
    #[serde(rename = "6m")]
    SixMonths,
    #[strum(serialize = "1y")]
    #[serde(rename = "1y")]
    OneYear,
}

impl TimeRange {
    pub fn days(&self) -> usize {
        match self {
            Self::OneMonth => 30,
            Self::SixMonths => 180,
            Self::OneYear => 365,
        }
    }

    /// Unrecognised input falls back to the full year.
    pub fn parse_loose(text: &str) -> Self {
        text.trim().parse().unwrap_or(Self::OneYear)
    }
}
