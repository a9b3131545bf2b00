use {
    crate::config::{FALLBACK_TVL, TVL_UNIT},
    serde::{Deserialize, Serialize},
};

/// One chain's total value locked. `value` is in billions of USD, `raw_value` in USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvlEntry {
    pub name: String,
    pub value: f64,
    pub raw_value: f64,
}

impl TvlEntry {
    pub fn from_usd(name: impl Into<String>, raw_value: f64) -> Self {
        Self {
            name: name.into(),
            value: raw_value / TVL_UNIT,
            raw_value,
        }
    }

    pub fn from_billions(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            raw_value: value * TVL_UNIT,
        }
    }
}

/// Generic `{name, value}` pair used by the breakdown panels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataSource {
    Live { provider: String },
    Fallback { reason: String },
}

/// TVL panel payload. Consumers check `source` to flag degraded data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TvlReport {
    pub source: DataSource,
    pub entries: Vec<TvlEntry>,
}

impl TvlReport {
    pub fn live(provider: impl Into<String>, entries: Vec<TvlEntry>) -> Self {
        Self {
            source: DataSource::Live {
                provider: provider.into(),
            },
            entries,
        }
    }

    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            source: DataSource::Fallback {
                reason: reason.into(),
            },
            entries: fallback_tvl_entries(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, DataSource::Fallback { .. })
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.value).sum()
    }
}

pub fn fallback_tvl_entries() -> Vec<TvlEntry> {
    FALLBACK_TVL
        .iter()
        .map(|(chain, billions)| TvlEntry::from_billions(chain.to_string(), *billions))
        .collect()
}
