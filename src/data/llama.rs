//! DeFi Llama `/chains` client.

use {
    crate::{
        config::{LLAMA, LLAMA_CHAIN_MAP},
        data::TvlProvider,
        domain::TvlEntry,
    },
    anyhow::{Context, Result},
    async_trait::async_trait,
    serde_json::Value,
    std::time::Duration,
    thiserror::Error,
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Debug, Error)]
pub enum TvlFetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("DeFi Llama answered with HTTP {0}")]
    Status(u16),
    #[error("payload is not a JSON array")]
    NotAnArray,
    #[error("payload could not be decoded: {0}")]
    Malformed(String),
    #[error("no tracked chains in payload")]
    Empty,
}

pub struct LlamaProvider {
    base_url: String,
    client: reqwest::Client,
}

impl LlamaProvider {
    pub fn new() -> Result<Self> {
        Self::with_base_url(LLAMA.base_url)
    }

    /// Points the client at another host, e.g. a local mirror.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(LLAMA.timeout_ms))
            .build()
            .context("Failed to build HTTP client for DeFi Llama")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn chains_url(&self) -> String {
        format!("{}{}", self.base_url, LLAMA.chains_path)
    }

    async fn fetch_chains(&self) -> Result<Vec<TvlEntry>, TvlFetchError> {
        let url = self.chains_url();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| TvlFetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TvlFetchError::Status(status.as_u16()));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| TvlFetchError::Malformed(e.to_string()))?;

        parse_chains(&payload)
    }
}

#[async_trait]
impl TvlProvider for LlamaProvider {
    fn signature(&self) -> &'static str {
        "DeFi Llama"
    }

    async fn fetch_tvl(&self) -> Result<Vec<TvlEntry>> {
        Ok(self.fetch_chains().await?)
    }
}

/// Keeps tracked chains with a numeric `tvl`, converts to billions, sorts descending.
pub fn parse_chains(payload: &Value) -> Result<Vec<TvlEntry>, TvlFetchError> {
    let items = payload.as_array().ok_or(TvlFetchError::NotAnArray)?;

    let mut entries: Vec<TvlEntry> = items
        .iter()
        .filter_map(|item| {
            let name = item.get("name")?.as_str()?;
            let tvl = item.get("tvl")?.as_f64()?;
            match LLAMA_CHAIN_MAP.iter().find(|(llama_name, _)| *llama_name == name) {
                Some((_, chain)) => Some(TvlEntry::from_usd(chain.to_string(), tvl)),
                None => {
                    #[cfg(debug_assertions)]
                    if DF.log_tvl_fetch {
                        log::info!("Skipping untracked chain '{}'", name);
                    }
                    None
                }
            }
        })
        .collect();

    if entries.is_empty() {
        return Err(TvlFetchError::Empty);
    }

    entries.sort_by(|a, b| b.value.total_cmp(&a.value));
    Ok(entries)
}
