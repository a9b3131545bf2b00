use {
    crate::domain::{TvlEntry, fallback_tvl_entries},
    anyhow::Result,
    async_trait::async_trait,
};

/// Abstract interface for fetching per-chain TVL.
#[async_trait]
pub trait TvlProvider: Send + Sync {
    /// Short name recorded in [`crate::domain::DataSource::Live`].
    fn signature(&self) -> &'static str;

    /// Entries in billions of USD, sorted by value descending. An empty result is an error.
    async fn fetch_tvl(&self) -> Result<Vec<TvlEntry>>;
}

/// Serves the fixed fallback table. Used by `--offline`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTvlProvider;

#[async_trait]
impl TvlProvider for StaticTvlProvider {
    fn signature(&self) -> &'static str {
        "Static table"
    }

    async fn fetch_tvl(&self) -> Result<Vec<TvlEntry>> {
        Ok(fallback_tvl_entries())
    }
}
