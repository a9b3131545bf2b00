use crate::{
    data::TvlProvider,
    domain::TvlReport,
};

/// Never fails: any provider error becomes the fallback table, flagged as such.
pub async fn fetch_tvl_report(provider: &dyn TvlProvider) -> TvlReport {
    match provider.fetch_tvl().await {
        Ok(entries) => {
            log::debug!("TVL from {}: {} chains", provider.signature(), entries.len());
            TvlReport::live(provider.signature(), entries)
        }
        Err(e) => {
            log::warn!(
                "TVL fetch from {} failed, serving fallback data: {:#}",
                provider.signature(),
                e
            );
            TvlReport::fallback(format!("{:#}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StaticTvlProvider;
    use crate::domain::{DataSource, TvlEntry};
    use anyhow::{Result, bail};
    use async_trait::async_trait;

    struct Broken;

    #[async_trait]
    impl TvlProvider for Broken {
        fn signature(&self) -> &'static str {
            "Broken"
        }

        async fn fetch_tvl(&self) -> Result<Vec<TvlEntry>> {
            bail!("connection reset")
        }
    }

    #[tokio::test]
    async fn failure_becomes_flagged_fallback() {
        let report = fetch_tvl_report(&Broken).await;
        assert!(report.is_fallback());
        assert_eq!(report.entries.len(), 5);
        assert_eq!(report.entries[0].name, "Ethereum");
        assert_eq!(report.entries[0].value, 40.5);
        match report.source {
            DataSource::Fallback { reason } => assert!(reason.contains("connection reset")),
            other => panic!("unexpected source {:?}", other),
        }
    }

    #[tokio::test]
    async fn success_is_live() {
        let report = fetch_tvl_report(&StaticTvlProvider).await;
        assert!(!report.is_fallback());
        assert_eq!(
            report.source,
            DataSource::Live {
                provider: "Static table".to_string()
            }
        );
    }
}
