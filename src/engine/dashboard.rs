use {
    crate::{
        config::{FETCH, FetchPolicy, MOCK_PROTOCOLS, TVL_HISTORY},
        data::{
            DailyTransactionStore, Protocol, Timed, TvlHistory, TvlProvider, fetch_all_gas_fees,
            fetch_tvl_report, generate_mock_protocols,
        },
        domain::{Blockchain, DayRecord, GasFee, TimeRange, TvlReport},
        models::{NoiseFactory, NoiseSource, SeedPolicy},
        utils::today_local,
    },
    std::collections::HashMap,
};

#[cfg(debug_assertions)]
use crate::{config::DF, utils::format_duration};

/// Noise stream index reserved for the mock protocol panels. Transaction
/// series use one stream per profile starting at 0.
const PROTOCOL_STREAM: usize = 1_000;

/// Owns every panel's data and decides when it has to be fetched again.
pub struct DashboardService {
    tvl_provider: Box<dyn TvlProvider>,
    transactions: DailyTransactionStore,
    policy: &'static FetchPolicy,
    seed: SeedPolicy,

    tvl_cache: Option<Timed<TvlReport>>,
    gas_cache: HashMap<Blockchain, Timed<GasFee>>,

    protocol_noise: Option<Box<dyn NoiseSource + Send>>,
    protocols: Option<Vec<Protocol>>,
    history: Option<TvlHistory>,
}

impl DashboardService {
    pub fn new(tvl_provider: Box<dyn TvlProvider>) -> Self {
        Self {
            tvl_provider,
            transactions: DailyTransactionStore::new(),
            policy: &FETCH,
            seed: SeedPolicy::Entropy,
            tvl_cache: None,
            gas_cache: HashMap::new(),
            protocol_noise: None,
            protocols: None,
            history: None,
        }
    }

    /// Seeds both the transactions store and the protocol panels.
    pub fn with_seed(mut self, seed: SeedPolicy) -> Self {
        self.seed = seed;
        self.transactions = self
            .transactions
            .with_noise(seed)
            .with_latency(self.policy.transactions_latency());
        self
    }

    pub fn with_policy(mut self, policy: &'static FetchPolicy) -> Self {
        self.policy = policy;
        self.transactions = self.transactions.with_latency(policy.transactions_latency());
        self
    }

    pub fn provider_signature(&self) -> &'static str {
        self.tvl_provider.signature()
    }

    /// Cached report, refetched once older than the TVL staleness window.
    pub async fn tvl(&mut self) -> &TvlReport {
        let window = self.policy.tvl_stale_after();
        let cached = match self.tvl_cache.take() {
            Some(cached) if !cached.is_stale(window) => cached,
            _stale => {
                #[cfg(debug_assertions)]
                if DF.log_service {
                    match &_stale {
                        Some(old) => log::info!(
                            "TVL cache is {} old, refetching from {}",
                            format_duration(old.age()),
                            self.tvl_provider.signature()
                        ),
                        None => log::info!("TVL cache empty, fetching from {}", self.tvl_provider.signature()),
                    }
                }
                Timed::now(fetch_tvl_report(self.tvl_provider.as_ref()).await)
            }
        };
        &self.tvl_cache.insert(cached).value
    }

    pub async fn gas_fees(&mut self, chain: Blockchain) -> GasFee {
        self.gas_table(&[chain])
            .await
            .first()
            .map(|(_, fee)| *fee)
            .unwrap_or_default()
    }

    /// Fees for `chains` in the given order; only stale or missing entries are refetched.
    pub async fn gas_table(&mut self, chains: &[Blockchain]) -> Vec<(Blockchain, GasFee)> {
        let window = self.policy.gas_stale_after();
        let stale: Vec<Blockchain> = chains
            .iter()
            .copied()
            .filter(|chain| self.gas_cache.get(chain).is_none_or(|c| c.is_stale(window)))
            .collect();

        if !stale.is_empty() {
            #[cfg(debug_assertions)]
            if DF.log_service {
                log::info!("Gas cache refresh for {} chain(s)", stale.len());
            }
            for (chain, fee) in fetch_all_gas_fees(&stale, self.policy.gas_latency()).await {
                self.gas_cache.insert(chain, Timed::now(fee));
            }
        }

        chains
            .iter()
            .map(|chain| {
                let fee = self.gas_cache.get(chain).map(|c| c.value).unwrap_or_default();
                (*chain, fee)
            })
            .collect()
    }

    /// Always served from the memoized table; only the first call pays for generation.
    pub async fn daily_transactions(&self, range: TimeRange) -> &[DayRecord] {
        self.transactions.fetch(range).await
    }

    pub fn protocols(&mut self) -> &[Protocol] {
        let protocols = match self.protocols.take() {
            Some(protocols) => protocols,
            None => generate_mock_protocols(self.protocol_noise(), &MOCK_PROTOCOLS),
        };
        self.protocols.insert(protocols)
    }

    pub fn tvl_history(&mut self) -> &TvlHistory {
        let history = match self.history.take() {
            Some(history) => history,
            None => TvlHistory::generate(self.protocol_noise(), today_local(), &TVL_HISTORY),
        };
        self.history.insert(history)
    }

    /// New protocol rankings and one more day on the TVL history.
    pub fn refresh_protocols(&mut self) {
        let protocols = generate_mock_protocols(self.protocol_noise(), &MOCK_PROTOCOLS);
        self.protocols = Some(protocols);

        let today = today_local();
        let history = match self.history.take() {
            Some(mut history) => {
                history.refresh(self.protocol_noise(), today, &TVL_HISTORY);
                history
            }
            None => TvlHistory::generate(self.protocol_noise(), today, &TVL_HISTORY),
        };
        self.history = Some(history);

        #[cfg(debug_assertions)]
        if DF.log_service {
            log::info!("Refreshed mock protocols and TVL history");
        }
    }

    fn protocol_noise(&mut self) -> &mut (dyn NoiseSource + Send) {
        let seed = self.seed;
        self.protocol_noise
            .get_or_insert_with(|| seed.stream(PROTOCOL_STREAM))
            .as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FETCH_NO_LATENCY;
    use crate::data::StaticTvlProvider;
    use crate::domain::TvlEntry;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };
    use std::time::Duration;

    struct Counting(Arc<AtomicUsize>);

    #[async_trait]
    impl TvlProvider for Counting {
        fn signature(&self) -> &'static str {
            "Counting"
        }

        async fn fetch_tvl(&self) -> Result<Vec<TvlEntry>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(vec![TvlEntry::from_billions("Ethereum", 50.0)])
        }
    }

    #[tokio::test(start_paused = true)]
    async fn tvl_is_cached_until_stale() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut service =
            DashboardService::new(Box::new(Counting(calls.clone()))).with_policy(&FETCH_NO_LATENCY);

        assert_eq!(service.tvl().await.entries.len(), 1);
        service.tvl().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_secs(5 * 60)).await;
        service.tvl().await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn gas_entries_expire_independently() {
        let mut service = DashboardService::new(Box::new(StaticTvlProvider)).with_policy(&FETCH_NO_LATENCY);
        let fee = service.gas_fees(Blockchain::Polygon).await;
        assert_eq!(fee, GasFee::new(0.01, 0.02, 0.03));
        let first_fetch = service.gas_cache[&Blockchain::Polygon].fetched_at;

        tokio::time::advance(Duration::from_secs(10)).await;
        service.gas_table(&[Blockchain::Polygon, Blockchain::Base]).await;
        assert_eq!(service.gas_cache[&Blockchain::Polygon].fetched_at, first_fetch);

        tokio::time::advance(Duration::from_secs(30)).await;
        service.gas_fees(Blockchain::Polygon).await;
        assert!(service.gas_cache[&Blockchain::Polygon].fetched_at > first_fetch);
    }

    #[tokio::test]
    async fn transactions_come_from_one_table() {
        let service = DashboardService::new(Box::new(StaticTvlProvider))
            .with_policy(&FETCH_NO_LATENCY)
            .with_seed(SeedPolicy::Fixed(9));
        let month = service.daily_transactions(TimeRange::OneMonth).await.to_vec();
        let year = service.daily_transactions(TimeRange::OneYear).await;
        assert_eq!(year.len(), 365);
        assert_eq!(&year[335..], month.as_slice());
    }

    #[test]
    fn protocol_refresh_keeps_history_window() {
        let mut service = DashboardService::new(Box::new(StaticTvlProvider)).with_seed(SeedPolicy::Fixed(4));
        assert_eq!(service.protocols().len(), 10);
        assert_eq!(service.tvl_history().len(), 30);
        service.refresh_protocols();
        assert_eq!(service.tvl_history().len(), 30);
        assert_eq!(service.protocols().len(), 10);
    }
}
