//! Fetch-layer policy: artificial latencies and per-query staleness windows.

use std::time::Duration;

pub struct LatencyConfig {
    pub gas_ms: u64,
    pub transactions_ms: u64,
}

pub struct StalenessConfig {
    pub tvl_secs: u64,
    pub gas_secs: u64,
}

pub struct FetchPolicy {
    pub latency: LatencyConfig,
    pub staleness: StalenessConfig,
}

impl FetchPolicy {
    pub fn gas_latency(&self) -> Duration {
        Duration::from_millis(self.latency.gas_ms)
    }

    pub fn transactions_latency(&self) -> Duration {
        Duration::from_millis(self.latency.transactions_ms)
    }

    pub fn tvl_stale_after(&self) -> Duration {
        Duration::from_secs(self.staleness.tvl_secs)
    }

    pub fn gas_stale_after(&self) -> Duration {
        Duration::from_secs(self.staleness.gas_secs)
    }
}

pub const FETCH: FetchPolicy = FetchPolicy {
    latency: LatencyConfig {
        gas_ms: 300,
        transactions_ms: 500,
    },
    staleness: StalenessConfig {
        tvl_secs: 5 * 60,
        gas_secs: 30,
    },
};

/// Same staleness windows, no artificial delay. Used by `--no-latency` and tests.
pub const FETCH_NO_LATENCY: FetchPolicy = FetchPolicy {
    latency: LatencyConfig {
        gas_ms: 0,
        transactions_ms: 0,
    },
    staleness: StalenessConfig {
        tvl_secs: FETCH.staleness.tvl_secs,
        gas_secs: FETCH.staleness.gas_secs,
    },
};
