//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Per-series event placement and endpoint values.
    pub log_generator: bool,

    /// Raw DeFi Llama entries that were skipped during filtering.
    pub log_tvl_fetch: bool,

    /// Daily transaction table build and slicing.
    pub log_transactions: bool,

    pub log_gas: bool,

    pub log_protocols: bool,

    /// Cache hits, misses and staleness decisions in the dashboard service.
    pub log_service: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_transactions: true,
    log_service: true,

    log_generator: false,
    log_tvl_fetch: false,
    log_gas: false,
    log_protocols: false,
    log_performance: false,
};
