//! Mock protocol rankings and the TVL history random walk.

pub struct MockProtocolConfig {
    pub count: usize,
    pub categories: &'static [&'static str],
    pub chains: &'static [&'static str],
    pub max_chains_per_protocol: usize,
    /// TVL is drawn from `[tvl_floor, tvl_floor + tvl_span)` (USD).
    pub tvl_floor: f64,
    pub tvl_span: f64,
    /// `change_24h` is drawn from `[-max_change_pct, max_change_pct)`.
    pub max_change_pct: f64,
}

pub const MOCK_PROTOCOLS: MockProtocolConfig = MockProtocolConfig {
    count: 10,
    categories: &["DEX", "Lending", "Yield", "Derivatives", "Yield Aggregator"],
    chains: &["Ethereum", "BNB Chain", "Polygon", "Arbitrum", "Optimism"],
    max_chains_per_protocol: 3,
    tvl_floor: 10_000_000.0,
    tvl_span: 1_000_000_000.0,
    max_change_pct: 10.0,
};

/// Total TVL history (billions of USD).
pub struct TvlHistoryConfig {
    pub days: usize,
    pub level: f64,
    pub wave_amplitude: f64,
    /// Divisor applied to the day index inside the sine wave.
    pub wave_stretch: f64,
    pub jitter: f64,
    /// Maximum absolute move per refresh.
    pub refresh_step: f64,
}

pub const TVL_HISTORY: TvlHistoryConfig = TvlHistoryConfig {
    days: 30,
    level: 40.0,
    wave_amplitude: 5.0,
    wave_stretch: 2.0,
    jitter: 2.0,
    refresh_step: 1.0,
};
