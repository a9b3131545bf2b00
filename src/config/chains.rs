//! Per-chain profiles driving the synthetic daily transaction series.

use crate::domain::Blockchain;
use crate::models::ChainProfile;

/// Chains shown on the daily transactions panel, in legend order.
pub const TRACKED_CHAINS: &[Blockchain] = &[
    Blockchain::Ethereum,
    Blockchain::BNBChain,
    Blockchain::Polygon,
    Blockchain::Arbitrum,
    Blockchain::Base,
    Blockchain::Solana,
];

/// Daily transaction count profiles. `start`/`end` are counts on the first and
/// last day of the horizon; `min`/`max` bound the series (soft, see generator).
pub const CHAIN_PROFILES: &[ChainProfile] = &[
    ChainProfile::new(Blockchain::Ethereum, 1_050_000.0, 1_250_000.0)
        .volatility(0.04)
        .bounds(900_000.0, 1_500_000.0),
    ChainProfile::new(Blockchain::BNBChain, 3_800_000.0, 4_600_000.0)
        .volatility(0.06)
        .bounds(3_000_000.0, 5_500_000.0),
    ChainProfile::new(Blockchain::Polygon, 2_900_000.0, 3_300_000.0)
        .volatility(0.05)
        .bounds(2_300_000.0, 4_000_000.0),
    ChainProfile::new(Blockchain::Arbitrum, 1_300_000.0, 2_100_000.0)
        .volatility(0.07)
        .bounds(1_000_000.0, 2_800_000.0)
        .end_bias(0.7),
    ChainProfile::new(Blockchain::Base, 1_800_000.0, 4_200_000.0)
        .volatility(0.08)
        .bounds(1_200_000.0, 5_500_000.0)
        .end_bias(0.85),
    ChainProfile::new(Blockchain::Solana, 28_000_000.0, 38_000_000.0)
        .volatility(0.05)
        .bounds(22_000_000.0, 45_000_000.0)
        .end_bias(0.6),
];
