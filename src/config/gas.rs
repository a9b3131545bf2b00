use crate::domain::{Blockchain, GasFee};

/// Static USD price points per transaction speed. The real endpoints quote
/// gwei and need a price feed, so this table stands in for them.
pub const GAS_FEES: &[(Blockchain, GasFee)] = &[
    (Blockchain::Ethereum, GasFee::new(5.21, 6.54, 8.91)),
    (Blockchain::BNBChain, GasFee::new(0.05, 0.07, 0.10)),
    (Blockchain::Base, GasFee::new(0.02, 0.03, 0.05)),
    (Blockchain::Polygon, GasFee::new(0.01, 0.02, 0.03)),
    (Blockchain::Arbitrum, GasFee::new(0.04, 0.06, 0.09)),
    (Blockchain::Optimism, GasFee::new(0.03, 0.05, 0.08)),
    (Blockchain::Solana, GasFee::new(0.001, 0.002, 0.003)),
    (Blockchain::Tron, GasFee::new(0.1, 0.15, 0.2)),
    (Blockchain::Bitcoin, GasFee::new(1.5, 2.5, 4.0)),
];
