use {
    crate::{
        config::GAS_FEES,
        domain::{Blockchain, GasFee},
    },
    futures::future::join_all,
    std::time::Duration,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Static lookup. Every [`Blockchain`] has an entry; a missing one reads as zero fees.
pub fn gas_fee_for(chain: Blockchain) -> GasFee {
    GAS_FEES
        .iter()
        .find(|(c, _)| *c == chain)
        .map(|(_, fee)| *fee)
        .unwrap_or_default()
}

pub fn gas_fee_table() -> Vec<(Blockchain, GasFee)> {
    GAS_FEES.to_vec()
}

/// Lookup behind an artificial network delay.
pub async fn fetch_gas_fees(chain: Blockchain, latency: Duration) -> GasFee {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
    let fee = gas_fee_for(chain);
    #[cfg(debug_assertions)]
    if DF.log_gas {
        log::info!("Gas for {}: {:?}", chain, fee);
    }
    fee
}

/// All chains concurrently, so the total wait is one latency, not nine.
pub async fn fetch_all_gas_fees(chains: &[Blockchain], latency: Duration) -> Vec<(Blockchain, GasFee)> {
    let fees = join_all(chains.iter().map(|&chain| fetch_gas_fees(chain, latency))).await;
    chains.iter().copied().zip(fees).collect()
}
