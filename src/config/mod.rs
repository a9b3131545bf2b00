//! Configuration module for the dashboard data layer.

// Can all be private now because we have a public re-export.
mod breakdown;
mod chains;
mod debug;
mod fetch;
mod gas;
mod generator;
mod llama;
mod persistence;
mod protocols;

// Re-export commonly used items
pub use breakdown::{LANGUAGE_BREAKDOWN, LanguageTvl};
pub use chains::{CHAIN_PROFILES, TRACKED_CHAINS};
pub use debug::DF;
pub use fetch::{FETCH, FETCH_NO_LATENCY, FetchPolicy};
pub use gas::GAS_FEES;
pub use generator::{EventConfig, GENERATOR, GeneratorConfig};
pub use llama::{FALLBACK_TVL, LLAMA, LLAMA_CHAIN_MAP, TVL_UNIT};
pub use persistence::{EXPORT, export_filename};
pub use protocols::{MOCK_PROTOCOLS, MockProtocolConfig, TVL_HISTORY, TvlHistoryConfig};
