mod freshness;
mod gas;
mod llama;
mod protocols;
mod provider;
mod tvl;
mod transactions;

pub use {
    freshness::Timed,
    gas::{fetch_all_gas_fees, fetch_gas_fees, gas_fee_for, gas_fee_table},
    llama::{LlamaProvider, TvlFetchError, parse_chains},
    protocols::{
        LanguageShare, Protocol, TvlHistory, TvlPoint, aggregate_categories, aggregate_chains,
        generate_mock_protocols, language_shares,
    },
    provider::{StaticTvlProvider, TvlProvider},
    transactions::{ChainSummary, DailyTransactionStore, TransactionTable, summarize},
    tvl::fetch_tvl_report,
};
