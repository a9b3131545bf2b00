use {
    crate::config::LLAMA_CHAIN_MAP,
    serde::{Deserialize, Serialize},
    strum_macros::{AsRefStr, Display, EnumIter, EnumString},
};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Blockchain {
    Ethereum,
    BNBChain,
    Base,
    Polygon,
    Arbitrum,
    Optimism,
    Bitcoin,
    Solana,
    Tron,
}

impl Blockchain {
    /// Looks up a DeFi Llama chain name (e.g. `"BNB"`). Untracked names return `None`.
    pub fn from_llama_name(name: &str) -> Option<Self> {
        LLAMA_CHAIN_MAP
            .iter()
            .find(|(llama, _)| *llama == name)
            .map(|(_, chain)| *chain)
    }

    pub fn llama_name(&self) -> Option<&'static str> {
        LLAMA_CHAIN_MAP
            .iter()
            .find(|(_, chain)| chain == self)
            .map(|(llama, _)| *llama)
    }
}
