use crate::domain::Blockchain;

pub struct LlamaClientConfig {
    pub base_url: &'static str,
    pub chains_path: &'static str,
    pub timeout_ms: u64,
}

pub const LLAMA: LlamaClientConfig = LlamaClientConfig {
    base_url: "https://api.llama.fi",
    chains_path: "/chains",
    timeout_ms: 5000,
};

/// DeFi Llama chain names we track, mapped to our own chain identifiers.
pub const LLAMA_CHAIN_MAP: &[(&str, Blockchain)] = &[
    ("Ethereum", Blockchain::Ethereum),
    ("BNB", Blockchain::BNBChain),
    ("Base", Blockchain::Base),
    ("Polygon", Blockchain::Polygon),
    ("Arbitrum", Blockchain::Arbitrum),
    ("Optimism", Blockchain::Optimism),
    ("Solana", Blockchain::Solana),
    ("Tron", Blockchain::Tron),
];

/// Served whenever the live fetch fails. Values in billions of USD.
pub const FALLBACK_TVL: &[(Blockchain, f64)] = &[
    (Blockchain::Ethereum, 40.5),
    (Blockchain::BNBChain, 15.2),
    (Blockchain::Polygon, 8.7),
    (Blockchain::Arbitrum, 6.3),
    (Blockchain::Optimism, 4.1),
];

pub const TVL_UNIT: f64 = 1e9;
