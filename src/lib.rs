#![allow(clippy::const_is_empty)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod report;
pub mod utils;

// Re-export commonly used types outside of crate (for the binaries and tests)
pub use data::{DailyTransactionStore, LlamaProvider, StaticTvlProvider, TvlProvider, fetch_tvl_report};
pub use domain::{Blockchain, DataSource, DayRecord, TimeRange, TvlReport};
pub use engine::DashboardService;
pub use models::{ChainProfile, NoiseSource, SeedPolicy, build_profile_series};

use {
    crate::{
        config::{FETCH, FETCH_NO_LATENCY, LLAMA, TRACKED_CHAINS},
        data::{aggregate_categories, aggregate_chains, gas_fee_table, language_shares, summarize},
        report::{
            render_daily_rows, render_gas, render_languages, render_protocols,
            render_transaction_summary, render_tvl,
        },
    },
    anyhow::{Context, Result, bail},
    clap::{Parser, ValueEnum},
    serde_json::{Map, Value, json},
    std::{collections::BTreeMap, str::FromStr},
};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    All,
    Tvl,
    Gas,
    Transactions,
    Protocols,
    Languages,
}

impl Panel {
    fn shows(self, panel: Panel) -> bool {
        self == Panel::All || self == panel
    }
}

// CLI argument parsing
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "DeFi dashboard data in the terminal", long_about = None)]
pub struct Cli {
    /// Daily transactions window: 1m, 6m or 1y (anything else shows 1y)
    #[arg(long, default_value = "1m")]
    pub range: String,

    #[arg(long, value_enum, default_value_t = Panel::All)]
    pub panel: Panel,

    /// Print JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Skip DeFi Llama and serve the built-in TVL table
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Alternative DeFi Llama host (e.g. a local mirror)
    #[arg(long)]
    pub llama_url: Option<String>,

    /// Seed for reproducible synthetic data
    #[arg(long)]
    pub seed: Option<u64>,

    /// Comma separated chains to keep on the transactions and gas panels
    #[arg(long, value_delimiter = ',')]
    pub chains: Vec<String>,

    /// Also print one row per day on the transactions panel
    #[arg(long, default_value_t = false)]
    pub daily: bool,

    /// Skip the artificial network delays
    #[arg(long, default_value_t = false)]
    pub no_latency: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            range: TimeRange::default().to_string(),
            panel: Panel::All,
            json: false,
            offline: false,
            llama_url: None,
            seed: None,
            chains: Vec::new(),
            daily: false,
            no_latency: false,
        }
    }
}

/// Parses `--chains`. Empty means no filter.
pub fn selected_chains(names: &[String]) -> Result<Option<Vec<Blockchain>>> {
    let names: Vec<&str> = names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()).collect();
    if names.is_empty() {
        return Ok(None);
    }
    let mut chains = Vec::with_capacity(names.len());
    for name in names {
        let chain = Blockchain::from_str(name)
            .ok()
            .or_else(|| Blockchain::from_llama_name(name));
        match chain {
            Some(chain) if !chains.contains(&chain) => chains.push(chain),
            Some(_) => {}
            None => bail!("Unknown chain '{}'", name),
        }
    }
    Ok(Some(chains))
}

pub fn build_service(args: &Cli) -> Result<DashboardService> {
    let provider: Box<dyn TvlProvider> = if args.offline {
        Box::new(StaticTvlProvider)
    } else {
        let base_url = args.llama_url.as_deref().unwrap_or(LLAMA.base_url);
        Box::new(LlamaProvider::with_base_url(base_url).context("Failed to set up the TVL provider")?)
    };
    let policy = if args.no_latency { &FETCH_NO_LATENCY } else { &FETCH };
    Ok(DashboardService::new(provider)
        .with_policy(policy)
        .with_seed(SeedPolicy::from_option(args.seed)))
}

/// Main entry point for the binary: gathers the requested panels and renders them.
pub async fn run(args: &Cli) -> Result<String> {
    let range = TimeRange::parse_loose(&args.range);
    if range.to_string() != args.range.trim() {
        log::warn!("Unknown range '{}', showing {}", args.range, range);
    }
    let selection = selected_chains(&args.chains)?;
    let mut service = build_service(args)?;
    log::debug!("TVL provider: {}", service.provider_signature());

    let mut sections: Vec<String> = Vec::new();
    let mut payload = Map::new();

    if args.panel.shows(Panel::Tvl) {
        let report = service.tvl().await.clone();
        sections.push(section("TVL by chain", render_tvl(&report)));
        payload.insert("tvl".into(), serde_json::to_value(&report)?);
    }

    if args.panel.shows(Panel::Gas) {
        let chains: Vec<Blockchain> = selection
            .clone()
            .unwrap_or_else(|| gas_fee_table().into_iter().map(|(chain, _)| chain).collect());
        let fees = service.gas_table(&chains).await;
        sections.push(section("Gas fees (USD)", render_gas(&fees)));
        let by_chain: BTreeMap<_, _> = fees.into_iter().collect();
        payload.insert("gas".into(), serde_json::to_value(&by_chain)?);
    }

    if args.panel.shows(Panel::Transactions) {
        let chains = selection.clone().unwrap_or_else(|| TRACKED_CHAINS.to_vec());
        let records: Vec<DayRecord> = service
            .daily_transactions(range)
            .await
            .iter()
            .map(|r| r.filtered(&chains))
            .collect();
        let summary = summarize(&records, &chains);

        let mut text = render_transaction_summary(&summary, &records);
        if args.daily {
            text = format!("{}\n\n{}", text, render_daily_rows(&records, &chains));
        }
        sections.push(section(&format!("Daily transactions ({})", range), text));
        payload.insert(
            "transactions".into(),
            json!({ "range": range, "summary": summary, "records": records }),
        );
    }

    if args.panel.shows(Panel::Protocols) {
        let protocols = service.protocols().to_vec();
        let categories = aggregate_categories(&protocols);
        let chains = aggregate_chains(&protocols);
        let history = service.tvl_history().clone();
        sections.push(section(
            "Top protocols (simulated)",
            render_protocols(&protocols, &categories, &chains, &history),
        ));
        payload.insert(
            "protocols".into(),
            json!({
                "protocols": protocols,
                "categories": categories,
                "chains": chains,
                "tvl_history": history.points,
            }),
        );
    }

    if args.panel.shows(Panel::Languages) {
        let shares = language_shares();
        sections.push(section("TVL by contract language", render_languages(&shares)));
        payload.insert("languages".into(), serde_json::to_value(&shares)?);
    }

    if args.json {
        Ok(serde_json::to_string_pretty(&Value::Object(payload))?)
    } else {
        Ok(sections.join("\n\n"))
    }
}

fn section(title: &str, body: String) -> String {
    format!("== {} ==\n{}", title, body)
}
