//! Mock protocol rankings, their category/chain breakdowns, and the total
//! TVL history walk. None of this is fetched; it only has to look plausible.

use {
    crate::{
        config::{LANGUAGE_BREAKDOWN, MockProtocolConfig, TVL_UNIT, TvlHistoryConfig},
        domain::NamedValue,
        models::NoiseSource,
        utils::{round_to, shares_pct, trailing_dates},
    },
    chrono::NaiveDate,
    serde::Serialize,
    std::collections::BTreeMap,
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Protocol {
    pub id: String,
    pub name: String,
    /// USD.
    pub tvl: f64,
    /// Percent.
    pub change_24h: f64,
    pub chains: Vec<String>,
    pub category: String,
}

/// Sorted by TVL, largest first.
pub fn generate_mock_protocols<N: NoiseSource + ?Sized>(noise: &mut N, cfg: &MockProtocolConfig) -> Vec<Protocol> {
    let mut protocols: Vec<Protocol> = (1..=cfg.count)
        .map(|i| {
            let tvl = noise.uniform(cfg.tvl_floor, cfg.tvl_floor + cfg.tvl_span);
            let change_24h = noise.uniform(-cfg.max_change_pct, cfg.max_change_pct);
            let chain_count = noise.between(1, cfg.max_chains_per_protocol.min(cfg.chains.len()).max(1));
            let chains = sample_without_replacement(noise, cfg.chains, chain_count);
            let category = cfg.categories[noise.index(cfg.categories.len())].to_string();
            Protocol {
                id: format!("protocol-{}", i),
                name: format!("Protocol {}", i),
                tvl,
                change_24h,
                chains,
                category,
            }
        })
        .collect();

    protocols.sort_by(|a, b| b.tvl.total_cmp(&a.tvl));

    #[cfg(debug_assertions)]
    if DF.log_protocols {
        log::info!("Generated {} mock protocols", protocols.len());
    }
    protocols
}

fn sample_without_replacement<N: NoiseSource + ?Sized>(
    noise: &mut N,
    pool: &[&str],
    count: usize,
) -> Vec<String> {
    let mut remaining: Vec<&str> = pool.to_vec();
    let mut picked = Vec::with_capacity(count);
    while picked.len() < count && !remaining.is_empty() {
        let i = noise.index(remaining.len());
        picked.push(remaining.swap_remove(i).to_string());
    }
    picked
}

/// TVL per category in billions, 2 decimals, largest first.
pub fn aggregate_categories(protocols: &[Protocol]) -> Vec<NamedValue> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for p in protocols {
        *totals.entry(p.category.as_str()).or_default() += p.tvl;
    }
    to_sorted_billions(totals)
}

/// TVL per chain in billions, 2 decimals. A protocol's TVL is split evenly across its chains.
pub fn aggregate_chains(protocols: &[Protocol]) -> Vec<NamedValue> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for p in protocols.iter().filter(|p| !p.chains.is_empty()) {
        let share = p.tvl / p.chains.len() as f64;
        for chain in &p.chains {
            *totals.entry(chain.as_str()).or_default() += share;
        }
    }
    to_sorted_billions(totals)
}

fn to_sorted_billions(totals: BTreeMap<&str, f64>) -> Vec<NamedValue> {
    let mut values: Vec<NamedValue> = totals
        .into_iter()
        .map(|(name, usd)| NamedValue {
            name: name.to_string(),
            value: round_to(usd / TVL_UNIT, 2),
        })
        .collect();
    values.sort_by(|a, b| b.value.total_cmp(&a.value));
    values
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TvlPoint {
    pub date: NaiveDate,
    /// Billions of USD.
    pub value: f64,
}

/// Rolling window of total TVL, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TvlHistory {
    pub points: Vec<TvlPoint>,
}

impl TvlHistory {
    /// `cfg.days` points ending on `last_day`: a slow sine around `cfg.level` plus jitter.
    pub fn generate<N: NoiseSource + ?Sized>(noise: &mut N, last_day: NaiveDate, cfg: &TvlHistoryConfig) -> Self {
        let points = trailing_dates(last_day, cfg.days)
            .into_iter()
            .enumerate()
            .map(|(i, date)| TvlPoint {
                date,
                value: cfg.level
                    + (i as f64 / cfg.wave_stretch).sin() * cfg.wave_amplitude
                    + noise.next_unit() * cfg.jitter,
            })
            .collect();
        Self { points }
    }

    /// Drops the oldest point and appends one for `today`, a small step from the latest.
    pub fn refresh<N: NoiseSource + ?Sized>(&mut self, noise: &mut N, today: NaiveDate, cfg: &TvlHistoryConfig) {
        let Some(last) = self.latest() else {
            return;
        };
        let step = (noise.next_unit() - 0.5) * 2.0 * cfg.refresh_step;
        let next = TvlPoint {
            date: today,
            value: round_to(last.value + step, 2),
        };
        self.points.remove(0);
        self.points.push(next);
    }

    pub fn latest(&self) -> Option<TvlPoint> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageShare {
    pub language: &'static str,
    pub tvl: f64,
    pub share_pct: f64,
    pub color: &'static str,
}

/// The static language table with each entry's share of the total.
pub fn language_shares() -> Vec<LanguageShare> {
    let tvls: Vec<f64> = LANGUAGE_BREAKDOWN.iter().map(|l| l.tvl).collect();
    LANGUAGE_BREAKDOWN
        .iter()
        .zip(shares_pct(&tvls))
        .map(|(l, share_pct)| LanguageShare {
            language: l.language,
            tvl: l.tvl,
            share_pct,
            color: l.color,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MOCK_PROTOCOLS, TVL_HISTORY};
    use crate::models::{FixedNoise, RngNoise};

    fn protocol(tvl: f64, category: &str, chains: &[&str]) -> Protocol {
        Protocol {
            id: "p".into(),
            name: "P".into(),
            tvl,
            change_24h: 0.0,
            chains: chains.iter().map(|c| c.to_string()).collect(),
            category: category.into(),
        }
    }

    #[test]
    fn mock_protocols_respect_config() {
        let protocols = generate_mock_protocols(&mut RngNoise::seeded(11), &MOCK_PROTOCOLS);
        assert_eq!(protocols.len(), 10);
        for p in &protocols {
            assert!(p.tvl >= 1e7 && p.tvl < 1.01e9);
            assert!(p.change_24h >= -10.0 && p.change_24h < 10.0);
            assert!((1..=3).contains(&p.chains.len()));
            let mut unique = p.chains.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), p.chains.len(), "duplicate chain in {:?}", p.chains);
            assert!(MOCK_PROTOCOLS.categories.contains(&p.category.as_str()));
        }
        assert!(protocols.windows(2).all(|w| w[0].tvl >= w[1].tvl));
        assert!(protocols.iter().any(|p| p.id == "protocol-10"));
    }

    #[test]
    fn categories_sum_and_round() {
        let protocols = vec![
            protocol(1.234e9, "DEX", &["Ethereum"]),
            protocol(0.5e9, "DEX", &["Polygon"]),
            protocol(2.0e9, "Lending", &["Ethereum"]),
        ];
        let categories = aggregate_categories(&protocols);
        assert_eq!(categories[0], NamedValue { name: "Lending".into(), value: 2.0 });
        assert_eq!(categories[1], NamedValue { name: "DEX".into(), value: 1.73 });
    }

    #[test]
    fn chains_split_tvl_evenly() {
        let protocols = vec![
            protocol(3.0e9, "DEX", &["Ethereum", "Arbitrum", "Optimism"]),
            protocol(1.0e9, "Yield", &["Ethereum"]),
            protocol(9.0e9, "Yield", &[]),
        ];
        let chains = aggregate_chains(&protocols);
        assert_eq!(chains[0], NamedValue { name: "Ethereum".into(), value: 2.0 });
        assert_eq!(chains.len(), 3);
        assert!(chains.iter().skip(1).all(|c| c.value == 1.0));
    }

    #[test]
    fn history_refresh_rolls_the_window() {
        let end = NaiveDate::from_ymd_opt(2025, 5, 30).unwrap();
        let mut history = TvlHistory::generate(&mut FixedNoise::constant(0.5), end, &TVL_HISTORY);
        assert_eq!(history.len(), 30);
        assert_eq!(history.points[0].value, 41.0);
        assert_eq!(history.latest().unwrap().date, end);

        let before = history.latest().unwrap().value;
        let today = end.succ_opt().unwrap();
        history.refresh(&mut FixedNoise::constant(0.9), today, &TVL_HISTORY);
        assert_eq!(history.len(), 30);
        let after = history.latest().unwrap();
        assert_eq!(after.date, today);
        assert!((after.value - round_to(before + 0.8, 2)).abs() < 1e-9);
    }

    #[test]
    fn language_shares_cover_everything() {
        let shares = language_shares();
        assert_eq!(shares.len(), LANGUAGE_BREAKDOWN.len());
        let total: f64 = shares.iter().map(|s| s.share_pct).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(shares[0].language, "Solidity");
    }
}
