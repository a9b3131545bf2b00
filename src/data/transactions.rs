//! Daily transaction counts per chain: built once, sliced per request.

use {
    crate::{
        config::{CHAIN_PROFILES, FETCH, GENERATOR},
        domain::{Blockchain, DayRecord, TimeRange},
        models::{ChainProfile, NoiseFactory, SeedPolicy, build_profile_series},
        trace_time,
        utils::{mean_and_stddev, today_local, trailing_dates},
    },
    chrono::NaiveDate,
    itertools::{Itertools, MinMaxResult},
    rayon::prelude::*,
    serde::Serialize,
    std::{sync::OnceLock, time::Duration},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// The full generated horizon, oldest day first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionTable {
    pub chains: Vec<Blockchain>,
    pub records: Vec<DayRecord>,
}

impl TransactionTable {
    /// Zips per-chain series (one per entry of `chains`) into dated rows ending on `last_day`.
    pub fn from_series(chains: Vec<Blockchain>, series: &[Vec<u64>], last_day: NaiveDate) -> Self {
        let days = series.iter().map(Vec::len).min().unwrap_or(0);
        let records = trailing_dates(last_day, days)
            .into_iter()
            .enumerate()
            .map(|(i, date)| {
                let mut record = DayRecord::new(date);
                for (chain, values) in chains.iter().zip(series) {
                    record.counts.insert(*chain, values[i]);
                }
                record
            })
            .collect();
        Self { chains, records }
    }

    /// Most recent `range.days()` rows (all of them if the table is shorter).
    pub fn slice(&self, range: TimeRange) -> &[DayRecord] {
        let keep = range.days().min(self.records.len());
        &self.records[self.records.len() - keep..]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainSummary {
    pub chain: Blockchain,
    pub first: u64,
    pub last: u64,
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub stddev: f64,
}

impl ChainSummary {
    /// Relative change from the first to the last day of the slice, in percent.
    pub fn change_pct(&self) -> f64 {
        if self.first == 0 {
            return 0.0;
        }
        (self.last as f64 - self.first as f64) / self.first as f64 * 100.0
    }
}

/// Per-chain statistics over a slice. Chains absent from every row are skipped.
pub fn summarize(records: &[DayRecord], chains: &[Blockchain]) -> Vec<ChainSummary> {
    chains
        .iter()
        .filter_map(|&chain| {
            let values: Vec<u64> = records.iter().filter_map(|r| r.get(chain)).collect();
            let (min, max) = match values.iter().copied().minmax() {
                MinMaxResult::NoElements => return None,
                MinMaxResult::OneElement(v) => (v, v),
                MinMaxResult::MinMax(lo, hi) => (lo, hi),
            };
            let floats: Vec<f64> = values.iter().map(|&v| v as f64).collect();
            let (mean, stddev) = mean_and_stddev(&floats);
            Some(ChainSummary {
                chain,
                first: *values.first()?,
                last: *values.last()?,
                min,
                max,
                mean,
                stddev,
            })
        })
        .collect()
}

/// Owns the memoized transactions table. The first read builds it; every
/// later read (any range) slices the same rows until the store is dropped.
pub struct DailyTransactionStore {
    table: OnceLock<TransactionTable>,
    profiles: Vec<ChainProfile>,
    horizon_days: usize,
    last_day: Option<NaiveDate>,
    noise: Box<dyn NoiseFactory>,
    latency: Duration,
}

impl Default for DailyTransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DailyTransactionStore {
    pub fn new() -> Self {
        Self {
            table: OnceLock::new(),
            profiles: CHAIN_PROFILES.to_vec(),
            horizon_days: GENERATOR.horizon_days,
            last_day: None,
            noise: Box::new(SeedPolicy::Entropy),
            latency: FETCH.transactions_latency(),
        }
    }

    pub fn with_profiles(mut self, profiles: Vec<ChainProfile>) -> Self {
        self.profiles = profiles;
        self
    }

    pub fn with_noise(mut self, noise: impl NoiseFactory + 'static) -> Self {
        self.noise = Box::new(noise);
        self
    }

    /// Pins the last generated day instead of reading the local clock at build time.
    pub fn anchored_at(mut self, last_day: NaiveDate) -> Self {
        self.last_day = Some(last_day);
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn is_built(&self) -> bool {
        self.table.get().is_some()
    }

    pub fn table(&self) -> &TransactionTable {
        self.table.get_or_init(|| self.build())
    }

    pub fn get(&self, range: TimeRange) -> &[DayRecord] {
        let slice = self.table().slice(range);
        #[cfg(debug_assertions)]
        if DF.log_transactions {
            log::info!("Daily transactions: {} rows for range {}", slice.len(), range);
        }
        slice
    }

    /// [`Self::get`] behind the artificial network delay.
    pub async fn fetch(&self, range: TimeRange) -> &[DayRecord] {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.get(range)
    }

    fn build(&self) -> TransactionTable {
        let last_day = self.last_day.unwrap_or_else(today_local);
        let days = self.horizon_days;

        let series: Vec<Vec<u64>> = trace_time!("Build daily transaction table", 20_000, {
            self.profiles
                .par_iter()
                .enumerate()
                .map(|(i, profile)| {
                    let mut noise = self.noise.stream(i);
                    build_profile_series(profile, days, noise.as_mut())
                })
                .collect()
        });

        let chains = self.profiles.iter().map(|p| p.chain).collect();
        let table = TransactionTable::from_series(chains, &series, last_day);

        #[cfg(debug_assertions)]
        if DF.log_transactions {
            log::info!(
                "Built daily transaction table: {} chains x {} days ending {}",
                table.chains.len(),
                table.len(),
                last_day
            );
        }
        table
    }
}
