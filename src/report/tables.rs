//! Terminal tables, one renderer per dashboard panel.

use {
    crate::{
        data::{ChainSummary, LanguageShare, Protocol, TvlHistory},
        domain::{Blockchain, DataSource, DayRecord, GasFee, NamedValue, TvlReport},
        report::format::{axis_count, billions, change_pct, compact_usd, fee, grouped},
        utils::{TimeUtils, format_date, shares_pct},
    },
    tabled::{Table, Tabled, builder::Builder, settings::Style},
};

#[derive(Tabled)]
struct TvlRow {
    #[tabled(rename = "Chain")]
    chain: String,
    #[tabled(rename = "TVL")]
    tvl: String,
    #[tabled(rename = "Share")]
    share: String,
}

pub fn render_tvl(report: &TvlReport) -> String {
    let values: Vec<f64> = report.entries.iter().map(|e| e.value).collect();
    let rows: Vec<TvlRow> = report
        .entries
        .iter()
        .zip(shares_pct(&values))
        .map(|(e, share)| TvlRow {
            chain: e.name.clone(),
            tvl: billions(e.value),
            share: format!("{:.1}%", share),
        })
        .collect();

    let notice = match &report.source {
        DataSource::Live { provider } => format!("Source: {} (total {})", provider, billions(report.total())),
        DataSource::Fallback { reason } => format!("Showing fallback data: {}", reason),
    };
    format!("{}\n{}", Table::new(rows).with(Style::rounded()), notice)
}

#[derive(Tabled)]
struct GasRow {
    #[tabled(rename = "Chain")]
    chain: Blockchain,
    #[tabled(rename = "Slow")]
    slow: String,
    #[tabled(rename = "Normal")]
    normal: String,
    #[tabled(rename = "Fast")]
    fast: String,
}

pub fn render_gas(fees: &[(Blockchain, GasFee)]) -> String {
    let rows = fees.iter().map(|(chain, f)| GasRow {
        chain: *chain,
        slow: fee(f.slow),
        normal: fee(f.normal),
        fast: fee(f.fast),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Chain")]
    chain: Blockchain,
    #[tabled(rename = "First")]
    first: String,
    #[tabled(rename = "Last")]
    last: String,
    #[tabled(rename = "Min")]
    min: String,
    #[tabled(rename = "Max")]
    max: String,
    #[tabled(rename = "Mean")]
    mean: String,
    #[tabled(rename = "Change")]
    change: String,
}

pub fn render_transaction_summary(summary: &[ChainSummary], records: &[DayRecord]) -> String {
    let rows = summary.iter().map(|s| SummaryRow {
        chain: s.chain,
        first: axis_count(s.first),
        last: axis_count(s.last),
        min: axis_count(s.min),
        max: axis_count(s.max),
        mean: axis_count(s.mean.round() as u64),
        change: change_pct(s.change_pct()),
    });
    let span = match (records.first(), records.last()) {
        (Some(first), Some(last)) => format!(
            "{} days, {} to {}",
            records.len(),
            format_date(first.date),
            format_date(last.date)
        ),
        _ => "no data".to_string(),
    };
    format!("{}\n{}", Table::new(rows).with(Style::rounded()), span)
}

/// One row per day, one column per chain.
pub fn render_daily_rows(records: &[DayRecord], chains: &[Blockchain]) -> String {
    let mut builder = Builder::default();
    builder.push_record(std::iter::once("Date".to_string()).chain(chains.iter().map(|c| c.to_string())));
    for record in records {
        let cells = chains
            .iter()
            .map(|&chain| record.get(chain).map(grouped).unwrap_or_else(|| "-".to_string()));
        builder.push_record(
            std::iter::once(record.date.format(TimeUtils::AXIS_DAY_FORMAT).to_string()).chain(cells),
        );
    }
    builder.build().with(Style::rounded()).to_string()
}

#[derive(Tabled)]
struct ProtocolRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Protocol")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Chains")]
    chains: String,
    #[tabled(rename = "TVL")]
    tvl: String,
    #[tabled(rename = "24h")]
    change: String,
}

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "TVL")]
    value: String,
}

pub fn render_protocols(
    protocols: &[Protocol],
    categories: &[NamedValue],
    chains: &[NamedValue],
    history: &TvlHistory,
) -> String {
    let rows = protocols.iter().enumerate().map(|(i, p)| ProtocolRow {
        rank: i + 1,
        name: p.name.clone(),
        category: p.category.clone(),
        chains: p.chains.join(", "),
        tvl: compact_usd(p.tvl),
        change: change_pct(p.change_24h),
    });
    let breakdown = |values: &[NamedValue]| {
        let rows = values.iter().map(|v| BreakdownRow {
            name: v.name.clone(),
            value: billions(v.value),
        });
        Table::new(rows).with(Style::rounded()).to_string()
    };
    let trend = match (history.points.first(), history.latest()) {
        (Some(first), Some(last)) => format!(
            "Total TVL {} on {} ({} over {} days)",
            billions(last.value),
            format_date(last.date),
            change_pct((last.value - first.value) / first.value * 100.0),
            history.len()
        ),
        _ => "Total TVL history unavailable".to_string(),
    };

    format!(
        "{}\n\nBy category\n{}\n\nBy chain\n{}\n\n{}",
        Table::new(rows).with(Style::rounded()),
        breakdown(categories),
        breakdown(chains),
        trend
    )
}

#[derive(Tabled)]
struct LanguageRow {
    #[tabled(rename = "Language")]
    language: &'static str,
    #[tabled(rename = "TVL")]
    tvl: String,
    #[tabled(rename = "Share")]
    share: String,
}

pub fn render_languages(shares: &[LanguageShare]) -> String {
    let rows = shares.iter().map(|s| LanguageRow {
        language: s.language,
        tvl: billions(s.tvl),
        share: format!("{:.1}%", s.share_pct),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}
