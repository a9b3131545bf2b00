mod format;
mod tables;

pub use format::{axis_count, billions, change_pct, compact_usd, fee, grouped};
pub use tables::{
    render_daily_rows, render_gas, render_languages, render_protocols, render_transaction_summary,
    render_tvl,
};
