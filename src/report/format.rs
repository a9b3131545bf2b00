//! Display formatting for the terminal panels.

use crate::config::TVL_UNIT;

/// Compact USD with two decimals: `$1.23B`, `$456.70M`, `$12.00K`, `$3.50`.
pub fn compact_usd(usd: f64) -> String {
    let sign = if usd < 0.0 { "-" } else { "" };
    let abs = usd.abs();
    let (scaled, suffix) = if abs >= 1e12 {
        (abs / 1e12, "T")
    } else if abs >= TVL_UNIT {
        (abs / TVL_UNIT, "B")
    } else if abs >= 1e6 {
        (abs / 1e6, "M")
    } else if abs >= 1e3 {
        (abs / 1e3, "K")
    } else {
        (abs, "")
    };
    format!("{}${:.2}{}", sign, scaled, suffix)
}

/// Billions of USD as shown on the TVL panels, e.g. `$40.50B`.
pub fn billions(value: f64) -> String {
    format!("${:.2}B", value)
}

/// Axis-style count: one decimal in millions, whole thousands below that.
pub fn axis_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1e6)
    } else if count >= 1_000 {
        format!("{:.0}K", count as f64 / 1e3)
    } else {
        count.to_string()
    }
}

/// Full count with thousands separators, e.g. `1,234,567`.
pub fn grouped(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn change_pct(pct: f64) -> String {
    let arrow = if pct >= 0.0 { "▲" } else { "▼" };
    format!("{} {:.2}%", arrow, pct.abs())
}

pub fn fee(usd: f64) -> String {
    format!("${:.3}", usd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_usd_picks_suffix() {
        assert_eq!(compact_usd(1.234e9), "$1.23B");
        assert_eq!(compact_usd(456_700_000.0), "$456.70M");
        assert_eq!(compact_usd(12_000.0), "$12.00K");
        assert_eq!(compact_usd(3.5), "$3.50");
        assert_eq!(compact_usd(-2.5e6), "-$2.50M");
    }

    #[test]
    fn counts_match_chart_axes() {
        assert_eq!(axis_count(1_260_000), "1.3M");
        assert_eq!(axis_count(38_000_000), "38.0M");
        assert_eq!(axis_count(950_400), "950K");
        assert_eq!(axis_count(999), "999");
        assert_eq!(grouped(1_234_567), "1,234,567");
        assert_eq!(grouped(999), "999");
        assert_eq!(grouped(1000), "1,000");
    }

    #[test]
    fn percent_and_fees() {
        assert_eq!(change_pct(3.4567), "▲ 3.46%");
        assert_eq!(change_pct(-0.5), "▼ 0.50%");
        assert_eq!(fee(0.002), "$0.002");
        assert_eq!(billions(40.5), "$40.50B");
    }
}
