use {
    chrono::{Days, Local, NaiveDate},
    std::time::Duration,
};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    /// Short day label used on chart-style axes, e.g. `Mar 07`.
    pub const AXIS_DAY_FORMAT: &str = "%b %d";
}

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// `count` consecutive dates ending on (and including) `last`, oldest first.
/// Returns fewer dates only if the calendar underflows.
pub fn trailing_dates(last: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = (0..count as u64)
        .map_while(|back| last.checked_sub_days(Days::new(back)))
        .collect();
    dates.reverse();
    dates
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m", mins);
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }
    format!("{}d", hours / 24)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_dates_are_consecutive_and_end_on_last() {
        let last = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let dates = trailing_dates(last, 3);
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
                last,
            ]
        );
        assert!(trailing_dates(last, 0).is_empty());
    }

    #[test]
    fn durations_read_naturally() {
        assert_eq!(format_duration(Duration::from_secs(30)), "30s");
        assert_eq!(format_duration(Duration::from_secs(300)), "5m");
        assert_eq!(format_duration(Duration::from_secs(7200)), "2h");
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()), "2024-01-05");
    }
}
