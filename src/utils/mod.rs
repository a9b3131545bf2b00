mod maths_utils;
mod perf;
mod time_utils;

pub use time_utils::{TimeUtils, format_date, format_duration, today_local, trailing_dates};

pub use maths_utils::{blend, lerp, mean_and_stddev, round_to, shares_pct};
