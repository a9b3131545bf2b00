// Domain types and value objects
mod blockchain;
mod day_record;
mod gas_fee;
mod time_range;
mod tvl;

// Re-export commonly used types to the world
pub use blockchain::Blockchain;
pub use day_record::DayRecord;
pub use gas_fee::GasFee;
pub use time_range::TimeRange;
pub use tvl::{DataSource, NamedValue, TvlEntry, TvlReport, fallback_tvl_entries};
