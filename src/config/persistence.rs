//! Export file naming for the generated series.
use crate::domain::TimeRange;

/// Configuration for JSON exports of the daily transaction table
pub struct ExportConfig {
    /// Directory exports are written into
    pub directory: &'static str,
    /// Base filename (without range suffix or extension)
    pub filename_base: &'static str,
    /// Version of the export layout
    pub version: f64,
}

pub const EXPORT: ExportConfig = ExportConfig {
    directory: "exports",
    filename_base: "daily_tx",
    version: 1.0,
};

/// Range-specific export filename
/// Example: "daily_tx_1y_v1.json"
pub fn export_filename(range: TimeRange) -> String {
    format!(
        "{}_{}_v{}.json",
        EXPORT.filename_base, range, EXPORT.version
    )
}
