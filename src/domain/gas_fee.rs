use serde::{Deserialize, Serialize};

/// USD cost of a simple transfer at three confirmation speeds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GasFee {
    pub slow: f64,
    pub normal: f64,
    pub fast: f64,
}

impl GasFee {
    pub const fn new(slow: f64, normal: f64, fast: f64) -> Self {
        Self { slow, normal, fast }
    }
}
