use crate::domain::Blockchain;

/// Static shape of one chain's synthetic series.
///
/// `min <= start, end <= max` is expected but never checked: out-of-range
/// profiles still generate, they just get clamped into a degenerate band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainProfile {
    pub chain: Blockchain,
    pub start: f64,
    pub end: f64,
    pub volatility: f64,
    pub min: f64,
    pub max: f64,
    /// 0..1. Above 0.5 the growth concentrates toward the end of the horizon.
    pub end_bias: Option<f64>,
}

impl ChainProfile {
    pub const DEFAULT_VOLATILITY: f64 = 0.05;

    pub const fn new(chain: Blockchain, start: f64, end: f64) -> Self {
        Self {
            chain,
            start,
            end,
            volatility: Self::DEFAULT_VOLATILITY,
            min: 0.0,
            max: f64::INFINITY,
            end_bias: None,
        }
    }

    pub const fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    pub const fn bounds(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub const fn end_bias(mut self, end_bias: f64) -> Self {
        self.end_bias = Some(end_bias);
        self
    }

    /// Clamp band with the tolerated overshoot applied on both sides.
    pub fn envelope(&self, overshoot: f64) -> (f64, f64) {
        (self.min * (1.0 - overshoot), self.max * (1.0 + overshoot))
    }

    /// Mid-range value events are scaled against.
    pub fn reference_level(&self) -> f64 {
        if self.max.is_finite() {
            (self.min + self.max) / 2.0
        } else {
            (self.start + self.end) / 2.0
        }
    }
}
