//! Tuning for the synthetic series generator.
//!
//! The numbers here were picked for visual plausibility on a daily chart.
//! Only the structure (trend, events, layered noise, clamp, smoothing) matters.

/// Long-term trend shaping.
pub struct TrendConfig {
    /// Period of the low-frequency wobble laid over the interpolated trend.
    pub wobble_period_days: f64,
    /// Wobble amplitude as a fraction of the interpolated value.
    pub wobble_amplitude: f64,
    /// Exponential warp strength applied when `end_bias > 0.5`.
    pub warp_strength: f64,
    /// Weight of today's target when blending against yesterday's value.
    pub target_blend: f64,
}

/// Two uniform noise layers, each scaled by `volatility * target`.
pub struct NoiseConfig {
    pub primary_scale: f64,
    pub secondary_scale: f64,
}

/// Random perturbation windows.
pub struct EventConfig {
    pub min_count: usize,
    pub max_count: usize,
    pub min_days: usize,
    pub max_days: usize,
    pub intensity: (f64, f64),
    pub curve_shape: (f64, f64),
    pub phase_ratio: (f64, f64),
    /// Fraction of the window used for the linear fade in and fade out.
    pub fade_fraction: f64,
    /// Peak effect as a fraction of the profile's mid-range value.
    pub scale: f64,
    pub lateral_period_days: f64,
    pub lateral_damping: f64,
    /// Share of the peak an up/down event keeps once past its phase point.
    pub retained_after_peak: f64,
}

/// How the trend, noise and event components are combined.
pub struct MixConfig {
    pub noise_weight: f64,
    pub event_weight: f64,
    /// Extra +/- variation applied to the summed event effect each day.
    pub event_variation: f64,
}

pub struct GeneratorConfig {
    pub horizon_days: usize,
    pub trend: TrendConfig,
    pub noise: NoiseConfig,
    pub events: EventConfig,
    pub mix: MixConfig,
    /// Tolerated overshoot beyond the profile's `[min, max]` envelope.
    pub overshoot: f64,
    /// Weight kept from yesterday's final value in the output smoothing pass.
    pub smoothing_prior: f64,
}

pub const GENERATOR: GeneratorConfig = GeneratorConfig {
    horizon_days: 365,
    trend: TrendConfig {
        wobble_period_days: 30.0,
        wobble_amplitude: 0.05,
        warp_strength: 3.0,
        target_blend: 0.1,
    },
    noise: NoiseConfig {
        primary_scale: 1.0,
        secondary_scale: 0.5,
    },
    events: EventConfig {
        min_count: 3,
        max_count: 6,
        min_days: 14,
        max_days: 60,
        intensity: (0.5, 1.5),
        curve_shape: (0.5, 2.5),
        phase_ratio: (0.3, 0.7),
        fade_fraction: 0.2,
        scale: 0.15,
        lateral_period_days: 30.0,
        lateral_damping: 0.5,
        retained_after_peak: 0.5,
    },
    mix: MixConfig {
        noise_weight: 1.2,
        event_weight: 0.4,
        event_variation: 0.2,
    },
    overshoot: 0.1,
    smoothing_prior: 0.9,
};
