use {
    crate::{
        config::{GENERATOR, GeneratorConfig},
        models::{ChainProfile, NoiseSource, SeriesEvent, generate_events},
        utils::{blend, lerp},
    },
    std::f64::consts::TAU,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Builds `days` daily counts for one chain with the default tuning.
pub fn build_profile_series<N: NoiseSource + ?Sized>(
    profile: &ChainProfile,
    days: usize,
    noise: &mut N,
) -> Vec<u64> {
    build_profile_series_with(profile, days, noise, &GENERATOR)
}

/// Trend + events + layered noise, clamped into the profile envelope and
/// smoothed against the previous day. Never fails: a malformed profile just
/// produces a degenerate series.
pub fn build_profile_series_with<N: NoiseSource + ?Sized>(
    profile: &ChainProfile,
    days: usize,
    noise: &mut N,
    cfg: &GeneratorConfig,
) -> Vec<u64> {
    if days == 0 {
        return Vec::new();
    }

    let events = generate_events(noise, days, &cfg.events);

    #[cfg(debug_assertions)]
    if DF.log_generator {
        for event in &events {
            log::info!(
                "{}: {} event days {}..{} (intensity {:.2})",
                profile.chain,
                event.kind,
                event.start_day,
                event.end_day,
                event.intensity
            );
        }
    }

    let reference = profile.reference_level();
    let (floor, ceiling) = profile.envelope(cfg.overshoot);

    let mut series = Vec::with_capacity(days);
    let mut baseline = profile.start;
    let mut previous = profile.start;

    for day in 0..days {
        let target = trend_target(profile, day, days, cfg);
        // Smooths the warped trend itself; the output gets its own pass below.
        baseline = blend(baseline, target, cfg.trend.target_blend);

        let primary = (noise.next_unit() - 0.5) * profile.volatility * target * cfg.noise.primary_scale;
        let secondary =
            (noise.next_unit() - 0.5) * profile.volatility * target * cfg.noise.secondary_scale;
        let noise_term = primary + secondary;

        let event_term = event_effect(&events, day, reference, cfg);
        let variation = 1.0 + (noise.next_unit() - 0.5) * 2.0 * cfg.mix.event_variation;

        let raw = baseline + cfg.mix.noise_weight * noise_term + cfg.mix.event_weight * event_term * variation;

        // min/max instead of clamp: an inverted envelope must not panic
        let clamped = raw.max(floor).min(ceiling);

        let value = if day == 0 {
            clamped
        } else {
            blend(previous, clamped, 1.0 - cfg.smoothing_prior)
        };
        previous = value;
        series.push(value.round().max(0.0) as u64);
    }

    #[cfg(debug_assertions)]
    if DF.log_generator {
        log::info!(
            "{}: {} days, first {:?}, last {:?} (profile {} -> {})",
            profile.chain,
            days,
            series.first(),
            series.last(),
            profile.start,
            profile.end
        );
    }

    series
}

/// Normalized progress through the horizon, warped toward the end when
/// `end_bias > 0.5`. A single-day horizon counts as complete.
pub fn warped_progress(day: usize, days: usize, end_bias: Option<f64>, warp_strength: f64) -> f64 {
    let p = if days <= 1 {
        1.0
    } else {
        day as f64 / (days - 1) as f64
    };
    match end_bias {
        Some(bias) if bias > 0.5 => {
            let k = (bias - 0.5) * 2.0 * warp_strength;
            if k <= f64::EPSILON {
                p
            } else {
                ((k * p).exp() - 1.0) / (k.exp() - 1.0)
            }
        }
        _ => p,
    }
}

/// Interpolated start->end value plus a slow wobble that grows with progress.
fn trend_target(profile: &ChainProfile, day: usize, days: usize, cfg: &GeneratorConfig) -> f64 {
    let p = warped_progress(day, days, profile.end_bias, cfg.trend.warp_strength);
    let linear = lerp(profile.start, profile.end, p);
    let wobble =
        (TAU * day as f64 / cfg.trend.wobble_period_days).sin() * cfg.trend.wobble_amplitude * linear * p;
    linear + wobble
}

fn event_effect(events: &[SeriesEvent], day: usize, reference: f64, cfg: &GeneratorConfig) -> f64 {
    events
        .iter()
        .filter(|e| e.covers(day))
        .map(|e| e.effect_at(day, reference, &cfg.events))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CHAIN_PROFILES;
    use crate::domain::Blockchain;
    use crate::models::{FixedNoise, RngNoise};

    #[test]
    fn length_matches_horizon() {
        let mut noise = RngNoise::seeded(7);
        for days in [0, 1, 2, 30, 365] {
            assert_eq!(build_profile_series(&CHAIN_PROFILES[0], days, &mut noise).len(), days);
        }
    }

    #[test]
    fn single_day_horizon_is_finite() {
        assert_eq!(warped_progress(0, 1, None, 3.0), 1.0);
        assert_eq!(warped_progress(0, 1, Some(0.9), 3.0), 1.0);
        let mut noise = FixedNoise::constant(0.5);
        let series = build_profile_series(&CHAIN_PROFILES[1], 1, &mut noise);
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn warp_pulls_growth_toward_the_end() {
        let days = 365;
        let mid = days / 2;
        let plain = warped_progress(mid, days, None, 3.0);
        let low_bias = warped_progress(mid, days, Some(0.4), 3.0);
        let biased = warped_progress(mid, days, Some(0.9), 3.0);
        assert!((plain - 0.5).abs() < 0.01);
        assert_eq!(plain, low_bias);
        assert!(biased < plain);
        assert!((warped_progress(days - 1, days, Some(0.9), 3.0) - 1.0).abs() < 1e-12);
        assert_eq!(warped_progress(0, days, Some(0.9), 3.0), 0.0);
    }

    #[test]
    fn fixed_noise_is_reproducible() {
        let profile = &CHAIN_PROFILES[4];
        let draws = vec![0.13, 0.72, 0.41, 0.95, 0.05, 0.66, 0.29];
        let a = build_profile_series(profile, 120, &mut FixedNoise::new(draws.clone()));
        let b = build_profile_series(profile, 120, &mut FixedNoise::new(draws));
        assert_eq!(a, b);
    }

    #[test]
    fn stays_inside_envelope_for_every_profile() {
        let mut noise = RngNoise::seeded(2024);
        for profile in CHAIN_PROFILES {
            let (floor, ceiling) = profile.envelope(GENERATOR.overshoot);
            for _ in 0..5 {
                let series = build_profile_series(profile, 365, &mut noise);
                assert_eq!(series.len(), 365);
                for &v in &series {
                    assert!(
                        v >= floor.floor() as u64 && v <= ceiling.ceil() as u64,
                        "{} value {} outside [{}, {}]",
                        profile.chain,
                        v,
                        floor,
                        ceiling
                    );
                }
            }
        }
    }

    #[test]
    fn flat_noise_tracks_start_and_end() {
        // All-midpoint draws cancel the noise layers, leaving trend + events.
        let profile = ChainProfile::new(Blockchain::Ethereum, 1_000.0, 2_000.0).bounds(500.0, 3_000.0);
        let series = build_profile_series(&profile, 365, &mut FixedNoise::constant(0.5));
        let first = series[0] as f64;
        let last = *series.last().unwrap() as f64;
        assert!((first - 1_000.0).abs() < 150.0, "first {}", first);
        assert!((last - 2_000.0).abs() < 300.0, "last {}", last);
        assert!(last > first);
    }

    #[test]
    fn inverted_bounds_degrade_without_panicking() {
        let profile = ChainProfile::new(Blockchain::Tron, 100.0, 200.0).bounds(500.0, 50.0);
        let series = build_profile_series(&profile, 30, &mut RngNoise::seeded(1));
        assert_eq!(series.len(), 30);
    }
}
