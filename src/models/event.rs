use {
    crate::{config::EventConfig, models::NoiseSource},
    serde::Serialize,
    std::f64::consts::TAU,
    strum_macros::{Display, EnumIter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumIter)]
pub enum EventKind {
    Uptrend,
    Downtrend,
    /// Sideways correction: oscillates instead of drifting.
    Lateral,
}

impl EventKind {
    const ALL: [Self; 3] = [Self::Uptrend, Self::Downtrend, Self::Lateral];
}

/// Medium-term perturbation over the day window `start_day..end_day`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesEvent {
    pub start_day: usize,
    pub end_day: usize,
    pub kind: EventKind,
    pub intensity: f64,
    /// Exponent on the ramp: below 1 the effect front-loads, above 1 it builds late.
    pub curve_shape: f64,
    /// Fraction of the window spent ramping up to the peak.
    pub phase_ratio: f64,
}

impl SeriesEvent {
    /// Places one event somewhere inside a `days` long horizon.
    pub fn random<N: NoiseSource + ?Sized>(noise: &mut N, days: usize, cfg: &EventConfig) -> Option<Self> {
        if days == 0 {
            return None;
        }
        let len = noise.between(cfg.min_days, cfg.max_days).clamp(1, days);
        let start_day = noise.index(days - len + 1);
        let kind = EventKind::ALL[noise.index(EventKind::ALL.len())];
        Some(Self {
            start_day,
            end_day: start_day + len,
            kind,
            intensity: noise.uniform(cfg.intensity.0, cfg.intensity.1),
            curve_shape: noise.uniform(cfg.curve_shape.0, cfg.curve_shape.1),
            phase_ratio: noise.uniform(cfg.phase_ratio.0, cfg.phase_ratio.1),
        })
    }

    pub fn len(&self) -> usize {
        self.end_day.saturating_sub(self.start_day)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn covers(&self, day: usize) -> bool {
        (self.start_day..self.end_day).contains(&day)
    }

    /// Position inside the window, 0 on the first day.
    fn local_progress(&self, day: usize) -> f64 {
        (day - self.start_day) as f64 / self.len() as f64
    }

    /// 0..1 shape factor: ramps to 1 at `phase_ratio`, then eases back toward
    /// `retained` for the rest of the window.
    pub fn shaped_progress(&self, day: usize, retained: f64) -> f64 {
        if !self.covers(day) {
            return 0.0;
        }
        let t = self.local_progress(day);
        let phase = self.phase_ratio.clamp(f64::EPSILON, 1.0);
        let shape = self.curve_shape.max(f64::EPSILON);
        if t < phase {
            (t / phase).powf(shape)
        } else {
            let tail = if phase >= 1.0 { 0.0 } else { (t - phase) / (1.0 - phase) };
            1.0 - (1.0 - retained) * tail.powf(1.0 / shape)
        }
    }

    /// Linear fade in over the first `fade_fraction` of the window and out over the last.
    pub fn envelope(&self, day: usize, fade_fraction: f64) -> f64 {
        if !self.covers(day) {
            return 0.0;
        }
        let fade_days = self.len() as f64 * fade_fraction;
        if fade_days <= 0.0 {
            return 1.0;
        }
        let offset = (day - self.start_day) as f64;
        let fade_in = (offset + 1.0) / fade_days;
        let fade_out = (self.end_day - day) as f64 / fade_days;
        fade_in.min(fade_out).min(1.0)
    }

    /// Signed contribution on `day`, scaled against the profile's mid-range `reference`.
    pub fn effect_at(&self, day: usize, reference: f64, cfg: &EventConfig) -> f64 {
        if !self.covers(day) {
            return 0.0;
        }
        let peak = self.intensity * reference * cfg.scale;
        let raw = match self.kind {
            EventKind::Uptrend => peak * self.shaped_progress(day, cfg.retained_after_peak),
            EventKind::Downtrend => -peak * self.shaped_progress(day, cfg.retained_after_peak),
            EventKind::Lateral => {
                let offset = (day - self.start_day) as f64;
                peak * cfg.lateral_damping * (TAU * offset / cfg.lateral_period_days).sin()
            }
        };
        raw * self.envelope(day, cfg.fade_fraction)
    }
}

/// Draws the sparse event set for one series build.
pub fn generate_events<N: NoiseSource + ?Sized>(
    noise: &mut N,
    days: usize,
    cfg: &EventConfig,
) -> Vec<SeriesEvent> {
    let count = noise.between(cfg.min_count, cfg.max_count);
    (0..count)
        .filter_map(|_| SeriesEvent::random(&mut *noise, days, cfg))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GENERATOR;
    use crate::models::FixedNoise;

    fn event(kind: EventKind) -> SeriesEvent {
        SeriesEvent {
            start_day: 10,
            end_day: 60,
            kind,
            intensity: 1.0,
            curve_shape: 1.0,
            phase_ratio: 0.5,
        }
    }

    #[test]
    fn random_events_stay_inside_the_horizon() {
        let mut noise = FixedNoise::new(vec![0.99, 0.99, 0.5, 0.2, 0.7, 0.4]);
        for days in [1, 5, 30, 365] {
            let e = SeriesEvent::random(&mut noise, days, &GENERATOR.events).unwrap();
            assert!(e.len() >= 1);
            assert!(e.end_day <= days, "{:?} overflows {} days", e, days);
        }
        assert!(SeriesEvent::random(&mut noise, 0, &GENERATOR.events).is_none());
    }

    #[test]
    fn event_count_respects_config() {
        let mut low = FixedNoise::constant(0.0);
        let mut high = FixedNoise::constant(0.999);
        assert_eq!(generate_events(&mut low, 365, &GENERATOR.events).len(), GENERATOR.events.min_count);
        assert_eq!(generate_events(&mut high, 365, &GENERATOR.events).len(), GENERATOR.events.max_count);
    }

    #[test]
    fn shaped_progress_peaks_at_phase_point() {
        let e = event(EventKind::Uptrend);
        assert_eq!(e.shaped_progress(10, 0.5), 0.0);
        assert!((e.shaped_progress(35, 0.5) - 1.0).abs() < 1e-9);
        let late = e.shaped_progress(59, 0.5);
        assert!(late < 1.0 && late >= 0.5);
        assert_eq!(e.shaped_progress(60, 0.5), 0.0);
    }

    #[test]
    fn envelope_fades_at_both_edges() {
        let e = event(EventKind::Uptrend);
        // 50 day window, 20% fade = 10 days
        assert!((e.envelope(10, 0.2) - 0.1).abs() < 1e-9);
        assert_eq!(e.envelope(35, 0.2), 1.0);
        assert!((e.envelope(59, 0.2) - 0.1).abs() < 1e-9);
        assert_eq!(e.envelope(9, 0.2), 0.0);
    }

    #[test]
    fn effect_sign_follows_kind() {
        let cfg = &GENERATOR.events;
        assert!(event(EventKind::Uptrend).effect_at(35, 1000.0, cfg) > 0.0);
        assert!(event(EventKind::Downtrend).effect_at(35, 1000.0, cfg) < 0.0);
        assert_eq!(event(EventKind::Uptrend).effect_at(70, 1000.0, cfg), 0.0);
        // Lateral swings both ways over its window
        let lateral = event(EventKind::Lateral);
        let effects: Vec<f64> = (10..60).map(|d| lateral.effect_at(d, 1000.0, cfg)).collect();
        assert!(effects.iter().any(|&v| v > 0.0));
        assert!(effects.iter().any(|&v| v < 0.0));
    }
}
