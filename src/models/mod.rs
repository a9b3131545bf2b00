mod event;
mod noise;
mod profile;
mod series;

pub use {
    event::{EventKind, SeriesEvent, generate_events},
    noise::{FixedNoise, NoiseFactory, NoiseSource, RngNoise, SeedPolicy},
    profile::ChainProfile,
    series::{build_profile_series, build_profile_series_with, warped_progress},
};
