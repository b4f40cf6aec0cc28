#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_gallery_cadence() {
    let config = SpawnerConfig::default();
    assert_eq!(config.tick_interval, Duration::from_millis(3_500));
    assert_eq!(config.vertical_range, 15.0..=85.0);
    assert_eq!(config.travel_range, 15.0..=25.0);
    assert_eq!(config.expiry_grace, Some(Duration::from_secs(5)));
    assert!(config.validate().is_ok());
}

#[test]
fn zero_interval_is_rejected() {
    let config = SpawnerConfig { tick_interval: Duration::ZERO, ..SpawnerConfig::default() };
    assert_eq!(config.validate(), Err(SpawnerConfigError::ZeroInterval));
}

#[test]
fn inverted_travel_range_is_rejected() {
    let config = SpawnerConfig { travel_range: 25.0..=15.0, ..SpawnerConfig::default() };
    let err = config.validate().unwrap_err();
    assert_eq!(err, SpawnerConfigError::InvalidRange { name: "travel", start: 25.0, end: 15.0 });
    assert!(err.to_string().contains("travel range"));
}

#[test]
fn nan_vertical_range_is_rejected() {
    let config = SpawnerConfig { vertical_range: f64::NAN..=50.0, ..SpawnerConfig::default() };
    assert!(matches!(config.validate(), Err(SpawnerConfigError::InvalidRange { name: "vertical", .. })));
}

#[test]
fn vertical_range_outside_viewport_is_rejected() {
    let config = SpawnerConfig { vertical_range: 10.0..=120.0, ..SpawnerConfig::default() };
    assert_eq!(config.validate(), Err(SpawnerConfigError::VerticalOutOfBounds { start: 10.0, end: 120.0 }));
}

#[test]
fn zero_travel_is_rejected() {
    let config = SpawnerConfig { travel_range: 0.0..=5.0, ..SpawnerConfig::default() };
    assert!(matches!(config.validate(), Err(SpawnerConfigError::NonPositiveTravel { .. })));
}

#[test]
fn degenerate_ranges_are_allowed() {
    let config = SpawnerConfig { vertical_range: 50.0..=50.0, travel_range: 20.0..=20.0, ..SpawnerConfig::default() };
    assert!(config.validate().is_ok());
}

#[test]
fn max_lifetime_adds_grace_to_longest_travel() {
    assert_eq!(SpawnerConfig::default().max_lifetime(), Duration::from_secs(30));
    let no_sweep = SpawnerConfig { expiry_grace: None, ..SpawnerConfig::default() };
    assert_eq!(no_sweep.max_lifetime(), Duration::from_secs(25));
}

#[test]
fn steady_state_bound_for_default_cadence() {
    // 25 s / 3.5 s = 7.14 -> 8 bullets at most.
    assert_eq!(SpawnerConfig::default().steady_state_bound(), 8);
}
