//! Spawner cadence and randomization ranges.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::consts::{
    EXPIRY_GRACE_MS, TICK_INTERVAL_MS, TRAVEL_MAX_SECS, TRAVEL_MIN_SECS, VERTICAL_MAX_PCT, VERTICAL_MIN_PCT,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpawnerConfigError {
    #[error("tick interval must be positive")]
    ZeroInterval,

    #[error("{name} range is empty or inverted: {start}..={end}")]
    InvalidRange { name: &'static str, start: f64, end: f64 },

    #[error("vertical range must stay within 0..=100 percent, got {start}..={end}")]
    VerticalOutOfBounds { start: f64, end: f64 },

    #[error("travel range must be positive, got {start}..={end}")]
    NonPositiveTravel { start: f64, end: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpawnerConfig {
    /// Period between spawns.
    pub tick_interval: Duration,
    /// Lane range, percent of viewport height.
    pub vertical_range: RangeInclusive<f64>,
    /// Traversal time range, seconds.
    pub travel_range: RangeInclusive<f64>,
    /// Extra lifetime allowed before a tick sweeps a bullet whose expiry
    /// signal was lost. `None` disables the sweep.
    pub expiry_grace: Option<Duration>,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            vertical_range: VERTICAL_MIN_PCT..=VERTICAL_MAX_PCT,
            travel_range: TRAVEL_MIN_SECS..=TRAVEL_MAX_SECS,
            expiry_grace: Some(Duration::from_millis(EXPIRY_GRACE_MS)),
        }
    }
}

impl SpawnerConfig {
    /// Check that every range can be sampled and the cadence is positive.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), SpawnerConfigError> {
        if self.tick_interval.is_zero() {
            return Err(SpawnerConfigError::ZeroInterval);
        }
        check_range("vertical", &self.vertical_range)?;
        check_range("travel", &self.travel_range)?;

        let (start, end) = (*self.vertical_range.start(), *self.vertical_range.end());
        if start < 0.0 || end > 100.0 {
            return Err(SpawnerConfigError::VerticalOutOfBounds { start, end });
        }
        let (start, end) = (*self.travel_range.start(), *self.travel_range.end());
        if start <= 0.0 {
            return Err(SpawnerConfigError::NonPositiveTravel { start, end });
        }
        Ok(())
    }

    /// Longest time a bullet can stay live before the sweep retires it.
    #[must_use]
    pub fn max_lifetime(&self) -> Duration {
        let travel = Duration::from_secs_f64(self.travel_range.end().max(0.0));
        travel + self.expiry_grace.unwrap_or_default()
    }

    /// Upper bound on simultaneously live bullets when expiry signals arrive
    /// on time: one spawn per interval, each living at most the longest
    /// traversal.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn steady_state_bound(&self) -> usize {
        let interval = self.tick_interval.as_secs_f64();
        if interval <= 0.0 {
            return 0;
        }
        (self.travel_range.end() / interval).ceil().max(0.0) as usize
    }
}

fn check_range(name: &'static str, range: &RangeInclusive<f64>) -> Result<(), SpawnerConfigError> {
    let (start, end) = (*range.start(), *range.end());
    if start.is_nan() || end.is_nan() || start.is_infinite() || end.is_infinite() || start > end {
        return Err(SpawnerConfigError::InvalidRange { name, start, end });
    }
    Ok(())
}
