//! Monotonic clock and RNG seed for the wish overlay.
//!
//! In the browser this reads `performance.now()`. Server rendering never
//! ticks the spawner, so the SSR paths return fixed values.

use std::time::Duration;

/// Milliseconds since page load as a [`Duration`].
pub fn now() -> Duration {
    #[cfg(feature = "hydrate")]
    {
        let ms = web_sys::window()
            .and_then(|w| w.performance())
            .map_or(0.0, |p| p.now());
        Duration::from_secs_f64(ms.max(0.0) / 1000.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Duration::ZERO
    }
}

/// Seed for the overlay's `SmallRng`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn rng_seed() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Math::random() * u64::MAX as f64) as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0x5eed_ca11
    }
}
