//! Default constants for the wish spawner.

// ── Cadence ─────────────────────────────────────────────────────

/// Time between two spawns while the overlay is active.
pub const TICK_INTERVAL_MS: u64 = 3_500;

// ── Placement ───────────────────────────────────────────────────

/// Lowest lane, as a percentage of viewport height.
pub const VERTICAL_MIN_PCT: f64 = 15.0;

/// Highest lane, as a percentage of viewport height.
pub const VERTICAL_MAX_PCT: f64 = 85.0;

// ── Travel ──────────────────────────────────────────────────────

/// Shortest right-to-left traversal, in seconds.
pub const TRAVEL_MIN_SECS: f64 = 15.0;

/// Longest right-to-left traversal, in seconds.
pub const TRAVEL_MAX_SECS: f64 = 25.0;

/// Extra lifetime past `travel` after which the sweep retires a bullet whose
/// expiry signal never arrived.
pub const EXPIRY_GRACE_MS: u64 = 5_000;
