use std::fmt;
use std::time::Duration;

/// Identifier of a live bullet. Allocated by the spawner from a monotonic
/// counter and never reused within one spawner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BulletId(pub u64);

impl fmt::Display for BulletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wish-{}", self.0)
    }
}

/// One floating wish bubble.
///
/// Owned by the spawner's live set from spawn until its expiry signal.
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub id: BulletId,
    /// Caption drawn from the pool.
    pub text: String,
    /// Top offset as a percentage of viewport height.
    pub vertical_position: f64,
    /// Seconds the bubble takes to cross from the right edge to off-screen left.
    pub travel_secs: f64,
    /// Driver clock reading at the tick that spawned this bubble.
    pub spawned_at: Duration,
}

impl Bullet {
    #[must_use]
    pub fn travel_duration(&self) -> Duration {
        Duration::from_secs_f64(self.travel_secs)
    }

    /// Whether the bubble has outlived its traversal by more than `grace`.
    #[must_use]
    pub fn is_overdue(&self, now: Duration, grace: Duration) -> bool {
        now.saturating_sub(self.spawned_at) > self.travel_duration() + grace
    }
}
