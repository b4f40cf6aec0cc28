//! Wish-bubble spawner state machine.
//!
//! DESIGN
//! ======
//! The spawner never owns a timer. A driver (browser interval, tokio task or
//! a test) arms a periodic tick when [`WishSpawner::activate`] reports
//! [`Activation::Started`], and hands every tick back together with the
//! token it was given. Retirement arrives from outside through
//! [`WishSpawner::on_bullet_expire`], normally when the renderer finishes a
//! bubble's traversal, so travel time is tracked in exactly one place.
//!
//! Each activation starts a new ticker generation. A tick that was already
//! queued when the spawner was deactivated carries the old generation and is
//! dropped, so it cannot resurrect a bubble.
//!
//! LIFECYCLE
//! =========
//! `Idle --activate(non-empty)--> Ticking --deactivate / activate(empty)--> Idle`
//!
//! While ticking, `activate` with a new pool only swaps the sampling
//! population; the running ticker is left alone.

#[cfg(test)]
#[path = "spawner_test.rs"]
mod spawner_test;

use std::time::Duration;

use rand::Rng;

use crate::bullet::{Bullet, BulletId};
use crate::config::{SpawnerConfig, SpawnerConfigError};
use crate::pool::WishPool;

/// Proof that a tick belongs to the ticker started by a specific activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickToken {
    generation: u64,
}

/// What the driver should do after [`WishSpawner::activate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Pool is empty: no ticker, nothing to render.
    Idle,
    /// A new ticker must be armed; feed its ticks back with this token.
    Started(TickToken),
    /// A ticker is already running; only the pool changed.
    Running,
}

#[derive(Debug)]
pub struct WishSpawner<R> {
    config: SpawnerConfig,
    rng: R,
    pool: WishPool,
    live: Vec<Bullet>,
    next_id: u64,
    generation: u64,
    ticking: bool,
}

impl<R: Rng> WishSpawner<R> {
    /// Create an idle spawner.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`SpawnerConfig::validate`].
    pub fn new(config: SpawnerConfig, rng: R) -> Result<Self, SpawnerConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, rng))
    }

    /// Idle spawner with the default gallery cadence.
    pub fn with_defaults(rng: R) -> Self {
        Self::from_parts(SpawnerConfig::default(), rng)
    }

    fn from_parts(config: SpawnerConfig, rng: R) -> Self {
        Self { config, rng, pool: WishPool::default(), live: Vec::new(), next_id: 0, generation: 0, ticking: false }
    }

    /// Point the spawner at `pool`, starting the ticker if needed.
    ///
    /// An empty pool stops everything, exactly like [`Self::deactivate`].
    pub fn activate(&mut self, pool: WishPool) -> Activation {
        if pool.is_empty() {
            self.deactivate();
            self.pool = pool;
            return Activation::Idle;
        }
        self.pool = pool;
        if self.ticking {
            return Activation::Running;
        }
        self.generation = self.generation.wrapping_add(1);
        self.ticking = true;
        Activation::Started(TickToken { generation: self.generation })
    }

    /// Stop ticking and drop every live bullet. Idempotent.
    pub fn deactivate(&mut self) {
        self.ticking = false;
        self.live.clear();
    }

    /// Handle one tick of the periodic timer.
    ///
    /// Retires overdue bullets first, then spawns one bullet with a caption
    /// drawn from the pool. Returns the new bullet, or `None` when the token
    /// is stale or the spawner is idle.
    pub fn on_tick(&mut self, token: TickToken, now: Duration) -> Option<&Bullet> {
        if !self.accepts(token) {
            return None;
        }
        self.sweep(now);

        let text = self.pool.sample(&mut self.rng)?.to_owned();
        let vertical_position = self.rng.random_range(self.config.vertical_range.clone());
        let travel_secs = self.rng.random_range(self.config.travel_range.clone());
        let id = BulletId(self.next_id);
        self.next_id += 1;

        self.live.push(Bullet { id, text, vertical_position, travel_secs, spawned_at: now });
        self.live.last()
    }

    /// Retire the bullet with `id`. Returns whether anything was removed;
    /// unknown ids are ignored.
    pub fn on_bullet_expire(&mut self, id: BulletId) -> bool {
        match self.live.iter().position(|bullet| bullet.id == id) {
            Some(index) => {
                self.live.remove(index);
                true
            }
            None => false,
        }
    }

    /// Retire bullets that outlived their traversal plus the configured
    /// grace. Returns how many were removed.
    pub fn sweep(&mut self, now: Duration) -> usize {
        let Some(grace) = self.config.expiry_grace else {
            return 0;
        };
        let before = self.live.len();
        self.live.retain(|bullet| !bullet.is_overdue(now, grace));
        before - self.live.len()
    }

    /// Whether a tick carrying `token` would be processed.
    #[must_use]
    pub fn accepts(&self, token: TickToken) -> bool {
        self.ticking && token.generation == self.generation
    }

    /// Live bullets in spawn order.
    #[must_use]
    pub fn live(&self) -> &[Bullet] {
        &self.live
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    #[must_use]
    pub fn pool(&self) -> &WishPool {
        &self.pool
    }

    #[must_use]
    pub fn config(&self) -> &SpawnerConfig {
        &self.config
    }
}
