//! Floating-wish ("danmaku") spawner for the wedding photo wall.
//!
//! This crate has no I/O. It turns a pool of guest captions into a bounded,
//! self-cleaning stream of wish bubbles: a driver delivers periodic ticks,
//! each tick spawns one bubble with a randomized lane and travel time, and
//! whoever renders the bubble reports back when its traversal is over.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`pool`] | Sampling population derived from photo captions |
//! | [`bullet`] | The transient bubble entity and its id |
//! | [`config`] | Cadence and randomization ranges |
//! | [`spawner`] | The [`spawner::WishSpawner`] state machine |
//! | [`ticker`] | Tokio driver with per-bullet expiry timers (`runtime` feature) |
//! | [`consts`] | Default cadence and range constants |

pub mod bullet;
pub mod config;
pub mod consts;
pub mod pool;
pub mod spawner;
#[cfg(feature = "runtime")]
pub mod ticker;

pub use bullet::{Bullet, BulletId};
pub use config::{SpawnerConfig, SpawnerConfigError};
pub use pool::WishPool;
pub use spawner::{Activation, TickToken, WishSpawner};
