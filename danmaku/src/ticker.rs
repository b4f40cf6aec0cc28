//! Tokio driver for [`WishSpawner`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Browsers retire bubbles when their CSS traversal ends. Anywhere without a
//! renderer (tests, headless previews) this driver plays that role: every
//! spawned bullet gets its own `sleep(travel)` that delivers the expiry
//! signal back into the spawner.
//!
//! All spawner access happens on one task. Callers talk to it through a
//! command channel and observe it through a [`WishEvent`] stream.

#[cfg(test)]
#[path = "ticker_test.rs"]
mod ticker_test;

use rand::Rng;
use tokio::sync::{mpsc, oneshot};
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{Instant, Interval, MissedTickBehavior};

use crate::bullet::{Bullet, BulletId};
use crate::pool::WishPool;
use crate::spawner::{Activation, TickToken, WishSpawner};

/// Observable changes to the live set.
#[derive(Debug, Clone, PartialEq)]
pub enum WishEvent {
    Spawned(Bullet),
    Expired(BulletId),
}

enum Command {
    SetPool(WishPool),
    Deactivate,
    Snapshot(oneshot::Sender<Vec<Bullet>>),
}

/// Handle to a running spawner task. Dropping it stops the task.
pub struct WishTicker {
    commands: mpsc::UnboundedSender<Command>,
    task: JoinHandle<()>,
}

impl WishTicker {
    /// Move `spawner` onto a new task and return the handle plus its event
    /// stream. The spawner stays idle until [`Self::set_pool`].
    pub fn spawn<R>(spawner: WishSpawner<R>) -> (Self, mpsc::UnboundedReceiver<WishEvent>)
    where
        R: Rng + Send + 'static,
    {
        let (commands, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run(spawner, command_rx, event_tx));
        (Self { commands, task }, event_rx)
    }

    /// Activate with `pool` (or deactivate if it is empty). Returns `false`
    /// once the task has stopped.
    pub fn set_pool(&self, pool: WishPool) -> bool {
        self.commands.send(Command::SetPool(pool)).is_ok()
    }

    pub fn deactivate(&self) -> bool {
        self.commands.send(Command::Deactivate).is_ok()
    }

    /// Current live bullets, or an empty list if the task has stopped.
    pub async fn snapshot(&self) -> Vec<Bullet> {
        let (reply, rx) = oneshot::channel();
        if self.commands.send(Command::Snapshot(reply)).is_err() {
            return Vec::new();
        }
        rx.await.unwrap_or_default()
    }

    pub fn shutdown(self) {
        self.task.abort();
    }
}

impl Drop for WishTicker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run<R: Rng>(
    mut spawner: WishSpawner<R>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    events: mpsc::UnboundedSender<WishEvent>,
) {
    let epoch = Instant::now();
    let period = spawner.config().tick_interval;
    let mut ticker: Option<(Interval, TickToken)> = None;
    let mut expiries: JoinSet<BulletId> = JoinSet::new();

    loop {
        tokio::select! {
            command = commands.recv() => match command {
                None => break,
                Some(Command::SetPool(pool)) => match spawner.activate(pool) {
                    Activation::Started(token) => {
                        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
                        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                        ticker = Some((interval, token));
                    }
                    Activation::Running => {}
                    Activation::Idle => {
                        ticker = None;
                        expiries.abort_all();
                    }
                },
                Some(Command::Deactivate) => {
                    spawner.deactivate();
                    ticker = None;
                    expiries.abort_all();
                }
                // A caller that stopped waiting loses nothing.
                Some(Command::Snapshot(reply)) => {
                    let _ = reply.send(spawner.live().to_vec());
                }
            },
            token = next_tick(&mut ticker) => {
                if let Some(bullet) = spawner.on_tick(token, epoch.elapsed()).cloned() {
                    let id = bullet.id;
                    let travel = bullet.travel_duration();
                    expiries.spawn(async move {
                        tokio::time::sleep(travel).await;
                        id
                    });
                    let _ = events.send(WishEvent::Spawned(bullet));
                }
            },
            Some(joined) = expiries.join_next(), if !expiries.is_empty() => {
                if let Ok(id) = joined
                    && spawner.on_bullet_expire(id)
                {
                    let _ = events.send(WishEvent::Expired(id));
                }
            }
        }
    }
}

async fn next_tick(ticker: &mut Option<(Interval, TickToken)>) -> TickToken {
    match ticker {
        Some((interval, token)) => {
            interval.tick().await;
            *token
        }
        None => std::future::pending().await,
    }
}
