//! Floating wish bubbles drifting across the gallery.
//!
//! DESIGN
//! ======
//! The overlay is the spawner's driver. A browser `Interval` delivers ticks
//! with the token returned by `activate`, and each bubble's CSS
//! `animationend` is its expiry signal, so travel time lives only in the
//! stylesheet. `bullets` mirrors `WishSpawner::live` after every mutation
//! and is what `<For>` renders.
//!
//! The pool is empty while wishes are toggled off or a refresh is loading,
//! which stops the interval and clears every bubble.

#[cfg(test)]
#[path = "wish_overlay_test.rs"]
mod wish_overlay_test;

use danmaku::{Activation, Bullet, BulletId, WishPool, WishSpawner};
use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::state::gallery::GalleryState;
use crate::state::ui::UiState;
use crate::util::clock;

type Spawner = WishSpawner<SmallRng>;

/// Pool the overlay should run with for the current page state.
fn overlay_pool(gallery: &GalleryState, ui: &UiState) -> WishPool {
    if !ui.show_wishes || gallery.loading {
        return WishPool::default();
    }
    gallery.wish_pool()
}

fn bubble_style(bullet: &Bullet) -> String {
    format!("top: {:.2}%; animation-duration: {:.2}s;", bullet.vertical_position, bullet.travel_secs)
}

/// What one rendered bubble needs from its bullet.
#[derive(Debug, PartialEq)]
struct Bubble {
    id: BulletId,
    style: String,
    text: String,
}

impl From<Bullet> for Bubble {
    fn from(bullet: Bullet) -> Self {
        let style = bubble_style(&bullet);
        Self { id: bullet.id, style, text: bullet.text }
    }
}

#[component]
pub fn WishOverlay() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let spawner = StoredValue::new(Spawner::with_defaults(SmallRng::seed_from_u64(clock::rng_seed())));
    let ticker = StoredValue::new_local(None::<Ticker>);
    let bullets = RwSignal::new(Vec::<Bullet>::new());

    let sync = move || bullets.set(spawner.with_value(|s| s.live().to_vec()));

    Effect::new(move || {
        let pool = overlay_pool(&gallery.read(), &ui.read());
        let mut activation = Activation::Idle;
        spawner.update_value(|s| activation = s.activate(pool));
        match activation {
            Activation::Idle => {
                ticker.set_value(None);
                sync();
            }
            Activation::Started(token) => {
                let period = spawner.with_value(|s| s.config().tick_interval);
                ticker.set_value(Some(Ticker::start(period, move || {
                    let now = clock::now();
                    spawner.update_value(|s| {
                        s.on_tick(token, now);
                    });
                    sync();
                })));
            }
            Activation::Running => {}
        }
    });

    let expire = move |id: BulletId| {
        let mut removed = false;
        spawner.update_value(|s| removed = s.on_bullet_expire(id));
        if removed {
            sync();
        }
    };

    on_cleanup(move || {
        ticker.update_value(|t| {
            t.take();
        });
        spawner.update_value(Spawner::deactivate);
    });

    view! {
        <div class="wish-overlay" aria-hidden="true">
            <For
                each=move || bullets.get()
                key=|bullet| bullet.id
                children=move |bullet| {
                    let Bubble { id, style, text } = Bubble::from(bullet);
                    view! {
                        <div class="wish-bubble" style=style on:animationend=move |_| expire(id)>
                            {text}
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Periodic browser timer; dropping it cancels the interval.
struct Ticker {
    #[cfg(feature = "hydrate")]
    _interval: gloo_timers::callback::Interval,
}

impl Ticker {
    fn start(period: std::time::Duration, on_tick: impl FnMut() + 'static) -> Self {
        #[cfg(feature = "hydrate")]
        {
            let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
            Self { _interval: gloo_timers::callback::Interval::new(millis, on_tick) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (period, on_tick);
            Self {}
        }
    }
}
