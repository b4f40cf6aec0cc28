use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

fn spawner() -> WishSpawner<SmallRng> {
    WishSpawner::with_defaults(SmallRng::seed_from_u64(7))
}

fn pool(captions: &[&str]) -> WishPool {
    WishPool::from_captions(captions.iter().copied())
}

fn started(activation: Activation) -> TickToken {
    match activation {
        Activation::Started(token) => token,
        other => panic!("expected Started, got {other:?}"),
    }
}

fn secs(s: f64) -> Duration {
    Duration::from_secs_f64(s)
}

// =============================================================
// activate
// =============================================================

#[test]
fn activate_empty_pool_stays_idle() {
    let mut s = spawner();
    assert_eq!(s.activate(WishPool::default()), Activation::Idle);
    assert!(!s.is_ticking());
    assert!(s.is_empty());
}

#[test]
fn activate_blank_captions_stays_idle() {
    let mut s = spawner();
    assert_eq!(s.activate(pool(&["", "  "])), Activation::Idle);
    assert!(!s.is_ticking());
}

#[test]
fn activate_non_empty_pool_starts_ticker() {
    let mut s = spawner();
    let activation = s.activate(pool(&["congrats!"]));
    assert!(matches!(activation, Activation::Started(_)));
    assert!(s.is_ticking());
    assert!(s.is_empty());
}

#[test]
fn reactivate_does_not_restart_ticker() {
    let mut s = spawner();
    let token = started(s.activate(pool(&["old"])));
    assert_eq!(s.activate(pool(&["new"])), Activation::Running);
    assert!(s.accepts(token));

    let bullet = s.on_tick(token, secs(3.5)).cloned().unwrap();
    assert_eq!(bullet.text, "new");
}

#[test]
fn reactivate_with_empty_pool_stops_and_clears() {
    let mut s = spawner();
    let token = started(s.activate(pool(&["a"])));
    s.on_tick(token, secs(3.5));
    assert_eq!(s.activate(WishPool::default()), Activation::Idle);
    assert!(!s.is_ticking());
    assert!(s.is_empty());
    assert!(s.on_tick(token, secs(7.0)).is_none());
}

// =============================================================
// on_tick
// =============================================================

#[test]
fn n_ticks_produce_n_bullets_within_ranges() {
    let mut s = spawner();
    let token = started(s.activate(pool(&["congrats!", "so happy for you", "cheers"])));
    for i in 1..=50 {
        s.on_tick(token, secs(f64::from(i) * 0.01));
    }
    assert_eq!(s.len(), 50);
    for bullet in s.live() {
        assert!((15.0..=85.0).contains(&bullet.vertical_position), "lane {}", bullet.vertical_position);
        assert!((15.0..=25.0).contains(&bullet.travel_secs), "travel {}", bullet.travel_secs);
    }
}

#[test]
fn three_ticks_draw_from_two_caption_pool() {
    let mut s = spawner();
    let token = started(s.activate(pool(&["congrats!", "so happy for you"])));
    for i in 1..=3 {
        s.on_tick(token, secs(3.5 * f64::from(i)));
    }
    assert_eq!(s.len(), 3);
    for bullet in s.live() {
        assert!(bullet.text == "congrats!" || bullet.text == "so happy for you");
    }
}

#[test]
fn tick_records_spawn_time_and_appends_in_order() {
    let mut s = spawner();
    let token = started(s.activate(pool(&["a"])));
    s.on_tick(token, secs(3.5));
    s.on_tick(token, secs(7.0));
    let spawned: Vec<_> = s.live().iter().map(|b| b.spawned_at).collect();
    assert_eq!(spawned, vec![secs(3.5), secs(7.0)]);
    assert!(s.live()[0].id < s.live()[1].id);
}

#[test]
fn tick_while_idle_does_nothing() {
    let mut s = spawner();
    let token = started(s.activate(pool(&["a"])));
    s.deactivate();
    assert!(s.on_tick(token, secs(3.5)).is_none());
    assert!(s.is_empty());
}

#[test]
fn stale_tick_after_deactivate_does_not_resurrect() {
    let mut s = spawner();
    let old = started(s.activate(pool(&["a"])));
    s.on_tick(old, secs(3.5));
    s.deactivate();

    // The feature is toggled back on before the queued tick is delivered.
    let fresh = started(s.activate(pool(&["a"])));
    assert_ne!(old, fresh);
    assert!(s.on_tick(old, secs(4.0)).is_none());
    assert!(s.is_empty());

    assert!(s.on_tick(fresh, secs(7.5)).is_some());
    assert_eq!(s.len(), 1);
}

#[test]
fn thousand_spawns_have_unique_ids() {
    let mut s = WishSpawner::new(
        SpawnerConfig { expiry_grace: None, ..SpawnerConfig::default() },
        SmallRng::seed_from_u64(3),
    )
    .unwrap();
    let token = started(s.activate(pool(&["x", "y"])));
    for i in 0..1000_u32 {
        s.on_tick(token, secs(f64::from(i) * 3.5));
    }
    assert_eq!(s.len(), 1000);
    let ids: HashSet<BulletId> = s.live().iter().map(|b| b.id).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn ids_are_not_reused_across_activations() {
    let mut s = spawner();
    let first = started(s.activate(pool(&["a"])));
    let a = s.on_tick(first, secs(1.0)).unwrap().id;
    s.deactivate();
    let second = started(s.activate(pool(&["a"])));
    let b = s.on_tick(second, secs(2.0)).unwrap().id;
    assert_ne!(a, b);
}

// =============================================================
// on_bullet_expire
// =============================================================

#[test]
fn expire_removes_exactly_the_matching_bullet() {
    let mut s = spawner();
    let token = started(s.activate(pool(&["a", "b"])));
    for i in 1..=3 {
        s.on_tick(token, secs(f64::from(i)));
    }
    let middle = s.live()[1].id;
    assert!(s.on_bullet_expire(middle));
    assert_eq!(s.len(), 2);
    assert!(s.live().iter().all(|b| b.id != middle));
}

#[test]
fn expire_unknown_id_is_noop() {
    let mut s = spawner();
    let token = started(s.activate(pool(&["a"])));
    s.on_tick(token, secs(1.0));
    assert!(!s.on_bullet_expire(BulletId(999)));
    assert_eq!(s.len(), 1);
}

#[test]
fn expire_after_deactivate_is_noop() {
    let mut s = spawner();
    let token = started(s.activate(pool(&["a"])));
    let id = s.on_tick(token, secs(1.0)).unwrap().id;
    s.deactivate();
    assert!(!s.on_bullet_expire(id));
    assert!(s.is_empty());
}

#[test]
fn expire_twice_removes_once() {
    let mut s = spawner();
    let token = started(s.activate(pool(&["a"])));
    let id = s.on_tick(token, secs(1.0)).unwrap().id;
    assert!(s.on_bullet_expire(id));
    assert!(!s.on_bullet_expire(id));
}

// =============================================================
// deactivate
// =============================================================

#[test]
fn deactivate_is_idempotent() {
    let mut s = spawner();
    let token = started(s.activate(pool(&["a"])));
    s.on_tick(token, secs(1.0));
    s.deactivate();
    s.deactivate();
    assert!(!s.is_ticking());
    assert!(s.is_empty());
}

#[test]
fn deactivate_on_fresh_spawner_is_harmless() {
    let mut s = spawner();
    s.deactivate();
    assert!(!s.is_ticking());
}

// =============================================================
// sweep
// =============================================================

#[test]
fn sweep_retires_bullets_whose_expiry_was_lost() {
    let mut s = spawner();
    let token = started(s.activate(pool(&["a"])));
    let spawned = secs(2.0);
    let travel = s.on_tick(token, spawned).unwrap().travel_duration();
    let deadline = spawned + travel + s.config().expiry_grace.unwrap();

    assert_eq!(s.sweep(deadline), 0);
    assert_eq!(s.sweep(deadline + Duration::from_millis(1)), 1);
    assert!(s.is_empty());
}

#[test]
fn sweep_holds_every_seed_until_its_own_deadline() {
    for seed in 0..32 {
        let mut s = WishSpawner::with_defaults(SmallRng::seed_from_u64(seed));
        let token = started(s.activate(pool(&["a"])));
        let travel = s.on_tick(token, Duration::ZERO).unwrap().travel_duration();
        assert_eq!(s.sweep(travel), 0, "seed {seed}");
        assert_eq!(s.sweep(s.config().max_lifetime() + Duration::from_millis(1)), 1, "seed {seed}");
    }
}

#[test]
fn tick_sweeps_before_spawning() {
    let mut s = spawner();
    let token = started(s.activate(pool(&["a"])));
    s.on_tick(token, secs(0.0));
    s.on_tick(token, secs(60.0));
    assert_eq!(s.len(), 1);
    assert_eq!(s.live()[0].spawned_at, secs(60.0));
}

#[test]
fn sweep_disabled_without_grace() {
    let config = SpawnerConfig { expiry_grace: None, ..SpawnerConfig::default() };
    let mut s = WishSpawner::new(config, SmallRng::seed_from_u64(1)).unwrap();
    let token = started(s.activate(pool(&["a"])));
    s.on_tick(token, secs(0.0));
    assert_eq!(s.sweep(secs(10_000.0)), 0);
    assert_eq!(s.len(), 1);
}

#[test]
fn steady_state_stays_bounded_with_sweep() {
    let mut s = spawner();
    let token = started(s.activate(pool(&["a", "b"])));
    for i in 0..500_u32 {
        s.on_tick(token, secs(f64::from(i) * 3.5));
    }
    let bound = s.config().max_lifetime().as_secs_f64() / 3.5;
    #[allow(clippy::cast_precision_loss)]
    let live = s.len() as f64;
    assert!(live <= bound.ceil() + 1.0, "live {live} exceeds {bound}");
}

#[test]
fn new_rejects_invalid_config() {
    let config = SpawnerConfig { tick_interval: Duration::ZERO, ..SpawnerConfig::default() };
    let err = WishSpawner::new(config, SmallRng::seed_from_u64(1)).unwrap_err();
    assert_eq!(err, SpawnerConfigError::ZeroInterval);
}
