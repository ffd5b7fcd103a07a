// Integration tests for the per-frame reconciliation pass, driven with
// synthetic timestamps.

use app_core::constants::DEFAULT_INTERPOLATION_WINDOW;
use app_core::reconcile::advance;
use app_core::{ParamId, ParamStore};

const WINDOW: f32 = DEFAULT_INTERPOLATION_WINDOW;

/// Store whose cloudscale already went through one external update, so the
/// next update smooths instead of jumping.
fn primed_store(value: f32) -> ParamStore {
    let mut store = ParamStore::new();
    store.set_target(ParamId::CloudScale, 0, value, -10.0);
    advance(&mut store, -9.0, WINDOW);
    assert_eq!(store.current(ParamId::CloudScale, 0), value);
    store
}

#[test]
fn first_external_update_jumps_straight_to_target() {
    let mut store = ParamStore::new();
    store.set_target(ParamId::CloudDark, 0, 0.9, 5.0);
    // lands before any pass runs, and the pass keeps it there
    assert_eq!(store.current(ParamId::CloudDark, 0), 0.9);
    advance(&mut store, 5.0, WINDOW);
    assert_eq!(store.current(ParamId::CloudDark, 0), 0.9);
}

#[test]
fn zero_elapsed_changes_nothing() {
    let mut store = primed_store(1.0);
    store.set_target(ParamId::CloudScale, 0, 2.0, 3.0);
    advance(&mut store, 3.0, WINDOW);
    assert_eq!(
        store.current(ParamId::CloudScale, 0),
        1.0,
        "fraction 0 must not move the value"
    );
}

#[test]
fn half_window_blends_halfway() {
    let mut store = primed_store(1.0);
    store.set_target(ParamId::CloudScale, 0, 2.0, 0.0);
    advance(&mut store, 0.25, WINDOW);
    let expected = 1.0 + (2.0 - 1.0) * 0.5;
    assert!(
        (store.current(ParamId::CloudScale, 0) - expected).abs() < 1e-6,
        "expected {expected}, got {}",
        store.current(ParamId::CloudScale, 0)
    );
}

#[test]
fn full_window_lands_exactly_on_target() {
    let mut store = primed_store(1.0);
    store.set_target(ParamId::CloudScale, 0, 2.0, 0.0);
    advance(&mut store, 0.25, WINDOW);
    advance(&mut store, 0.5, WINDOW);
    assert_eq!(
        store.current(ParamId::CloudScale, 0),
        2.0,
        "must converge exactly, not asymptotically"
    );
    // and keeps tracking the target afterwards
    advance(&mut store, 7.0, WINDOW);
    assert_eq!(store.current(ParamId::CloudScale, 0), 2.0);
}

#[test]
fn end_to_end_cloudscale_scenario() {
    // cloudscale target set to 2.0 at t=0 with a 0.5s window
    let mut store = primed_store(1.0);
    store.set_target(ParamId::CloudScale, 0, 2.0, 0.0);

    advance(&mut store, 0.25, WINDOW);
    assert!((store.current(ParamId::CloudScale, 0) - 1.5).abs() < 1e-6);

    advance(&mut store, 0.5, WINDOW);
    assert_eq!(store.current(ParamId::CloudScale, 0), 2.0);

    advance(&mut store, 0.75, WINDOW);
    assert_eq!(store.current(ParamId::CloudScale, 0), 2.0);
}

#[test]
fn manual_lock_freezes_a_component() {
    let mut store = primed_store(1.0);
    store.set_manual(ParamId::CloudScale, 0, true);
    store.set_target(ParamId::CloudScale, 0, 3.0, 0.0);
    for step in 1..=10 {
        advance(&mut store, step as f64 * 0.2, WINDOW);
        assert_eq!(
            store.current(ParamId::CloudScale, 0),
            1.0,
            "locked value moved at step {step}"
        );
    }
    // releasing the lock lets the stale target pull the value in
    store.set_manual(ParamId::CloudScale, 0, false);
    advance(&mut store, 10.0, WINDOW);
    assert_eq!(store.current(ParamId::CloudScale, 0), 3.0);
}

#[test]
fn manual_lock_suppresses_the_first_update_jump() {
    let mut store = ParamStore::new();
    store.set_manual(ParamId::CloudCover, 0, true);
    store.set_target(ParamId::CloudCover, 0, 0.9, 0.0);
    advance(&mut store, 0.0, WINDOW);
    assert_eq!(
        store.current(ParamId::CloudCover, 0),
        0.2,
        "direct UI control takes precedence over an external write"
    );
}

#[test]
fn vector_components_reconcile_independently() {
    let mut store = ParamStore::new();
    // prime both components
    store.set_target(ParamId::MoveDirection, 0, 0.5, -10.0);
    store.set_target(ParamId::MoveDirection, 1, -0.5, -10.0);
    advance(&mut store, -9.0, WINDOW);

    store.set_manual(ParamId::MoveDirection, 0, true);
    store.set_target(ParamId::MoveDirection, 0, 1.0, 0.0);
    store.set_target(ParamId::MoveDirection, 1, 1.0, 0.0);

    advance(&mut store, 0.25, WINDOW);
    assert_eq!(
        store.current(ParamId::MoveDirection, 0),
        0.5,
        "locked component 0 must not move"
    );
    let y = store.current(ParamId::MoveDirection, 1);
    assert!(
        y > -0.5 && y < 1.0,
        "unlocked component 1 should be converging, got {y}"
    );

    advance(&mut store, 1.0, WINDOW);
    assert_eq!(store.current(ParamId::MoveDirection, 0), 0.5);
    assert_eq!(store.current(ParamId::MoveDirection, 1), 1.0);
}

#[test]
fn speed_category_converges_in_half_the_window() {
    let mut store = ParamStore::new();
    store.set_target(ParamId::Speed, 0, 0.02, -10.0);
    advance(&mut store, -9.0, WINDOW);

    store.set_target(ParamId::Speed, 0, 0.08, 0.0);
    // rate 2: a quarter of the window already means progress 1
    advance(&mut store, (WINDOW / 2.0) as f64, WINDOW);
    assert_eq!(store.current(ParamId::Speed, 0), 0.08);
}

#[test]
fn zero_window_snaps_immediately() {
    let mut store = primed_store(1.0);
    store.set_target(ParamId::CloudScale, 0, 2.5, 0.0);
    advance(&mut store, 0.0, 0.0);
    assert_eq!(store.current(ParamId::CloudScale, 0), 2.5);
}

#[test]
fn untouched_parameters_hold_their_defaults_across_passes() {
    let mut store = ParamStore::new();
    for step in 0..50 {
        advance(&mut store, step as f64 * 0.016, WINDOW);
    }
    let snap = store.snapshot();
    assert_eq!(snap.cloudalpha, 8.0);
    assert_eq!(snap.skytint, 0.5);
    assert_eq!(snap.move_direction.x, 1.0);
}
