// Integration tests for the frame-tick engine: command queue, auto-seed
// driver and the interaction between manual, MIDI and automated control.

use app_core::{midi, CloudEngine, ControlCommand, ParamId};

#[test]
fn queued_commands_apply_before_reconciliation() {
    let mut engine = CloudEngine::new();
    engine.enqueue(ControlCommand::SetManual {
        id: ParamId::CloudCover,
        component: 0,
        engaged: true,
    });
    engine.enqueue(ControlCommand::SetCurrentDirect {
        id: ParamId::CloudCover,
        component: 0,
        value: 0.7,
    });
    let snap = engine.tick(0.0);
    assert_eq!(snap.cloudcover, 0.7);
    assert!(engine.store().is_manual(ParamId::CloudCover, 0));
}

#[test]
fn drag_then_release_does_not_snap_back() {
    let mut engine = CloudEngine::new();

    // an earlier external update, fully converged
    engine.enqueue(midi::control_change(3, 127, 0.0).unwrap());
    engine.tick(1.0);
    assert_eq!(engine.store().current(ParamId::CloudLight, 0), 1.0);

    // user grabs the slider, drags to 0.8, MIDI writes mid-drag are deferred
    engine.enqueue(ControlCommand::SetManual {
        id: ParamId::CloudLight,
        component: 0,
        engaged: true,
    });
    engine.enqueue(midi::control_change(3, 0, 1.5).unwrap());
    engine.enqueue(ControlCommand::SetCurrentDirect {
        id: ParamId::CloudLight,
        component: 0,
        value: 0.8,
    });
    engine.tick(2.0);
    assert_eq!(
        engine.store().current(ParamId::CloudLight, 0),
        0.8,
        "direct UI write wins while dragging"
    );

    // release: the drag value sticks until the next external update
    engine.enqueue(ControlCommand::SetManual {
        id: ParamId::CloudLight,
        component: 0,
        engaged: false,
    });
    engine.tick(10.0);
    assert_eq!(engine.store().current(ParamId::CloudLight, 0), 0.8);
}

#[test]
fn auto_seed_drives_from_elapsed_time() {
    let mut engine = CloudEngine::new();
    engine.apply(ControlCommand::SetAutoSeed { enabled: true });
    assert!(engine.auto_seed());

    // default animationspeed is 0.05
    let snap = engine.tick(2.0);
    assert!(
        (snap.seed - 0.1).abs() < 1e-6,
        "seed should follow elapsed * rate, got {}",
        snap.seed
    );
}

#[test]
fn auto_seed_wraps_at_the_period() {
    let mut engine = CloudEngine::new();
    engine.apply(ControlCommand::SetCurrentDirect {
        id: ParamId::AnimationSpeed,
        component: 0,
        value: 0.1,
    });
    engine.apply(ControlCommand::SetAutoSeed { enabled: true });
    let snap = engine.tick(105.0);
    assert!(
        (snap.seed - 0.5).abs() < 1e-4,
        "seed should wrap at 10.0, got {}",
        snap.seed
    );
}

#[test]
fn auto_seed_owns_the_seed_slot() {
    let mut engine = CloudEngine::new();
    engine.apply(ControlCommand::SetAutoSeed { enabled: true });

    // manual entry and direct writes are dropped while the driver runs
    engine.apply(ControlCommand::SetManual {
        id: ParamId::Seed,
        component: 0,
        engaged: true,
    });
    assert!(!engine.store().is_manual(ParamId::Seed, 0));
    engine.apply(ControlCommand::SetCurrentDirect {
        id: ParamId::Seed,
        component: 0,
        value: 9.9,
    });
    let snap = engine.tick(2.0);
    assert!((snap.seed - 0.1).abs() < 1e-6);
}

#[test]
fn disabling_auto_seed_keeps_the_last_value_and_reenables_entry() {
    let mut engine = CloudEngine::new();
    engine.apply(ControlCommand::SetAutoSeed { enabled: true });
    let driven = engine.tick(3.0).seed;
    assert!(driven > 0.0);

    engine.apply(ControlCommand::SetAutoSeed { enabled: false });
    let snap = engine.tick(4.0);
    assert_eq!(
        snap.seed, driven,
        "disabling the driver must not move the seed"
    );

    // manual entry works again
    engine.apply(ControlCommand::SetManual {
        id: ParamId::Seed,
        component: 0,
        engaged: true,
    });
    assert!(engine.store().is_manual(ParamId::Seed, 0));
    engine.apply(ControlCommand::SetCurrentDirect {
        id: ParamId::Seed,
        component: 0,
        value: 7.5,
    });
    assert_eq!(engine.tick(5.0).seed, 7.5);
}

#[test]
fn interpolation_window_is_reconfigurable() {
    let mut engine = CloudEngine::new();
    engine.apply(ControlCommand::SetInterpolationWindow { seconds: 1.0 });
    assert_eq!(engine.interpolation_window(), 1.0);

    // prime cloudscale, then check the slower catch-up
    engine.apply(ControlCommand::SetTarget {
        id: ParamId::CloudScale,
        component: 0,
        value: 1.0,
        at: -10.0,
    });
    engine.tick(-9.0);
    engine.apply(ControlCommand::SetTarget {
        id: ParamId::CloudScale,
        component: 0,
        value: 2.0,
        at: 0.0,
    });
    let snap = engine.tick(0.5);
    assert!(
        (snap.cloudscale - 1.5).abs() < 1e-6,
        "half of a 1s window should blend halfway, got {}",
        snap.cloudscale
    );
}

#[test]
fn midi_command_round_trip_through_the_queue() {
    let mut engine = CloudEngine::new();
    // prime so the update below smooths instead of jumping
    engine.enqueue(midi::control_change(0, 0, -10.0).unwrap());
    engine.tick(-9.0);
    assert_eq!(engine.store().current(ParamId::CloudScale, 0), 0.1);

    engine.enqueue(midi::control_change(0, 127, 0.0).unwrap());
    let snap = engine.tick(0.25);
    let expected = 0.1 + (3.0 - 0.1) * 0.5;
    assert!(
        (snap.cloudscale - expected).abs() < 1e-5,
        "expected {expected}, got {}",
        snap.cloudscale
    );
    assert_eq!(engine.tick(0.5).cloudscale, 3.0);
}
