//! Per-frame advancement of effective values toward their targets.
//!
//! This is a bounded-time catch-up rather than an asymptotic ease: the blend
//! weight is the fraction of the interpolation window elapsed since the last
//! external update, so a parameter reaches its target exactly once the
//! window has passed and tracks it from then on. Small frequent updates
//! (hardware-controller jitter) still land without visible steps.

use crate::params::{ParamId, ParamStore};

/// Advance every component not under manual control. `now` is wall-clock
/// seconds on the same clock the adapters stamp updates with.
pub fn advance(store: &mut ParamStore, now: f64, window: f32) {
    for id in ParamId::ALL {
        let spec = id.spec();
        let rate = spec.category.rate();
        for component in 0..spec.components {
            let slot = store.slot_mut(id, component);
            if slot.manual {
                continue;
            }
            match slot.last_external {
                // Never externally updated: nothing to smooth against
                None => slot.current = slot.target,
                Some(at) => {
                    let elapsed = (now - at).max(0.0) as f32 * rate;
                    let progress = if window > 0.0 {
                        (elapsed / window).min(1.0)
                    } else {
                        1.0
                    };
                    if progress >= 1.0 {
                        // Land exactly on the target once the window has passed
                        slot.current = slot.target;
                    } else {
                        slot.current += (slot.target - slot.current) * progress;
                    }
                }
            }
        }
    }
}
