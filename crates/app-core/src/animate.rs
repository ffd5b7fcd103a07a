//! Time-driven seed animation.

use crate::constants::SEED_PERIOD;
use crate::params::{ParamId, ParamStore};

/// Drive the seed slot straight from elapsed wall-clock time. The driver is
/// the authority while enabled, so it writes the effective value directly
/// (mirroring into the target like any direct write) and the reconciliation
/// pass has nothing left to do for this slot.
pub fn drive_seed(store: &mut ParamStore, elapsed: f64) {
    let rate = store.current(ParamId::AnimationSpeed, 0);
    let seed = (elapsed as f32 * rate) % SEED_PERIOD;
    store.set_current_direct(ParamId::Seed, 0, seed);
}
