//! Frame-tick orchestration.
//!
//! Per tick, in order: drain queued input commands, drive the seed animation
//! if enabled, advance smoothing, hand a resolved snapshot to the caller.
//! The tick is a pure function of (engine state, now) so tests drive it with
//! synthetic timestamps.

use std::collections::VecDeque;

use crate::animate;
use crate::command::ControlCommand;
use crate::constants::DEFAULT_INTERPOLATION_WINDOW;
use crate::params::{ParamId, ParamStore, RenderParams};
use crate::reconcile;

pub struct CloudEngine {
    store: ParamStore,
    pending: VecDeque<ControlCommand>,
    auto_seed: bool,
    interpolation_window: f32,
}

impl Default for CloudEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CloudEngine {
    pub fn new() -> Self {
        Self {
            store: ParamStore::new(),
            pending: VecDeque::new(),
            auto_seed: false,
            interpolation_window: DEFAULT_INTERPOLATION_WINDOW,
        }
    }

    pub fn store(&self) -> &ParamStore {
        &self.store
    }

    pub fn auto_seed(&self) -> bool {
        self.auto_seed
    }

    pub fn interpolation_window(&self) -> f32 {
        self.interpolation_window
    }

    /// Queue a command from an input adapter; applied at the next tick.
    pub fn enqueue(&mut self, cmd: ControlCommand) {
        self.pending.push_back(cmd);
    }

    /// Apply one command immediately. While the seed animation is enabled it
    /// owns the seed slot outright, so manual and external writes to it are
    /// dropped rather than fighting the driver.
    pub fn apply(&mut self, cmd: ControlCommand) {
        match cmd {
            ControlCommand::SetTarget {
                id,
                component,
                value,
                at,
            } => {
                if self.seed_locked(id) {
                    return;
                }
                self.store.set_target(id, component, value, at);
            }
            ControlCommand::SetManual {
                id,
                component,
                engaged,
            } => {
                if self.seed_locked(id) {
                    return;
                }
                self.store.set_manual(id, component, engaged);
            }
            ControlCommand::SetCurrentDirect {
                id,
                component,
                value,
            } => {
                if self.seed_locked(id) {
                    return;
                }
                self.store.set_current_direct(id, component, value);
            }
            ControlCommand::SetAutoSeed { enabled } => {
                if self.auto_seed != enabled {
                    self.auto_seed = enabled;
                    if enabled {
                        // Release any stale manual lock; the driver takes over
                        self.store.set_manual(ParamId::Seed, 0, false);
                    }
                    log::info!("[engine] auto-seed {}", if enabled { "on" } else { "off" });
                }
            }
            ControlCommand::SetInterpolationWindow { seconds } => {
                self.interpolation_window = seconds.max(0.0);
            }
        }
    }

    fn seed_locked(&self, id: ParamId) -> bool {
        id == ParamId::Seed && self.auto_seed
    }

    /// One frame tick. `now` is seconds since session start, on the same
    /// clock the adapters stamp commands with.
    pub fn tick(&mut self, now: f64) -> RenderParams {
        while let Some(cmd) = self.pending.pop_front() {
            self.apply(cmd);
        }
        if self.auto_seed {
            animate::drive_seed(&mut self.store, now);
        }
        reconcile::advance(&mut self.store, now, self.interpolation_window);
        self.store.snapshot()
    }
}
