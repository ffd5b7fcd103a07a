//! Input events as explicit commands.
//!
//! Every slider/pointer/MIDI callback produces one of these instead of
//! poking shared state directly; the engine drains the queue at the start of
//! each frame tick, so there is no ordering dependency between event
//! handlers and the render loop.

use crate::params::ParamId;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlCommand {
    /// External (MIDI-origin) update, range-mapped and timestamped by the adapter.
    SetTarget {
        id: ParamId,
        component: usize,
        value: f32,
        at: f64,
    },
    /// Manual-control lock while a human holds the matching UI control.
    SetManual {
        id: ParamId,
        component: usize,
        engaged: bool,
    },
    /// Direct UI write; lands immediately and mirrors into the target.
    SetCurrentDirect {
        id: ParamId,
        component: usize,
        value: f32,
    },
    /// Toggle the time-driven seed animation.
    SetAutoSeed { enabled: bool },
    /// Reconfigure the shared interpolation time window (seconds).
    SetInterpolationWindow { seconds: f32 },
}
