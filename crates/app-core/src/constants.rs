// Shared smoothing/animation tuning constants used by both web and native frontends.

// Seconds for a parameter to fully catch up after an external update
pub const DEFAULT_INTERPOLATION_WINDOW: f32 = 0.5;

// Auto-animated seed wraps back to zero at this value
pub const SEED_PERIOD: f32 = 10.0;

// Speed-class parameters catch up in half the window
pub const SPEED_CATEGORY_RATE: f32 = 2.0;

// Control-change ids 0..=MIDI_CONTROL_MAX are mapped; everything above is ignored
pub const MIDI_CONTROL_MAX: u8 = 20;
pub const MIDI_VALUE_MAX: u8 = 127;
