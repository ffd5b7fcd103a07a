pub mod keyboard;
pub mod midi;
pub mod sliders;

pub use keyboard::wire_global_keydown;
pub use midi::wire_midi;
pub use sliders::{mirror, wire_sliders};
