pub mod animate;
pub mod command;
pub mod constants;
pub mod engine;
pub mod midi;
pub mod params;
pub mod reconcile;

pub static CLOUD_WGSL: &str = include_str!("../shaders/cloud.wgsl");

pub use command::*;
pub use constants::*;
pub use engine::*;
pub use params::*;
