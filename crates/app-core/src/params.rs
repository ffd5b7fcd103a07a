//! Tunable-parameter model shared by every input source and the renderer.
//!
//! Each parameter (or vector component) carries the value the renderer reads
//! this frame (`current`), the value external control wants it to reach
//! (`target`), a manual-control lock held while a human drags the matching
//! UI widget, and the wall-clock time of the last external update. The store
//! is plain owned data so a frame tick is a pure function of (store, now)
//! and everything here is testable without a rendering context.

use glam::{Vec2, Vec3};

use crate::constants::{MIDI_VALUE_MAX, SPEED_CATEGORY_RATE};

/// Responsiveness class a parameter belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SmoothingCategory {
    Movement,
    Core,
    Color,
    Speed,
}

impl SmoothingCategory {
    /// Rate multiplier applied to elapsed time before the window clamp.
    /// Rates never drop below 1 so every category converges within the
    /// shared interpolation window.
    pub fn rate(self) -> f32 {
        match self {
            SmoothingCategory::Speed => SPEED_CATEGORY_RATE,
            _ => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamId {
    CloudScale,
    Speed,
    CloudDark,
    CloudLight,
    CloudCover,
    CloudAlpha,
    SkyTint,
    NoiseScale,
    MoveDirection,
    AnimationSpeed,
    NoiseOffset,
    SkyColour1,
    SkyColour2,
    CloudColour,
    Seed,
}

pub const PARAM_COUNT: usize = 15;

/// Declared range, startup default and smoothing class of one parameter.
/// Unused trailing components of scalars stay zero.
pub struct ParamSpec {
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
    pub default: [f32; 3],
    pub components: usize,
    pub category: SmoothingCategory,
}

// Indexed by `ParamId as usize`; order must match the enum.
pub const PARAM_SPECS: [ParamSpec; PARAM_COUNT] = [
    ParamSpec {
        name: "cloudscale",
        min: 0.1,
        max: 3.0,
        default: [1.1, 0.0, 0.0],
        components: 1,
        category: SmoothingCategory::Core,
    },
    ParamSpec {
        name: "speed",
        min: 0.0,
        max: 0.1,
        default: [0.03, 0.0, 0.0],
        components: 1,
        category: SmoothingCategory::Speed,
    },
    ParamSpec {
        name: "clouddark",
        min: 0.0,
        max: 1.0,
        default: [0.5, 0.0, 0.0],
        components: 1,
        category: SmoothingCategory::Core,
    },
    ParamSpec {
        name: "cloudlight",
        min: 0.0,
        max: 1.0,
        default: [0.3, 0.0, 0.0],
        components: 1,
        category: SmoothingCategory::Core,
    },
    ParamSpec {
        name: "cloudcover",
        min: 0.0,
        max: 1.0,
        default: [0.2, 0.0, 0.0],
        components: 1,
        category: SmoothingCategory::Core,
    },
    ParamSpec {
        name: "cloudalpha",
        min: 0.0,
        max: 20.0,
        default: [8.0, 0.0, 0.0],
        components: 1,
        category: SmoothingCategory::Core,
    },
    ParamSpec {
        name: "skytint",
        min: 0.0,
        max: 1.0,
        default: [0.5, 0.0, 0.0],
        components: 1,
        category: SmoothingCategory::Core,
    },
    ParamSpec {
        name: "noisescale",
        min: 0.1,
        max: 5.0,
        default: [1.0, 0.0, 0.0],
        components: 1,
        category: SmoothingCategory::Core,
    },
    ParamSpec {
        name: "movedirection",
        min: -1.0,
        max: 1.0,
        default: [1.0, 0.0, 0.0],
        components: 2,
        category: SmoothingCategory::Movement,
    },
    ParamSpec {
        name: "animationspeed",
        min: 0.01,
        max: 0.2,
        default: [0.05, 0.0, 0.0],
        components: 1,
        category: SmoothingCategory::Speed,
    },
    ParamSpec {
        name: "noiseoffset",
        min: 0.0,
        max: 10.0,
        default: [0.0, 0.0, 0.0],
        components: 1,
        category: SmoothingCategory::Core,
    },
    ParamSpec {
        name: "skycolour1",
        min: 0.0,
        max: 1.0,
        default: [0.2, 0.4, 0.6],
        components: 3,
        category: SmoothingCategory::Color,
    },
    ParamSpec {
        name: "skycolour2",
        min: 0.0,
        max: 1.0,
        default: [0.4, 0.7, 1.0],
        components: 3,
        category: SmoothingCategory::Color,
    },
    ParamSpec {
        name: "cloudcolour",
        min: 0.0,
        max: 1.0,
        default: [1.0, 1.0, 0.9],
        components: 3,
        category: SmoothingCategory::Color,
    },
    ParamSpec {
        name: "seed",
        min: 0.0,
        max: 10.0,
        default: [0.0, 0.0, 0.0],
        components: 1,
        category: SmoothingCategory::Core,
    },
];

impl ParamId {
    pub const ALL: [ParamId; PARAM_COUNT] = [
        ParamId::CloudScale,
        ParamId::Speed,
        ParamId::CloudDark,
        ParamId::CloudLight,
        ParamId::CloudCover,
        ParamId::CloudAlpha,
        ParamId::SkyTint,
        ParamId::NoiseScale,
        ParamId::MoveDirection,
        ParamId::AnimationSpeed,
        ParamId::NoiseOffset,
        ParamId::SkyColour1,
        ParamId::SkyColour2,
        ParamId::CloudColour,
        ParamId::Seed,
    ];

    pub fn spec(self) -> &'static ParamSpec {
        &PARAM_SPECS[self as usize]
    }

    pub fn components(self) -> usize {
        self.spec().components
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Map a raw 0–127 controller value onto this parameter's declared range.
    pub fn midi_to_range(self, raw: u8) -> f32 {
        let spec = self.spec();
        let norm = raw.min(MIDI_VALUE_MAX) as f32 / MIDI_VALUE_MAX as f32;
        spec.min + norm * (spec.max - spec.min)
    }

    /// Clamp an arbitrary value into this parameter's declared range.
    /// Adapters call this before forwarding; the store never re-validates.
    pub fn clamp(self, value: f32) -> f32 {
        let spec = self.spec();
        value.clamp(spec.min, spec.max)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Slot {
    pub(crate) current: f32,
    pub(crate) target: f32,
    pub(crate) manual: bool,
    // Wall-clock seconds of the last MIDI-origin write; None until the first
    pub(crate) last_external: Option<f64>,
}

/// Owned state of every tunable. One instance per session, injected into the
/// adapters and the per-frame tick rather than living in a global.
pub struct ParamStore {
    slots: [[Slot; 3]; PARAM_COUNT],
}

impl Default for ParamStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamStore {
    pub fn new() -> Self {
        let mut slots = [[Slot::default(); 3]; PARAM_COUNT];
        for id in ParamId::ALL {
            let spec = id.spec();
            for (component, slot) in slots[id as usize].iter_mut().enumerate().take(spec.components)
            {
                slot.current = spec.default[component];
                slot.target = spec.default[component];
            }
        }
        Self { slots }
    }

    pub fn current(&self, id: ParamId, component: usize) -> f32 {
        debug_assert!(component < id.components());
        self.slots[id as usize][component].current
    }

    pub fn target(&self, id: ParamId, component: usize) -> f32 {
        debug_assert!(component < id.components());
        self.slots[id as usize][component].target
    }

    pub fn is_manual(&self, id: ParamId, component: usize) -> bool {
        debug_assert!(component < id.components());
        self.slots[id as usize][component].manual
    }

    pub fn current_vec2(&self, id: ParamId) -> Vec2 {
        debug_assert!(id.components() == 2);
        let s = &self.slots[id as usize];
        Vec2::new(s[0].current, s[1].current)
    }

    pub fn current_vec3(&self, id: ParamId) -> Vec3 {
        debug_assert!(id.components() == 3);
        let s = &self.slots[id as usize];
        Vec3::new(s[0].current, s[1].current, s[2].current)
    }

    /// External (MIDI-origin) write. Records the update time so the
    /// reconciliation pass can compute its progress fraction. The very first
    /// external update of a component lands immediately unless the component
    /// is under manual control; smoothing starts with the second update.
    pub fn set_target(&mut self, id: ParamId, component: usize, value: f32, at: f64) {
        debug_assert!(component < id.components());
        let slot = &mut self.slots[id as usize][component];
        if slot.last_external.is_none() && !slot.manual {
            slot.current = value;
        }
        slot.target = value;
        slot.last_external = Some(at);
    }

    pub fn set_manual(&mut self, id: ParamId, component: usize, engaged: bool) {
        debug_assert!(component < id.components());
        self.slots[id as usize][component].manual = engaged;
    }

    /// Direct UI write. Bypasses smoothing and mirrors the value into the
    /// target so releasing manual control does not snap back.
    pub fn set_current_direct(&mut self, id: ParamId, component: usize, value: f32) {
        debug_assert!(component < id.components());
        let slot = &mut self.slots[id as usize][component];
        slot.current = value;
        slot.target = value;
    }

    pub(crate) fn slot_mut(&mut self, id: ParamId, component: usize) -> &mut Slot {
        &mut self.slots[id as usize][component]
    }

    /// Resolved values for one frame, in renderer-boundary form.
    pub fn snapshot(&self) -> RenderParams {
        RenderParams {
            cloudscale: self.current(ParamId::CloudScale, 0),
            speed: self.current(ParamId::Speed, 0),
            clouddark: self.current(ParamId::CloudDark, 0),
            cloudlight: self.current(ParamId::CloudLight, 0),
            cloudcover: self.current(ParamId::CloudCover, 0),
            cloudalpha: self.current(ParamId::CloudAlpha, 0),
            skytint: self.current(ParamId::SkyTint, 0),
            noise_scale: self.current(ParamId::NoiseScale, 0),
            noise_offset: self.current(ParamId::NoiseOffset, 0),
            move_direction: self.current_vec2(ParamId::MoveDirection),
            animation_speed: self.current(ParamId::AnimationSpeed, 0),
            skycolour1: self.current_vec3(ParamId::SkyColour1),
            skycolour2: self.current_vec3(ParamId::SkyColour2),
            cloudcolour: self.current_vec3(ParamId::CloudColour),
            seed: self.current(ParamId::Seed, 0),
        }
    }
}

/// Flat per-frame snapshot consumed by the renderer boundary.
#[derive(Clone, Copy, Debug)]
pub struct RenderParams {
    pub cloudscale: f32,
    pub speed: f32,
    pub clouddark: f32,
    pub cloudlight: f32,
    pub cloudcover: f32,
    pub cloudalpha: f32,
    pub skytint: f32,
    pub noise_scale: f32,
    pub noise_offset: f32,
    pub move_direction: Vec2,
    pub animation_speed: f32,
    pub skycolour1: Vec3,
    pub skycolour2: Vec3,
    pub cloudcolour: Vec3,
    pub seed: f32,
}

impl RenderParams {
    /// Pack into the GPU uniform layout shared with `shaders/cloud.wgsl`.
    pub fn uniforms(&self, resolution: [f32; 2], time: f32) -> CloudUniforms {
        CloudUniforms {
            resolution,
            time,
            cloudscale: self.cloudscale,
            speed: self.speed,
            clouddark: self.clouddark,
            cloudlight: self.cloudlight,
            cloudcover: self.cloudcover,
            cloudalpha: self.cloudalpha,
            skytint: self.skytint,
            noise_scale: self.noise_scale,
            noise_offset: self.noise_offset,
            move_direction: self.move_direction.to_array(),
            seed: self.seed,
            _pad0: 0.0,
            skycolour1: self.skycolour1.to_array(),
            _pad1: 0.0,
            skycolour2: self.skycolour2.to_array(),
            _pad2: 0.0,
            cloudcolour: self.cloudcolour.to_array(),
            _pad3: 0.0,
        }
    }
}

// Field order and padding mirror the WGSL struct; both frontends upload this
// with a single write_buffer.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CloudUniforms {
    resolution: [f32; 2],
    time: f32,
    cloudscale: f32,
    speed: f32,
    clouddark: f32,
    cloudlight: f32,
    cloudcover: f32,
    cloudalpha: f32,
    skytint: f32,
    noise_scale: f32,
    noise_offset: f32,
    move_direction: [f32; 2],
    seed: f32,
    _pad0: f32,
    skycolour1: [f32; 3],
    _pad1: f32,
    skycolour2: [f32; 3],
    _pad2: f32,
    cloudcolour: [f32; 3],
    _pad3: f32,
}
