//! Fixed control-change map for external MIDI controllers.
//!
//! Both frontends feed raw MIDI bytes through [`parse_message`]; everything
//! that is not a control-change on a mapped id falls through silently, per
//! the controller contract.

use crate::command::ControlCommand;
use crate::constants::MIDI_VALUE_MAX;
use crate::params::ParamId;

/// Control id -> (parameter, component). Ids above 20 are unmapped.
pub fn map_control(control: u8) -> Option<(ParamId, usize)> {
    let mapped = match control {
        0 => (ParamId::CloudScale, 0),
        1 => (ParamId::Speed, 0),
        2 => (ParamId::CloudDark, 0),
        3 => (ParamId::CloudLight, 0),
        4 => (ParamId::CloudCover, 0),
        5 => (ParamId::CloudAlpha, 0),
        6 => (ParamId::SkyTint, 0),
        7 => (ParamId::NoiseScale, 0),
        8 => (ParamId::MoveDirection, 0),
        9 => (ParamId::MoveDirection, 1),
        10 => (ParamId::AnimationSpeed, 0),
        11 => (ParamId::NoiseOffset, 0),
        12 => (ParamId::SkyColour1, 0),
        13 => (ParamId::SkyColour1, 1),
        14 => (ParamId::SkyColour1, 2),
        15 => (ParamId::SkyColour2, 0),
        16 => (ParamId::SkyColour2, 1),
        17 => (ParamId::SkyColour2, 2),
        18 => (ParamId::CloudColour, 0),
        19 => (ParamId::CloudColour, 1),
        20 => (ParamId::CloudColour, 2),
        _ => return None,
    };
    Some(mapped)
}

/// Build the store command for one control-change, mapping 0–127 onto the
/// parameter's declared range. Unrecognized ids yield `None`, not an error.
pub fn control_change(control: u8, raw: u8, at: f64) -> Option<ControlCommand> {
    let (id, component) = map_control(control)?;
    let value = id.midi_to_range(raw.min(MIDI_VALUE_MAX));
    Some(ControlCommand::SetTarget {
        id,
        component,
        value,
        at,
    })
}

/// Decode a raw MIDI message. Only control-change messages (status nibble
/// 0xB0, any channel) are consumed.
pub fn parse_message(data: &[u8], at: f64) -> Option<ControlCommand> {
    if data.len() < 3 {
        return None;
    }
    if data[0] & 0xF0 != 0xB0 {
        return None;
    }
    control_change(data[1], data[2], at)
}
