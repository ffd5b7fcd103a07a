use crate::dom;
use app_core::{CloudEngine, ControlCommand, ParamId};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Slider element id -> (parameter, component). Vector components carry
/// -x/-y or -r/-g/-b suffixes, and each slider has a sibling `<id>-value`
/// label.
pub const SLIDERS: [(&str, ParamId, usize); 21] = [
    ("cloudscale", ParamId::CloudScale, 0),
    ("speed", ParamId::Speed, 0),
    ("clouddark", ParamId::CloudDark, 0),
    ("cloudlight", ParamId::CloudLight, 0),
    ("cloudcover", ParamId::CloudCover, 0),
    ("cloudalpha", ParamId::CloudAlpha, 0),
    ("skytint", ParamId::SkyTint, 0),
    ("noise-scale", ParamId::NoiseScale, 0),
    ("move-direction-x", ParamId::MoveDirection, 0),
    ("move-direction-y", ParamId::MoveDirection, 1),
    ("animation-speed", ParamId::AnimationSpeed, 0),
    ("noise-offset", ParamId::NoiseOffset, 0),
    ("skycolour1-r", ParamId::SkyColour1, 0),
    ("skycolour1-g", ParamId::SkyColour1, 1),
    ("skycolour1-b", ParamId::SkyColour1, 2),
    ("skycolour2-r", ParamId::SkyColour2, 0),
    ("skycolour2-g", ParamId::SkyColour2, 1),
    ("skycolour2-b", ParamId::SkyColour2, 2),
    ("cloudcolour-r", ParamId::CloudColour, 0),
    ("cloudcolour-g", ParamId::CloudColour, 1),
    ("cloudcolour-b", ParamId::CloudColour, 2),
];

pub const SEED_INPUT: &str = "seed";
pub const AUTO_SEED_TOGGLE: &str = "auto-seed";

pub fn wire_sliders(document: &web::Document, engine: &Rc<RefCell<CloudEngine>>) {
    for (elem_id, id, component) in SLIDERS {
        wire_one(document, engine, elem_id, id, component);
    }
    wire_one(document, engine, SEED_INPUT, ParamId::Seed, 0);
    wire_auto_seed(document, engine);
}

fn wire_one(
    document: &web::Document,
    engine: &Rc<RefCell<CloudEngine>>,
    elem_id: &str,
    id: ParamId,
    component: usize,
) {
    let Some(input) = dom::input_element(document, elem_id) else {
        log::warn!("[ui] missing control #{elem_id}");
        return;
    };
    let spec = id.spec();
    input.set_min(&format!("{}", spec.min));
    input.set_max(&format!("{}", spec.max));
    input.set_step(&format!("{}", (spec.max - spec.min) / 200.0));
    input.set_value(&format!(
        "{:.2}",
        engine.borrow().store().current(id, component)
    ));

    // Begin drag: lock the slot so reconciliation leaves it alone
    let eng = engine.clone();
    let down = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        eng.borrow_mut().enqueue(ControlCommand::SetManual {
            id,
            component,
            engaged: true,
        });
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("pointerdown", down.as_ref().unchecked_ref());
    down.forget();

    // Value changes while dragging (also fires for keyboard nudges)
    let eng = engine.clone();
    let input_for_change = input.clone();
    let changed = Closure::wrap(Box::new(move |_ev: web::Event| {
        if let Ok(parsed) = input_for_change.value().parse::<f32>() {
            eng.borrow_mut().enqueue(ControlCommand::SetCurrentDirect {
                id,
                component,
                value: id.clamp(parsed),
            });
        }
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("input", changed.as_ref().unchecked_ref());
    changed.forget();

    // End drag
    for ev_name in ["pointerup", "pointercancel"] {
        let eng = engine.clone();
        let up = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            eng.borrow_mut().enqueue(ControlCommand::SetManual {
                id,
                component,
                engaged: false,
            });
        }) as Box<dyn FnMut(_)>);
        _ = input.add_event_listener_with_callback(ev_name, up.as_ref().unchecked_ref());
        up.forget();
    }
}

fn wire_auto_seed(document: &web::Document, engine: &Rc<RefCell<CloudEngine>>) {
    let Some(toggle) = dom::input_element(document, AUTO_SEED_TOGGLE) else {
        log::warn!("[ui] missing control #{AUTO_SEED_TOGGLE}");
        return;
    };
    let eng = engine.clone();
    let toggle_for_change = toggle.clone();
    let changed = Closure::wrap(Box::new(move |_ev: web::Event| {
        eng.borrow_mut().enqueue(ControlCommand::SetAutoSeed {
            enabled: toggle_for_change.checked(),
        });
    }) as Box<dyn FnMut(_)>);
    _ = toggle.add_event_listener_with_callback("change", changed.as_ref().unchecked_ref());
    changed.forget();
}

/// Mirror effective values back into every widget not being dragged, and
/// keep the seed entry's enabled state in step with the animation driver.
pub fn mirror(document: &web::Document, engine: &CloudEngine) {
    let store = engine.store();
    for (elem_id, id, component) in SLIDERS {
        if store.is_manual(id, component) {
            continue;
        }
        set_value_and_label(document, elem_id, store.current(id, component));
    }

    if let Some(input) = dom::input_element(document, SEED_INPUT) {
        input.set_disabled(engine.auto_seed());
    }
    if !store.is_manual(ParamId::Seed, 0) {
        set_value_and_label(document, SEED_INPUT, store.current(ParamId::Seed, 0));
    }
    if let Some(toggle) = dom::input_element(document, AUTO_SEED_TOGGLE) {
        toggle.set_checked(engine.auto_seed());
    }
}

fn set_value_and_label(document: &web::Document, elem_id: &str, value: f32) {
    if let Some(input) = dom::input_element(document, elem_id) {
        input.set_value(&format!("{value:.2}"));
    }
    dom::set_text(document, &format!("{elem_id}-value"), &format!("{value:.2}"));
}
