use crate::dom;
use crate::overlay;
use app_core::{CloudEngine, ControlCommand, ParamId, SEED_PERIOD};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, engine: &Rc<RefCell<CloudEngine>>) {
    let key = ev.key();
    match key.as_str() {
        "h" | "H" => {
            if let Some(doc) = dom::window_document() {
                overlay::toggle_controls(&doc);
            }
            ev.prevent_default();
        }
        "a" | "A" => {
            let enabled = !engine.borrow().auto_seed();
            engine
                .borrow_mut()
                .enqueue(ControlCommand::SetAutoSeed { enabled });
            log::info!("[keys] auto-seed {}", if enabled { "on" } else { "off" });
        }
        "r" | "R" => {
            // Manual re-roll only makes sense while the driver is off
            if engine.borrow().auto_seed() {
                return;
            }
            let seed = (js_sys::Math::random() * SEED_PERIOD as f64) as f32;
            engine.borrow_mut().enqueue(ControlCommand::SetCurrentDirect {
                id: ParamId::Seed,
                component: 0,
                value: seed,
            });
            log::info!("[keys] seed {:.2}", seed);
        }
        _ => {}
    }
}

pub fn wire_global_keydown(engine: Rc<RefCell<CloudEngine>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &engine);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
