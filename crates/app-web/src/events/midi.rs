use app_core::{midi, CloudEngine};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Probe Web MIDI once at startup. An absent or denied capability downgrades
/// the session to slider-only control; it is not an error.
pub fn wire_midi(engine: Rc<RefCell<CloudEngine>>, start: Instant) {
    let Some(window) = web::window() else {
        return;
    };
    let promise = match window.navigator().request_midi_access() {
        Ok(p) => p,
        Err(_) => {
            log::info!("[midi] Web MIDI unavailable; slider control only");
            return;
        }
    };
    spawn_local(async move {
        let access = match JsFuture::from(promise).await {
            Ok(value) => match value.dyn_into::<web::MidiAccess>() {
                Ok(a) => a,
                Err(_) => return,
            },
            Err(_) => {
                log::info!("[midi] MIDI access rejected; slider control only");
                return;
            }
        };
        wire_inputs(&access, &engine, start);

        // Re-wire when a controller is plugged in later; setting the message
        // handler again on an already-wired port just replaces it.
        let engine_state = engine.clone();
        let access_state = access.clone();
        let statechange = Closure::wrap(Box::new(move || {
            wire_inputs(&access_state, &engine_state, start);
        }) as Box<dyn FnMut()>);
        access.set_onstatechange(Some(statechange.as_ref().unchecked_ref()));
        statechange.forget();
    });
}

fn wire_inputs(access: &web::MidiAccess, engine: &Rc<RefCell<CloudEngine>>, start: Instant) {
    // A MIDIInputMap is a JS maplike; its default iterator yields [id, port]
    let inputs = access.inputs();
    let Ok(Some(iter)) = js_sys::try_iter(&inputs) else {
        return;
    };
    let mut count = 0usize;
    for entry in iter.flatten() {
        let pair = js_sys::Array::from(&entry);
        let Ok(input) = pair.get(1).dyn_into::<web::MidiInput>() else {
            continue;
        };
        let engine = engine.clone();
        let on_message = Closure::wrap(Box::new(move |ev: web::MidiMessageEvent| {
            let Ok(data) = ev.data() else {
                return;
            };
            let at = start.elapsed().as_secs_f64();
            if let Some(cmd) = midi::parse_message(&data, at) {
                engine.borrow_mut().enqueue(cmd);
            }
        }) as Box<dyn FnMut(_)>);
        input.set_onmidimessage(Some(on_message.as_ref().unchecked_ref()));
        on_message.forget();
        count += 1;
    }
    log::info!("[midi] listening on {count} input(s)");
}
