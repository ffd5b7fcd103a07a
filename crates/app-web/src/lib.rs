#![cfg(target_arch = "wasm32")]
use app_core::CloudEngine;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_controls_toggle(document: &web::Document) {
    dom::add_click_listener(document, "toggle-controls", move || {
        if let Some(doc) = dom::window_document() {
            overlay::toggle_controls(&doc);
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            // Fatal for the session: reported once, no per-frame retry
            log::error!("init error: {:?}", e);
            if let Some(doc) = dom::window_document() {
                overlay::show_error(&doc, &format!("{e}"));
            }
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("sky-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #sky-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let engine = Rc::new(RefCell::new(CloudEngine::new()));
    let start = Instant::now();

    // Rendering capability is required; failing here ends the session
    let gpu = frame::init_gpu(&canvas).await?;

    events::wire_sliders(&document, &engine);
    wire_controls_toggle(&document);
    events::wire_global_keydown(engine.clone());
    events::wire_midi(engine.clone(), start);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        canvas,
        gpu,
        start,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
