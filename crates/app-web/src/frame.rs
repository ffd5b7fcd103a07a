use crate::dom;
use crate::events;
use crate::render;
use app_core::CloudEngine;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<CloudEngine>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState<'static>,
    pub start: Instant,
}

impl FrameContext {
    /// One cooperative frame: queued input is applied, the parameter set is
    /// reconciled, the snapshot is drawn, and widgets mirror the result.
    pub fn frame(&mut self) {
        let now = self.start.elapsed().as_secs_f64();
        let params = self.engine.borrow_mut().tick(now);

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.gpu.render(&params, now as f32) {
            log::error!("render error: {:?}", e);
        }

        if let Some(document) = dom::window_document() {
            events::mirror(&document, &self.engine.borrow());
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas).await
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
