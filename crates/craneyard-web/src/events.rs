//! Scroll and resize wiring.

use crate::crane::SlotRegistry;
use crate::dom;
use crate::shapes::ShapeField;
use crate::ui::ProgressUi;
use craneyard_core::ScrollMetrics;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the scroll and resize handlers touch.
pub struct PageContext {
    pub metrics: Cell<ScrollMetrics>,
    pub shapes: ShapeField,
    pub sections: Vec<web::Element>,
    pub crane_containers: Vec<web::Element>,
    pub slots: SlotRegistry,
    pub progress: ProgressUi,
    pub container: web::HtmlElement,
}

impl PageContext {
    /// The full per-scroll pass: percentage, shape motion, active section,
    /// hint visibility — in that order.
    pub fn run_scroll_pass(&self) {
        let Some(window) = web::window() else { return };
        let offset = current_scroll(&window);
        let metrics = self.metrics.get();

        self.progress.update(metrics.percentage(offset));
        self.shapes.apply_scroll(&metrics, offset);
        self.update_active_sections(&metrics, offset);
        self.progress.hint().show_and_rearm();
    }

    /// The startup paint: same as a scroll pass but without touching the
    /// hint, which has its own startup timer.
    pub fn initial_paint(&self) {
        let Some(window) = web::window() else { return };
        let offset = current_scroll(&window);
        let metrics = self.metrics.get();
        self.progress.update(metrics.percentage(offset));
        self.shapes.apply_scroll(&metrics, offset);
        self.update_active_sections(&metrics, offset);
    }

    fn update_active_sections(&self, metrics: &ScrollMetrics, offset: f32) {
        dom::set_exclusive_active(
            &self.sections,
            metrics.active_section(offset, self.sections.len()),
        );
        dom::set_exclusive_active(
            &self.crane_containers,
            metrics.active_section(offset, self.crane_containers.len()),
        );
    }

    /// Re-measure the page, refresh the readouts at the current offset and
    /// size every slot surface/camera to its container.
    pub fn handle_resize(&self) {
        let Some(window) = web::window() else { return };
        self.metrics.set(measure(&window, &self.container));

        let offset = current_scroll(&window);
        let metrics = self.metrics.get();
        self.progress.update(metrics.percentage(offset));
        self.update_active_sections(&metrics, offset);

        self.resize_canvases();
    }

    pub fn resize_canvases(&self) {
        let mut slots = self.slots.borrow_mut();
        for slot in slots.iter_mut() {
            dom::sync_canvas_backing_size(&slot.canvas);
            let width = slot.canvas.width();
            let height = slot.canvas.height();
            slot.gpu.resize_if_needed(width, height);
            slot.camera.set_aspect(width as f32, height as f32);
        }
    }
}

pub fn current_scroll(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

pub fn measure(window: &web::Window, container: &web::HtmlElement) -> ScrollMetrics {
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    ScrollMetrics::new(viewport, container.offset_height() as f32)
}

pub fn wire_window_handlers(ctx: Rc<PageContext>) {
    let Some(window) = web::window() else { return };
    {
        let ctx = ctx.clone();
        let closure = Closure::wrap(Box::new(move || ctx.run_scroll_pass()) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let ctx = ctx.clone();
        let closure = Closure::wrap(Box::new(move || ctx.handle_resize()) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
