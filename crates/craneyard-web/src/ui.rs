//! Progress readout, progress bar and the "keep scrolling" hint.

use craneyard_core::{HINT_FADE_PERCENT, HINT_IDLE_FADE_MS};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ProgressUi {
    readout: web::Element,
    bar: web::Element,
    hint: Rc<HintFader>,
}

impl ProgressUi {
    pub fn new(readout: web::Element, bar: web::Element, hint: Rc<HintFader>) -> Self {
        Self { readout, bar, hint }
    }

    /// Write the percentage to the readout and the bar width; past the
    /// threshold the hint starts its slow fade even mid-scroll.
    pub fn update(&self, percentage: i32) {
        self.readout
            .set_text_content(Some(&format!("{percentage}%")));
        let _ = self
            .bar
            .set_attribute("style", &format!("width: {percentage}%"));
        if percentage > HINT_FADE_PERCENT {
            self.hint.fade_slow();
        }
    }

    pub fn hint(&self) -> &HintFader {
        &self.hint
    }
}

/// Debounced visibility for the scroll hint: shown while the user scrolls,
/// faded out after the idle delay. The hide timeout is cancelled and
/// rescheduled on every scroll event.
pub struct HintFader {
    el: web::Element,
    timer: Cell<Option<i32>>,
    hide: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl HintFader {
    pub fn new(el: web::Element) -> Rc<Self> {
        let fader = Rc::new(Self {
            el,
            timer: Cell::new(None),
            hide: RefCell::new(None),
        });
        let for_hide = fader.clone();
        *fader.hide.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            for_hide.fade_slow();
        }) as Box<dyn FnMut()>));
        fader
    }

    pub fn fade_slow(&self) {
        let _ = self
            .el
            .set_attribute("style", "opacity: 0; transition: opacity 1s ease");
    }

    /// Show immediately and (re)arm the idle fade.
    pub fn show_and_rearm(&self) {
        let _ = self
            .el
            .set_attribute("style", "opacity: 1; transition: opacity 0.3s ease");
        let Some(window) = web::window() else { return };
        if let Some(id) = self.timer.take() {
            window.clear_timeout_with_handle(id);
        }
        if let Some(cb) = self.hide.borrow().as_ref() {
            let id = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    HINT_IDLE_FADE_MS,
                )
                .ok();
            self.timer.set(id);
        }
    }
}

/// Fire-and-forget one-shot timeout.
pub fn schedule_once(window: &web::Window, delay_ms: i32, f: impl FnOnce() + 'static) {
    let closure = Closure::once(f);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    );
    closure.forget();
}
