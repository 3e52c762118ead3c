#![cfg(target_arch = "wasm32")]
//! craneyard web front-end.
//!
//! Wires the static page (see `web/index.html` for the element contract)
//! to the scroll mapper, the floating-shape field and the five WebGPU
//! crane slots.

mod constants;
mod crane;
mod dom;
mod events;
mod frame;
mod render;
mod shapes;
mod ui;

use craneyard_core::HINT_STARTUP_FADE_MS;
use events::PageContext;
use shapes::ShapeField;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("craneyard-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Measure from the top so shape placement and section state agree.
    window.scroll_to_with_x_and_y(0.0, 0.0);

    let container: web::HtmlElement = dom::require_element(&document, "continuousContainer")?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#continuousContainer is not an html element"))?;
    let readout = dom::require_element(&document, "scrollPercentage")?;
    let bar = dom::require_element(&document, "progressBar")?;
    let indicator = dom::require_element(&document, "scrollIndicator")?;
    let shapes_container = dom::require_element(&document, "shapesContainer")?;
    let sections = dom::query_all(&document, ".fixed-text-section");
    let crane_containers = dom::query_all(&document, ".crane-container");

    let metrics = events::measure(&window, &container);
    let shapes = ShapeField::create(&document, &shapes_container, metrics.total_height)?;
    log::info!(
        "shape field ready: {} shapes over {}px",
        shapes.len(),
        metrics.total_height
    );

    let slots = crane::init_slots(&document).await?;

    let hint = ui::HintFader::new(indicator);
    let progress = ui::ProgressUi::new(readout, bar, hint.clone());

    let ctx = Rc::new(PageContext {
        metrics: Cell::new(metrics),
        shapes,
        sections,
        crane_containers,
        slots: slots.clone(),
        progress,
        container,
    });
    events::wire_window_handlers(ctx.clone());

    let _frame_loop = frame::FrameLoop::start(frame::FrameContext::new(slots));

    // First paint at whatever offset the browser restored.
    ctx.initial_paint();

    // Layout settles after the first paint; re-sync the canvas sizes then.
    {
        let ctx = ctx.clone();
        ui::schedule_once(&window, constants::STARTUP_RESIZE_DELAY_MS, move || {
            ctx.resize_canvases()
        });
    }
    // Fade the hint even if the user never scrolls.
    ui::schedule_once(&window, HINT_STARTUP_FADE_MS, move || hint.fade_slow());

    Ok(())
}
