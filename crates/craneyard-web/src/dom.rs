use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn js_err(value: JsValue) -> anyhow::Error {
    anyhow::anyhow!(format!("{:?}", value))
}

/// Look up a DOM-contract element; its absence is an init error.
pub fn require_element(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

/// Maintain canvas internal pixel size to match CSS size * devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Mark exactly one element active, clearing the class from all others.
pub fn set_exclusive_active(elements: &[web::Element], active_index: usize) {
    for (index, el) in elements.iter().enumerate() {
        if index == active_index {
            let _ = el.class_list().add_1("active");
        } else {
            let _ = el.class_list().remove_1("active");
        }
    }
}
