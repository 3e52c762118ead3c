//! Crane slot registry: per-canvas GPU state, camera and crane entity.
//!
//! Each slot starts empty, requests the shared model asset, and ends up
//! Ready with either the loaded rig or the primitive fallback. The choice
//! is a tagged variant; the frame loop never inspects geometry to decide.

use crate::constants::{CANVAS_IDS, MODEL_URL};
use crate::dom;
use crate::render::{init_gpu, GpuState, MeshGpu};
use craneyard_core::{hex_rgb, parse_obj, Camera, FallbackParts, Mesh, SLOT_COLORS, SLOT_COUNT};
use gloo_net::http::Request;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// What a slot animates and draws once its load settles.
pub enum CraneEntity {
    /// The loaded model, spun and bobbed as one object.
    Rig(MeshGpu),
    /// Primitive-built stand-in, animated per part.
    Fallback(FallbackGpu),
}

pub struct FallbackGpu {
    pub tower: MeshGpu,
    pub arm: MeshGpu,
    pub hook: MeshGpu,
    pub rope: MeshGpu,
    pub counterweight: MeshGpu,
}

pub struct CraneSlot {
    pub canvas: web::HtmlCanvasElement,
    pub gpu: GpuState<'static>,
    pub camera: Camera,
    pub entity: Option<CraneEntity>,
}

pub type SlotRegistry = Rc<RefCell<Vec<CraneSlot>>>;

/// Construct all five slots and kick off their model loads.
pub async fn init_slots(document: &web::Document) -> anyhow::Result<SlotRegistry> {
    let mut slots = Vec::with_capacity(SLOT_COUNT);
    for id in CANVAS_IDS {
        let canvas: web::HtmlCanvasElement = dom::require_element(document, id)?
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("#{id} is not a canvas"))?;
        dom::sync_canvas_backing_size(&canvas);
        let gpu = init_gpu(&canvas).await?;
        let camera = Camera::slot_default(canvas.width() as f32 / canvas.height().max(1) as f32);
        slots.push(CraneSlot {
            canvas,
            gpu,
            camera,
            entity: None,
        });
    }
    let slots = Rc::new(RefCell::new(slots));
    for index in 0..SLOT_COUNT {
        spawn_local(load_model_into_slot(slots.clone(), index));
    }
    Ok(slots)
}

/// Load outcome decides the slot's variant; the fallback build cannot fail,
/// so every slot ends up populated.
async fn load_model_into_slot(slots: SlotRegistry, index: usize) {
    let entity = match fetch_model(MODEL_URL).await {
        Ok(mesh) => {
            let slots_ref = slots.borrow();
            let rig = slots_ref[index]
                .gpu
                .upload_mesh(&mesh, hex_rgb(SLOT_COLORS[index]));
            log::info!(
                "crane {} model ready ({} vertices)",
                index + 1,
                mesh.vertices.len()
            );
            CraneEntity::Rig(rig)
        }
        Err(e) => {
            log::error!(
                "crane {} model load failed, building primitive fallback: {e}",
                index + 1
            );
            let parts = FallbackParts::build(index);
            let slots_ref = slots.borrow();
            let gpu = &slots_ref[index].gpu;
            CraneEntity::Fallback(FallbackGpu {
                tower: gpu.upload_mesh(&parts.tower.mesh, parts.tower.color),
                arm: gpu.upload_mesh(&parts.arm.mesh, parts.arm.color),
                hook: gpu.upload_mesh(&parts.hook.mesh, parts.hook.color),
                rope: gpu.upload_mesh(&parts.rope.mesh, parts.rope.color),
                counterweight: gpu.upload_mesh(&parts.counterweight.mesh, parts.counterweight.color),
            })
        }
    };
    slots.borrow_mut()[index].entity = Some(entity);
}

async fn fetch_model(url: &str) -> anyhow::Result<Mesh> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("fetch: {e}"))?;
    if !resp.ok() {
        return Err(anyhow::anyhow!("fetch: http {}", resp.status()));
    }
    let text = resp
        .text()
        .await
        .map_err(|e| anyhow::anyhow!("read: {e}"))?;
    Ok(parse_obj(&text)?)
}
