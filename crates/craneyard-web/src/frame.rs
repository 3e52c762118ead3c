//! The continuous per-frame animation task, independent of scroll.

use crate::crane::{CraneEntity, CraneSlot, SlotRegistry};
use craneyard_core::{fallback_pose, rig_pose, FallbackParts};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    slots: SlotRegistry,
    started: Instant,
}

impl FrameContext {
    pub fn new(slots: SlotRegistry) -> Self {
        Self {
            slots,
            started: Instant::now(),
        }
    }

    /// Advance and draw every ready slot; slots still loading are skipped
    /// without error.
    pub fn frame(&mut self) {
        let t = self.started.elapsed().as_secs_f32();
        let mut slots = self.slots.borrow_mut();
        for (index, slot) in slots.iter_mut().enumerate() {
            let CraneSlot {
                canvas,
                gpu,
                camera,
                entity,
            } = slot;
            let Some(entity) = entity.as_ref() else {
                continue;
            };

            let width = canvas.width();
            let height = canvas.height();
            gpu.resize_if_needed(width, height);
            camera.set_aspect(width as f32, height as f32);

            let draws = match entity {
                CraneEntity::Rig(mesh) => vec![(mesh, rig_pose(t, index).model_matrix())],
                CraneEntity::Fallback(fb) => {
                    let m = FallbackParts::model_matrices(&fallback_pose(t, index));
                    vec![
                        (&fb.tower, m[0]),
                        (&fb.arm, m[1]),
                        (&fb.hook, m[2]),
                        (&fb.rope, m[3]),
                        (&fb.counterweight, m[4]),
                    ]
                }
            };
            if let Err(e) = gpu.render(camera, &draws) {
                log::error!("render error on crane {}: {:?}", index + 1, e);
            }
        }
    }
}

/// Handle for the self-rescheduling frame task. The loop runs until
/// `cancel`; dropping the handle leaves it running for the page's lifetime,
/// which is the intended browser behavior.
pub struct FrameLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn start(mut ctx: FrameContext) -> Self {
        let raf_id = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let raf_for_tick = raf_id.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            ctx.frame();
            if let Some(w) = web::window() {
                let id = w
                    .request_animation_frame(
                        tick_clone
                            .borrow()
                            .as_ref()
                            .unwrap()
                            .as_ref()
                            .unchecked_ref(),
                    )
                    .ok();
                raf_for_tick.set(id);
            }
        }) as Box<dyn FnMut()>));
        if let Some(w) = web::window() {
            let id = w
                .request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
                .ok();
            raf_id.set(id);
        }
        Self {
            raf_id,
            _tick: tick,
        }
    }

    /// Cancel the pending frame; nothing runs after this. The browser page
    /// never tears the loop down, so only embeddings call this.
    #[allow(dead_code)]
    pub fn cancel(&self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            let _ = w.cancel_animation_frame(id);
        }
    }
}
