//! The decorative floating-shape field and its scroll-driven motion.

use crate::constants::*;
use rand::Rng;
use std::f32::consts::PI;

/// One decorative element, generated once at startup. `top_px` doubles as
/// the immutable original top used for viewport-relative opacity.
#[derive(Clone, Debug)]
pub struct Shape {
    pub width: f32,
    pub height: f32,
    pub left_percent: f32,
    pub top_px: f32,
    pub color: &'static str,
    pub initial_rotation: f32,
    pub base_opacity: f32,
    pub depth: f32,
}

/// Generate the full shape field for a page of the given content height.
pub fn generate_shapes<R: Rng>(rng: &mut R, total_height: f32) -> Vec<Shape> {
    (0..SHAPE_COUNT)
        .map(|_| {
            let square = rng.gen::<f32>() > 0.5;
            let (width, height) = if square {
                let size = SQUARE_SIZE_MIN + rng.gen::<f32>() * SQUARE_SIZE_SPAN;
                (size, size)
            } else {
                (
                    RECT_WIDTH_MIN + rng.gen::<f32>() * RECT_WIDTH_SPAN,
                    RECT_HEIGHT_MIN + rng.gen::<f32>() * RECT_HEIGHT_SPAN,
                )
            };
            Shape {
                width,
                height,
                left_percent: rng.gen::<f32>() * 100.0,
                top_px: rng.gen::<f32>() * total_height,
                color: SHAPE_PALETTE[rng.gen_range(0..SHAPE_PALETTE.len())],
                initial_rotation: rng.gen::<f32>() * 360.0,
                base_opacity: SHAPE_OPACITY_MIN + rng.gen::<f32>() * SHAPE_OPACITY_SPAN,
                depth: SHAPE_DEPTH_MIN + rng.gen::<f32>() * SHAPE_DEPTH_SPAN,
            }
        })
        .collect()
}

/// Scroll-derived placement for one shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub rotate_deg: f32,
    pub scale: f32,
}

impl ShapeTransform {
    /// CSS transform value. Translation is applied in un-rotated space, so
    /// the order is fixed.
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) rotate({}deg) scale({})",
            self.translate_x, self.translate_y, self.rotate_deg, self.scale
        )
    }
}

/// Motion of a shape at the given normalized scroll fraction. The shape
/// index staggers the drift and breathing phases across the field.
pub fn shape_transform(shape: &Shape, index: usize, normalized: f32) -> ShapeTransform {
    let phase = index as f32;
    ShapeTransform {
        translate_x: (normalized * 2.0 * PI + phase * DRIFT_X_PHASE_STEP).cos()
            * DRIFT_X_AMPLITUDE
            * shape.depth,
        translate_y: normalized * DRIFT_Y_RATE * shape.depth,
        rotate_deg: shape.initial_rotation + normalized * SPIN_DEGREES * shape.depth,
        scale: SCALE_BASE + (normalized * PI + phase * SCALE_PHASE_STEP).sin() * SCALE_SPAN,
    }
}

/// Opacity from viewport position `v` (0 = top edge, 1 = bottom edge):
/// peaks mid-viewport, ramps over half a viewport on either side, floors at
/// 0.1 elsewhere. The branch constants are tuning, kept exactly as-is.
pub fn shape_opacity(viewport_pos: f32) -> f32 {
    if (0.0..=1.0).contains(&viewport_pos) {
        0.6 + (viewport_pos * PI).sin() * 0.2
    } else if viewport_pos > -0.5 && viewport_pos < 0.0 {
        0.6 * (viewport_pos + 0.5) * 2.0
    } else if viewport_pos > 1.0 && viewport_pos < 1.5 {
        0.6 * (1.5 - viewport_pos) * 2.0
    } else {
        0.1
    }
}
