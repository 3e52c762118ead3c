//! DOM side of the floating-shape field.
//!
//! Shape data lives on the Rust side for the page's lifetime; the element
//! list is index-aligned with it, so scroll updates never read the DOM back.

use crate::dom::js_err;
use craneyard_core::{
    generate_shapes, shape_opacity, shape_transform, ScrollMetrics, Shape,
};
use web_sys as web;

pub struct ShapeField {
    shapes: Vec<Shape>,
    elements: Vec<web::Element>,
}

impl ShapeField {
    /// Generate the field and insert one `div.shape` per entity.
    pub fn create(
        document: &web::Document,
        container: &web::Element,
        total_height: f32,
    ) -> anyhow::Result<Self> {
        let mut rng = rand::thread_rng();
        let shapes = generate_shapes(&mut rng, total_height);
        let mut elements = Vec::with_capacity(shapes.len());
        for shape in &shapes {
            let el = document.create_element("div").map_err(js_err)?;
            el.set_class_name("shape");
            let _ = el.set_attribute("style", &at_rest_style(shape));
            container.append_child(&el).map_err(js_err)?;
            elements.push(el);
        }
        Ok(Self { shapes, elements })
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Rewrite transform and opacity for every shape at the given offset.
    pub fn apply_scroll(&self, metrics: &ScrollMetrics, offset: f32) {
        let normalized = metrics.normalized(offset);
        for (index, (shape, el)) in self.shapes.iter().zip(&self.elements).enumerate() {
            let transform = shape_transform(shape, index, normalized);
            let opacity = shape_opacity(metrics.viewport_position(shape.top_px, offset));
            let style = format!(
                "{} transform: {}; opacity: {};",
                base_style(shape),
                transform.to_css(),
                opacity
            );
            let _ = el.set_attribute("style", &style);
        }
    }
}

fn base_style(shape: &Shape) -> String {
    format!(
        "width: {}px; height: {}px; left: {}%; top: {}px; background-color: {};",
        shape.width, shape.height, shape.left_percent, shape.top_px, shape.color
    )
}

fn at_rest_style(shape: &Shape) -> String {
    format!(
        "{} transform: rotate({}deg); opacity: {};",
        base_style(shape),
        shape.initial_rotation,
        shape.base_opacity
    )
}
