// Host-side tests for shape generation and the scroll-driven motion math.

use craneyard_core::{
    generate_shapes, shape_opacity, shape_transform, ScrollMetrics, Shape, SHAPE_COUNT,
    SHAPE_PALETTE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const TOTAL_HEIGHT: f32 = 4800.0;

fn field() -> Vec<Shape> {
    let mut rng = StdRng::seed_from_u64(42);
    generate_shapes(&mut rng, TOTAL_HEIGHT)
}

#[test]
fn field_has_documented_count_and_ranges() {
    let shapes = field();
    assert_eq!(shapes.len(), SHAPE_COUNT);

    let mut squares = 0usize;
    for s in &shapes {
        if (s.width - s.height).abs() < f32::EPSILON {
            squares += 1;
            assert!(
                s.width >= 15.0 && s.width <= 115.0,
                "square size out of range: {}",
                s.width
            );
        } else {
            assert!(
                s.width >= 25.0 && s.width <= 145.0,
                "rect width out of range: {}",
                s.width
            );
            assert!(
                s.height >= 15.0 && s.height <= 95.0,
                "rect height out of range: {}",
                s.height
            );
        }
        assert!((0.0..=100.0).contains(&s.left_percent));
        assert!((0.0..=TOTAL_HEIGHT).contains(&s.top_px));
        assert!(SHAPE_PALETTE.contains(&s.color));
        assert!((0.0..=360.0).contains(&s.initial_rotation));
        assert!(s.base_opacity >= 0.6 && s.base_opacity <= 1.0);
        assert!(s.depth >= 0.5 && s.depth <= 2.5);
    }
    // both kinds show up in a 150-shape field
    assert!(squares > 0 && squares < shapes.len());
}

#[test]
fn transform_at_rest_keeps_initial_rotation() {
    let shapes = field();
    for (i, s) in shapes.iter().enumerate() {
        let t = shape_transform(s, i, 0.0);
        assert_eq!(t.translate_y, 0.0);
        assert_eq!(t.rotate_deg, s.initial_rotation);
        // cos of the index phase alone, scaled by drift and depth
        let expected_x = (i as f32 * 0.1).cos() * 50.0 * s.depth;
        assert!((t.translate_x - expected_x).abs() < 1e-3);
    }
}

#[test]
fn transform_scale_stays_in_band() {
    let shapes = field();
    for (i, s) in shapes.iter().enumerate() {
        for step in 0..50 {
            let normalized = step as f32 / 25.0 - 0.5; // includes out-of-range values
            let t = shape_transform(s, i, normalized);
            assert!(t.scale >= 0.4 - 1e-6 && t.scale <= 1.0 + 1e-6);
        }
    }
}

#[test]
fn transform_css_applies_translate_rotate_scale_in_order() {
    let s = &field()[0];
    let css = shape_transform(s, 0, 0.25).to_css();
    let translate = css.find("translate(").expect("translate missing");
    let rotate = css.find("rotate(").expect("rotate missing");
    let scale = css.find("scale(").expect("scale missing");
    assert!(translate < rotate && rotate < scale);
}

#[test]
fn opacity_peaks_mid_viewport() {
    assert!((shape_opacity(0.5) - 0.8).abs() < 1e-6);
    assert!(shape_opacity(0.5) > shape_opacity(0.1));
    assert!(shape_opacity(0.5) > shape_opacity(0.9));
}

#[test]
fn opacity_is_continuous_at_branch_boundaries() {
    // the ramp-in meets the sine branch at v = 0
    let below = shape_opacity(-1e-4);
    let at = shape_opacity(0.0);
    assert!((below - at).abs() < 1e-3, "jump at v=0: {below} vs {at}");
    // and the ramp-out meets it at v = 1
    let above = shape_opacity(1.0 + 1e-4);
    let at_one = shape_opacity(1.0);
    assert!(
        (above - at_one).abs() < 1e-3,
        "jump at v=1: {above} vs {at_one}"
    );
}

#[test]
fn opacity_floors_far_from_viewport() {
    assert_eq!(shape_opacity(-0.75), 0.1);
    assert_eq!(shape_opacity(2.0), 0.1);
    assert_eq!(shape_opacity(1.5), 0.1);
}

#[test]
fn opacity_matches_viewport_position_at_offset_zero() {
    let m = ScrollMetrics::new(800.0, 4000.0);
    for s in &field() {
        let v = m.viewport_position(s.top_px, 0.0);
        let o = shape_opacity(v);
        assert!(o > 0.0 && o <= 0.8 + 1e-6);
    }
}
