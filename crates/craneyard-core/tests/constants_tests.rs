// Host-side tests for palette and tuning constants.

use craneyard_core::*;

#[test]
fn shape_palette_is_well_formed() {
    assert_eq!(SHAPE_PALETTE.len(), 16);
    for color in SHAPE_PALETTE {
        assert!(color.starts_with('#') && color.len() == 7, "bad color {color}");
        assert!(
            color[1..].chars().all(|c| c.is_ascii_hexdigit()),
            "bad color {color}"
        );
    }
}

#[test]
fn slot_colors_are_distinct() {
    assert_eq!(SLOT_COLORS.len(), SLOT_COUNT);
    for (i, a) in SLOT_COLORS.iter().enumerate() {
        for b in &SLOT_COLORS[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn hex_rgb_expands_channels() {
    assert_eq!(hex_rgb(0xFFFF00), [1.0, 1.0, 0.0]);
    assert_eq!(hex_rgb(0x000000), [0.0, 0.0, 0.0]);
    let [r, g, b] = hex_rgb(0x448AFF);
    assert!((r - 0x44 as f32 / 255.0).abs() < 1e-6);
    assert!((g - 0x8A as f32 / 255.0).abs() < 1e-6);
    assert!((b - 1.0).abs() < 1e-6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shape_ranges_are_consistent() {
    // a square must fit inside the documented 15..115 band
    assert!(SQUARE_SIZE_MIN > 0.0 && SQUARE_SIZE_MIN + SQUARE_SIZE_SPAN == 115.0);
    assert!(RECT_WIDTH_MIN + RECT_WIDTH_SPAN == 145.0);
    assert!(RECT_HEIGHT_MIN + RECT_HEIGHT_SPAN == 95.0);
    // opacity baseline stays a valid alpha
    assert!(SHAPE_OPACITY_MIN + SHAPE_OPACITY_SPAN <= 1.0);
    // the scale band never collapses a shape
    assert!(SCALE_BASE - SCALE_SPAN > 0.0);
    // parallax depth spans the documented 0.5..2.5
    assert!(SHAPE_DEPTH_MIN + SHAPE_DEPTH_SPAN == 2.5);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn crane_motion_rates_are_positive_and_bounded() {
    assert!(RIG_SPIN_RATE > 0.0);
    assert!(RIG_BOB_AMPLITUDE > 0.0 && RIG_BOB_AMPLITUDE < RIG_BASE_Y);
    assert!(RIG_PULSE_AMPLITUDE > 0.0 && RIG_PULSE_AMPLITUDE < 1.0);
    assert!(HOOK_TRAVEL > 0.0 && HOOK_TRAVEL < 1.0);
    assert!(HOOK_BASE_Y - HOOK_TRAVEL > 0.0);
    assert!(PART_BOB_AMPLITUDE < RIG_BOB_AMPLITUDE + 1e-6);
    assert!(EMISSIVE_FACTOR > 0.0 && EMISSIVE_FACTOR < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hint_timings_make_sense() {
    assert!(HINT_IDLE_FADE_MS > 0);
    assert!(HINT_STARTUP_FADE_MS > HINT_IDLE_FADE_MS);
    assert!(HINT_FADE_PERCENT > 0 && HINT_FADE_PERCENT < 100);
}
