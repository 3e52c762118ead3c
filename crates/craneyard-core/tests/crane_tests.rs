// Host-side tests for crane poses and the primitive fallback build.

use craneyard_core::{
    fallback_pose, hex_rgb, rig_pose, FallbackParts, HOOK_COLOR, ROPE_COLOR, SLOT_COLORS,
    SLOT_COUNT,
};

#[test]
fn fallback_exposes_the_five_named_parts() {
    for slot in 0..SLOT_COUNT {
        let parts = FallbackParts::build(slot);
        let body = hex_rgb(SLOT_COLORS[slot]);
        for (part, name) in [
            (&parts.tower, "tower"),
            (&parts.arm, "arm"),
            (&parts.hook, "hook"),
            (&parts.rope, "rope"),
            (&parts.counterweight, "counterweight"),
        ] {
            assert!(
                !part.mesh.vertices.is_empty() && !part.mesh.indices.is_empty(),
                "{name} has no geometry"
            );
            assert_eq!(part.mesh.indices.len() % 3, 0, "{name} is not a tri list");
        }
        assert_eq!(parts.tower.color, body);
        assert_eq!(parts.arm.color, body);
        assert_eq!(parts.counterweight.color, body);
        assert_eq!(parts.hook.color, hex_rgb(HOOK_COLOR));
        assert_eq!(parts.rope.color, hex_rgb(ROPE_COLOR));
    }
}

#[test]
fn fallback_pose_stays_in_band_and_matrices_stay_finite() {
    for slot in 0..SLOT_COUNT {
        for step in 0..2000 {
            let t = step as f32 * 0.37;
            let pose = fallback_pose(t, slot);
            assert!(pose.arm_yaw.abs() <= 0.3 + 1e-5);
            assert!(pose.hook_y >= 3.1 - 1e-5 && pose.hook_y <= 3.9 + 1e-5);
            assert!(pose.rope_scale_y >= 0.6 - 1e-5 && pose.rope_scale_y <= 1.4 + 1e-5);
            assert!(pose.bob.abs() <= 0.15 + 1e-5);
            for m in FallbackParts::model_matrices(&pose) {
                assert!(
                    m.to_cols_array().iter().all(|v| v.is_finite()),
                    "non-finite matrix at t={t} slot={slot}"
                );
            }
        }
    }
}

#[test]
fn fallback_matrices_place_parts_at_their_mounts() {
    let pose = fallback_pose(0.0, 0);
    let m = FallbackParts::model_matrices(&pose);
    // slot 0 at t=0 has no phase offset: bob = 0, hook at rest
    assert_eq!(m[0].w_axis.truncate().to_array(), [0.0, 2.0, 0.0]);
    assert_eq!(m[1].w_axis.truncate().to_array(), [2.0, 4.5, 0.0]);
    assert_eq!(m[2].w_axis.truncate().to_array(), [4.0, 3.5, 0.0]);
    assert_eq!(m[3].w_axis.truncate().to_array(), [4.0, 4.0, 0.0]);
    assert_eq!(m[4].w_axis.truncate().to_array(), [-0.5, 4.5, 0.0]);
}

#[test]
fn rig_pose_stays_in_band() {
    for slot in 0..SLOT_COUNT {
        for step in 0..2000 {
            let t = step as f32 * 0.37;
            let pose = rig_pose(t, slot);
            assert!(pose.height >= 1.8 - 1e-5 && pose.height <= 2.2 + 1e-5);
            assert!(pose.scale >= 0.25 * 0.95 - 1e-5 && pose.scale <= 0.25 * 1.05 + 1e-5);
            assert!(pose.model_matrix().to_cols_array().iter().all(|v| v.is_finite()));
        }
    }
}

#[test]
fn rig_yaw_advances_with_time() {
    let mut prev = rig_pose(0.0, 0).yaw;
    for step in 1..100 {
        let yaw = rig_pose(step as f32 * 0.1, 0).yaw;
        assert!(yaw > prev, "yaw not advancing at step {step}");
        prev = yaw;
    }
}

#[test]
fn slots_are_desynchronized() {
    let t = 1.0;
    let a = rig_pose(t, 0);
    let b = rig_pose(t, 1);
    assert!((a.height - b.height).abs() > 1e-3);
    let fa = fallback_pose(t, 0);
    let fb = fallback_pose(t, 1);
    assert!((fa.hook_y - fb.hook_y).abs() > 1e-3);
}
