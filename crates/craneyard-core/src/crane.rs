//! Crane animation and the primitive fallback build.
//!
//! Poses are pure functions of elapsed seconds and the slot index; the slot
//! index shifts every oscillator's phase so the five cranes never move in
//! lockstep.

use crate::constants::*;
use crate::mesh::Mesh;
use glam::{Mat4, Vec3};
use std::f32::consts::PI;

/// Frame pose for a slot showing the loaded model as a single object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigPose {
    pub yaw: f32,
    pub height: f32,
    pub scale: f32,
}

pub fn rig_pose(t: f32, slot: usize) -> RigPose {
    let phase = slot as f32;
    RigPose {
        yaw: t * RIG_SPIN_RATE,
        height: RIG_BASE_Y + (t + phase).sin() * RIG_BOB_AMPLITUDE,
        scale: RIG_BASE_SCALE * (1.0 + (t * RIG_PULSE_RATE + phase).sin() * RIG_PULSE_AMPLITUDE),
    }
}

impl RigPose {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.height, 0.0))
            * Mat4::from_rotation_y(self.yaw)
            * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

/// Frame pose for the primitive-built fallback. The winch oscillator moves
/// the hook down as the rope stretches and back up as it shortens; the
/// slower bob is shared by tower, arm and counterweight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallbackPose {
    pub arm_yaw: f32,
    pub hook_y: f32,
    pub rope_scale_y: f32,
    pub bob: f32,
}

pub fn fallback_pose(t: f32, slot: usize) -> FallbackPose {
    let phase = slot as f32;
    let winch = (t * WINCH_RATE + phase).sin();
    FallbackPose {
        arm_yaw: (t + phase).sin() * ARM_SWING_AMPLITUDE,
        hook_y: HOOK_BASE_Y + winch * HOOK_TRAVEL,
        rope_scale_y: 1.0 - winch * HOOK_TRAVEL,
        bob: (t + phase).sin() * PART_BOB_AMPLITUDE,
    }
}

/// One primitive part: its mesh and material color.
#[derive(Clone, Debug)]
pub struct CranePart {
    pub mesh: Mesh,
    pub color: [f32; 3],
}

/// The named parts of the primitive crane. Matrix order below matches the
/// field order here.
#[derive(Clone, Debug)]
pub struct FallbackParts {
    pub tower: CranePart,
    pub arm: CranePart,
    pub hook: CranePart,
    pub rope: CranePart,
    pub counterweight: CranePart,
}

impl FallbackParts {
    /// Build the composite for one slot. Infallible: primitive construction
    /// cannot fail, so a slot whose model load breaks always ends up
    /// populated.
    pub fn build(slot: usize) -> Self {
        let body = hex_rgb(SLOT_COLORS[slot % SLOT_COLORS.len()]);
        Self {
            tower: CranePart {
                mesh: Mesh::box_mesh(0.4, 5.0, 0.4),
                color: body,
            },
            arm: CranePart {
                mesh: Mesh::box_mesh(4.0, 0.25, 0.25),
                color: body,
            },
            hook: CranePart {
                mesh: Mesh::cone(0.15, 0.4, 8),
                color: hex_rgb(HOOK_COLOR),
            },
            rope: CranePart {
                mesh: Mesh::cylinder(0.03, 2.0, 12),
                color: hex_rgb(ROPE_COLOR),
            },
            counterweight: CranePart {
                mesh: Mesh::box_mesh(1.0, 1.0, 1.0),
                color: body,
            },
        }
    }

    /// Model matrices for (tower, arm, hook, rope, counterweight). The arm
    /// yaws about its own mount point; the hook hangs point-down; the rope
    /// stretches about its center.
    pub fn model_matrices(pose: &FallbackPose) -> [Mat4; 5] {
        [
            Mat4::from_translation(Vec3::new(0.0, 2.0 + pose.bob, 0.0)),
            Mat4::from_translation(Vec3::new(2.0, 4.5 + pose.bob, 0.0))
                * Mat4::from_rotation_y(pose.arm_yaw),
            Mat4::from_translation(Vec3::new(4.0, pose.hook_y, 0.0)) * Mat4::from_rotation_x(PI),
            Mat4::from_translation(Vec3::new(4.0, 4.0, 0.0))
                * Mat4::from_scale(Vec3::new(1.0, pose.rope_scale_y, 1.0)),
            Mat4::from_translation(Vec3::new(-0.5, 4.5 + pose.bob, 0.0)),
        ]
    }
}
