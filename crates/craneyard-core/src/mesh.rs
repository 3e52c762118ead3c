//! Simple procedural mesh construction for the fallback crane parts.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use std::f32::consts::TAU;

/// Vertex layout shared by every crane mesh, uploaded as-is.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Triangle-list mesh (CCW winding).
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    fn push_vertex(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.to_array(),
        });
        index
    }

    fn push_quad(&mut self, a: Vec3, b: Vec3, c: Vec3, d: Vec3, normal: Vec3) {
        let ia = self.push_vertex(a, normal);
        let ib = self.push_vertex(b, normal);
        let ic = self.push_vertex(c, normal);
        let id = self.push_vertex(d, normal);
        self.indices.extend_from_slice(&[ia, ib, ic, ia, ic, id]);
    }

    /// Axis-aligned box centered on the origin, flat face normals.
    pub fn box_mesh(width: f32, height: f32, depth: f32) -> Self {
        let (hx, hy, hz) = (width / 2.0, height / 2.0, depth / 2.0);
        let mut mesh = Mesh::default();
        // +X
        mesh.push_quad(
            Vec3::new(hx, -hy, hz),
            Vec3::new(hx, -hy, -hz),
            Vec3::new(hx, hy, -hz),
            Vec3::new(hx, hy, hz),
            Vec3::X,
        );
        // -X
        mesh.push_quad(
            Vec3::new(-hx, -hy, -hz),
            Vec3::new(-hx, -hy, hz),
            Vec3::new(-hx, hy, hz),
            Vec3::new(-hx, hy, -hz),
            Vec3::NEG_X,
        );
        // +Y
        mesh.push_quad(
            Vec3::new(-hx, hy, hz),
            Vec3::new(hx, hy, hz),
            Vec3::new(hx, hy, -hz),
            Vec3::new(-hx, hy, -hz),
            Vec3::Y,
        );
        // -Y
        mesh.push_quad(
            Vec3::new(-hx, -hy, -hz),
            Vec3::new(hx, -hy, -hz),
            Vec3::new(hx, -hy, hz),
            Vec3::new(-hx, -hy, hz),
            Vec3::NEG_Y,
        );
        // +Z
        mesh.push_quad(
            Vec3::new(-hx, -hy, hz),
            Vec3::new(hx, -hy, hz),
            Vec3::new(hx, hy, hz),
            Vec3::new(-hx, hy, hz),
            Vec3::Z,
        );
        // -Z
        mesh.push_quad(
            Vec3::new(hx, -hy, -hz),
            Vec3::new(-hx, -hy, -hz),
            Vec3::new(-hx, hy, -hz),
            Vec3::new(hx, hy, -hz),
            Vec3::NEG_Z,
        );
        mesh
    }

    /// Cone with the apex at +height/2 and a capped base circle, flat side
    /// normals per segment.
    pub fn cone(radius: f32, height: f32, segments: u32) -> Self {
        let segments = segments.max(3);
        let half = height / 2.0;
        let apex = Vec3::new(0.0, half, 0.0);
        let mut mesh = Mesh::default();

        for seg in 0..segments {
            let t0 = seg as f32 / segments as f32 * TAU;
            let t1 = (seg + 1) as f32 / segments as f32 * TAU;
            let p0 = Vec3::new(radius * t0.cos(), -half, radius * t0.sin());
            let p1 = Vec3::new(radius * t1.cos(), -half, radius * t1.sin());
            let normal = (p1 - p0).cross(apex - p0).normalize();
            let ia = mesh.push_vertex(p0, normal);
            let ib = mesh.push_vertex(apex, normal);
            let ic = mesh.push_vertex(p1, normal);
            mesh.indices.extend_from_slice(&[ia, ib, ic]);
        }

        let center = mesh.push_vertex(Vec3::new(0.0, -half, 0.0), Vec3::NEG_Y);
        let rim_start = mesh.vertices.len() as u32;
        for seg in 0..=segments {
            let t = seg as f32 / segments as f32 * TAU;
            mesh.push_vertex(
                Vec3::new(radius * t.cos(), -half, radius * t.sin()),
                Vec3::NEG_Y,
            );
        }
        for seg in 0..segments {
            mesh.indices
                .extend_from_slice(&[center, rim_start + seg, rim_start + seg + 1]);
        }
        mesh
    }

    /// Cylinder centered on the origin with smooth side normals and capped
    /// ends.
    pub fn cylinder(radius: f32, height: f32, segments: u32) -> Self {
        let segments = segments.max(3);
        let half = height / 2.0;
        let mut mesh = Mesh::default();

        let side_start = mesh.vertices.len() as u32;
        for seg in 0..=segments {
            let t = seg as f32 / segments as f32 * TAU;
            let normal = Vec3::new(t.cos(), 0.0, t.sin());
            let rim = Vec3::new(radius * t.cos(), 0.0, radius * t.sin());
            mesh.push_vertex(rim + Vec3::new(0.0, -half, 0.0), normal);
            mesh.push_vertex(rim + Vec3::new(0.0, half, 0.0), normal);
        }
        for seg in 0..segments {
            let base = side_start + seg * 2;
            mesh.indices
                .extend_from_slice(&[base, base + 2, base + 3, base, base + 3, base + 1]);
        }

        for (y, normal) in [(-half, Vec3::NEG_Y), (half, Vec3::Y)] {
            let center = mesh.push_vertex(Vec3::new(0.0, y, 0.0), normal);
            let rim_start = mesh.vertices.len() as u32;
            for seg in 0..=segments {
                let t = seg as f32 / segments as f32 * TAU;
                mesh.push_vertex(Vec3::new(radius * t.cos(), y, radius * t.sin()), normal);
            }
            for seg in 0..segments {
                if normal.y > 0.0 {
                    mesh.indices
                        .extend_from_slice(&[center, rim_start + seg + 1, rim_start + seg]);
                } else {
                    mesh.indices
                        .extend_from_slice(&[center, rim_start + seg, rim_start + seg + 1]);
                }
            }
        }
        mesh
    }
}
