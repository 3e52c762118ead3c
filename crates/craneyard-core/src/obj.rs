//! Minimal Wavefront OBJ reader for the crane model asset.
//!
//! Reads `v`, `vn` and `f` records; faces may reference vertices as `v`,
//! `v//vn` or `v/vt/vn` (texture coordinates are skipped) and are
//! fan-triangulated. Negative indices are resolved relative to the end of
//! the respective list, as the format allows. Models without normals get
//! face-derived ones so lighting still works.

use crate::mesh::{Mesh, Vertex};
use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObjError {
    #[error("malformed `{kind}` record on line {line}")]
    Malformed { kind: &'static str, line: usize },
    #[error("face index {index} out of range on line {line}")]
    IndexOutOfRange { index: i64, line: usize },
    #[error("model contains no faces")]
    Empty,
}

pub fn parse_obj(text: &str) -> Result<Mesh, ObjError> {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut normals: Vec<Vec3> = Vec::new();
    let mut mesh = Mesh::default();

    for (line_idx, raw) in text.lines().enumerate() {
        let line = line_idx + 1;
        let record = raw.trim();
        if record.is_empty() || record.starts_with('#') {
            continue;
        }
        let mut fields = record.split_whitespace();
        match fields.next() {
            Some("v") => positions.push(parse_vec3(&mut fields, "v", line)?),
            Some("vn") => normals.push(parse_vec3(&mut fields, "vn", line)?),
            Some("f") => {
                let mut face: Vec<(usize, Option<usize>)> = Vec::new();
                for field in fields {
                    face.push(parse_face_vertex(
                        field,
                        positions.len(),
                        normals.len(),
                        line,
                    )?);
                }
                if face.len() < 3 {
                    return Err(ObjError::Malformed { kind: "f", line });
                }
                for k in 1..face.len() - 1 {
                    for &(pi, ni) in &[face[0], face[k], face[k + 1]] {
                        let normal = ni.map(|n| normals[n]).unwrap_or(Vec3::ZERO);
                        mesh.indices.push(mesh.vertices.len() as u32);
                        mesh.vertices.push(Vertex {
                            position: positions[pi].to_array(),
                            normal: normal.to_array(),
                        });
                    }
                }
            }
            // o/g/s/usemtl/mtllib/vt carry no geometry we keep
            _ => {}
        }
    }

    if mesh.indices.is_empty() {
        return Err(ObjError::Empty);
    }
    fill_missing_normals(&mut mesh);
    Ok(mesh)
}

fn parse_vec3<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    kind: &'static str,
    line: usize,
) -> Result<Vec3, ObjError> {
    let mut out = [0.0f32; 3];
    for component in &mut out {
        *component = fields
            .next()
            .and_then(|f| f.parse().ok())
            .ok_or(ObjError::Malformed { kind, line })?;
    }
    Ok(Vec3::from(out))
}

/// One `f` field: position index plus optional normal index, 1-based or
/// negative-relative in the file, returned 0-based.
fn parse_face_vertex(
    field: &str,
    position_count: usize,
    normal_count: usize,
    line: usize,
) -> Result<(usize, Option<usize>), ObjError> {
    let mut parts = field.split('/');
    let pos = parts
        .next()
        .filter(|p| !p.is_empty())
        .ok_or(ObjError::Malformed { kind: "f", line })?;
    let pi = resolve_index(pos, position_count, line)?;
    let _texcoord = parts.next();
    let ni = match parts.next() {
        Some(n) if !n.is_empty() => Some(resolve_index(n, normal_count, line)?),
        _ => None,
    };
    Ok((pi, ni))
}

fn resolve_index(field: &str, len: usize, line: usize) -> Result<usize, ObjError> {
    let raw: i64 = field
        .parse()
        .map_err(|_| ObjError::Malformed { kind: "f", line })?;
    let resolved = if raw > 0 {
        raw - 1
    } else {
        len as i64 + raw
    };
    if resolved < 0 || resolved >= len as i64 {
        return Err(ObjError::IndexOutOfRange { index: raw, line });
    }
    Ok(resolved as usize)
}

/// Give zero-normal vertices the flat normal of their triangle.
fn fill_missing_normals(mesh: &mut Mesh) {
    for tri in mesh.indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let pa = Vec3::from(mesh.vertices[a].position);
        let pb = Vec3::from(mesh.vertices[b].position);
        let pc = Vec3::from(mesh.vertices[c].position);
        let face = (pb - pa).cross(pc - pa).normalize_or_zero();
        for &i in &[a, b, c] {
            if Vec3::from(mesh.vertices[i].normal) == Vec3::ZERO {
                mesh.vertices[i].normal = face.to_array();
            }
        }
    }
}
