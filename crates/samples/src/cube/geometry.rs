//! Cube vertex data and its buffer layout.

use bytemuck::{Pod, Zeroable};

/// One cube corner as stored in the vertex buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 4],
    pub color: [f32; 4],
    pub uv: [f32; 2],
}

pub const CUBE_VERTEX_SIZE: u64 = std::mem::size_of::<CubeVertex>() as u64;
pub const CUBE_POSITION_OFFSET: u64 = std::mem::offset_of!(CubeVertex, position) as u64;
pub const CUBE_UV_OFFSET: u64 = std::mem::offset_of!(CubeVertex, uv) as u64;
pub const CUBE_VERTEX_COUNT: u32 = CUBE_VERTICES.len() as u32;

impl CubeVertex {
    // Color is not read by the shaders; it stays in the stride only.
    const ATTRS: [wgpu::VertexAttribute; 2] = [
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x4,
            offset: CUBE_POSITION_OFFSET,
            shader_location: 0,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: CUBE_UV_OFFSET,
            shader_location: 1,
        },
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: CUBE_VERTEX_SIZE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Color is the position remapped from `[-1, 1]` to `[0, 1]`.
const fn v(x: f32, y: f32, z: f32, u: f32, w: f32) -> CubeVertex {
    CubeVertex {
        position: [x, y, z, 1.0],
        color: [(x + 1.0) * 0.5, (y + 1.0) * 0.5, (z + 1.0) * 0.5, 1.0],
        uv: [u, w],
    }
}

/// Two counter-clockwise triangles per face, seen from outside.
pub const CUBE_VERTICES: [CubeVertex; 36] = [
    // -Y
    v(1.0, -1.0, 1.0, 0.0, 1.0),
    v(-1.0, -1.0, 1.0, 1.0, 1.0),
    v(-1.0, -1.0, -1.0, 1.0, 0.0),
    v(1.0, -1.0, -1.0, 0.0, 0.0),
    v(1.0, -1.0, 1.0, 0.0, 1.0),
    v(-1.0, -1.0, -1.0, 1.0, 0.0),
    // +X
    v(1.0, 1.0, 1.0, 0.0, 1.0),
    v(1.0, -1.0, 1.0, 1.0, 1.0),
    v(1.0, -1.0, -1.0, 1.0, 0.0),
    v(1.0, 1.0, -1.0, 0.0, 0.0),
    v(1.0, 1.0, 1.0, 0.0, 1.0),
    v(1.0, -1.0, -1.0, 1.0, 0.0),
    // +Y
    v(-1.0, 1.0, 1.0, 0.0, 1.0),
    v(1.0, 1.0, 1.0, 1.0, 1.0),
    v(1.0, 1.0, -1.0, 1.0, 0.0),
    v(-1.0, 1.0, -1.0, 0.0, 0.0),
    v(-1.0, 1.0, 1.0, 0.0, 1.0),
    v(1.0, 1.0, -1.0, 1.0, 0.0),
    // -X
    v(-1.0, -1.0, 1.0, 0.0, 1.0),
    v(-1.0, 1.0, 1.0, 1.0, 1.0),
    v(-1.0, 1.0, -1.0, 1.0, 0.0),
    v(-1.0, -1.0, -1.0, 0.0, 0.0),
    v(-1.0, -1.0, 1.0, 0.0, 1.0),
    v(-1.0, 1.0, -1.0, 1.0, 0.0),
    // +Z
    v(1.0, 1.0, 1.0, 0.0, 1.0),
    v(-1.0, 1.0, 1.0, 1.0, 1.0),
    v(-1.0, -1.0, 1.0, 1.0, 0.0),
    v(-1.0, -1.0, 1.0, 1.0, 0.0),
    v(1.0, -1.0, 1.0, 0.0, 0.0),
    v(1.0, 1.0, 1.0, 0.0, 1.0),
    // -Z
    v(1.0, -1.0, -1.0, 0.0, 1.0),
    v(-1.0, -1.0, -1.0, 1.0, 1.0),
    v(-1.0, 1.0, -1.0, 1.0, 0.0),
    v(1.0, 1.0, -1.0, 0.0, 0.0),
    v(1.0, -1.0, -1.0, 0.0, 1.0),
    v(-1.0, 1.0, -1.0, 1.0, 0.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn xyz(v: &CubeVertex) -> [f32; 3] {
        [v.position[0], v.position[1], v.position[2]]
    }

    fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn layout_matches_packed_floats() {
        assert_eq!(CUBE_VERTEX_SIZE, 4 * 10);
        assert_eq!(CUBE_POSITION_OFFSET, 0);
        assert_eq!(CUBE_UV_OFFSET, 4 * 8);
    }

    #[test]
    fn layout_feeds_position_and_uv() {
        let layout = CubeVertex::layout();
        assert_eq!(layout.array_stride, CUBE_VERTEX_SIZE);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x4);
        assert_eq!(layout.attributes[1].shader_location, 1);
        assert_eq!(layout.attributes[1].offset, CUBE_UV_OFFSET);
    }

    #[test]
    fn buffer_bytes_cover_every_vertex() {
        let bytes: &[u8] = bytemuck::cast_slice(&CUBE_VERTICES);
        assert_eq!(bytes.len() as u64, CUBE_VERTEX_SIZE * u64::from(CUBE_VERTEX_COUNT));
    }

    // ── data ──────────────────────────────────────────────────────────────

    #[test]
    fn thirty_six_vertices() {
        assert_eq!(CUBE_VERTEX_COUNT, 36);
    }

    #[test]
    fn positions_are_unit_cube_corners() {
        for v in &CUBE_VERTICES {
            assert_eq!(v.position[3], 1.0);
            for c in xyz(v) {
                assert!(c == 1.0 || c == -1.0);
            }
        }
    }

    #[test]
    fn color_follows_position() {
        for v in &CUBE_VERTICES {
            for i in 0..3 {
                assert_eq!(v.color[i], (v.position[i] + 1.0) * 0.5);
            }
            assert_eq!(v.color[3], 1.0);
        }
    }

    #[test]
    fn uvs_in_unit_square() {
        for v in &CUBE_VERTICES {
            assert!((0.0..=1.0).contains(&v.uv[0]));
            assert!((0.0..=1.0).contains(&v.uv[1]));
        }
    }

    #[test]
    fn triangles_face_outward() {
        // Back-face culling keeps only CCW triangles, so every normal must point away
        // from the cube center.
        for tri in CUBE_VERTICES.chunks_exact(3) {
            let (a, b, c) = (xyz(&tri[0]), xyz(&tri[1]), xyz(&tri[2]));
            let normal = cross(sub(b, a), sub(c, a));
            let centroid = [
                (a[0] + b[0] + c[0]) / 3.0,
                (a[1] + b[1] + c[1]) / 3.0,
                (a[2] + b[2] + c[2]) / 3.0,
            ];
            assert!(dot(normal, centroid) > 0.0, "inward triangle {tri:?}");
        }
    }

    #[test]
    fn each_face_lies_on_one_plane() {
        for face in CUBE_VERTICES.chunks_exact(6) {
            let shared_axis = (0..3).find(|&i| {
                face.iter().all(|v| v.position[i] == face[0].position[i])
            });
            assert!(shared_axis.is_some(), "face not planar: {face:?}");
        }
    }
}
