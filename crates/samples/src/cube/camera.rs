//! Model-view-projection for the spinning cube.

use std::f32::consts::PI;

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Vertical field of view, 72°.
pub const FOV_Y: f32 = 2.0 * PI / 5.0;
pub const Z_NEAR: f32 = 1.0;
pub const Z_FAR: f32 = 100.0;

/// How far the cube sits in front of the camera.
pub const CAMERA_DISTANCE: f32 = 4.0;

/// Fixed tilt (radians) about the wobbling rotation axis.
pub const TILT: f32 = 1.0;

/// Right-handed perspective with wgpu's `[0, 1]` depth range.
pub fn projection(aspect: f32) -> Mat4 {
    Mat4::perspective_rh(FOV_Y, aspect, Z_NEAR, Z_FAR)
}

/// Pushes the cube back and tilts it about `(sin t, cos t, 0)`.
pub fn view(elapsed: f32) -> Mat4 {
    let axis = Vec3::new(elapsed.sin(), elapsed.cos(), 0.0).normalize();
    Mat4::from_translation(Vec3::new(0.0, 0.0, -CAMERA_DISTANCE)) * Mat4::from_axis_angle(axis, TILT)
}

pub fn model_view_projection(aspect: f32, elapsed: f32) -> Mat4 {
    projection(aspect) * view(elapsed)
}

/// Uniform block bound at `@group(0) @binding(0)`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct CubeUniforms {
    pub model_view_projection: [[f32; 4]; 4],
}

impl CubeUniforms {
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    pub fn new(mvp: Mat4) -> Self {
        Self {
            model_view_projection: mvp.to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    use crate::cube::geometry::CUBE_VERTICES;

    const TIMES: [f32; 6] = [0.0, 0.4, 1.3, 2.9, 7.5, 1000.0];

    fn to_ndc(mvp: Mat4, p: Vec4) -> Vec3 {
        let clip = mvp * p;
        assert!(clip.w > 0.0, "vertex behind camera: {clip:?}");
        clip.truncate() / clip.w
    }

    #[test]
    fn uniforms_hold_one_mat4() {
        assert_eq!(CubeUniforms::SIZE, 4 * 16);
    }

    #[test]
    fn uniforms_are_column_major() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let u = CubeUniforms::new(m);
        assert_eq!(u.model_view_projection[3], [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn cube_center_projects_to_screen_center() {
        for t in TIMES {
            let ndc = to_ndc(model_view_projection(16.0 / 9.0, t), Vec4::new(0.0, 0.0, 0.0, 1.0));
            assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5, "t={t}: {ndc:?}");
            assert!(ndc.z > 0.0 && ndc.z < 1.0);
        }
    }

    #[test]
    fn every_vertex_within_depth_range() {
        for t in TIMES {
            let mvp = model_view_projection(1.0, t);
            for v in &CUBE_VERTICES {
                let ndc = to_ndc(mvp, Vec4::from_array(v.position));
                assert!(ndc.z > 0.0 && ndc.z < 1.0, "t={t}: {ndc:?}");
            }
        }
    }

    #[test]
    fn rotation_keeps_distance_to_camera() {
        for t in TIMES {
            let eye_space = view(t) * Vec4::new(1.0, 1.0, 1.0, 1.0);
            let offset = eye_space.truncate() - Vec3::new(0.0, 0.0, -CAMERA_DISTANCE);
            assert!((offset.length() - 3.0_f32.sqrt()).abs() < 1e-4);
        }
    }

    #[test]
    fn view_changes_over_time() {
        let a = view(0.0);
        let b = view(1.0);
        assert!(!a.abs_diff_eq(b, 1e-3));
    }

    #[test]
    fn wider_aspect_narrows_x() {
        let p = Vec4::new(1.0, 0.0, -4.0, 1.0);
        let square = projection(1.0) * p;
        let wide = projection(2.0) * p;
        assert!((wide.x / wide.w) < (square.x / square.w));
    }
}
