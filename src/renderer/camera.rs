//! Fixed camera and light transforms
//!
//! Everything here is computed once at setup and uploaded once; the scene has
//! no camera movement, and the projection aspect stays 16:9 regardless of the
//! canvas size.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Camera eye position, looking at the origin
const EYE: Vec3 = Vec3::new(0.6, 0.6, 0.6);
/// Vertical field of view in radians
const FOV_Y: f32 = std::f32::consts::FRAC_PI_3;
/// Fixed projection aspect ratio
const ASPECT: f32 = 16.0 / 9.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 10.0;

/// Light source position (the inverse light direction), looking at the origin
const LIGHT_POS: Vec3 = Vec3::new(0.5, 2.0, 2.0);
// Orthographic light volume, generous enough to cover both cubes
const LIGHT_EXTENT: f32 = 10.0;
const LIGHT_NEAR: f32 = -10.0;
const LIGHT_FAR: f32 = 20.0;

/// Uniform block for the scene pass
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct SceneUniform {
    pub view_proj: [[f32; 4]; 4],
    pub light_view_proj: [[f32; 4]; 4],
}

/// Uniform block for the shadow pass
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct LightUniform {
    pub light_view_proj: [[f32; 4]; 4],
}

/// The demo's fixed transforms
#[derive(Debug, Clone, Copy)]
pub struct CameraMatrices {
    pub view_proj: Mat4,
    pub light_view_proj: Mat4,
}

impl CameraMatrices {
    pub fn new() -> Self {
        let model = Mat4::IDENTITY;
        let view = Mat4::look_at_rh(EYE, Vec3::ZERO, Vec3::Y);
        let projection = Mat4::perspective_rh(FOV_Y, ASPECT, Z_NEAR, Z_FAR);
        let view_proj = projection * view * model;

        let light_view = Mat4::look_at_rh(LIGHT_POS, Vec3::ZERO, Vec3::Y);
        let light_projection = Mat4::orthographic_rh(
            -LIGHT_EXTENT,
            LIGHT_EXTENT,
            -LIGHT_EXTENT,
            LIGHT_EXTENT,
            LIGHT_NEAR,
            LIGHT_FAR,
        );
        let light_view_proj = light_projection * light_view;

        Self {
            view_proj,
            light_view_proj,
        }
    }

    pub fn scene_uniform(&self) -> SceneUniform {
        SceneUniform {
            view_proj: self.view_proj.to_cols_array_2d(),
            light_view_proj: self.light_view_proj.to_cols_array_2d(),
        }
    }

    pub fn light_uniform(&self) -> LightUniform {
        LightUniform {
            light_view_proj: self.light_view_proj.to_cols_array_2d(),
        }
    }
}

impl Default for CameraMatrices {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn in_clip_volume(clip: Vec4) -> bool {
        clip.w > 0.0
            && clip.x.abs() <= clip.w
            && clip.y.abs() <= clip.w
            && clip.z >= 0.0
            && clip.z <= clip.w
    }

    #[test]
    fn test_origin_is_visible_to_camera() {
        let matrices = CameraMatrices::new();
        let clip = matrices.view_proj * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(in_clip_volume(clip));
    }

    #[test]
    fn test_scene_fits_in_light_volume() {
        let matrices = CameraMatrices::new();
        // Corners of the floor cube and the caster slab
        for corner in [
            Vec3::new(-1.0, -2.0, -1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(-0.3, -0.5, -0.1),
            Vec3::new(0.3, 0.5, 0.1),
        ] {
            let clip = matrices.light_view_proj * corner.extend(1.0);
            assert!(in_clip_volume(clip), "corner {corner} outside light volume");
        }
    }

    #[test]
    fn test_uniform_layout_matches_mat4_pair() {
        assert_eq!(std::mem::size_of::<SceneUniform>(), 128);
        assert_eq!(std::mem::size_of::<LightUniform>(), 64);
    }
}
