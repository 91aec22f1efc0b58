//! Cube Bounce - a bouncing-ball demo over shadow-mapped cubes
//!
//! Core modules:
//! - `sim`: Deterministic ball simulation (input, wall reflection, drag)
//! - `renderer`: WebGPU rendering pipeline (shadow pass + scene pass + sprite overlay)

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, ShadowQuality};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Ball sprite edge length in pixels
    pub const BALL_SIZE: f32 = 100.0;
    /// Ball spawn position (top-left corner of the sprite)
    pub const BALL_START_POS: Vec2 = Vec2::new(100.0, 100.0);
    /// Ball spawn velocity in pixels per frame
    pub const BALL_START_VEL: Vec2 = Vec2::new(10.0, 10.0);
    /// Per-frame velocity damping factor
    pub const BALL_DRAG: f32 = 0.99;
    /// Maximum ball speed in pixels per frame
    pub const BALL_MAX_SPEED: f32 = 25.0;
}

/// Clamp a vector's length to `max`, preserving direction
#[inline]
pub fn clamp_speed(v: Vec2, max: f32) -> Vec2 {
    v.clamp_length_max(max)
}
