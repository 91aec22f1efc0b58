//! WebGPU rendering module
//!
//! Three fixed pipelines: a depth-only shadow pass, the shadow-sampling cube
//! scene pass, and a 2D sprite overlay for the ball. All GPU state lives in
//! [`RenderState`], created once and owned by the caller.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod shadow;
pub mod vertex;

pub use error::RendererError;
pub use pipeline::RenderState;
