//! Renderer setup errors
//!
//! Setup failures are surfaced to the caller instead of being logged and
//! ignored; the entry point decides whether to abort.

use std::fmt;

#[derive(Debug)]
pub enum RendererError {
    /// The adapter refused to hand out a device
    Device(wgpu::RequestDeviceError),
    /// Shader or pipeline validation failed for the named pipeline
    Pipeline { label: &'static str, log: String },
}

impl fmt::Display for RendererError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RendererError::Device(err) => write!(f, "device request failed: {err}"),
            RendererError::Pipeline { label, log } => {
                write!(f, "pipeline '{label}' failed validation: {log}")
            }
        }
    }
}

impl std::error::Error for RendererError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RendererError::Device(err) => Some(err),
            RendererError::Pipeline { .. } => None,
        }
    }
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(err: wgpu::RequestDeviceError) -> Self {
        RendererError::Device(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_error_names_the_pipeline() {
        let err = RendererError::Pipeline {
            label: "scene",
            log: "expression does not type-check".into(),
        };
        let text = err.to_string();
        assert!(text.contains("scene"));
        assert!(text.contains("type-check"));
    }
}
