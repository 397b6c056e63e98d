//! Rendering core shared by the GPU backend and headless tooling.
//!
//! # Invariants
//! - The cube template is immutable; placements only transform copies of it.
//! - Uniforms derive from camera, light and placements; nothing here touches the GPU.

mod camera;
mod lighting;
mod mesh;
mod renderer;

pub use camera::Camera;
pub use lighting::{FrameInput, FrameUniforms, InstanceTransform, aspect_ratio, update_lighting};
pub use mesh::{CUBE_VERTEX_COUNT, CUBE_VERTICES, MeshVertex, VERTEX_STRIDE, cube_vertices};
pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "playground-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
