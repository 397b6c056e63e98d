//! wgpu render backend for the playground.
//!
//! Uploads the cube template once and draws it instanced at every placement
//! with Phong lighting sampled from diffuse and specular maps.
//!
//! # Invariants
//! - The vertex buffer is written once at creation and never again.
//! - Uniforms are rewritten every frame from `FrameUniforms`; nothing is cached across frames.

mod gpu;
mod shaders;
mod texture;

pub use gpu::{GpuError, WgpuRenderer, request_device};
pub use texture::GpuTexture;
