//! Shared types and utilities for the playground.
//!
//! # Invariants
//! - Configuration is validated once at load; downstream crates trust it.
//! - The placement list only positions copies of the single cube template.

pub mod clock;
pub mod config;
pub mod types;

pub use clock::FrameClock;
pub use config::{CameraConfig, ConfigError, PlaygroundConfig, WindowConfig};
pub use types::{Light, LightOrbit, Material, Placement};
