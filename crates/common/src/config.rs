//! YAML configuration for the playground.
//!
//! Every section is optional; anything left out falls back to the built-in
//! scene (one cube at the origin, camera at `(0, 1, 3)` looking down -Z).

use crate::types::{Light, Material, Placement};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Playground".into(),
            width: 1920,
            height: 1080,
            vsync: true,
        }
    }
}

/// Starting pose and tuning of the fly camera. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub speed: f32,
    pub sensitivity: f32,
    pub zoom: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.0, 3.0),
            yaw: -90.0,
            pitch: 0.0,
            speed: 2.5,
            sensitivity: 0.1,
            zoom: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub light: Light,
    pub material: Material,
    pub placements: Vec<Placement>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            light: Light::default(),
            material: Material::default(),
            placements: vec![Placement::default()],
        }
    }
}

impl PlaygroundConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file. Relative texture paths are resolved against the
    /// file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml_str(&text)?;
        if let Some(base) = path.parent() {
            config.material.diffuse_texture = config
                .material
                .diffuse_texture
                .map(|p| base.join(p));
            config.material.specular_texture = config
                .material
                .specular_texture
                .map(|p| base.join(p));
        }
        tracing::debug!(
            "loaded config from {} ({} placements)",
            path.display(),
            config.placements.len()
        );
        Ok(config)
    }

    /// Load from `path` if given, otherwise use the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        self.check_finite()?;
        let cam = &self.camera;
        if !(cam.near > 0.0 && cam.near < cam.far) {
            return Err(ConfigError::Invalid(format!(
                "camera planes must satisfy 0 < near < far, got near={} far={}",
                cam.near, cam.far
            )));
        }
        if !(1.0..=45.0).contains(&cam.zoom) {
            return Err(ConfigError::Invalid(format!(
                "camera zoom must be within [1, 45] degrees, got {}",
                cam.zoom
            )));
        }
        if cam.speed < 0.0 || cam.sensitivity < 0.0 {
            return Err(ConfigError::Invalid(
                "camera speed and sensitivity must not be negative".into(),
            ));
        }
        if self.material.shininess <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "material shininess must be positive, got {}",
                self.material.shininess
            )));
        }
        // Zero collapses the normal matrix; negative mirrors the cube and
        // flips its winding under back-face culling.
        if let Some((i, p)) = self
            .placements
            .iter()
            .enumerate()
            .find(|(_, p)| p.scale.cmple(Vec3::ZERO).any())
        {
            return Err(ConfigError::Invalid(format!(
                "placement {i} scale must be positive on every axis, got {}",
                p.scale
            )));
        }
        Ok(())
    }

    /// Reject NaN and infinite values anywhere they reach the camera or shader.
    fn check_finite(&self) -> Result<(), ConfigError> {
        let cam = &self.camera;
        let light = &self.light;
        let scalars = [
            ("camera.yaw", cam.yaw),
            ("camera.pitch", cam.pitch),
            ("camera.speed", cam.speed),
            ("camera.sensitivity", cam.sensitivity),
            ("camera.zoom", cam.zoom),
            ("camera.near", cam.near),
            ("camera.far", cam.far),
            ("material.shininess", self.material.shininess),
        ];
        let orbit = light
            .orbit
            .map(|o| [("light.orbit.radius", o.radius), ("light.orbit.speed", o.speed)]);
        for (name, value) in scalars.into_iter().chain(orbit.into_iter().flatten()) {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        let vectors = [
            ("camera.position".to_string(), cam.position),
            ("light.position".to_string(), light.position),
            ("light.ambient".to_string(), light.ambient),
            ("light.diffuse".to_string(), light.diffuse),
            ("light.specular".to_string(), light.specular),
        ];
        let placements = self.placements.iter().enumerate().flat_map(|(i, p)| {
            [
                (format!("placement {i} offset"), p.offset),
                (format!("placement {i} scale"), p.scale),
            ]
        });
        for (name, value) in vectors.into_iter().chain(placements) {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}
