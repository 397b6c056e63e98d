use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// World-space spot where the cube template is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placement {
    pub offset: Vec3,
    pub scale: Vec3,
}

impl Placement {
    pub fn at(offset: Vec3) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    /// Model matrix: translate, then scale.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.offset) * Mat4::from_scale(self.scale)
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            offset: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

/// Circular motion of the light on the XZ plane around its configured position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightOrbit {
    pub radius: f32,
    /// Angular speed in radians per second.
    pub speed: f32,
}

/// Point light with Phong colour terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Light {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub orbit: Option<LightOrbit>,
}

impl Light {
    /// Light position after `elapsed` seconds of orbiting.
    pub fn position_at(&self, elapsed: f32) -> Vec3 {
        match self.orbit {
            Some(orbit) => {
                let angle = elapsed * orbit.speed;
                self.position + Vec3::new(angle.cos(), 0.0, angle.sin()) * orbit.radius
            }
            None => self.position,
        }
    }
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::new(1.2, 1.0, 2.0),
            ambient: Vec3::splat(0.2),
            diffuse: Vec3::splat(0.5),
            specular: Vec3::ONE,
            orbit: None,
        }
    }
}

/// Surface response of the cube.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    pub shininess: f32,
    /// Image used for the ambient and diffuse terms. Plain white when absent.
    pub diffuse_texture: Option<PathBuf>,
    /// Image used for the specular term. Plain white when absent.
    pub specular_texture: Option<PathBuf>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            shininess: 32.0,
            diffuse_texture: None,
            specular_texture: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_default_is_identity() {
        let p = Placement::default();
        assert_eq!(p.model_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn placement_translates_after_scaling() {
        let p = Placement {
            offset: Vec3::new(1.0, 2.0, 3.0),
            scale: Vec3::splat(2.0),
        };
        let corner = p.model_matrix().transform_point3(Vec3::splat(0.5));
        assert_eq!(corner, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn static_light_ignores_time() {
        let light = Light::default();
        assert_eq!(light.position_at(10.0), light.position);
    }

    #[test]
    fn orbiting_light_circles_its_anchor() {
        let light = Light {
            position: Vec3::new(0.0, 2.0, 0.0),
            orbit: Some(LightOrbit {
                radius: 3.0,
                speed: std::f32::consts::FRAC_PI_2,
            }),
            ..Light::default()
        };
        let start = light.position_at(0.0);
        assert!((start - Vec3::new(3.0, 2.0, 0.0)).length() < 1e-5);
        let quarter = light.position_at(1.0);
        assert!((quarter - Vec3::new(0.0, 2.0, 3.0)).length() < 1e-5);
    }
}
