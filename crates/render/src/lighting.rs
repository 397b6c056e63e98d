use crate::camera::Camera;
use glam::{Mat3, Mat4, Vec3};
use playground_common::{Light, Material, Placement};

/// Everything the lighting update reads for one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub camera: &'a Camera,
    pub light: &'a Light,
    pub material: &'a Material,
    pub placements: &'a [Placement],
    pub aspect: f32,
    /// Seconds since start, drives the light orbit.
    pub elapsed: f32,
}

/// Per-placement transforms for the vertex stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceTransform {
    pub model: Mat4,
    /// Inverse-transpose of the model's upper 3x3, for normals.
    pub normal: Mat3,
}

impl InstanceTransform {
    pub fn from_placement(placement: &Placement) -> Self {
        let model = placement.model_matrix();
        Self {
            model,
            normal: Mat3::from_mat4(model).inverse().transpose(),
        }
    }
}

/// Shader inputs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameUniforms {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_position: Vec3,
    pub light_position: Vec3,
    pub light_ambient: Vec3,
    pub light_diffuse: Vec3,
    pub light_specular: Vec3,
    pub shininess: f32,
    pub instances: Vec<InstanceTransform>,
}

/// Width over height. A zero height counts as one pixel so a minimised
/// window never yields an infinite aspect.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

/// Compute the matrices and light parameters pushed to the shader each frame.
pub fn update_lighting(input: &FrameInput<'_>) -> FrameUniforms {
    let camera = input.camera;
    FrameUniforms {
        view: camera.view_matrix(),
        projection: camera.projection_matrix(input.aspect),
        view_position: camera.position,
        light_position: input.light.position_at(input.elapsed),
        light_ambient: input.light.ambient,
        light_diffuse: input.light.diffuse,
        light_specular: input.light.specular,
        shininess: input.material.shininess,
        instances: input
            .placements
            .iter()
            .map(InstanceTransform::from_placement)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playground_common::LightOrbit;

    fn frame(camera: &Camera, light: &Light, placements: &[Placement], elapsed: f32) -> FrameUniforms {
        let material = Material::default();
        update_lighting(&FrameInput {
            camera,
            light,
            material: &material,
            placements,
            aspect: 16.0 / 9.0,
            elapsed,
        })
    }

    #[test]
    fn matrices_follow_camera() {
        let camera = Camera::default();
        let uniforms = frame(&camera, &Light::default(), &[Placement::default()], 0.0);
        assert_eq!(uniforms.view, camera.view_matrix());
        assert_eq!(uniforms.projection, camera.projection_matrix(16.0 / 9.0));
        assert_eq!(uniforms.view_position, camera.position);
        assert_eq!(uniforms.shininess, 32.0);
    }

    #[test]
    fn light_parameters_pass_through() {
        let light = Light {
            ambient: Vec3::new(0.1, 0.2, 0.3),
            diffuse: Vec3::new(0.4, 0.5, 0.6),
            specular: Vec3::new(0.7, 0.8, 0.9),
            ..Light::default()
        };
        let uniforms = frame(&Camera::default(), &light, &[], 3.0);
        assert_eq!(uniforms.light_position, light.position);
        assert_eq!(uniforms.light_ambient, light.ambient);
        assert_eq!(uniforms.light_diffuse, light.diffuse);
        assert_eq!(uniforms.light_specular, light.specular);
        assert!(uniforms.instances.is_empty());
    }

    #[test]
    fn orbiting_light_moves_with_time() {
        let light = Light {
            orbit: Some(LightOrbit {
                radius: 2.0,
                speed: 1.0,
            }),
            ..Light::default()
        };
        let a = frame(&Camera::default(), &light, &[], 0.0);
        let b = frame(&Camera::default(), &light, &[], 1.0);
        assert_ne!(a.light_position, b.light_position);
        assert!(((a.light_position - light.position).length() - 2.0).abs() < 1e-5);
        assert!(((b.light_position - light.position).length() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn one_instance_per_placement() {
        let placements = [
            Placement::default(),
            Placement::at(Vec3::new(2.0, 0.0, -1.0)),
        ];
        let uniforms = frame(&Camera::default(), &Light::default(), &placements, 0.0);
        assert_eq!(uniforms.instances.len(), 2);
        assert_eq!(uniforms.instances[0].model, Mat4::IDENTITY);
        assert_eq!(
            uniforms.instances[1].model.w_axis.truncate(),
            Vec3::new(2.0, 0.0, -1.0)
        );
        // Pure translation leaves normals untouched.
        assert_eq!(uniforms.instances[1].normal, Mat3::IDENTITY);
    }

    #[test]
    fn normal_matrix_undoes_non_uniform_scale() {
        let t = InstanceTransform::from_placement(&Placement {
            offset: Vec3::ZERO,
            scale: Vec3::new(2.0, 1.0, 1.0),
        });
        let n = (t.normal * Vec3::new(1.0, 1.0, 0.0)).normalize();
        // Stretching X squashes the X component of normals.
        assert!(n.x < n.y);
    }

    #[test]
    fn aspect_handles_zero_height() {
        assert_eq!(aspect_ratio(1920, 1080), 1920.0 / 1080.0);
        assert_eq!(aspect_ratio(800, 0), 800.0);
        assert_eq!(aspect_ratio(0, 0), 1.0);
    }
}
