use crate::lighting::FrameUniforms;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer consumes one frame's uniforms and produces output; it never
/// feeds back into the camera or the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, frame: &FrameUniforms) -> Self::Output;
}

/// Produces a human-readable dump of a frame.
///
/// Useful for CLI output, logging, and checking the uniform update without a GPU.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &FrameUniforms) -> String {
        let mut out = String::new();
        let eye = frame.view_position;
        let light = frame.light_position;
        out.push_str(&format!("=== Frame ({} cubes) ===\n", frame.instances.len()));
        // perspective_rh stores f / aspect in x and f in y.
        let aspect = frame.projection.y_axis.y / frame.projection.x_axis.x;
        out.push_str(&format!(
            "Camera: eye=({:.2}, {:.2}, {:.2}) aspect={aspect:.3}\n",
            eye.x, eye.y, eye.z
        ));
        out.push_str(&format!(
            "Light: pos=({:.2}, {:.2}, {:.2}) shininess={:.1}\n",
            light.x, light.y, light.z, frame.shininess
        ));
        for (name, colour) in [
            ("ambient", frame.light_ambient),
            ("diffuse", frame.light_diffuse),
            ("specular", frame.light_specular),
        ] {
            out.push_str(&format!(
                "  {name}=({:.2}, {:.2}, {:.2})\n",
                colour.x, colour.y, colour.z
            ));
        }

        for (i, instance) in frame.instances.iter().enumerate() {
            let p = instance.model.w_axis;
            out.push_str(&format!(
                "  [{i}] pos=({:.2}, {:.2}, {:.2})\n",
                p.x, p.y, p.z
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::lighting::{FrameInput, update_lighting};
    use glam::Vec3;
    use playground_common::{Light, Material, Placement};

    fn uniforms(placements: &[Placement]) -> FrameUniforms {
        uniforms_lit(placements, &Light::default())
    }

    fn uniforms_lit(placements: &[Placement], light: &Light) -> FrameUniforms {
        update_lighting(&FrameInput {
            camera: &Camera::default(),
            light,
            material: &Material::default(),
            placements,
            aspect: 1.0,
            elapsed: 0.0,
        })
    }

    #[test]
    fn debug_renderer_empty_scene() {
        let output = DebugTextRenderer::new().render(&uniforms(&[]));
        assert!(output.contains("0 cubes"));
        assert!(output.contains("eye=(0.00, 1.00, 3.00)"));
    }

    #[test]
    fn debug_renderer_lists_placements() {
        let output = DebugTextRenderer::new().render(&uniforms(&[
            Placement::default(),
            Placement::at(Vec3::new(1.0, 2.0, 3.0)),
        ]));
        assert!(output.contains("2 cubes"));
        assert!(output.contains("[1] pos=(1.00, 2.00, 3.00)"));
        assert!(output.contains("shininess=32.0"));
    }

    #[test]
    fn debug_renderer_prints_full_light_colours() {
        let light = Light {
            ambient: Vec3::new(0.1, 0.2, 0.3),
            diffuse: Vec3::new(1.0, 0.0, 0.0),
            ..Light::default()
        };
        let output = DebugTextRenderer::new().render(&uniforms_lit(&[], &light));
        assert!(output.contains("ambient=(0.10, 0.20, 0.30)"));
        assert!(output.contains("diffuse=(1.00, 0.00, 0.00)"));
        assert!(output.contains("specular=(1.00, 1.00, 1.00)"));
        assert!(output.contains("aspect=1.000"));
    }
}
