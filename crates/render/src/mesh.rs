use glam::{Vec2, Vec3};

/// Floats per vertex: position xyz, normal xyz, texture uv.
pub const VERTEX_STRIDE: usize = 8;

/// Vertices in the cube template.
pub const CUBE_VERTEX_COUNT: u32 = 36;

/// Unit cube centred at the origin, two counter-clockwise triangles per face
/// (seen from outside). Scale through a placement as needed.
#[rustfmt::skip]
pub const CUBE_VERTICES: [f32; CUBE_VERTEX_COUNT as usize * VERTEX_STRIDE] = [
    // positions          // normals            // uv
    // BACK
     0.5, -0.5, -0.5,   0.0,  0.0, -1.0,  0.0, 1.0, // bottom left
    -0.5, -0.5, -0.5,   0.0,  0.0, -1.0,  1.0, 1.0, // bottom right
    -0.5,  0.5, -0.5,   0.0,  0.0, -1.0,  1.0, 0.0, // top right

    -0.5,  0.5, -0.5,   0.0,  0.0, -1.0,  1.0, 0.0, // top right
     0.5,  0.5, -0.5,   0.0,  0.0, -1.0,  0.0, 0.0, // top left
     0.5, -0.5, -0.5,   0.0,  0.0, -1.0,  0.0, 1.0, // bottom left

    // FRONT
    -0.5, -0.5,  0.5,   0.0,  0.0,  1.0,  0.0, 1.0, // bottom left
     0.5, -0.5,  0.5,   0.0,  0.0,  1.0,  1.0, 1.0, // bottom right
     0.5,  0.5,  0.5,   0.0,  0.0,  1.0,  1.0, 0.0, // top right

     0.5,  0.5,  0.5,   0.0,  0.0,  1.0,  1.0, 0.0, // top right
    -0.5,  0.5,  0.5,   0.0,  0.0,  1.0,  0.0, 0.0, // top left
    -0.5, -0.5,  0.5,   0.0,  0.0,  1.0,  0.0, 1.0, // bottom left

    // LEFT
    -0.5, -0.5, -0.5,  -1.0,  0.0,  0.0,  0.0, 1.0, // bottom left
    -0.5, -0.5,  0.5,  -1.0,  0.0,  0.0,  1.0, 1.0, // bottom right
    -0.5,  0.5,  0.5,  -1.0,  0.0,  0.0,  1.0, 0.0, // top right

    -0.5,  0.5,  0.5,  -1.0,  0.0,  0.0,  1.0, 0.0, // top right
    -0.5,  0.5, -0.5,  -1.0,  0.0,  0.0,  0.0, 0.0, // top left
    -0.5, -0.5, -0.5,  -1.0,  0.0,  0.0,  0.0, 1.0, // bottom left

    // RIGHT
     0.5, -0.5,  0.5,   1.0,  0.0,  0.0,  0.0, 1.0, // bottom left
     0.5, -0.5, -0.5,   1.0,  0.0,  0.0,  1.0, 1.0, // bottom right
     0.5,  0.5, -0.5,   1.0,  0.0,  0.0,  1.0, 0.0, // top right

     0.5,  0.5, -0.5,   1.0,  0.0,  0.0,  1.0, 0.0, // top right
     0.5,  0.5,  0.5,   1.0,  0.0,  0.0,  0.0, 0.0, // top left
     0.5, -0.5,  0.5,   1.0,  0.0,  0.0,  0.0, 1.0, // bottom left

    // BOTTOM
    -0.5, -0.5, -0.5,   0.0, -1.0,  0.0,  0.0, 1.0, // bottom left
     0.5, -0.5, -0.5,   0.0, -1.0,  0.0,  1.0, 1.0, // bottom right
     0.5, -0.5,  0.5,   0.0, -1.0,  0.0,  1.0, 0.0, // top right

     0.5, -0.5,  0.5,   0.0, -1.0,  0.0,  1.0, 0.0, // top right
    -0.5, -0.5,  0.5,   0.0, -1.0,  0.0,  0.0, 0.0, // top left
    -0.5, -0.5, -0.5,   0.0, -1.0,  0.0,  0.0, 1.0, // bottom left

    // TOP
    -0.5,  0.5,  0.5,   0.0,  1.0,  0.0,  0.0, 1.0, // bottom left
     0.5,  0.5,  0.5,   0.0,  1.0,  0.0,  1.0, 1.0, // bottom right
     0.5,  0.5, -0.5,   0.0,  1.0,  0.0,  1.0, 0.0, // top right

     0.5,  0.5, -0.5,   0.0,  1.0,  0.0,  1.0, 0.0, // top right
    -0.5,  0.5, -0.5,   0.0,  1.0,  0.0,  0.0, 0.0, // top left
    -0.5,  0.5,  0.5,   0.0,  1.0,  0.0,  0.0, 1.0, // bottom left
];

/// One decoded vertex of the template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

/// Decode the interleaved template into typed vertices.
pub fn cube_vertices() -> Vec<MeshVertex> {
    CUBE_VERTICES
        .chunks_exact(VERTEX_STRIDE)
        .map(|v| MeshVertex {
            position: Vec3::new(v[0], v[1], v[2]),
            normal: Vec3::new(v[3], v[4], v[5]),
            uv: Vec2::new(v[6], v[7]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_has_six_faces_of_two_triangles() {
        let verts = cube_vertices();
        assert_eq!(verts.len(), CUBE_VERTEX_COUNT as usize);
        assert_eq!(verts.len() % 3, 0);
        assert_eq!(verts.len() / 6, 6);
    }

    #[test]
    fn vertices_lie_on_unit_cube_faces() {
        for v in cube_vertices() {
            assert_eq!(v.position.abs(), Vec3::splat(0.5));
            assert!((v.normal.length() - 1.0).abs() < 1e-6);
            // Each vertex sits on the face its normal points out of.
            assert!((v.position.dot(v.normal) - 0.5).abs() < 1e-6);
            assert!((0.0..=1.0).contains(&v.uv.x) && (0.0..=1.0).contains(&v.uv.y));
        }
    }

    #[test]
    fn triangles_wind_counter_clockwise_from_outside() {
        let verts = cube_vertices();
        for tri in verts.chunks_exact(3) {
            let face_normal =
                (tri[1].position - tri[0].position).cross(tri[2].position - tri[0].position);
            assert!(
                face_normal.dot(tri[0].normal) > 0.0,
                "triangle facing inward: {tri:?}"
            );
        }
    }

    #[test]
    fn every_axis_direction_covered() {
        let verts = cube_vertices();
        for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
            assert_eq!(verts.iter().filter(|v| v.normal == axis).count(), 6);
            assert_eq!(verts.iter().filter(|v| v.normal == -axis).count(), 6);
        }
    }
}
