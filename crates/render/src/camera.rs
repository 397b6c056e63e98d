use glam::{Mat4, Vec3};
use playground_common::CameraConfig;
use playground_input::Movement;

const PITCH_LIMIT: f32 = 89.0;
const ZOOM_MIN: f32 = 1.0;
const ZOOM_MAX: f32 = 45.0;

/// Fly camera driven by yaw/pitch Euler angles (degrees).
/// `front`, `right` and `up` are derived and kept orthonormal.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub speed: f32,
    pub sensitivity: f32,
    /// Vertical field of view in degrees.
    pub zoom: f32,
    pub near: f32,
    pub far: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self::from_config(&CameraConfig {
            position,
            ..CameraConfig::default()
        })
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        let mut camera = Self {
            position: config.position,
            yaw: config.yaw,
            pitch: config.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            speed: config.speed,
            sensitivity: config.sensitivity,
            zoom: config.zoom.clamp(ZOOM_MIN, ZOOM_MAX),
            near: config.near,
            far: config.far,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            world_up: Vec3::Y,
        };
        camera.update_vectors();
        tracing::debug!(
            "camera at {} yaw={} pitch={} fov={}",
            camera.position,
            camera.yaw,
            camera.pitch,
            camera.zoom
        );
        camera
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Move `speed * dt` units in `direction`.
    pub fn process_keyboard(&mut self, direction: Movement, dt: f32) {
        let velocity = self.speed * dt;
        match direction {
            Movement::Forward => self.position += self.front * velocity,
            Movement::Backward => self.position -= self.front * velocity,
            Movement::Left => self.position -= self.right * velocity,
            Movement::Right => self.position += self.right * velocity,
            Movement::Up => self.position += self.world_up * velocity,
            Movement::Down => self.position -= self.world_up * velocity,
        }
    }

    /// Turn by cursor offsets (x right, y up) scaled by `sensitivity`.
    pub fn process_mouse_movement(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.sensitivity;
        self.pitch += dy * self.sensitivity;
        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
        self.update_vectors();
    }

    /// Scrolling up narrows the field of view.
    pub fn process_mouse_scroll(&mut self, dy: f32) {
        self.zoom = (self.zoom - dy).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection with a [0, 1] depth range.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect, self.near, self.far)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        // Looking straight up or down leaves front parallel to world up;
        // fall back to the yaw heading for right.
        self.right = self
            .front
            .cross(self.world_up)
            .try_normalize()
            .unwrap_or_else(|| Vec3::new(-yaw.sin(), 0.0, yaw.cos()));
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn default_camera_looks_down_negative_z() {
        let cam = Camera::default();
        assert_eq!(cam.position, Vec3::new(0.0, 1.0, 3.0));
        assert!(close(cam.front(), Vec3::NEG_Z));
        assert!(close(cam.right(), Vec3::X));
        assert!(close(cam.up(), Vec3::Y));
        let vp = cam.view_projection(16.0 / 9.0);
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn keyboard_moves_along_basis() {
        let mut cam = Camera::new(Vec3::ZERO);
        cam.process_keyboard(Movement::Forward, 1.0);
        assert!(close(cam.position, Vec3::new(0.0, 0.0, -2.5)));
        cam.process_keyboard(Movement::Backward, 1.0);
        cam.process_keyboard(Movement::Right, 2.0);
        assert!(close(cam.position, Vec3::new(5.0, 0.0, 0.0)));
        cam.process_keyboard(Movement::Left, 2.0);
        cam.process_keyboard(Movement::Up, 0.4);
        assert!(close(cam.position, Vec3::new(0.0, 1.0, 0.0)));
        cam.process_keyboard(Movement::Down, 0.4);
        assert!(close(cam.position, Vec3::ZERO));
    }

    #[test]
    fn vertical_movement_ignores_pitch() {
        let mut cam = Camera::new(Vec3::ZERO);
        cam.process_mouse_movement(0.0, 450.0, true);
        cam.process_keyboard(Movement::Up, 1.0);
        assert!(close(cam.position, Vec3::new(0.0, 2.5, 0.0)));
    }

    #[test]
    fn mouse_turns_by_sensitivity() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(900.0, 0.0, true);
        assert!((cam.yaw - 0.0).abs() < 1e-4);
        assert!(close(cam.front(), Vec3::X));
    }

    #[test]
    fn pitch_is_clamped_when_constrained() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(0.0, 10_000.0, true);
        assert_eq!(cam.pitch, 89.0);
        cam.process_mouse_movement(0.0, -20_000.0, true);
        assert_eq!(cam.pitch, -89.0);
    }

    #[test]
    fn pitch_unconstrained_passes_through() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(0.0, 1_000.0, false);
        assert!((cam.pitch - 100.0).abs() < 1e-4);
    }

    #[test]
    fn vertical_pitch_keeps_basis_finite() {
        for pitch in [90.0, -90.0] {
            let mut cam = Camera::default();
            cam.process_mouse_movement(0.0, pitch / cam.sensitivity, false);
            for v in [cam.front(), cam.right(), cam.up()] {
                assert!(v.is_finite());
                assert!((v.length() - 1.0).abs() < 1e-4);
            }
            assert!(cam.front().dot(cam.right()).abs() < 1e-4);
            assert!(cam.view_matrix().is_finite());
        }
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = Camera::default();
        cam.process_mouse_scroll(10.0);
        assert_eq!(cam.zoom, 35.0);
        cam.process_mouse_scroll(100.0);
        assert_eq!(cam.zoom, 1.0);
        cam.process_mouse_scroll(-100.0);
        assert_eq!(cam.zoom, 45.0);
    }

    #[test]
    fn basis_stays_orthonormal() {
        let mut cam = Camera::default();
        for (dx, dy) in [(37.0, 12.0), (-250.0, 80.0), (13.0, -500.0)] {
            cam.process_mouse_movement(dx, dy, true);
            for v in [cam.front(), cam.right(), cam.up()] {
                assert!((v.length() - 1.0).abs() < 1e-5);
            }
            assert!(cam.front().dot(cam.right()).abs() < 1e-5);
            assert!(cam.front().dot(cam.up()).abs() < 1e-5);
            assert!(cam.right().dot(cam.up()).abs() < 1e-5);
        }
    }

    #[test]
    fn view_matrix_puts_camera_at_origin() {
        let mut cam = Camera::new(Vec3::new(4.0, -2.0, 7.0));
        cam.process_mouse_movement(123.0, 45.0, true);
        let eye = cam.view_matrix().transform_point3(cam.position);
        assert!(eye.length() < 1e-4);
        let ahead = cam.view_matrix().transform_point3(cam.position + cam.front());
        assert!(close(ahead, Vec3::NEG_Z));
    }
}
