/// Turns absolute cursor positions into look offsets.
///
/// The first event only records the position, so the camera does not jump
/// to wherever the cursor entered the window.
#[derive(Debug, Clone)]
pub struct MouseTracker {
    last_x: f32,
    last_y: f32,
    first_mouse: bool,
}

impl MouseTracker {
    /// Start at the centre of a `width` x `height` window.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            last_x: width as f32 / 2.0,
            last_y: height as f32 / 2.0,
            first_mouse: true,
        }
    }

    pub fn last_position(&self) -> (f32, f32) {
        (self.last_x, self.last_y)
    }

    pub fn is_first(&self) -> bool {
        self.first_mouse
    }

    /// Forget the last position; the next event is treated as the first.
    pub fn reset(&mut self) {
        self.first_mouse = true;
    }

    /// Offsets since the previous event. Y is reversed since window
    /// coordinates grow downward.
    pub fn offset(&mut self, x: f32, y: f32) -> (f32, f32) {
        if self.first_mouse {
            self.last_x = x;
            self.last_y = y;
            self.first_mouse = false;
            tracing::trace!("first cursor event at ({x}, {y})");
        }
        let dx = x - self.last_x;
        let dy = self.last_y - y;
        self.last_x = x;
        self.last_y = y;
        (dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_window_centre() {
        let tracker = MouseTracker::new(1920, 1080);
        assert_eq!(tracker.last_position(), (960.0, 540.0));
        assert!(tracker.is_first());
    }

    #[test]
    fn first_event_yields_no_offset() {
        let mut tracker = MouseTracker::new(800, 600);
        assert_eq!(tracker.offset(10.0, 20.0), (0.0, 0.0));
        assert!(!tracker.is_first());
        assert_eq!(tracker.last_position(), (10.0, 20.0));
    }

    #[test]
    fn later_events_reverse_y() {
        let mut tracker = MouseTracker::new(800, 600);
        tracker.offset(100.0, 100.0);
        assert_eq!(tracker.offset(110.0, 90.0), (10.0, 10.0));
        assert_eq!(tracker.offset(105.0, 95.0), (-5.0, -5.0));
    }

    #[test]
    fn reset_suppresses_next_jump() {
        let mut tracker = MouseTracker::new(800, 600);
        tracker.offset(0.0, 0.0);
        tracker.reset();
        assert_eq!(tracker.offset(500.0, 500.0), (0.0, 0.0));
    }
}
