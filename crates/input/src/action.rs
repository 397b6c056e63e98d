/// Direction the camera can travel in, relative to where it looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    /// Along world up, regardless of pitch.
    Up,
    Down,
}

impl Movement {
    /// All directions in application order.
    pub const ALL: [Movement; 6] = [
        Movement::Forward,
        Movement::Backward,
        Movement::Left,
        Movement::Right,
        Movement::Up,
        Movement::Down,
    ];
}

/// A high-level effect of user input on the playground.
///
/// The frame loop consumes actions, never raw platform events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Start or stop moving in a direction.
    Move { direction: Movement, active: bool },
    /// Rotate the view by cursor offsets (x right, y up).
    Look { dx: f32, dy: f32 },
    /// Change the field of view by a scroll amount.
    Zoom(f32),
    /// Toggle the speed multiplier.
    Sprint(bool),
    /// Grab or release the cursor.
    ToggleCursor,
    /// Close the window.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_directions_listed_once() {
        let mut dirs = Movement::ALL.to_vec();
        dirs.sort();
        dirs.dedup();
        assert_eq!(dirs.len(), 6);
    }

    #[test]
    fn action_move_is_constructible() {
        let a = Action::Move {
            direction: Movement::Forward,
            active: true,
        };
        assert!(matches!(a, Action::Move { active: true, .. }));
    }
}
