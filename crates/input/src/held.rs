use crate::action::Movement;
use std::collections::BTreeSet;

/// Speed multiplier while sprint is held.
pub const SPRINT_FACTOR: f32 = 3.0;

/// Movement keys currently held down.
#[derive(Debug, Clone, Default)]
pub struct HeldMovements {
    held: BTreeSet<Movement>,
    sprint: bool,
}

impl HeldMovements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, direction: Movement) {
        self.held.insert(direction);
    }

    pub fn release(&mut self, direction: Movement) {
        self.held.remove(&direction);
    }

    /// Press or release, as reported by a key event.
    pub fn set(&mut self, direction: Movement, active: bool) {
        if active {
            self.press(direction);
        } else {
            self.release(direction);
        }
    }

    pub fn set_sprint(&mut self, active: bool) {
        self.sprint = active;
    }

    pub fn is_held(&self, direction: Movement) -> bool {
        self.held.contains(&direction)
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Drop every held key, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.held.clear();
        self.sprint = false;
    }

    /// Call `apply` for every held direction with the sprint-adjusted delta.
    /// Returns how many directions were applied.
    pub fn apply(&self, dt: f32, mut apply: impl FnMut(Movement, f32)) -> usize {
        let dt = if self.sprint { dt * SPRINT_FACTOR } else { dt };
        for direction in &self.held {
            apply(*direction, dt);
        }
        self.held.len()
    }
}
