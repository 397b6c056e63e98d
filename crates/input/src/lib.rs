//! Input handling independent of the windowing library.
//!
//! The desktop app translates platform events into these types; the camera
//! only ever sees movement directions and look offsets.
//!
//! # Invariants
//! - The first cursor event never moves the camera.
//! - Held movements are applied in a fixed order every frame.

pub mod action;
pub mod held;
pub mod mouse;

pub use action::{Action, Movement};
pub use held::HeldMovements;
pub use mouse::MouseTracker;
