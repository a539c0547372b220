//! Logical key actions and per-frame timing.
//!
//! The window layer answers "is this action held?"; [`apply_input`] turns
//! that into at most one turn and one step per frame.

use std::time::{Duration, Instant};

use crate::world::Camera;

/// Longest frame delta fed to the camera.
pub const MAX_FRAME_DT: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    TurnLeft,
    TurnRight,
    MoveForward,
    MoveBackward,
}

/// Held-key query, implemented by the window driver.
pub trait InputSource {
    fn is_held(&self, action: Action) -> bool;
}

impl<F: Fn(Action) -> bool> InputSource for F {
    fn is_held(&self, action: Action) -> bool {
        self(action)
    }
}

/// Move/turn `cam` for `dt` seconds according to the held actions.
///
/// Left beats right, forward beats backward.
pub fn apply_input(cam: &mut Camera, input: &impl InputSource, dt: f64) {
    if input.is_held(Action::TurnLeft) {
        cam.rotate_left(dt);
    } else if input.is_held(Action::TurnRight) {
        cam.rotate_right(dt);
    }

    if input.is_held(Action::MoveForward) {
        cam.move_forward(dt);
    } else if input.is_held(Action::MoveBackward) {
        cam.move_backward(dt);
    }
}

/// Wall-clock frame timer.
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous tick, capped at [`MAX_FRAME_DT`].
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let dt = now.duration_since(self.last);
        self.last = now;
        dt.min(MAX_FRAME_DT).as_secs_f64()
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
