use bitflags::bitflags;
use glam::DVec2;
use std::f64::consts::TAU;

use crate::config::CameraConfig;

bitflags! {
    /// Per-frame collision state, rebuilt by every ray cast.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Blocked: u8 {
        /// A wall sits within the collision distance straight ahead.
        const FORWARD  = 0x01;
        /// A wall touches or sits just behind the camera plane.
        const BACKWARD = 0x02;
    }
}

/// Player view-point on the 2-D map.
///
/// * Only **yaw** is simulated, there is no pitch.
/// * `columns` rays span `fov` radians centred on `direction`.
#[derive(Clone, Debug)]
pub struct Camera {
    pos: DVec2,     // map units
    direction: f64, // radians (0 = +X, counter-clockwise), kept in [0, 2π)
    fov: f64,       // horizontal FoV (radians)
    columns: u32,
    viewport_height: u32,
    rotation_speed: f64,
    movement_speed: f64,
    blocked: Blocked,
}

impl Camera {
    /// Create a camera at `pos` facing `direction` for a `columns`×`viewport_height` view.
    pub fn new(
        pos: DVec2,
        direction: f64,
        cfg: &CameraConfig,
        columns: u32,
        viewport_height: u32,
    ) -> Self {
        Self {
            pos,
            direction: direction.rem_euclid(TAU),
            fov: cfg.fov(),
            columns: columns.max(1),
            viewport_height,
            rotation_speed: cfg.rotation_speed,
            movement_speed: cfg.movement_speed,
            blocked: Blocked::empty(),
        }
    }

    /// Camera placed where `cfg` says.
    pub fn from_config(cfg: &CameraConfig, columns: u32, viewport_height: u32) -> Self {
        Self::new(
            DVec2::new(cfg.x, cfg.y),
            cfg.direction,
            cfg,
            columns,
            viewport_height,
        )
    }

    #[inline]
    pub fn pos(&self) -> DVec2 {
        self.pos
    }

    #[inline]
    pub fn direction(&self) -> f64 {
        self.direction
    }

    #[inline]
    pub fn fov(&self) -> f64 {
        self.fov
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[inline]
    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    #[inline]
    pub fn blocked(&self) -> Blocked {
        self.blocked
    }

    pub(crate) fn set_blocked(&mut self, blocked: Blocked) {
        if blocked != self.blocked {
            log::debug!("collision flags {:?} -> {:?}", self.blocked, blocked);
        }
        self.blocked = blocked;
    }

    /*──────────────────────── derived angles ────────────────────────*/

    /// Angle between two neighbouring columns.
    #[inline]
    pub fn d_angle(&self) -> f64 {
        self.fov / self.columns as f64
    }

    /// Angle of column 0, the rightmost ray on screen.
    #[inline]
    pub fn right_border(&self) -> f64 {
        self.direction - self.fov * 0.5
    }

    /// Ray angle for column `i` (not wrapped).
    #[inline]
    pub fn column_angle(&self, i: u32) -> f64 {
        self.right_border() + i as f64 * self.d_angle()
    }

    /// Screen x of column `i`: angles grow right-to-left.
    ///
    /// `i` must be below [`Camera::columns`].
    #[inline]
    pub fn screen_x(&self, i: u32) -> u32 {
        debug_assert!(i < self.columns, "column {i} out of {}", self.columns);
        self.columns - i - 1
    }

    /// Unit vector pointing where the camera looks.
    #[inline]
    pub fn forward(&self) -> DVec2 {
        let (s, c) = self.direction.sin_cos();
        DVec2::new(c, s)
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Turn counter-clockwise for `dt` seconds.
    pub fn rotate_left(&mut self, dt: f64) {
        self.turn(dt * self.d_angle() * self.rotation_speed);
    }

    /// Turn clockwise for `dt` seconds.
    pub fn rotate_right(&mut self, dt: f64) {
        self.turn(-dt * self.d_angle() * self.rotation_speed);
    }

    fn turn(&mut self, delta: f64) {
        self.direction = (self.direction + delta).rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if self.direction >= TAU {
            self.direction = 0.0;
        }
    }

    /// Step along the view direction unless a wall is right ahead.
    pub fn move_forward(&mut self, dt: f64) {
        if !self.blocked.contains(Blocked::FORWARD) {
            self.pos += self.forward() * (dt * self.movement_speed);
        }
    }

    /// Step against the view direction unless a wall is touching behind.
    pub fn move_backward(&mut self, dt: f64) {
        if !self.blocked.contains(Blocked::BACKWARD) {
            self.pos -= self.forward() * (dt * self.movement_speed);
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_3, PI};

    fn cam(direction: f64) -> Camera {
        let cfg = CameraConfig::default();
        Camera::new(DVec2::ZERO, direction, &cfg, 600, 401)
    }

    #[test]
    fn forward_is_unit_length() {
        let c = cam(0.7);
        assert!((c.forward().length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn default_fov_is_sixty_degrees() {
        assert!((cam(0.0).fov() - FRAC_PI_3).abs() < 1e-12);
    }

    #[test]
    fn columns_span_the_fov() {
        let c = cam(1.0);
        assert!((c.column_angle(0) - (1.0 - FRAC_PI_3 / 2.0)).abs() < 1e-12);
        assert!((c.column_angle(300) - 1.0).abs() < 1e-12);
        assert_eq!(c.screen_x(0), 599);
        assert_eq!(c.screen_x(599), 0);
    }

    #[test]
    fn rotate_left_uses_column_step() {
        let mut c = cam(0.0);
        c.rotate_left(0.5);
        let expected = 0.5 * (FRAC_PI_3 / 600.0) * 1000.0;
        assert!((c.direction() - expected).abs() < 1e-12);
    }

    #[test]
    fn rotate_right_wraps_below_zero() {
        let mut c = cam(0.0);
        c.rotate_right(0.1);
        assert!(c.direction() > PI && c.direction() < TAU);
    }

    #[test]
    fn direction_is_normalised_on_creation() {
        let c = cam(-PI / 2.0);
        assert!((c.direction() - 1.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn forward_then_backward_returns_home() {
        let mut c = cam(0.3);
        c.move_forward(0.25);
        assert!(c.pos().length() > 0.1);
        c.move_backward(0.25);
        assert!(c.pos().length() < 1e-12);
    }

    #[test]
    fn forward_blocked_is_a_no_op() {
        let mut c = cam(0.0);
        c.set_blocked(Blocked::FORWARD);
        c.move_forward(1.0);
        assert_eq!(c.pos(), DVec2::ZERO);
        c.move_backward(1.0);
        assert!((c.pos() - DVec2::new(-2.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn backward_blocked_is_a_no_op() {
        let mut c = cam(0.0);
        c.set_blocked(Blocked::BACKWARD);
        c.move_backward(1.0);
        assert_eq!(c.pos(), DVec2::ZERO);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of")]
    fn screen_x_rejects_column_past_the_edge() {
        let c = cam(0.0);
        let _ = c.screen_x(c.columns());
    }
}
