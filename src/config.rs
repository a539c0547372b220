//! Viewer and engine settings, read from a TOML file.
//!
//! Every field has a default, so an empty file (or no file) gives the
//! classic 600×401 window with a 60° field of view.

use serde::Deserialize;
use std::{fs, io, path::Path};
use thiserror::Error;

use crate::{engine::RenderOptions, world::Colour};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_target_fps")]
    pub target_fps: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraConfig {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    /// Initial heading in radians (0 = +X, counter-clockwise).
    #[serde(default)]
    pub direction: f64,
    #[serde(default = "default_fov_deg")]
    pub fov_deg: f64,
    /// Multiplier on the per-column angle step; radians/s = speed·fov/columns.
    #[serde(default = "default_rotation_speed")]
    pub rotation_speed: f64,
    /// World units per second.
    #[serde(default = "default_movement_speed")]
    pub movement_speed: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    #[serde(default = "default_background")]
    pub background: [u8; 3],
    #[serde(default = "default_wall_scale")]
    pub wall_scale: f64,
    #[serde(default = "default_shading_exponent")]
    pub shading_exponent: f64,
    #[serde(default = "default_collision_distance")]
    pub collision_distance: f64,
    #[serde(default = "default_line_width")]
    pub line_width: u32,
}

// Default values
fn default_width() -> u32 { 600 }
fn default_height() -> u32 { 401 }
fn default_title() -> String { "segcast".to_string() }
fn default_target_fps() -> usize { 100 }
fn default_fov_deg() -> f64 { 60.0 }
fn default_rotation_speed() -> f64 { 1000.0 }
fn default_movement_speed() -> f64 { 2.0 }
fn default_background() -> [u8; 3] { [0, 0, 0] }
fn default_wall_scale() -> f64 { 200.0 }
fn default_shading_exponent() -> f64 { 1.0 }
fn default_collision_distance() -> f64 { 0.5 }
fn default_line_width() -> u32 { 3 }

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: default_title(),
            target_fps: default_target_fps(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            direction: 0.0,
            fov_deg: default_fov_deg(),
            rotation_speed: default_rotation_speed(),
            movement_speed: default_movement_speed(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            wall_scale: default_wall_scale(),
            shading_exponent: default_shading_exponent(),
            collision_distance: default_collision_distance(),
            line_width: default_line_width(),
        }
    }
}

impl CameraConfig {
    #[inline]
    pub fn fov(&self) -> f64 {
        self.fov_deg.to_radians()
    }
}

impl RenderConfig {
    pub fn options(&self) -> RenderOptions {
        RenderOptions {
            background: Colour::from(self.background),
            wall_scale: self.wall_scale,
            shading_exponent: self.shading_exponent,
            collision_distance: self.collision_distance,
            line_width: self.line_width,
        }
    }
}

impl Config {
    /// Read and validate a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        let cfg = Self::from_toml(&text)?;
        log::info!(
            "config {}: {}x{} @ {} fps, fov {}°",
            path.as_ref().display(),
            cfg.window.width,
            cfg.window.height,
            cfg.window.target_fps,
            cfg.camera.fov_deg
        );
        Ok(cfg)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let cfg: Config = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.window.width == 0 || self.window.height == 0 {
            return invalid("window width and height must be non-zero");
        }
        let cam = &self.camera;
        if ![cam.x, cam.y, cam.direction, cam.rotation_speed, cam.movement_speed]
            .iter()
            .all(|v| v.is_finite())
        {
            return invalid("camera values must be finite");
        }
        if !(cam.fov_deg > 0.0 && cam.fov_deg < 360.0) {
            return invalid("fov_deg must lie in (0, 360)");
        }
        let r = &self.render;
        if !(r.wall_scale.is_finite() && r.wall_scale > 0.0) {
            return invalid("wall_scale must be positive");
        }
        if !(r.shading_exponent.is_finite() && r.shading_exponent >= 0.0) {
            return invalid("shading_exponent must be non-negative");
        }
        if !(r.collision_distance.is_finite() && r.collision_distance >= 0.0) {
            return invalid("collision_distance must be non-negative");
        }
        if r.line_width == 0 {
            return invalid("line_width must be at least 1");
        }
        Ok(())
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = Config::from_toml("").unwrap();
        assert_eq!(cfg.window.width, 600);
        assert_eq!(cfg.window.height, 401);
        assert_eq!(cfg.window.target_fps, 100);
        assert!((cfg.camera.fov() - std::f64::consts::FRAC_PI_3).abs() < 1e-12);
        assert_eq!(cfg.render.collision_distance, 0.5);
        assert_eq!(cfg.render.options().background, Colour::BLACK);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = Config::from_toml(
            r#"
            [camera]
            x = 1.5
            movement_speed = 4.0

            [render]
            shading_exponent = 0.7
            "#,
        )
        .unwrap();
        assert_eq!(cfg.camera.x, 1.5);
        assert_eq!(cfg.camera.movement_speed, 4.0);
        assert_eq!(cfg.camera.rotation_speed, 1000.0);
        assert_eq!(cfg.render.shading_exponent, 0.7);
        assert_eq!(cfg.render.wall_scale, 200.0);
    }

    #[test]
    fn rejects_zero_width() {
        let err = Config::from_toml("[window]\nwidth = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_bad_fov() {
        let err = Config::from_toml("[camera]\nfov_deg = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn line_width_defaults_to_three_and_rejects_zero() {
        assert_eq!(Config::default().render.options().line_width, 3);
        let cfg = Config::from_toml("[render]\nline_width = 1").unwrap();
        assert_eq!(cfg.render.options().line_width, 1);
        let err = Config::from_toml("[render]\nline_width = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Config::from_toml("[render]\nfog = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn loads_from_disk() {
        let mut tmp = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(tmp, "[window]\ntitle = \"maze\"\nheight = 300").unwrap();
        let cfg = Config::load(tmp.path()).unwrap();
        assert_eq!(cfg.window.title, "maze");
        assert_eq!(cfg.window.height, 300);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
