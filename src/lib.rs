//! Minimal first-person raycaster over a map of coloured wall segments.
//!
//! * [`world`]    – segments, scene, camera pose and collision flags.
//! * [`engine`]   – ray/segment maths, per-column casting, frame drawing.
//! * [`renderer`] – the display-surface seam plus a software framebuffer.
//! * [`input`]    – logical key actions and frame timing.
//! * [`config`]   – TOML configuration with defaults.

pub mod config;
pub mod engine;
pub mod input;
pub mod renderer;
pub mod world;
