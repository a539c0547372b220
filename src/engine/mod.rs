#[allow(clippy::module_inception)]
mod engine;
pub mod frame;
pub mod ray;
pub mod raycast;

pub use engine::Engine;
pub use frame::{FrameStats, RenderOptions, column_extent, draw_columns, render_frame, shade};
pub use ray::{GEOM_EPSILON, intersect, rotate};
pub use raycast::{Column, Hit, cast_column, cast_frame};
