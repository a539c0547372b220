mod camera;
mod geometry;
pub mod scene_file;

pub use geometry::{Colour, Scene, SceneError, Segment};

pub use camera::{Blocked, Camera};

pub use scene_file::{SceneFileError, load_scene, parse_scene};
