// ──────────────────────────────────────────────────────────────────────────
// world/scene_file.rs
//
//  *   TOML text  ──>  SegmentDef list  ──>  validated world::Scene
//
//  [[segments]]
//  from   = [2.0, 0.0]
//  to     = [100.0, 0.0]
//  colour = [255, 255, 255]
// ──────────────────────────────────────────────────────────────────────────

use glam::DVec2;
use serde::Deserialize;
use std::{fs, io, path::Path};
use thiserror::Error;

use crate::world::geometry::{Colour, Scene, SceneError, Segment};

/*──────────────────────────── Error type ───────────────────────────*/

#[derive(Error, Debug)]
pub enum SceneFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed scene file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/*──────────────────────────── File layout ──────────────────────────*/

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneDoc {
    #[serde(default)]
    segments: Vec<SegmentDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SegmentDef {
    from: [f64; 2],
    to: [f64; 2],
    #[serde(default = "default_colour")]
    colour: [u8; 3],
}

fn default_colour() -> [u8; 3] {
    [255, 255, 255]
}

/*====================================================================*/
/*                       Public API                                   */
/*====================================================================*/

/// Parse a scene document. Segments keep their file order.
pub fn parse_scene(text: &str) -> Result<Scene, SceneFileError> {
    let doc: SceneDoc = toml::from_str(text)?;
    let segments = doc
        .segments
        .into_iter()
        .enumerate()
        .map(|(i, def)| {
            Segment::new(
                DVec2::from(def.from),
                DVec2::from(def.to),
                Colour::from(def.colour),
                i,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Scene::new(segments))
}

/// Read and parse a scene file from disk.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, SceneFileError> {
    let text = fs::read_to_string(path.as_ref())?;
    let scene = parse_scene(&text)?;
    if scene.is_empty() {
        log::warn!("scene {} has no segments", path.as_ref().display());
    }
    log::info!(
        "scene {}: {} segments",
        path.as_ref().display(),
        scene.len()
    );
    Ok(scene)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
