use glam::DVec2;

use crate::{
    engine::{RenderOptions, ray::intersect},
    world::{Blocked, Camera, Colour, Scene},
};

/// Nearest forward wall seen by one ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// Signed distance along the ray, always `>= 0` here.
    pub dist: f64,
    pub colour: Colour,
    /// Index of the wall in scene order.
    pub segment: usize,
}

/// Result of casting one screen column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Column {
    pub index: u32,
    pub screen_x: u32,
    pub angle: f64,
    pub hit: Option<Hit>,
    /// Some wall crossed the ray within `(-collision_distance, 0]`.
    pub touching_behind: bool,
}

/// Scan every wall along one ray and keep the nearest non-negative hit.
///
/// Ties go to the wall listed first. Returns the hit plus whether any wall
/// crossed the ray just behind (or exactly at) the origin.
pub fn cast_column(
    scene: &Scene,
    origin: DVec2,
    angle: f64,
    collision_distance: f64,
) -> (Option<Hit>, bool) {
    let mut best: Option<Hit> = None;
    let mut touching_behind = false;

    for (i, seg) in scene.iter().enumerate() {
        let Some(d) = intersect(origin, angle, seg.a, seg.b) else {
            continue;
        };
        if d > -collision_distance && d <= 0.0 {
            touching_behind = true;
        }
        if d >= 0.0 && best.is_none_or(|b| d < b.dist) {
            best = Some(Hit {
                dist: d,
                colour: seg.colour,
                segment: i,
            });
        }
    }
    (best, touching_behind)
}

/// Cast one ray per camera column and rebuild the camera's collision flags.
///
/// Flags computed here only affect movement calls made after this returns.
pub fn cast_frame(cam: &mut Camera, scene: &Scene, opts: &RenderOptions) -> Vec<Column> {
    let origin = cam.pos();
    let mut blocked = Blocked::empty();

    let columns = (0..cam.columns())
        .map(|i| {
            let angle = cam.column_angle(i);
            let (hit, touching_behind) = cast_column(scene, origin, angle, opts.collision_distance);

            if touching_behind {
                blocked |= Blocked::BACKWARD;
            }
            if hit.is_some_and(|h| h.dist > 0.0 && h.dist <= opts.collision_distance) {
                blocked |= Blocked::FORWARD;
            }

            Column {
                index: i,
                screen_x: cam.screen_x(i),
                angle,
                hit,
                touching_behind,
            }
        })
        .collect();

    cam.set_blocked(blocked);
    columns
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
