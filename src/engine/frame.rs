//! Column drawing: turns cast results into vertical lines on a [`Surface`].
//!
//! * Wall height falls off as `wall_scale / max(1, dist)` pixels each way
//!   from the horizon.
//! * Distance fog divides each channel by `max(1, dist^shading_exponent)`.
//! * A ray that starts on a wall (distance exactly 0) floods the whole
//!   surface with that wall's colour instead of drawing a line.
//! * The horizon sits at half the camera's viewport height, which need not
//!   match the surface's.

use crate::{
    engine::raycast::{Column, cast_frame},
    renderer::Surface,
    world::{Camera, Colour, Scene},
};

/// Tunables for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub background: Colour,
    /// Half wall height in pixels at distance 1.
    pub wall_scale: f64,
    pub shading_exponent: f64,
    /// Walls closer than this stop the camera.
    pub collision_distance: f64,
    /// Slice width in pixels, centred on the column's screen x.
    pub line_width: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: Colour::BLACK,
            wall_scale: 200.0,
            shading_exponent: 1.0,
            collision_distance: 0.5,
            line_width: 3,
        }
    }
}

/// Counters for one drawn frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub columns_hit: u32,
    pub inside_wall: u32,
}

/// Fogged wall colour at `dist`.
#[inline]
pub fn shade(colour: Colour, dist: f64, exponent: f64) -> Colour {
    colour.attenuate(dist.max(1.0).powf(exponent))
}

/// Top and bottom y of a wall slice at `dist` in a viewport `height` tall.
#[inline]
pub fn column_extent(dist: f64, height: usize, wall_scale: f64) -> (f64, f64) {
    let centre = height as f64 * 0.5;
    let half = wall_scale / dist.max(1.0);
    (centre - half, centre + half)
}

/// Draw already-cast columns in cast order, centred on a viewport
/// `height` pixels tall.
pub fn draw_columns<S: Surface + ?Sized>(
    columns: &[Column],
    opts: &RenderOptions,
    height: usize,
    surface: &mut S,
) -> FrameStats {
    let mut stats = FrameStats::default();
    let width = opts.line_width.max(1) as i32;
    let left = -(width - 1) / 2;

    for col in columns {
        let Some(hit) = col.hit else { continue };

        if hit.dist > 0.0 {
            let (top, bottom) = column_extent(hit.dist, height, opts.wall_scale);
            let colour = shade(hit.colour, hit.dist, opts.shading_exponent);
            let x = col.screen_x as i32;
            for dx in left..left + width {
                surface.draw_vertical_line(x + dx, top, bottom, colour);
            }
            stats.columns_hit += 1;
        } else {
            surface.fill_all(hit.colour);
            stats.inside_wall += 1;
        }
    }

    if stats.inside_wall > 0 {
        log::debug!("{} column(s) start on a wall", stats.inside_wall);
    }
    stats
}

/// Clear, cast, and draw one frame for `cam`.
pub fn render_frame<S: Surface + ?Sized>(
    cam: &mut Camera,
    scene: &Scene,
    opts: &RenderOptions,
    surface: &mut S,
) -> FrameStats {
    surface.clear(opts.background);
    let columns = cast_frame(cam, scene, opts);
    draw_columns(&columns, opts, cam.viewport_height() as usize, surface)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
