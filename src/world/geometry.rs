use glam::{DVec2, dvec2};
use thiserror::Error;

use crate::renderer::Rgba;

/*----------------------------- colours ------------------------------*/

/// 8-bit RGB wall colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour::new(0, 0, 0);
    pub const WHITE: Colour = Colour::new(255, 255, 255);
    pub const RED: Colour = Colour::new(255, 0, 0);
    pub const GREEN: Colour = Colour::new(0, 255, 0);
    pub const BLUE: Colour = Colour::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into the framebuffer format (0x00RRGGBB).
    #[inline]
    pub fn to_rgb(self) -> Rgba {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Divide every channel by `divisor` (never below 1) and round.
    pub fn attenuate(self, divisor: f64) -> Colour {
        let d = if divisor.is_finite() { divisor.max(1.0) } else { 1.0 };
        let ch = |c: u8| (c as f64 / d).round().clamp(0.0, 255.0) as u8;
        Colour::new(ch(self.r), ch(self.g), ch(self.b))
    }
}

impl From<[u8; 3]> for Colour {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Colour::new(r, g, b)
    }
}

/*----------------------------- segments -----------------------------*/

/// Problems found while building a [`Scene`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    /// Both endpoints coincide; the wall has no extent.
    #[error("segment {index} has zero length")]
    Degenerate { index: usize },

    /// An endpoint is NaN or infinite.
    #[error("segment {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// One opaque wall: a straight line between `a` and `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: DVec2,
    pub b: DVec2,
    pub colour: Colour,
}

impl Segment {
    /// Validated constructor. `index` only labels the error.
    pub fn new(a: DVec2, b: DVec2, colour: Colour, index: usize) -> Result<Self, SceneError> {
        if !a.is_finite() || !b.is_finite() {
            return Err(SceneError::NonFinite { index });
        }
        if a == b {
            return Err(SceneError::Degenerate { index });
        }
        Ok(Self { a, b, colour })
    }
}

/*------------------------------- scene -------------------------------*/

/// Ordered, read-only list of walls (immutable after load).
///
/// Order never changes what is visible, except that the first of several
/// equally distant walls wins a column.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    segments: Vec<Segment>,
}

impl Scene {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Build from raw `(x1, y1, x2, y2, colour)` tuples, validating each one.
    pub fn from_tuples(
        walls: &[(f64, f64, f64, f64, Colour)],
    ) -> Result<Self, SceneError> {
        let segments = walls
            .iter()
            .enumerate()
            .map(|(i, &(x1, y1, x2, y2, c))| Segment::new(dvec2(x1, y1), dvec2(x2, y2), c, i))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }

    /// Six-wall test room: a 8×8 box with a long wall poking out east and
    /// a short stub south of the origin.
    pub fn demo() -> Self {
        const WALLS: [(f64, f64, f64, f64, Colour); 6] = [
            (2.0, 0.0, 100.0, 0.0, Colour::WHITE),
            (0.0, -2.0, 0.0, -4.0, Colour::GREEN),
            (-4.0, 4.0, 4.0, 4.0, Colour::WHITE),
            (4.0, 4.0, 4.0, -4.0, Colour::GREEN),
            (4.0, -4.0, -4.0, -4.0, Colour::BLUE),
            (-4.0, -4.0, -4.0, 4.0, Colour::RED),
        ];
        Self {
            segments: WALLS
                .iter()
                .map(|&(x1, y1, x2, y2, colour)| Segment {
                    a: dvec2(x1, y1),
                    b: dvec2(x2, y2),
                    colour,
                })
                .collect(),
        }
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
