//! ---------------------------------------------------------------------------
//! Software (CPU) column surface
//!
//! * Fills a `Vec<u32>` frame-buffer in **0x00RRGGBB** format.
//! * Wall slices are clipped to the buffer; rows are rounded to the nearest
//!   pixel.
//! ---------------------------------------------------------------------------

use crate::{
    renderer::{Rgba, Surface},
    world::Colour,
};

/// Row-major RGB frame-buffer.
pub struct Framebuffer {
    pixels: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixel at (`x`, `y`), `None` outside the buffer.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// **Loan** the finished buffer to `submit`.
    ///
    /// The viewer passes `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    pub fn present<F, R>(&self, submit: F) -> R
    where
        F: FnOnce(&[Rgba], usize, usize) -> R,
    {
        submit(&self.pixels, self.width, self.height)
    }
}

/*──────────────────────── Surface trait impl ─────────────────────────*/
impl Surface for Framebuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn draw_vertical_line(&mut self, x: i32, y_top: f64, y_bottom: f64, colour: Colour) {
        if x < 0 || x as usize >= self.width || self.height == 0 {
            return;
        }
        let (lo, hi) = if y_top <= y_bottom {
            (y_top, y_bottom)
        } else {
            (y_bottom, y_top)
        };
        if !(lo.is_finite() && hi.is_finite()) {
            return;
        }
        let max_y = (self.height - 1) as f64;
        if hi < 0.0 || lo > max_y {
            return;
        }
        let y0 = lo.round().clamp(0.0, max_y) as usize;
        let y1 = hi.round().clamp(0.0, max_y) as usize;

        let col = x as usize;
        let rgb = colour.to_rgb();
        for y in y0..=y1 {
            self.pixels[y * self.width + col] = rgb;
        }
    }

    fn fill_all(&mut self, colour: Colour) {
        self.pixels.fill(colour.to_rgb());
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
