//! Display-surface abstraction.
//!
//! *The engine never owns a window.* It draws through a type that
//! implements [`Surface`], and only ever writes: vertical wall slices and
//! whole-surface fills.
//!
//! * [`software::Framebuffer`] is the CPU back-end used by the viewer.
//! * Tests plug in recording surfaces to observe draw calls.

use crate::world::Colour;

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// Something the frame renderer can draw onto.
pub trait Surface {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Vertical line at column `x` covering `y_top ..= y_bottom`.
    /// Out-of-range parts are the surface's job to clip.
    fn draw_vertical_line(&mut self, x: i32, y_top: f64, y_bottom: f64, colour: Colour);

    /// Paint every pixel.
    fn fill_all(&mut self, colour: Colour);

    /// Start-of-frame clear; defaults to [`Surface::fill_all`].
    fn clear(&mut self, colour: Colour) {
        self.fill_all(colour);
    }
}

pub mod software;

pub use software::Framebuffer;
