//! Pixel buffer that rasterized primitives are painted into.
//!
//! Rows are stored top to bottom, so pixel `(x, y)` lives in row `y`. Pixels
//! outside the buffer (including negative coordinates) are silently dropped.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// Largest accepted width or height, in pixels.
pub const MAX_DIMENSION: u32 = 16_384;

/// RGBA framebuffer in row-major order.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, 4 bytes each.
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero or exceeds
    /// [`MAX_DIMENSION`].
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = Self::byte_len(width, height)?;

        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    /// Validate a canvas size and return the length of its RGBA buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either side is zero or larger
    /// than [`MAX_DIMENSION`].
    pub fn byte_len(width: u32, height: u32) -> Result<usize> {
        let invalid = || Error::InvalidDimensions { width, height };
        if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&height) {
            return Err(invalid());
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(invalid)
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the raw RGBA bytes, tightly packed.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Fill the whole buffer with one color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Write every pixel of a rasterized list with one color.
    pub fn paint(&mut self, points: &[Point], color: Rgba) {
        for p in points {
            if p.x >= 0 && p.y >= 0 {
                self.set_pixel(p.x as u32, p.y as u32, color);
            }
        }
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}
