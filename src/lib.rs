//! # Trueno-Raster
//!
//! Deterministic 2D rasterization kernel: converts line segments, polylines,
//! polygons, ellipses and parametric curves into integer pixel lists, and
//! applies affine transforms and line clipping to control-point lists.
//!
//! ## Features
//!
//! - **Lines**: Naive, DDA and Bresenham rasterizers
//! - **Shapes**: polylines, closed polygons and midpoint ellipses
//! - **Curves**: Bézier (de Casteljau) and uniform cubic B-spline (Cox–de Boor)
//! - **Transforms**: translate, rotate and scale about a pivot
//! - **Clipping**: Cohen–Sutherland and Liang–Barsky
//! - **Scripts**: a line-oriented command language rendered to PNG
//!
//! The numeric core is pure: every function takes control points and an
//! algorithm selector and returns a fresh pixel or point list.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let pixels = draw_line(Point::new(0, 0), Point::new(5, 0), LineAlgorithm::Bresenham);
//! assert_eq!(pixels.len(), 6);
//!
//! let window = ClipWindow::new(0, 0, 10, 10);
//! let clipped = clip_line(Point::new(5, 5), Point::new(15, 5), window, ClipAlgorithm::CohenSutherland);
//! assert_eq!(clipped, Some([Point::new(5, 5), Point::new(10, 5)]));
//! ```
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   IBM Systems Journal, 4(1), 25-30.
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm." IEEE CG&A, 4(9).
//! - de Boor, C. (1978). *A Practical Guide to Splines*. Springer.
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A New Concept and Method for Line Clipping."

#![cfg_attr(docsrs, feature(doc_cfg))]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]

// ============================================================================
// Core Modules
// ============================================================================

/// Flat RGBA colors.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, clip windows, bounding boxes).
pub mod geometry;

// ============================================================================
// Rasterization Kernel
// ============================================================================

/// Line, polygon, ellipse and curve rasterizers.
pub mod render;

/// Affine transforms over control points.
pub mod transform;

/// Cohen–Sutherland and Liang–Barsky line clipping.
pub mod clip;

// ============================================================================
// Scene and Output
// ============================================================================

/// Primitive descriptors and the `Drawable` trait.
pub mod primitive;

/// Insertion-ordered primitive collection with editing policies.
pub mod scene;

/// Output encoders (PNG).
pub mod output;

/// Drawing script parser and runner.
pub mod script;

/// Renderer configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::clip::{clip_line, ClipAlgorithm};
    pub use crate::color::Rgba;
    pub use crate::config::RenderConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{BoundingBox, ClipWindow, Point, PointF};
    pub use crate::primitive::{Drawable, Primitive, PrimitiveKind};
    pub use crate::render::{
        draw_curve, draw_ellipse, draw_line, draw_polygon, draw_polyline, CurveAlgorithm,
        LineAlgorithm,
    };
    pub use crate::scene::Scene;
    pub use crate::script::ScriptRunner;
    pub use crate::transform::{rotate, scale, translate};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_prelude_end_to_end() {
        let mut scene = Scene::new();
        scene.insert(
            "tri",
            Primitive::new(
                PrimitiveKind::Polygon(LineAlgorithm::Bresenham),
                vec![Point::new(0, 0), Point::new(4, 0), Point::new(0, 4)],
                Rgba::BLACK,
            ),
        );

        let mut fb = Framebuffer::new(8, 8).unwrap();
        fb.clear(Rgba::WHITE);
        scene.render(&mut fb, 100);

        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(0, 2), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(3, 3), Some(Rgba::WHITE));
    }
}
