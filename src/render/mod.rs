//! Rasterization of geometric primitives into pixel lists.
//!
//! Every function here is pure: it takes control points and an algorithm
//! selector and returns a freshly allocated `Vec<Point>` in path order.
//!
//! # Algorithms
//!
//! - **Naive / DDA / Bresenham** lines
//! - **Polylines and polygons** composed from lines
//! - **Midpoint ellipse** (two-region decision variables)
//! - **Bézier** (de Casteljau) and **uniform cubic B-spline** (Cox–de Boor) curves
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm." IEEE CG&A.
//! - de Boor, C. (1972). "On calculating with B-splines." J. Approx. Theory.

mod curve;
mod ellipse;
mod line;
mod polygon;

pub use curve::{
    bezier_points, bspline_points, draw_curve, draw_curve_with_steps, CurveAlgorithm,
    DEFAULT_CURVE_STEPS,
};
pub use ellipse::draw_ellipse;
pub use line::{draw_line, draw_line_bresenham, draw_line_dda, draw_line_naive, LineAlgorithm};
pub use polygon::{draw_polygon, draw_polyline};
