//! Affine transforms over control-point lists.
//!
//! Each function returns a new list; the input is never modified. Real-valued
//! results are truncated toward zero.

use crate::geometry::{Point, PointF};

/// Translate every point by `(dx, dy)`.
///
/// Coordinates saturate at the bounds of `i32`.
#[must_use]
pub fn translate(points: &[Point], dx: i32, dy: i32) -> Vec<Point> {
    points
        .iter()
        .map(|p| Point::new(p.x.saturating_add(dx), p.y.saturating_add(dy)))
        .collect()
}

/// Rotate every point about `pivot` by `degrees`, clockwise on a y-down canvas.
///
/// ```
/// use trueno_raster::geometry::Point;
/// use trueno_raster::transform::rotate;
///
/// let out = rotate(&[Point::new(10, 0)], Point::ORIGIN, 90.0);
/// assert_eq!(out, vec![Point::new(0, 10)]);
/// ```
#[must_use]
pub fn rotate(points: &[Point], pivot: impl Into<PointF>, degrees: f64) -> Vec<Point> {
    let pivot = pivot.into();
    let theta = degrees * std::f64::consts::PI / 180.0;
    let (sin, cos) = theta.sin_cos();

    points
        .iter()
        .map(|p| {
            let dx = f64::from(p.x) - pivot.x;
            let dy = f64::from(p.y) - pivot.y;
            PointF::new(pivot.x + dx * cos - dy * sin, pivot.y + dx * sin + dy * cos).truncate()
        })
        .collect()
}

/// Scale every point about `pivot` by `factor`.
#[must_use]
pub fn scale(points: &[Point], pivot: impl Into<PointF>, factor: f64) -> Vec<Point> {
    let pivot = pivot.into();
    points
        .iter()
        .map(|p| {
            PointF::new(
                pivot.x + (f64::from(p.x) - pivot.x) * factor,
                pivot.y + (f64::from(p.y) - pivot.y) * factor,
            )
            .truncate()
        })
        .collect()
}
