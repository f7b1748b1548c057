//! Midpoint ellipse rasterization.
//!
//! The ellipse is described by two opposite corners of its axis-aligned
//! bounding box. Center and radii stay real-valued; coordinates are truncated
//! only when a pixel is emitted.

use super::line::draw_line_bresenham;
use crate::geometry::Point;

/// Rasterize the outline of the ellipse inscribed in the box `corner0`–`corner1`.
///
/// A box with zero height is a horizontal line and is drawn with Bresenham.
#[must_use]
pub fn draw_ellipse(corner0: Point, corner1: Point) -> Vec<Point> {
    if corner0.y == corner1.y {
        return draw_line_bresenham(corner0, corner1);
    }

    let (x0, y0) = (f64::from(corner0.x), f64::from(corner0.y));
    let (x1, y1) = (f64::from(corner1.x), f64::from(corner1.y));
    let cx = (x0 + x1) / 2.0;
    let cy = (y0 + y1) / 2.0;
    let rx = (x1 - x0).abs() / 2.0;
    let ry = (y1 - y0).abs() / 2.0;
    let rx2 = rx * rx;
    let ry2 = ry * ry;

    let mut pixels = Vec::new();
    let mut x = 0.0;
    let mut y = ry;
    push_quadrants(&mut pixels, cx, cy, x, y);

    // Region 1: |slope| < 1, x is the driving axis.
    let mut p1 = ry2 - rx2 * ry + rx2 / 4.0;
    while rx2 * y > ry2 * x {
        x += 1.0;
        if p1 < 0.0 {
            p1 += 2.0 * ry2 * x + ry2;
        } else {
            y -= 1.0;
            p1 += 2.0 * ry2 * x - 2.0 * rx2 * y + ry2;
        }
        push_quadrants(&mut pixels, cx, cy, x, y);
    }

    // Region 2: y is the driving axis. The last pass emits row y = 0.
    let mut p2 = ry2 * (x + 0.5) * (x + 0.5) + rx2 * (y - 1.0) * (y - 1.0) - rx2 * ry2;
    while y > 0.0 {
        y -= 1.0;
        if p2 > 0.0 {
            p2 += -2.0 * rx2 * y + rx2;
        } else {
            x += 1.0;
            p2 += 2.0 * ry2 * x - 2.0 * rx2 * y + rx2;
        }
        push_quadrants(&mut pixels, cx, cy, x, y);
    }

    // The decision loops can stop short of the horizontal extremes. Row
    // y = 0 at the current x is already out.
    if y == 0.0 {
        x += 1.0;
    }
    while x <= rx {
        push_quadrants(&mut pixels, cx, cy, x, 0.0);
        x += 1.0;
    }

    pixels
}

/// Emit `(cx ± x, cy ± y)`, once per distinct reflection.
#[inline]
fn push_quadrants(pixels: &mut Vec<Point>, cx: f64, cy: f64, x: f64, y: f64) {
    let xs: &[f64] = if x == 0.0 { &[0.0] } else { &[x, -x] };
    let ys: &[f64] = if y == 0.0 { &[0.0] } else { &[y, -y] };
    for &sy in ys {
        for &sx in xs {
            pixels.push(Point::new((cx + sx) as i32, (cy + sy) as i32));
        }
    }
}
