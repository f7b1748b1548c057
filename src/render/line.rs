//! Line rasterization.
//!
//! Three variants convert a pair of integer endpoints into an ordered pixel list:
//!
//! - **Naive**: evaluates the line equation along the dominant axis.
//! - **DDA**: accumulates a real-valued off-axis coordinate per step.
//! - **Bresenham**: integer-only decision variable.
//!
//! Every variant includes both endpoints, is 8-connected, and orders its output
//! low-to-high along the sampled axis regardless of the order the endpoints
//! were given in.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::geometry::Point;

/// Line rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineAlgorithm {
    /// Direct evaluation of `y = y0 + k * (x - x0)`.
    Naive,
    /// Digital Differential Analyzer.
    Dda,
    /// Bresenham's integer algorithm.
    Bresenham,
}

impl LineAlgorithm {
    /// Script token for this algorithm.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Naive => "Naive",
            Self::Dda => "DDA",
            Self::Bresenham => "Bresenham",
        }
    }
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Naive" => Ok(Self::Naive),
            "DDA" => Ok(Self::Dda),
            "Bresenham" => Ok(Self::Bresenham),
            _ => Err(Error::UnknownAlgorithm {
                kind: "line",
                name: s.to_string(),
            }),
        }
    }
}

/// Rasterize the segment `p0 -> p1` with the selected algorithm.
///
/// # Example
///
/// ```
/// use trueno_raster::geometry::Point;
/// use trueno_raster::render::{draw_line, LineAlgorithm};
///
/// let pixels = draw_line(Point::new(0, 0), Point::new(3, 0), LineAlgorithm::Bresenham);
/// assert_eq!(pixels.len(), 4);
/// ```
#[must_use]
pub fn draw_line(p0: Point, p1: Point, algorithm: LineAlgorithm) -> Vec<Point> {
    match algorithm {
        LineAlgorithm::Naive => draw_line_naive(p0, p1),
        LineAlgorithm::Dda => draw_line_dda(p0, p1),
        LineAlgorithm::Bresenham => draw_line_bresenham(p0, p1),
    }
}

/// Naive line: evaluate the line equation at every integer step of the
/// dominant axis and truncate the other coordinate.
#[must_use]
pub fn draw_line_naive(p0: Point, p1: Point) -> Vec<Point> {
    let (dx, dy) = deltas(p0, p1);

    if dx == 0 {
        return vertical(p0.x, p0.y, p1.y);
    }

    if dx.abs() >= dy.abs() {
        let (a, b) = if p0.x <= p1.x { (p0, p1) } else { (p1, p0) };
        let k = slope(b.y, a.y, b.x, a.x);
        let mut pixels: Vec<Point> = (a.x..=b.x)
            .map(|x| Point::new(x, (f64::from(a.y) + k * (f64::from(x) - f64::from(a.x))) as i32))
            .collect();
        pin_end(&mut pixels, b);
        pixels
    } else {
        let (a, b) = if p0.y <= p1.y { (p0, p1) } else { (p1, p0) };
        let k = slope(b.x, a.x, b.y, a.y);
        let mut pixels: Vec<Point> = (a.y..=b.y)
            .map(|y| Point::new((f64::from(a.x) + k * (f64::from(y) - f64::from(a.y))) as i32, y))
            .collect();
        pin_end(&mut pixels, b);
        pixels
    }
}

/// DDA line: step the dominant axis by one and accumulate the slope on the
/// other axis.
#[must_use]
pub fn draw_line_dda(p0: Point, p1: Point) -> Vec<Point> {
    let (dx, dy) = deltas(p0, p1);

    if dx == 0 && dy == 0 {
        return vec![p0];
    }

    let mut pixels = Vec::with_capacity(dx.unsigned_abs().max(dy.unsigned_abs()) as usize + 1);

    if dx.abs() >= dy.abs() {
        let (a, b) = if p0.x <= p1.x { (p0, p1) } else { (p1, p0) };
        let k = slope(b.y, a.y, b.x, a.x);
        let mut y = f64::from(a.y);
        for x in a.x..=b.x {
            pixels.push(Point::new(x, y as i32));
            y += k;
        }
        pin_end(&mut pixels, b);
    } else {
        let (a, b) = if p0.y <= p1.y { (p0, p1) } else { (p1, p0) };
        let k = slope(b.x, a.x, b.y, a.y);
        let mut x = f64::from(a.x);
        for y in a.y..=b.y {
            pixels.push(Point::new(x as i32, y));
            x += k;
        }
        pin_end(&mut pixels, b);
    }

    pixels
}

/// Bresenham line.
///
/// Axis-aligned and exact 45° segments are emitted directly. Otherwise the
/// decision variable `p` starts at `2·minor - major` and the off-axis
/// coordinate only advances when `p > 0`; `p == 0` keeps it in place.
#[must_use]
pub fn draw_line_bresenham(p0: Point, p1: Point) -> Vec<Point> {
    let (dx, dy) = deltas(p0, p1);
    let (dx, dy) = (dx.abs(), dy.abs());

    if dx == 0 {
        return vertical(p0.x, p0.y, p1.y);
    }
    if dy == 0 {
        return horizontal(p0.y, p0.x, p1.x);
    }

    if dx == dy {
        let (a, b) = if p0.x <= p1.x { (p0, p1) } else { (p1, p0) };
        let uy: i64 = if a.y < b.y { 1 } else { -1 };
        return (0..=dx)
            .map(|i| Point::new((i64::from(a.x) + i) as i32, (i64::from(a.y) + uy * i) as i32))
            .collect();
    }

    let mut pixels = Vec::with_capacity(dx.max(dy) as usize + 1);

    if dy < dx {
        let (a, b) = if p0.x <= p1.x { (p0, p1) } else { (p1, p0) };
        let uy = if a.y < b.y { 1 } else { -1 };
        let mut y = a.y;
        let mut p = 2 * dy - dx;
        pixels.push(a);
        for x in (a.x + 1)..=b.x {
            if p > 0 {
                y += uy;
                p += 2 * dy - 2 * dx;
            } else {
                p += 2 * dy;
            }
            pixels.push(Point::new(x, y));
        }
    } else {
        let (a, b) = if p0.y <= p1.y { (p0, p1) } else { (p1, p0) };
        let ux = if a.x < b.x { 1 } else { -1 };
        let mut x = a.x;
        let mut p = 2 * dx - dy;
        pixels.push(a);
        for y in (a.y + 1)..=b.y {
            if p > 0 {
                x += ux;
                p += 2 * dx - 2 * dy;
            } else {
                p += 2 * dx;
            }
            pixels.push(Point::new(x, y));
        }
    }

    pixels
}

/// Endpoint differences, widened so opposite extremes of `i32` cannot overflow.
#[inline]
fn deltas(p0: Point, p1: Point) -> (i64, i64) {
    (i64::from(p1.x) - i64::from(p0.x), i64::from(p1.y) - i64::from(p0.y))
}

/// `(n1 - n0) / (d1 - d0)` with the differences taken in `f64`.
#[inline]
fn slope(n1: i32, n0: i32, d1: i32, d0: i32) -> f64 {
    (f64::from(n1) - f64::from(n0)) / (f64::from(d1) - f64::from(d0))
}

#[inline]
fn vertical(x: i32, y0: i32, y1: i32) -> Vec<Point> {
    (y0.min(y1)..=y0.max(y1)).map(|y| Point::new(x, y)).collect()
}

#[inline]
fn horizontal(y: i32, x0: i32, x1: i32) -> Vec<Point> {
    (x0.min(x1)..=x0.max(x1)).map(|x| Point::new(x, y)).collect()
}

/// Float error must not move the closing sample off the endpoint.
#[inline]
fn pin_end(pixels: &mut [Point], end: Point) {
    if let Some(last) = pixels.last_mut() {
        *last = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MAX_COORDINATE;
    use std::collections::HashSet;

    const ALL: [LineAlgorithm; 3] =
        [LineAlgorithm::Naive, LineAlgorithm::Dda, LineAlgorithm::Bresenham];

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("Naive".parse::<LineAlgorithm>().unwrap(), LineAlgorithm::Naive);
        assert_eq!("DDA".parse::<LineAlgorithm>().unwrap(), LineAlgorithm::Dda);
        assert_eq!("Bresenham".parse::<LineAlgorithm>().unwrap(), LineAlgorithm::Bresenham);
        assert!("bresenham".parse::<LineAlgorithm>().is_err());
        assert!("Wu".parse::<LineAlgorithm>().is_err());
    }

    #[test]
    fn test_display_roundtrips_token() {
        for alg in ALL {
            assert_eq!(alg.to_string().parse::<LineAlgorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn test_horizontal_dda_and_bresenham() {
        let expected = pts(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]);
        assert_eq!(draw_line_dda(Point::new(0, 0), Point::new(5, 0)), expected);
        assert_eq!(draw_line_bresenham(Point::new(0, 0), Point::new(5, 0)), expected);
    }

    #[test]
    fn test_coincident_endpoints_single_pixel() {
        let p = Point::new(7, -3);
        for alg in ALL {
            assert_eq!(draw_line(p, p, alg), vec![p], "{alg}");
        }
    }

    #[test]
    fn test_vertical_reversed_is_ascending() {
        let pixels = draw_line_bresenham(Point::new(2, 5), Point::new(2, 1));
        assert_eq!(pixels, pts(&[(2, 1), (2, 2), (2, 3), (2, 4), (2, 5)]));
    }

    #[test]
    fn test_bresenham_diagonal() {
        let pixels = draw_line_bresenham(Point::new(3, 0), Point::new(0, 3));
        assert_eq!(pixels, pts(&[(0, 3), (1, 2), (2, 1), (3, 0)]));
    }

    #[test]
    fn test_bresenham_tie_keeps_off_axis() {
        // p starts at 2*1 - 2 = 0: the first step must stay on y = 0.
        let pixels = draw_line_bresenham(Point::new(0, 0), Point::new(2, 1));
        assert_eq!(pixels, pts(&[(0, 0), (1, 0), (2, 1)]));

        let pixels = draw_line_bresenham(Point::new(0, 0), Point::new(4, 2));
        assert_eq!(pixels, pts(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]));
    }

    #[test]
    fn test_bresenham_steep() {
        let pixels = draw_line_bresenham(Point::new(0, 0), Point::new(1, 3));
        assert_eq!(pixels, pts(&[(0, 0), (0, 1), (1, 2), (1, 3)]));
    }

    #[test]
    fn test_bresenham_negative_slope() {
        let pixels = draw_line_bresenham(Point::new(0, 0), Point::new(3, -1));
        assert_eq!(pixels, pts(&[(0, 0), (1, 0), (2, -1), (3, -1)]));
    }

    #[test]
    fn test_naive_truncates() {
        // k = 0.5: y = 0, 0.5, 1.0, 1.5, 2.0
        let pixels = draw_line_naive(Point::new(0, 0), Point::new(4, 2));
        assert_eq!(pixels, pts(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]));
    }

    #[test]
    fn test_naive_reorders_high_to_low() {
        let pixels = draw_line_naive(Point::new(4, 2), Point::new(0, 0));
        assert_eq!(pixels.first(), Some(&Point::new(0, 0)));
        assert_eq!(pixels.last(), Some(&Point::new(4, 2)));
    }

    #[test]
    fn test_naive_steep_is_connected() {
        let pixels = draw_line_naive(Point::new(0, 0), Point::new(2, 8));
        assert_eq!(pixels.len(), 9);
        assert_connected(&pixels);
    }

    #[test]
    fn test_dda_steep() {
        // k = 0.25 on x while stepping y.
        let pixels = draw_line_dda(Point::new(0, 0), Point::new(1, 4));
        assert_eq!(pixels, pts(&[(0, 0), (0, 1), (0, 2), (0, 3), (1, 4)]));
    }

    #[test]
    fn test_dda_negative_coordinates_truncate_toward_zero() {
        // y runs 0, -0.5, -1.0: -0.5 truncates to 0.
        let pixels = draw_line_dda(Point::new(0, 0), Point::new(2, -1));
        assert_eq!(pixels, pts(&[(0, 0), (1, 0), (2, -1)]));
    }

    #[test]
    fn test_swapped_endpoints_same_set() {
        let a = Point::new(-3, 2);
        let b = Point::new(11, 7);
        for alg in ALL {
            let fwd: HashSet<Point> = draw_line(a, b, alg).into_iter().collect();
            let rev: HashSet<Point> = draw_line(b, a, alg).into_iter().collect();
            assert_eq!(fwd, rev, "{alg}");
        }
    }

    #[test]
    fn test_extreme_coordinates() {
        let a = Point::new(i32::MAX - 3, i32::MIN);
        let b = Point::new(i32::MAX, i32::MIN + 2);
        for alg in ALL {
            let pixels = draw_line(b, a, alg);
            assert_eq!(pixels.len(), 4, "{alg}");
            assert_eq!(pixels.first(), Some(&a), "{alg}");
            assert_eq!(pixels.last(), Some(&b), "{alg}");
        }
    }

    #[test]
    fn test_full_coordinate_range() {
        let a = Point::new(-MAX_COORDINATE, -MAX_COORDINATE);
        let b = Point::new(MAX_COORDINATE, MAX_COORDINATE - 1);
        for alg in ALL {
            let pixels = draw_line(a, b, alg);
            assert_eq!(pixels.len(), 2 * MAX_COORDINATE as usize + 1, "{alg}");
            assert_eq!(pixels.first(), Some(&a), "{alg}");
            assert_eq!(pixels.last(), Some(&b), "{alg}");
        }
    }

    fn assert_connected(pixels: &[Point]) {
        for w in pixels.windows(2) {
            let (dx, dy) = ((w[1].x - w[0].x).abs(), (w[1].y - w[0].y).abs());
            assert!(dx <= 1 && dy <= 1, "gap between {:?} and {:?}", w[0], w[1]);
        }
    }
}
