//! Line clipping against a rectangular window.
//!
//! Both algorithms work on real-valued endpoints and truncate the clipped
//! endpoints toward zero. A segment with no part inside the window yields
//! `None`.
//!
//! # References
//!
//! - Newman, W. M., & Sproull, R. F. (1979). *Principles of Interactive Computer Graphics*.
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A New Concept and Method for Line Clipping."
//!   ACM Transactions on Graphics, 3(1), 1-22.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::geometry::{ClipWindow, Point, PointF};

/// Outcode bit: left of `x_min`.
pub const LEFT: u8 = 0b0001;
/// Outcode bit: right of `x_max`.
pub const RIGHT: u8 = 0b0010;
/// Outcode bit: below `y_min`.
pub const BOTTOM: u8 = 0b0100;
/// Outcode bit: above `y_max`.
pub const TOP: u8 = 0b1000;

/// Line clipping algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipAlgorithm {
    /// Region-code clipping.
    CohenSutherland,
    /// Parametric clipping.
    LiangBarsky,
}

impl ClipAlgorithm {
    /// Script token for this algorithm.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CohenSutherland => "Cohen-Sutherland",
            Self::LiangBarsky => "Liang-Barsky",
        }
    }
}

impl fmt::Display for ClipAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClipAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cohen-Sutherland" => Ok(Self::CohenSutherland),
            "Liang-Barsky" => Ok(Self::LiangBarsky),
            _ => Err(Error::UnknownAlgorithm {
                kind: "clip",
                name: s.to_string(),
            }),
        }
    }
}

/// Clip the segment `p0 -> p1` to `window`.
///
/// ```
/// use trueno_raster::clip::{clip_line, ClipAlgorithm};
/// use trueno_raster::geometry::{ClipWindow, Point};
///
/// let window = ClipWindow::new(0, 0, 10, 10);
/// let clipped = clip_line(Point::new(5, 5), Point::new(15, 5), window, ClipAlgorithm::LiangBarsky);
/// assert_eq!(clipped, Some([Point::new(5, 5), Point::new(10, 5)]));
/// ```
#[must_use]
pub fn clip_line(
    p0: Point,
    p1: Point,
    window: ClipWindow,
    algorithm: ClipAlgorithm,
) -> Option<[Point; 2]> {
    match algorithm {
        ClipAlgorithm::CohenSutherland => clip_cohen_sutherland(p0, p1, window),
        ClipAlgorithm::LiangBarsky => clip_liang_barsky(p0, p1, window),
    }
}

/// Compute the 4-bit region code of `(x, y)` relative to `window`.
#[inline]
#[must_use]
pub fn outcode(p: PointF, window: ClipWindow) -> u8 {
    let mut code = 0;
    if p.x < f64::from(window.x_min) {
        code |= LEFT;
    } else if p.x > f64::from(window.x_max) {
        code |= RIGHT;
    }
    if p.y < f64::from(window.y_min) {
        code |= BOTTOM;
    } else if p.y > f64::from(window.y_max) {
        code |= TOP;
    }
    code
}

/// Cohen–Sutherland clipping.
///
/// An outside endpoint is moved onto one boundary per iteration, tested in
/// the order left, right, top, bottom, until the segment is trivially
/// accepted or rejected.
#[must_use]
pub fn clip_cohen_sutherland(p0: Point, p1: Point, window: ClipWindow) -> Option<[Point; 2]> {
    let x_min = f64::from(window.x_min);
    let x_max = f64::from(window.x_max);
    let y_min = f64::from(window.y_min);
    let y_max = f64::from(window.y_max);

    let mut a = p0.to_f64();
    let mut b = p1.to_f64();
    let mut code_a = outcode(a, window);
    let mut code_b = outcode(b, window);

    loop {
        if code_a | code_b == 0 {
            return Some([a.truncate(), b.truncate()]);
        }
        if code_a & code_b != 0 {
            return None;
        }

        let code = if code_a != 0 { code_a } else { code_b };
        let dx = b.x - a.x;
        let dy = b.y - a.y;

        // A set bit on one endpoint only means the segment crosses that
        // boundary, so the matching delta is non-zero.
        let moved = if code & LEFT != 0 {
            PointF::new(x_min, a.y + dy * (x_min - a.x) / dx)
        } else if code & RIGHT != 0 {
            PointF::new(x_max, a.y + dy * (x_max - a.x) / dx)
        } else if code & TOP != 0 {
            PointF::new(a.x + dx * (y_max - a.y) / dy, y_max)
        } else {
            PointF::new(a.x + dx * (y_min - a.y) / dy, y_min)
        };

        if code_a != 0 {
            a = moved;
            code_a = outcode(a, window);
        } else {
            b = moved;
            code_b = outcode(b, window);
        }
    }
}

/// Liang–Barsky clipping.
///
/// With direction `d = p1 - p0`, the boundary inequalities become
/// `u·p_k <= q_k` for `k` in left, right, bottom, top. Segments parallel to an
/// axis are rejected from the sign of `q` alone and only constrained by the
/// other pair of boundaries.
#[must_use]
pub fn clip_liang_barsky(p0: Point, p1: Point, window: ClipWindow) -> Option<[Point; 2]> {
    let start = p0.to_f64();
    let end = p1.to_f64();
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    let p = [-dx, dx, -dy, dy];
    let q = [
        start.x - f64::from(window.x_min),
        f64::from(window.x_max) - start.x,
        start.y - f64::from(window.y_min),
        f64::from(window.y_max) - start.y,
    ];

    let range = if p[0] == 0.0 {
        if q[0] < 0.0 || q[1] < 0.0 {
            return None;
        }
        narrow(&p[2..], &q[2..])
    } else if p[2] == 0.0 {
        if q[2] < 0.0 || q[3] < 0.0 {
            return None;
        }
        narrow(&p[..2], &q[..2])
    } else {
        narrow(&p, &q)
    };

    let (u1, u2) = range?;
    Some([
        PointF::new(start.x + u1 * dx, start.y + u1 * dy).truncate(),
        PointF::new(start.x + u2 * dx, start.y + u2 * dy).truncate(),
    ])
}

/// Tighten `[0, 1]` against the given boundary pairs.
fn narrow(p: &[f64], q: &[f64]) -> Option<(f64, f64)> {
    let mut u1 = 0.0_f64;
    let mut u2 = 1.0_f64;

    for (&pk, &qk) in p.iter().zip(q) {
        if pk < 0.0 {
            u1 = u1.max(qk / pk);
        } else if pk > 0.0 {
            u2 = u2.min(qk / pk);
        } else if qk < 0.0 {
            return None;
        }
    }

    (u1 <= u2).then_some((u1, u2))
}
