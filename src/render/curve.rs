//! Parametric curve evaluation.
//!
//! Curves are sampled at a fixed number of parameter steps and consecutive
//! samples are joined with Bresenham segments so the result is pixel-connected.
//!
//! # Algorithms
//!
//! - **Bézier**: de Casteljau repeated interpolation, any degree.
//! - **B-spline**: uniform cubic (order 4) with Cox–de Boor basis recursion
//!   over the integer knot vector `0, 1, 2, ...`.

use std::fmt;
use std::str::FromStr;

use super::line::LineAlgorithm;
use super::polygon::draw_polyline;
use crate::error::Error;
use crate::geometry::{Point, PointF};

/// Default number of parameter steps per curve.
pub const DEFAULT_CURVE_STEPS: usize = 1000;

/// B-spline order (cubic).
const BSPLINE_ORDER: usize = 4;

/// Curve evaluation algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveAlgorithm {
    /// Bézier curve through de Casteljau evaluation.
    Bezier,
    /// Uniform cubic B-spline.
    BSpline,
}

impl CurveAlgorithm {
    /// Script token for this algorithm.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bezier => "Bezier",
            Self::BSpline => "B-spline",
        }
    }
}

impl fmt::Display for CurveAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bezier" => Ok(Self::Bezier),
            "B-spline" => Ok(Self::BSpline),
            _ => Err(Error::UnknownAlgorithm {
                kind: "curve",
                name: s.to_string(),
            }),
        }
    }
}

/// Rasterize a curve with [`DEFAULT_CURVE_STEPS`] samples.
#[must_use]
pub fn draw_curve(points: &[Point], algorithm: CurveAlgorithm) -> Vec<Point> {
    draw_curve_with_steps(points, algorithm, DEFAULT_CURVE_STEPS)
}

/// Rasterize a curve with an explicit sample count.
#[must_use]
pub fn draw_curve_with_steps(points: &[Point], algorithm: CurveAlgorithm, steps: usize) -> Vec<Point> {
    let samples = match algorithm {
        CurveAlgorithm::Bezier => bezier_points(points, steps),
        CurveAlgorithm::BSpline => bspline_points(points, steps),
    };
    join_samples(&samples)
}

/// Sample a Bézier curve at `steps + 1` evenly spaced parameters in `[0, 1]`.
///
/// Returns an empty list when there are no control points.
#[must_use]
pub fn bezier_points(points: &[Point], steps: usize) -> Vec<PointF> {
    if points.is_empty() {
        return Vec::new();
    }

    let steps = steps.max(1);
    let degree = points.len() - 1;
    let mut work: Vec<PointF> = Vec::with_capacity(points.len());
    let mut samples = Vec::with_capacity(steps + 1);

    for step in 0..=steps {
        let u = step as f64 / steps as f64;
        work.clear();
        work.extend(points.iter().map(|p| p.to_f64()));
        for r in 1..=degree {
            for i in 0..=(degree - r) {
                work[i] = work[i].lerp(work[i + 1], u);
            }
        }
        samples.push(work[0]);
    }

    samples
}

/// Sample a uniform cubic B-spline over its valid domain `[3, n + 1]`.
///
/// `n + 1` is the number of control points. Fewer than four control points
/// define no cubic span, so the result is empty.
#[must_use]
pub fn bspline_points(points: &[Point], steps: usize) -> Vec<PointF> {
    if points.len() < BSPLINE_ORDER {
        return Vec::new();
    }

    let steps = steps.max(1);
    let n = points.len() - 1;
    let start = (BSPLINE_ORDER - 1) as f64;
    let span = (n + 2 - BSPLINE_ORDER) as f64;
    // Order-1 indicators need one entry per knot interval up to n + order - 1.
    let mut basis = vec![0.0_f64; n + BSPLINE_ORDER];
    let mut samples = Vec::with_capacity(steps + 1);

    for step in 0..=steps {
        let u = start + span * step as f64 / steps as f64;

        for (i, b) in basis.iter_mut().enumerate() {
            let t = i as f64;
            *b = if t <= u && u < t + 1.0 { 1.0 } else { 0.0 };
        }

        for k in 2..=BSPLINE_ORDER {
            let denom = (k - 1) as f64;
            for i in 0..=(n + BSPLINE_ORDER - k) {
                let t = i as f64;
                basis[i] = basis[i] * (u - t) / denom + basis[i + 1] * (t + k as f64 - u) / denom;
            }
        }

        let point = points
            .iter()
            .zip(&basis)
            .fold(PointF::default(), |acc, (p, &b)| {
                PointF::new(acc.x + f64::from(p.x) * b, acc.y + f64::from(p.y) * b)
            });
        samples.push(point);
    }

    samples
}

/// Truncate samples to pixels and connect them with Bresenham segments.
fn join_samples(samples: &[PointF]) -> Vec<Point> {
    let mut vertices: Vec<Point> = samples.iter().map(|p| p.truncate()).collect();
    vertices.dedup();

    if vertices.len() == 1 {
        return vertices;
    }
    draw_polyline(&vertices, LineAlgorithm::Bresenham)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("Bezier".parse::<CurveAlgorithm>().unwrap(), CurveAlgorithm::Bezier);
        assert_eq!("B-spline".parse::<CurveAlgorithm>().unwrap(), CurveAlgorithm::BSpline);
        assert!("Bspline".parse::<CurveAlgorithm>().is_err());
    }

    #[test]
    fn test_bezier_endpoints() {
        let ctrl = pts(&[(0, 0), (10, 40), (30, -20), (50, 0)]);
        let samples = bezier_points(&ctrl, 100);
        assert_eq!(samples.len(), 101);
        assert_relative_eq!(samples[0].x, 0.0);
        assert_relative_eq!(samples[100].x, 50.0);
        assert_relative_eq!(samples[100].y, 0.0);
    }

    #[test]
    fn test_bezier_quadratic_midpoint() {
        // B(0.5) = 0.25 P0 + 0.5 P1 + 0.25 P2
        let ctrl = pts(&[(0, 0), (10, 20), (20, 0)]);
        let samples = bezier_points(&ctrl, 2);
        assert_relative_eq!(samples[1].x, 10.0);
        assert_relative_eq!(samples[1].y, 10.0);
    }

    #[test]
    fn test_bezier_two_points_is_straight() {
        let pixels = draw_curve(&pts(&[(0, 0), (10, 10)]), CurveAlgorithm::Bezier);
        assert!(!pixels.is_empty());
        assert!(pixels.iter().all(|p| p.x == p.y));
        assert!(pixels.contains(&Point::new(0, 0)));
        assert!(pixels.contains(&Point::new(10, 10)));

        let pixels = draw_curve(&pts(&[(2, 5), (40, 5)]), CurveAlgorithm::Bezier);
        assert!(pixels.iter().all(|p| p.y == 5));
    }

    #[test]
    fn test_bezier_single_point() {
        let pixels = draw_curve(&pts(&[(4, 4)]), CurveAlgorithm::Bezier);
        assert_eq!(pixels, vec![Point::new(4, 4)]);
        assert!(draw_curve(&[], CurveAlgorithm::Bezier).is_empty());
    }

    #[test]
    fn test_bspline_too_few_points() {
        assert!(draw_curve(&pts(&[(0, 0), (5, 5), (10, 0)]), CurveAlgorithm::BSpline).is_empty());
        assert!(bspline_points(&pts(&[(0, 0)]), 10).is_empty());
    }

    #[test]
    fn test_bspline_start_point() {
        // At the first knot the cubic basis weights are 1/6, 4/6, 1/6.
        let ctrl = pts(&[(0, 0), (6, 12), (12, 0), (18, 12)]);
        let samples = bspline_points(&ctrl, 10);
        assert_eq!(samples.len(), 11);
        assert_relative_eq!(samples[0].x, 6.0, epsilon = 1e-9);
        assert_relative_eq!(samples[0].y, 8.0, epsilon = 1e-9);
        assert_relative_eq!(samples[10].x, 12.0, epsilon = 1e-9);
        assert_relative_eq!(samples[10].y, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bspline_collinear_stays_on_line() {
        let ctrl = pts(&[(0, 0), (10, 0), (20, 0), (30, 0), (40, 0)]);
        let samples = bspline_points(&ctrl, 50);
        for s in &samples {
            assert_relative_eq!(s.y, 0.0, epsilon = 1e-9);
            assert!(s.x >= 10.0 - 1e-9 && s.x <= 30.0 + 1e-9);
        }
    }

    /// Flood fill over 8-neighbors; segments are emitted in axis order, so
    /// adjacency is checked on the pixel set rather than the sequence.
    fn is_connected(pixels: &[Point]) -> bool {
        let set: HashSet<Point> = pixels.iter().copied().collect();
        let mut seen = HashSet::from([pixels[0]]);
        let mut stack = vec![pixels[0]];
        while let Some(p) = stack.pop() {
            for dx in -1..=1 {
                for dy in -1..=1 {
                    let q = Point::new(p.x + dx, p.y + dy);
                    if set.contains(&q) && seen.insert(q) {
                        stack.push(q);
                    }
                }
            }
        }
        seen.len() == set.len()
    }

    #[test]
    fn test_curve_is_connected() {
        let ctrl = pts(&[(0, 0), (30, 80), (90, -40), (120, 60), (150, 0)]);
        for alg in [CurveAlgorithm::Bezier, CurveAlgorithm::BSpline] {
            let pixels = draw_curve(&ctrl, alg);
            assert!(!pixels.is_empty());
            assert!(is_connected(&pixels), "{alg} curve has a gap");
        }
    }

    #[test]
    fn test_steps_zero_treated_as_one() {
        let samples = bezier_points(&pts(&[(0, 0), (8, 8)]), 0);
        assert_eq!(samples.len(), 2);
    }
}
