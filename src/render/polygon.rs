//! Multi-segment rasterization (polylines and closed polygons).
//!
//! Segments are rasterized independently and concatenated literally: a vertex
//! shared by two edges appears once per edge.

use super::line::{draw_line, LineAlgorithm};
use crate::geometry::Point;

/// Rasterize an open polyline through `points`.
///
/// Fewer than two vertices produce no pixels.
#[must_use]
pub fn draw_polyline(points: &[Point], algorithm: LineAlgorithm) -> Vec<Point> {
    points
        .windows(2)
        .flat_map(|edge| draw_line(edge[0], edge[1], algorithm))
        .collect()
}

/// Rasterize a closed polygon.
///
/// Edge `i` runs from vertex `i - 1` to vertex `i`, with edge 0 wrapping
/// around from the last vertex, so the outline starts and ends on the last
/// vertex.
#[must_use]
pub fn draw_polygon(points: &[Point], algorithm: LineAlgorithm) -> Vec<Point> {
    let n = points.len();
    (0..n)
        .flat_map(|i| draw_line(points[(i + n - 1) % n], points[i], algorithm))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn triangle() -> Vec<Point> {
        vec![Point::new(0, 0), Point::new(4, 0), Point::new(0, 4)]
    }

    #[test]
    fn test_polyline_concatenates_in_order() {
        let pts = [Point::new(0, 0), Point::new(2, 0), Point::new(2, 2)];
        let pixels = draw_polyline(&pts, LineAlgorithm::Bresenham);
        assert_eq!(
            pixels,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_polyline_degenerate() {
        assert!(draw_polyline(&[], LineAlgorithm::Dda).is_empty());
        assert!(draw_polyline(&[Point::new(1, 1)], LineAlgorithm::Dda).is_empty());
    }

    #[test]
    fn test_polygon_includes_closing_edge() {
        let pts = triangle();
        let polygon: HashSet<Point> =
            draw_polygon(&pts, LineAlgorithm::Bresenham).into_iter().collect();
        let polyline: HashSet<Point> =
            draw_polyline(&pts, LineAlgorithm::Bresenham).into_iter().collect();

        assert!(polygon.is_superset(&polyline));
        assert!(polygon.len() > polyline.len());
        for y in 0..=4 {
            assert!(polygon.contains(&Point::new(0, y)));
        }
    }

    #[test]
    fn test_polygon_edge_count() {
        // Square with 4 edges of 3 pixels each.
        let pts = [Point::new(0, 0), Point::new(2, 0), Point::new(2, 2), Point::new(0, 2)];
        let pixels = draw_polygon(&pts, LineAlgorithm::Dda);
        assert_eq!(pixels.len(), 12);
    }

    #[test]
    fn test_polygon_single_vertex() {
        let pixels = draw_polygon(&[Point::new(3, 3)], LineAlgorithm::Bresenham);
        assert_eq!(pixels, vec![Point::new(3, 3)]);
    }
}
