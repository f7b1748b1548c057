//! Ordered collection of named primitives.
//!
//! A [`Scene`] owns the primitives a script or editor has defined, keyed by
//! id and kept in insertion order, which is also the paint order. Edits never
//! mutate a point list in place: each transform computes a new list and swaps
//! it into the stored primitive.
//!
//! The scene also enforces the editing policies the kernel leaves to its
//! callers: ellipses cannot be rotated, only lines can be clipped, and a clip
//! that leaves nothing visible deletes the primitive. A transform that would
//! move a control point outside `±MAX_COORDINATE` is rejected and leaves the
//! primitive unchanged.

use crate::clip::{clip_line, ClipAlgorithm};
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{ClipWindow, Point, PointF, MAX_COORDINATE};
use crate::primitive::{Drawable, Primitive, PrimitiveKind};
use crate::transform;

/// Insertion-ordered map from primitive id to [`Primitive`].
#[derive(Debug, Clone, Default)]
pub struct Scene {
    items: Vec<(String, Primitive)>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live primitives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the scene holds no primitives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every primitive.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Define a primitive under `id`.
    ///
    /// Redefining an existing id replaces the primitive in place, so it keeps
    /// its position in paint order. Returns the replaced primitive, if any.
    pub fn insert(&mut self, id: impl Into<String>, primitive: Primitive) -> Option<Primitive> {
        let id = id.into();
        match self.position(&id) {
            Some(idx) => Some(std::mem::replace(&mut self.items[idx].1, primitive)),
            None => {
                self.items.push((id, primitive));
                None
            }
        }
    }

    /// Look up a primitive by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Primitive> {
        self.items.iter().find(|(key, _)| key == id).map(|(_, prim)| prim)
    }

    /// Remove a primitive by id, returning it.
    pub fn remove(&mut self, id: &str) -> Option<Primitive> {
        self.position(id).map(|idx| self.items.remove(idx).1)
    }

    /// Iterate over `(id, primitive)` pairs in paint order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Primitive)> {
        self.items.iter().map(|(id, prim)| (id.as_str(), prim))
    }

    /// Translate a primitive by `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPrimitive`] if `id` is not defined, or
    /// [`Error::CoordinateOutOfRange`] if a point would leave the drawable range.
    pub fn translate(&mut self, id: &str, dx: i32, dy: i32) -> Result<()> {
        let prim = self.get_mut(id)?;
        check_range(
            prim.points
                .iter()
                .flat_map(|p| [i64::from(p.x) + i64::from(dx), i64::from(p.y) + i64::from(dy)]),
        )?;
        prim.points = transform::translate(&prim.points, dx, dy);
        Ok(())
    }

    /// Rotate a primitive about `pivot` by `degrees`, clockwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPrimitive`] if `id` is not defined,
    /// [`Error::UnsupportedOperation`] if the primitive is an ellipse, or
    /// [`Error::CoordinateOutOfRange`] if a point would leave the drawable range.
    pub fn rotate(&mut self, id: &str, pivot: impl Into<PointF>, degrees: f64) -> Result<()> {
        let prim = self.get_mut(id)?;
        if prim.kind == PrimitiveKind::Ellipse {
            return Err(Error::UnsupportedOperation {
                operation: "rotate",
                kind: prim.kind.name(),
            });
        }
        prim.points = checked(transform::rotate(&prim.points, pivot, degrees))?;
        Ok(())
    }

    /// Scale a primitive about `pivot` by `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPrimitive`] if `id` is not defined, or
    /// [`Error::CoordinateOutOfRange`] if a point would leave the drawable range.
    pub fn scale(&mut self, id: &str, pivot: impl Into<PointF>, factor: f64) -> Result<()> {
        let prim = self.get_mut(id)?;
        prim.points = checked(transform::scale(&prim.points, pivot, factor))?;
        Ok(())
    }

    /// Clip a line primitive to `window`.
    ///
    /// Returns `Ok(true)` if the line survived (possibly shortened) and
    /// `Ok(false)` if it fell entirely outside the window and was removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPrimitive`] if `id` is not defined, or
    /// [`Error::UnsupportedOperation`] if the primitive is not a line.
    pub fn clip(&mut self, id: &str, window: ClipWindow, algorithm: ClipAlgorithm) -> Result<bool> {
        let prim = self.get_mut(id)?;
        let (p0, p1) = match (prim.kind, prim.points.as_slice()) {
            (PrimitiveKind::Line(_), [p0, p1, ..]) => (*p0, *p1),
            _ => {
                return Err(Error::UnsupportedOperation {
                    operation: "clip",
                    kind: prim.kind.name(),
                })
            }
        };

        match clip_line(p0, p1, window, algorithm) {
            Some(clipped) => {
                prim.points = clipped.to_vec();
                Ok(true)
            }
            None => {
                self.remove(id);
                Ok(false)
            }
        }
    }

    /// Paint every primitive into `fb` in insertion order.
    pub fn render(&self, fb: &mut Framebuffer, curve_steps: usize) {
        for (_, prim) in &self.items {
            prim.draw_with_steps(fb, curve_steps);
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|(key, _)| key == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Primitive> {
        self.items
            .iter_mut()
            .find(|(key, _)| key == id)
            .map(|(_, prim)| prim)
            .ok_or_else(|| Error::UnknownPrimitive(id.to_string()))
    }
}

/// Pass `points` through if every coordinate is drawable.
///
/// Real-valued transforms saturate when truncated, so an overflowing result
/// always lands outside the range.
fn checked(points: Vec<Point>) -> Result<Vec<Point>> {
    check_range(points.iter().flat_map(|p| [i64::from(p.x), i64::from(p.y)]))?;
    Ok(points)
}

fn check_range(values: impl IntoIterator<Item = i64>) -> Result<()> {
    match values.into_iter().find(|v| v.abs() > i64::from(MAX_COORDINATE)) {
        Some(value) => Err(Error::CoordinateOutOfRange { value }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::render::{CurveAlgorithm, LineAlgorithm};

    fn line(x0: i32, y0: i32, x1: i32, y1: i32) -> Primitive {
        Primitive::new(
            PrimitiveKind::Line(LineAlgorithm::Bresenham),
            vec![Point::new(x0, y0), Point::new(x1, y1)],
            Rgba::BLACK,
        )
    }

    fn ellipse() -> Primitive {
        Primitive::new(
            PrimitiveKind::Ellipse,
            vec![Point::new(0, 0), Point::new(10, 6)],
            Rgba::BLACK,
        )
    }

    #[test]
    fn test_insert_and_get() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        assert!(scene.insert("a", line(0, 0, 5, 5)).is_none());
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.get("a").unwrap().points[1], Point::new(5, 5));
        assert!(scene.get("b").is_none());
    }

    #[test]
    fn test_redefine_keeps_order() {
        let mut scene = Scene::new();
        scene.insert("a", line(0, 0, 1, 1));
        scene.insert("b", line(0, 0, 2, 2));
        let old = scene.insert("a", line(0, 0, 3, 3));

        assert_eq!(old.unwrap().points[1], Point::new(1, 1));
        let ids: Vec<&str> = scene.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(scene.get("a").unwrap().points[1], Point::new(3, 3));
    }

    #[test]
    fn test_translate() {
        let mut scene = Scene::new();
        scene.insert("a", line(0, 0, 5, 5));
        scene.translate("a", 2, -1).unwrap();
        assert_eq!(scene.get("a").unwrap().points, vec![Point::new(2, -1), Point::new(7, 4)]);
    }

    #[test]
    fn test_unknown_id() {
        let mut scene = Scene::new();
        scene.insert("a", line(0, 0, 5, 5));
        let err = scene.translate("zzz", 1, 1).unwrap_err();
        assert!(matches!(err, Error::UnknownPrimitive(ref id) if id == "zzz"));
        assert_eq!(scene.get("a").unwrap().points[0], Point::ORIGIN);
    }

    #[test]
    fn test_translate_out_of_range_rejected() {
        let mut scene = Scene::new();
        scene.insert("a", line(1, 1, 5, 5));
        let err = scene.translate("a", i32::MAX, 0).unwrap_err();
        assert!(matches!(err, Error::CoordinateOutOfRange { value } if value == i64::from(i32::MAX) + 1));
        assert_eq!(scene.get("a").unwrap().points, line(1, 1, 5, 5).points);

        scene.translate("a", MAX_COORDINATE - 5, 0).unwrap();
        assert_eq!(scene.get("a").unwrap().points[1], Point::new(MAX_COORDINATE, 5));
    }

    #[test]
    fn test_scale_out_of_range_rejected() {
        let mut scene = Scene::new();
        scene.insert("a", line(1, 1, 5, 5));
        assert!(matches!(
            scene.scale("a", Point::ORIGIN, 1e12),
            Err(Error::CoordinateOutOfRange { .. })
        ));
        assert!(matches!(
            scene.rotate("a", PointF::new(-1e15, 0.0), 180.0),
            Err(Error::CoordinateOutOfRange { .. })
        ));
        assert_eq!(scene.get("a").unwrap().points, line(1, 1, 5, 5).points);
    }

    #[test]
    fn test_rotate_ellipse_rejected() {
        let mut scene = Scene::new();
        scene.insert("e", ellipse());
        let err = scene.rotate("e", Point::ORIGIN, 90.0).unwrap_err();
        assert!(matches!(err, Error::UnsupportedOperation { operation: "rotate", .. }));
        assert_eq!(scene.get("e").unwrap().points, ellipse().points);
    }

    #[test]
    fn test_scale_ellipse_allowed() {
        let mut scene = Scene::new();
        scene.insert("e", ellipse());
        scene.scale("e", Point::ORIGIN, 2.0).unwrap();
        assert_eq!(scene.get("e").unwrap().points[1], Point::new(20, 12));
    }

    #[test]
    fn test_rotate_line() {
        let mut scene = Scene::new();
        scene.insert("a", line(0, 0, 10, 0));
        scene.rotate("a", Point::ORIGIN, 90.0).unwrap();
        assert_eq!(scene.get("a").unwrap().points, vec![Point::ORIGIN, Point::new(0, 10)]);
    }

    #[test]
    fn test_clip_shortens_line() {
        let mut scene = Scene::new();
        scene.insert("a", line(5, 5, 15, 5));
        let kept = scene
            .clip("a", ClipWindow::new(0, 0, 10, 10), ClipAlgorithm::CohenSutherland)
            .unwrap();
        assert!(kept);
        assert_eq!(scene.get("a").unwrap().points, vec![Point::new(5, 5), Point::new(10, 5)]);
    }

    #[test]
    fn test_clip_outside_removes() {
        let mut scene = Scene::new();
        scene.insert("a", line(20, 20, 30, 30));
        scene.insert("b", line(1, 1, 2, 2));
        let kept = scene
            .clip("a", ClipWindow::new(0, 0, 10, 10), ClipAlgorithm::LiangBarsky)
            .unwrap();
        assert!(!kept);
        assert!(scene.get("a").is_none());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_clip_non_line_rejected() {
        let mut scene = Scene::new();
        scene.insert(
            "c",
            Primitive::new(
                PrimitiveKind::Curve(CurveAlgorithm::Bezier),
                vec![Point::new(0, 0), Point::new(5, 9), Point::new(10, 0)],
                Rgba::BLACK,
            ),
        );
        let err = scene
            .clip("c", ClipWindow::new(0, 0, 4, 4), ClipAlgorithm::LiangBarsky)
            .unwrap_err();
        assert_eq!(err.to_string(), "Cannot clip curve primitive");
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_render_paint_order() {
        let mut scene = Scene::new();
        let mut first = line(0, 2, 4, 2);
        first.color = Rgba::RED;
        let mut second = line(2, 0, 2, 4);
        second.color = Rgba::BLUE;
        scene.insert("h", first);
        scene.insert("v", second);

        let mut fb = Framebuffer::new(5, 5).unwrap();
        fb.clear(Rgba::WHITE);
        scene.render(&mut fb, 100);

        assert_eq!(fb.get_pixel(0, 2), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(2, 2), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::WHITE));
    }

    #[test]
    fn test_clear_and_remove() {
        let mut scene = Scene::new();
        scene.insert("a", line(0, 0, 1, 1));
        scene.insert("b", line(0, 0, 1, 1));
        assert!(scene.remove("a").is_some());
        assert!(scene.remove("a").is_none());
        scene.clear();
        assert!(scene.is_empty());
    }
}
