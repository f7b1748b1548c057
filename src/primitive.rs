//! Primitive descriptors.
//!
//! A [`Primitive`] bundles the control points of a shape with the algorithm
//! used to rasterize it and the flat color it is painted in. The algorithm
//! selector is resolved to an enum before a primitive is built, so
//! rasterization never sees an unknown tag.

use std::fmt;

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{bounding_box, BoundingBox, Point, PointF};
use crate::render::{
    draw_curve_with_steps, draw_ellipse, draw_line, draw_polygon, draw_polyline, CurveAlgorithm,
    LineAlgorithm, DEFAULT_CURVE_STEPS,
};

/// Shape type and its algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Straight segment between the first two control points.
    Line(LineAlgorithm),
    /// Open chain of segments.
    Polyline(LineAlgorithm),
    /// Closed chain of segments.
    Polygon(LineAlgorithm),
    /// Ellipse inscribed in the box spanned by the first two control points.
    Ellipse,
    /// Parametric curve.
    Curve(CurveAlgorithm),
    /// Freehand stroke, drawn as a Bresenham polyline.
    Pencil,
}

impl PrimitiveKind {
    /// Short lowercase name of the shape type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Polyline(_) => "polyline",
            Self::Polygon(_) => "polygon",
            Self::Ellipse => "ellipse",
            Self::Curve(_) => "curve",
            Self::Pencil => "pencil",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(alg) | Self::Polyline(alg) | Self::Polygon(alg) => {
                write!(f, "{} ({alg})", self.name())
            }
            Self::Curve(alg) => write!(f, "{} ({alg})", self.name()),
            Self::Ellipse | Self::Pencil => f.write_str(self.name()),
        }
    }
}

/// A shape ready to be rasterized.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    /// Shape type and algorithm.
    pub kind: PrimitiveKind,
    /// Control points.
    pub points: Vec<Point>,
    /// Paint color.
    pub color: Rgba,
}

impl Primitive {
    /// Create a new primitive.
    #[must_use]
    pub fn new(kind: PrimitiveKind, points: Vec<Point>, color: Rgba) -> Self {
        Self {
            kind,
            points,
            color,
        }
    }

    /// Rasterize with the default curve sampling density.
    #[must_use]
    pub fn rasterize(&self) -> Vec<Point> {
        self.rasterize_with_steps(DEFAULT_CURVE_STEPS)
    }

    /// Rasterize, sampling curves at `curve_steps` parameter steps.
    ///
    /// Lines and ellipses need two control points; with fewer they produce
    /// no pixels.
    #[must_use]
    pub fn rasterize_with_steps(&self, curve_steps: usize) -> Vec<Point> {
        match self.kind {
            PrimitiveKind::Line(alg) => match self.points.as_slice() {
                [a, b, ..] => draw_line(*a, *b, alg),
                _ => Vec::new(),
            },
            PrimitiveKind::Polyline(alg) => draw_polyline(&self.points, alg),
            PrimitiveKind::Polygon(alg) => draw_polygon(&self.points, alg),
            PrimitiveKind::Ellipse => match self.points.as_slice() {
                [a, b, ..] => draw_ellipse(*a, *b),
                _ => Vec::new(),
            },
            PrimitiveKind::Curve(alg) => draw_curve_with_steps(&self.points, alg, curve_steps),
            PrimitiveKind::Pencil => draw_polyline(&self.points, LineAlgorithm::Bresenham),
        }
    }

    /// Bounding box of the control points.
    ///
    /// Lines and ellipses are bounded by their two defining points.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self.kind {
            PrimitiveKind::Line(_) | PrimitiveKind::Ellipse => {
                bounding_box(self.points.get(..2).unwrap_or(self.points.as_slice()))
            }
            _ => bounding_box(&self.points),
        }
    }

    /// Bounding box grown by one pixel, as outlined around a selection.
    #[must_use]
    pub fn selection_box(&self) -> Option<BoundingBox> {
        self.bounding_box().map(|bbox| bbox.inflate(1))
    }

    /// Center of the bounding box, the natural pivot for rotate and scale.
    #[must_use]
    pub fn center(&self) -> Option<PointF> {
        self.bounding_box().map(|bbox| bbox.center())
    }
}

/// Trait for things that can be painted into a framebuffer.
pub trait Drawable {
    /// Draw this item to a framebuffer.
    fn draw(&self, fb: &mut Framebuffer) {
        self.draw_with_steps(fb, DEFAULT_CURVE_STEPS);
    }

    /// Draw with an explicit curve sampling density.
    fn draw_with_steps(&self, fb: &mut Framebuffer, curve_steps: usize);
}

impl Drawable for Primitive {
    fn draw_with_steps(&self, fb: &mut Framebuffer, curve_steps: usize) {
        fb.paint(&self.rasterize_with_steps(curve_steps), self.color);
    }
}
