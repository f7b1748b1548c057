//! Geometric primitives for rasterization.
//!
//! Control points and emitted pixels share the integer [`Point`] type. Real-valued
//! work (curve sampling, transforms, clipping) happens on [`PointF`] and is truncated
//! toward zero when it crosses back into pixel space.

/// Largest coordinate magnitude accepted by the editing and script layers.
///
/// A segment between two in-range points has at most `2 * MAX_COORDINATE + 1`
/// pixels, which keeps every rasterized list allocatable and every endpoint
/// difference far from `i32` overflow.
pub const MAX_COORDINATE: i32 = 1 << 20;

/// A 2D point with integer coordinates.
///
/// Used both for control points of a primitive and for rasterized pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates lie within `±MAX_COORDINATE`.
    #[must_use]
    pub const fn in_range(self) -> bool {
        const LIMIT: u32 = MAX_COORDINATE.unsigned_abs();
        self.x.unsigned_abs() <= LIMIT && self.y.unsigned_abs() <= LIMIT
    }

    /// Convert to a real-valued point.
    #[must_use]
    pub fn to_f64(self) -> PointF {
        PointF::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A 2D point with real-valued coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl PointF {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between two points, `self + t * (other - self)`.
    ///
    /// Equal coordinates interpolate exactly, so a flat segment never drifts
    /// below its row when truncated.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(self.x + t * (other.x - self.x), self.y + t * (other.y - self.y))
    }

    /// Truncate both coordinates toward zero.
    #[must_use]
    pub fn truncate(self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

impl From<Point> for PointF {
    fn from(p: Point) -> Self {
        p.to_f64()
    }
}

/// Rectangular clip window with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipWindow {
    /// Left edge.
    pub x_min: i32,
    /// Bottom edge (smallest y).
    pub y_min: i32,
    /// Right edge.
    pub x_max: i32,
    /// Top edge (largest y).
    pub y_max: i32,
}

impl ClipWindow {
    /// Create a window from two opposite corners in any order.
    #[must_use]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x_min: x0.min(x1),
            y_min: y0.min(y1),
            x_max: x0.max(x1),
            y_max: y0.max(y1),
        }
    }

    /// Check if a point lies inside the window (boundary included).
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }
}

/// Axis-aligned bounding box of a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: Point,
    /// Maximum corner.
    pub max: Point,
}

impl BoundingBox {
    /// Width of the box (`max.x - min.x`).
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the box (`max.y - min.y`).
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Grow the box by `margin` on every side.
    #[must_use]
    pub const fn inflate(self, margin: i32) -> Self {
        Self {
            min: Point::new(self.min.x - margin, self.min.y - margin),
            max: Point::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> PointF {
        PointF::new(
            (f64::from(self.min.x) + f64::from(self.max.x)) / 2.0,
            (f64::from(self.min.y) + f64::from(self.max.y)) / 2.0,
        )
    }
}

/// Compute the bounding box of a point list.
///
/// Returns `None` for an empty list.
#[must_use]
pub fn bounding_box(points: &[Point]) -> Option<BoundingBox> {
    let first = *points.first()?;
    let bbox = points.iter().fold(
        BoundingBox {
            min: first,
            max: first,
        },
        |acc, p| BoundingBox {
            min: Point::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
            max: Point::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
        },
    );
    Some(bbox)
}
