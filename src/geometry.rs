//! Plane geometry helpers shared by the front and rear solvers.
//!
//! All coordinates live in the front-view plane of the car: `x` is the lateral
//! distance from the centreline and `y` is the height above the ground.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Position in the front-view plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Lateral distance from the vehicle centreline.
    pub x: f64,
    /// Height above the ground plane.
    pub y: f64,
}

impl Point {
    /// Create a [`Point`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert the point into an algebraic vector.
    #[must_use]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Euclidean distance to another point.
    ///
    /// # Examples
    /// ```
    /// use rollcentre::point;
    ///
    /// let d = point(0.0, 0.0).distance_to(point(3.0, 4.0));
    /// assert_eq!(d, 5.0);
    /// ```
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.to_vector() - self.to_vector()).norm()
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Vector2<f64>> for Point {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(value: Point) -> Self {
        value.to_vector()
    }
}

/// Convenience helper for creating [`Point`] instances.
///
/// # Examples
/// ```
/// use rollcentre::point;
///
/// let patch = point(30.0, 0.0);
/// assert_eq!(patch.x, 30.0);
/// ```
#[must_use]
pub const fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Angle of the vector from `from` to `to` in radians, measured from the
/// positive `x` axis.
///
/// # Examples
/// ```
/// use rollcentre::{line_angle, point};
///
/// let angle = line_angle(point(0.0, 0.0), point(1.0, 1.0));
/// assert!((angle - std::f64::consts::FRAC_PI_4).abs() < 1.0e-12);
/// ```
#[must_use]
pub fn line_angle(from: Point, to: Point) -> f64 {
    let delta = to.to_vector() - from.to_vector();
    delta.y.atan2(delta.x)
}

/// A non-vertical line through `origin` with the given slope.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    /// Any point on the line.
    pub origin: Point,
    /// Rise over run.
    pub slope: f64,
}

impl Line {
    /// Create a line through `origin` with `slope`.
    #[must_use]
    pub const fn new(origin: Point, slope: f64) -> Self {
        Self { origin, slope }
    }

    /// Height of the line at abscissa `x`.
    #[must_use]
    pub fn y_at(&self, x: f64) -> f64 {
        self.origin.y + self.slope * (x - self.origin.x)
    }
}

/// Intersect two lines that share the same origin abscissa.
///
/// Both control arms start at the same lateral inner-pivot offset, so each
/// line is written as `y = origin.y + slope·(x − origin.x)` with a common
/// `origin.x`. Returns `None` when the slopes differ by less than
/// `tolerance`, i.e. the lines are parallel and have no finite intersection.
///
/// # Examples
/// ```
/// use rollcentre::{intersect_shared_abscissa, point, Line};
///
/// let lower = Line::new(point(0.0, 0.0), 1.0);
/// let upper = Line::new(point(0.0, 2.0), -1.0);
/// let ic = intersect_shared_abscissa(&lower, &upper, 1.0e-9).expect("lines cross");
/// assert_eq!((ic.x, ic.y), (1.0, 1.0));
/// ```
#[must_use]
pub fn intersect_shared_abscissa(lower: &Line, upper: &Line, tolerance: f64) -> Option<Point> {
    let slope_diff = lower.slope - upper.slope;
    if slope_diff.abs() < tolerance {
        return None;
    }
    let x = lower.origin.x + (upper.origin.y - lower.origin.y) / slope_diff;
    Some(Point::new(x, lower.y_at(x)))
}

/// Height at abscissa `x` of the straight line through `a` and `b`.
///
/// Returns `None` when the two points share an abscissa, since a vertical
/// line has no single height at another `x`.
#[must_use]
pub fn y_on_line_at(a: Point, b: Point, x: f64) -> Option<f64> {
    let run = b.x - a.x;
    if run == 0.0 {
        return None;
    }
    Some(a.y + (b.y - a.y) * (x - a.x) / run)
}
