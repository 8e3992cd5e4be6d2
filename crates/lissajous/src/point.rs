//! Two-dimensional points shared by the data and device coordinate spaces.

use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A point in 2D space.
///
/// The same type is used for data coordinates (oscillator output, anchors)
/// and device coordinates (pixels); which space a point lives in is decided
/// by the function that produced it.
///
/// # Example
///
/// ```rust
/// use lissajous::Point;
///
/// let a = Point::new(1.0, 2.0);
/// let b = Point::new(0.5, 0.5);
/// assert_eq!(a - b, Point::new(0.5, 1.5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the origin point (0, 0).
    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean length of the vector from the origin to this point.
    #[inline]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle of the vector from the origin to this point, in degrees.
    ///
    /// Follows `atan2` conventions, so the origin itself maps to 0.
    #[inline]
    pub fn angle_degrees(&self) -> f64 {
        self.y.atan2(self.x).to_degrees()
    }

    /// Returns true when both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
