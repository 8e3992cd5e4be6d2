//! Spring overlay geometry.
//!
//! A spring is a fixed zig-zag polyline laid out in a 100×10 box, lead-in at
//! the origin and lead-out at (100, 0). To draw it between an anchor and the
//! oscillating point the template is pushed through one affine transform:
//!
//! 1. scale by `(distance / 100, 0.01)`: stretch the long axis to the
//!    distance, flatten the coil to a fixed width;
//! 2. rotate by the direction angle;
//! 3. scale by the axis pixel factors into device units;
//! 4. translate to the anchor's device position.
//!
//! Distance and angle are measured in magnitude-normalised data space and
//! the rotation happens before the device scale, so a non-square pixel
//! mapping stretches the spring without shearing it.

use std::sync::LazyLock;

use tracing::trace;

use crate::axis::{Anchor, AxisLayout, AxisScale};
use crate::params::SimulationParameters;
use crate::point::Point;

/// Number of points in an expanded spring polyline.
pub const SPRING_POINT_COUNT: usize = 53;

/// Template control points: one coil period, then the straight lead-in and
/// the two-segment lead-out.
pub const SPRING_CONTROL_POINTS: [Point; 9] = [
    // coil
    Point::new(0.0, 10.0),
    Point::new(6.0, 0.0),
    Point::new(4.0, -10.0),
    Point::new(2.0, 0.0),
    // lead-in
    Point::new(0.0, 0.0),
    Point::new(6.0, 0.0),
    // lead-out
    Point::new(86.0, 10.0),
    Point::new(94.0, 0.0),
    Point::new(100.0, 0.0),
];

const LEAD_IN: usize = 2;
const LEAD_OUT: usize = 3;
const COIL_POINTS: usize = 4;
const COIL_PITCH: f64 = 6.0;
const COIL_START: f64 = 12.0;

/// Short-axis scale applied before rotation: the coil is drawn 0.1 units
/// wide in magnitude-normalised space whatever the spring's length.
const COIL_FLATTEN: f64 = 0.01;
const TEMPLATE_LENGTH: f64 = 100.0;

/// A device-space spring polyline.
pub type SpringPolyline = [Point; SPRING_POINT_COUNT];

static SPRING_TEMPLATE: LazyLock<SpringPolyline> = LazyLock::new(expand_template);

/// The expanded 53-point spring template, computed once per process.
pub fn spring_template() -> &'static SpringPolyline {
    &SPRING_TEMPLATE
}

fn expand_template() -> SpringPolyline {
    let mut out = [Point::origin(); SPRING_POINT_COUNT];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = if i < LEAD_IN {
            SPRING_CONTROL_POINTS[COIL_POINTS + i]
        } else if i >= SPRING_POINT_COUNT - LEAD_OUT {
            SPRING_CONTROL_POINTS[i + SPRING_CONTROL_POINTS.len() - SPRING_POINT_COUNT]
        } else {
            let coil = i - LEAD_IN;
            let base = SPRING_CONTROL_POINTS[coil % COIL_POINTS];
            let shift = (coil / COIL_POINTS) as f64 * COIL_PITCH + COIL_START;
            Point::new(base.x + shift, base.y)
        };
    }
    out
}

/// A 2D affine transform in row-vector form.
///
/// `x' = x·m11 + y·m21 + dx`, `y' = x·m12 + y·m22 + dy`.
///
/// The builder methods *append*: each operation is applied after the ones
/// already in the transform.
///
/// # Example
///
/// ```rust
/// use lissajous::{Affine, Point};
///
/// let t = Affine::identity().rotate_degrees(90.0).translate(10.0, 0.0);
/// let p = t.apply(Point::new(1.0, 0.0));
/// assert!((p.x - 10.0).abs() < 1e-12);
/// assert!((p.y - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine {
    /// The identity transform.
    pub const fn identity() -> Self {
        Self {
            m11: 1.0,
            m12: 0.0,
            m21: 0.0,
            m22: 1.0,
            dx: 0.0,
            dy: 0.0,
        }
    }

    /// Applies `next` after `self`.
    pub fn then(self, next: Affine) -> Self {
        Self {
            m11: self.m11 * next.m11 + self.m12 * next.m21,
            m12: self.m11 * next.m12 + self.m12 * next.m22,
            m21: self.m21 * next.m11 + self.m22 * next.m21,
            m22: self.m21 * next.m12 + self.m22 * next.m22,
            dx: self.dx * next.m11 + self.dy * next.m21 + next.dx,
            dy: self.dx * next.m12 + self.dy * next.m22 + next.dy,
        }
    }

    /// Appends a non-uniform scale about the origin.
    pub fn scale(self, sx: f64, sy: f64) -> Self {
        self.then(Self {
            m11: sx,
            m22: sy,
            ..Self::identity()
        })
    }

    /// Appends a rotation about the origin; positive angles turn +X toward +Y.
    pub fn rotate_degrees(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.then(Self {
            m11: cos,
            m12: sin,
            m21: -sin,
            m22: cos,
            dx: 0.0,
            dy: 0.0,
        })
    }

    /// Appends a translation.
    pub fn translate(self, tx: f64, ty: f64) -> Self {
        self.then(Self {
            dx: tx,
            dy: ty,
            ..Self::identity()
        })
    }

    /// Transforms a single point.
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point {
            x: p.x * self.m11 + p.y * self.m21 + self.dx,
            y: p.x * self.m12 + p.y * self.m22 + self.dy,
        }
    }

    /// Transforms every point in place.
    pub fn apply_all(&self, points: &mut [Point]) {
        for p in points {
            *p = self.apply(*p);
        }
    }
}

/// Builds spring polylines for a given pair of axis magnitudes.
///
/// # Example
///
/// ```rust
/// use lissajous::{LinearScale, Point, SpringGeometry};
///
/// let x_axis = LinearScale::new(-1.0, 1.0, 0.0, 200.0);
/// let y_axis = LinearScale::new(-1.0, 1.0, 200.0, 0.0);
/// let geometry = SpringGeometry::new(1.0, 1.0);
///
/// let spring = geometry.build(Point::new(0.5, 0.5), Point::new(-0.9, 0.0), &x_axis, &y_axis);
///
/// // The lead-in starts at the anchor, the lead-out ends at the point.
/// assert!((spring[0].x - 10.0).abs() < 1e-9);
/// assert!((spring[52].x - 150.0).abs() < 1e-9);
/// assert!((spring[52].y - 50.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringGeometry {
    x_magnitude: f64,
    y_magnitude: f64,
}

impl SpringGeometry {
    /// Creates a geometry normalising distances by the given magnitudes.
    pub const fn new(x_magnitude: f64, y_magnitude: f64) -> Self {
        Self {
            x_magnitude,
            y_magnitude,
        }
    }

    /// Uses the oscillator's own magnitudes.
    pub fn from_parameters(params: &SimulationParameters) -> Self {
        Self::new(params.x_magnitude, params.y_magnitude)
    }

    /// Vector from `anchor` to `point` in magnitude-normalised space.
    ///
    /// An axis with zero magnitude contributes zero.
    pub fn normalized_offset(&self, point: Point, anchor: Point) -> Point {
        Point::new(
            normalize(point.x - anchor.x, self.x_magnitude),
            normalize(point.y - anchor.y, self.y_magnitude),
        )
    }

    /// The composed template-to-device transform for one spring.
    pub fn transform<X, Y>(&self, point: Point, anchor: Point, x_axis: &X, y_axis: &Y) -> Affine
    where
        X: AxisScale + ?Sized,
        Y: AxisScale + ?Sized,
    {
        let offset = self.normalized_offset(point, anchor);
        let length = offset.length();
        let origin_x = x_axis.value_to_pixel(anchor.x);
        let origin_y = y_axis.value_to_pixel(anchor.y);

        if length == 0.0 {
            // Zero-length spring: collapse the coil onto the anchor.
            return Affine::identity()
                .scale(0.0, 0.0)
                .translate(origin_x, origin_y);
        }

        Affine::identity()
            .scale(length / TEMPLATE_LENGTH, COIL_FLATTEN)
            .rotate_degrees(offset.angle_degrees())
            .scale(
                x_axis.pixels_per(self.x_magnitude),
                y_axis.pixels_per(self.y_magnitude),
            )
            .translate(origin_x, origin_y)
    }

    /// Device-space spring from `anchor` to `point`.
    ///
    /// Point 0 is the anchor end; point 52 the end attached to `point`.
    pub fn build<X, Y>(&self, point: Point, anchor: Point, x_axis: &X, y_axis: &Y) -> SpringPolyline
    where
        X: AxisScale + ?Sized,
        Y: AxisScale + ?Sized,
    {
        let mut out = *spring_template();
        self.transform(point, anchor, x_axis, y_axis)
            .apply_all(&mut out);
        out
    }
}

#[inline]
fn normalize(delta: f64, magnitude: f64) -> f64 {
    if magnitude == 0.0 { 0.0 } else { delta / magnitude }
}

/// A spring attached to one of the plot boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchoredSpring {
    /// Boundary the spring hangs from.
    pub anchor: Anchor,
    /// Device-space polyline, anchor end first.
    pub points: SpringPolyline,
}

impl AnchoredSpring {
    /// Device position of the fixed end.
    pub fn attachment(&self) -> Point {
        self.points[0]
    }
}

/// The four boundary springs drawn around the current point.
pub struct SpringOverlay;

impl SpringOverlay {
    /// Builds one spring per boundary, in [`Anchor::ALL`] order.
    pub fn build_all<X, Y>(
        point: Point,
        params: &SimulationParameters,
        layout: &AxisLayout,
        x_axis: &X,
        y_axis: &Y,
    ) -> [AnchoredSpring; 4]
    where
        X: AxisScale + ?Sized,
        Y: AxisScale + ?Sized,
    {
        let geometry = SpringGeometry::from_parameters(params);
        trace!(x = point.x, y = point.y, "Building spring overlay");
        Anchor::ALL.map(|anchor| AnchoredSpring {
            anchor,
            points: geometry.build(point, layout.anchor(anchor), x_axis, y_axis),
        })
    }
}
