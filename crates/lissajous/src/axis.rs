//! Axis layout, boundary anchors and the value-to-pixel seam.
//!
//! Rendering lives outside this crate. The renderer owns the real axes and
//! exposes them through [`AxisScale`]; this module only derives the axis
//! range the plot should use and where the four spring anchors sit inside
//! it.

use serde::{Deserialize, Serialize};

use crate::params::SimulationParameters;
use crate::point::Point;

/// Maps a data-space value on one axis to a device-space pixel coordinate.
///
/// Implementations must be monotonic and continuous over the visible range.
/// Chart widgets usually already provide this; [`LinearScale`] is a plain
/// linear mapping for headless use and tests.
pub trait AxisScale {
    /// Pixel position of `value` along this axis.
    fn value_to_pixel(&self, value: f64) -> f64;

    /// Signed pixel span of one unit of `magnitude` measured from zero.
    ///
    /// Negative for axes whose pixel coordinates grow opposite to the data
    /// (the usual screen Y axis).
    #[inline]
    fn pixels_per(&self, magnitude: f64) -> f64 {
        self.value_to_pixel(magnitude) - self.value_to_pixel(0.0)
    }
}

impl<T: AxisScale + ?Sized> AxisScale for &T {
    #[inline]
    fn value_to_pixel(&self, value: f64) -> f64 {
        (**self).value_to_pixel(value)
    }
}

/// Linear mapping of the data range `[min, max]` onto `[pixel_min, pixel_max]`.
///
/// Pass a reversed pixel range to flip the axis, as screen Y axes do.
///
/// # Example
///
/// ```rust
/// use lissajous::{AxisScale, LinearScale};
///
/// let y = LinearScale::new(-1.0, 1.0, 200.0, 0.0);
/// assert_eq!(y.value_to_pixel(1.0), 0.0);
/// assert_eq!(y.value_to_pixel(0.0), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    /// Smallest visible data value.
    pub min: f64,
    /// Largest visible data value.
    pub max: f64,
    /// Pixel coordinate of `min`.
    pub pixel_min: f64,
    /// Pixel coordinate of `max`.
    pub pixel_max: f64,
}

impl LinearScale {
    /// Creates a new linear scale.
    #[inline]
    pub const fn new(min: f64, max: f64, pixel_min: f64, pixel_max: f64) -> Self {
        Self {
            min,
            max,
            pixel_min,
            pixel_max,
        }
    }
}

impl AxisScale for LinearScale {
    fn value_to_pixel(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 || !span.is_finite() {
            return self.pixel_min;
        }
        self.pixel_min + (value - self.min) / span * (self.pixel_max - self.pixel_min)
    }
}

/// Orientation of a spring at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpringDirection {
    /// Anchored on the X axis, pulls horizontally.
    Horizontal,
    /// Anchored on the Y axis, pulls vertically.
    Vertical,
}

/// One of the four plot boundaries a spring is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Just inside the left edge.
    XMin,
    /// Just inside the right edge.
    XMax,
    /// Just inside the bottom edge.
    YMin,
    /// Just inside the top edge.
    YMax,
}

impl Anchor {
    /// All anchors in drawing order.
    pub const ALL: [Anchor; 4] = [Anchor::XMin, Anchor::XMax, Anchor::YMin, Anchor::YMax];

    /// Direction of a spring attached here.
    pub const fn direction(self) -> SpringDirection {
        match self {
            Anchor::XMin | Anchor::XMax => SpringDirection::Horizontal,
            Anchor::YMin | Anchor::YMax => SpringDirection::Vertical,
        }
    }

    /// Short lowercase name, e.g. `x_min`.
    pub const fn name(self) -> &'static str {
        match self {
            Anchor::XMin => "x_min",
            Anchor::XMax => "x_max",
            Anchor::YMin => "y_min",
            Anchor::YMax => "y_max",
        }
    }
}

/// Range and tick layout of a plot axis.
///
/// Both axes share one layout sized by the larger magnitude, so the data
/// space stays square and spring angles survive the trip to pixels.
///
/// ```text
///  minimum      minor                                         maximum
///     |<-offset->|                  0                  |<-offset->|
///     [----------+------ ... ------ + ------ ... ------+----------]
///              anchor                                anchor
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    /// Lower end of the axis.
    pub minimum: f64,
    /// Upper end of the axis.
    pub maximum: f64,
    /// Minor tick spacing; also the anchor inset from each end.
    pub minor_interval: f64,
    /// Major tick and grid spacing.
    pub major_interval: f64,
    /// Offset of the first major tick from `minimum`.
    pub major_offset: f64,
}

impl AxisLayout {
    /// Layout for an axis showing `±magnitude` plus a margin of
    /// `margin_ticks` minor ticks on each side.
    pub fn for_magnitude(magnitude: f64, margin_ticks: u32) -> Self {
        let minor_interval = magnitude / 10.0;
        let major_interval = magnitude / 2.0;
        let major_offset = minor_interval * margin_ticks as f64;
        let maximum = magnitude + major_offset;
        Self {
            minimum: -maximum,
            maximum,
            minor_interval,
            major_interval,
            major_offset,
        }
    }

    /// Shared layout for both axes, sized by the larger magnitude.
    pub fn for_parameters(params: &SimulationParameters, margin_ticks: u32) -> Self {
        Self::for_magnitude(params.max_magnitude(), margin_ticks)
    }

    /// Data-space coordinate of an anchor.
    ///
    /// X anchors sit on the horizontal centre line, Y anchors on the
    /// vertical one, each one minor tick inside its boundary.
    pub fn anchor(&self, anchor: Anchor) -> Point {
        match anchor {
            Anchor::XMin => Point::new(self.minimum + self.minor_interval, 0.0),
            Anchor::XMax => Point::new(self.maximum - self.minor_interval, 0.0),
            Anchor::YMin => Point::new(0.0, self.minimum + self.minor_interval),
            Anchor::YMax => Point::new(0.0, self.maximum - self.minor_interval),
        }
    }

    /// Width of the visible range.
    #[inline]
    pub fn span(&self) -> f64 {
        self.maximum - self.minimum
    }

    /// A [`LinearScale`] mapping this layout onto a pixel range.
    pub fn scale(&self, pixel_min: f64, pixel_max: f64) -> LinearScale {
        LinearScale::new(self.minimum, self.maximum, pixel_min, pixel_max)
    }
}
