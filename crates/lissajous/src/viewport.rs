//! Aspect-preserving plot area.
//!
//! Chart widgets typically position the plot area in percentages of the
//! widget. To keep the data axes square the area must shrink along the
//! longer side of the display; otherwise spring angles computed in data
//! space would be skewed on screen.

use serde::{Deserialize, Serialize};

/// Margin on each side of the plot area, in percent.
pub const PLOT_MARGIN: f64 = 2.0;

/// Usable span inside the margins, in percent.
pub const PLOT_SPAN: f64 = 100.0 - 2.0 * PLOT_MARGIN;

/// Position and size of the plot area, in percent of the display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            x: PLOT_MARGIN,
            y: PLOT_MARGIN,
            width: PLOT_SPAN,
            height: PLOT_SPAN,
        }
    }
}

impl PlotArea {
    /// Horizontal centre, in percent.
    #[inline]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Vertical centre, in percent.
    #[inline]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Converts the area to pixels for a display of the given size.
    ///
    /// Returns `(left, top, width, height)`.
    pub fn to_pixels(&self, display_width: f64, display_height: f64) -> (f64, f64, f64, f64) {
        (
            self.x / 100.0 * display_width,
            self.y / 100.0 * display_height,
            self.width / 100.0 * display_width,
            self.height / 100.0 * display_height,
        )
    }
}

/// Fits a square plot area into a display of the given pixel size.
///
/// The area spans the full usable width or height (96%) along the shorter
/// display side and is centred on the other. A display with a non-positive
/// or non-finite side gets the default full-span area.
///
/// # Example
///
/// ```rust
/// use lissajous::fit;
///
/// let area = fit(800.0, 400.0);
/// assert_eq!(area.width, 48.0);
/// assert_eq!(area.height, 96.0);
/// assert_eq!(area.x, 26.0);
///
/// // Same pixel size on both axes.
/// let (_, _, w, h) = area.to_pixels(800.0, 400.0);
/// assert!((w - h).abs() < 1e-9);
/// ```
pub fn fit(display_width: f64, display_height: f64) -> PlotArea {
    let ratio = display_width / display_height;
    if !(display_width > 0.0 && display_height > 0.0 && ratio.is_finite() && ratio > 0.0) {
        return PlotArea::default();
    }

    let (width, height) = if ratio < 1.0 {
        (PLOT_SPAN, PLOT_SPAN * ratio)
    } else {
        (PLOT_SPAN / ratio, PLOT_SPAN)
    };

    PlotArea {
        x: (PLOT_SPAN - width) / 2.0 + PLOT_MARGIN,
        y: (PLOT_SPAN - height) / 2.0 + PLOT_MARGIN,
        width,
        height,
    }
}
