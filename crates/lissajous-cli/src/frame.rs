//! Frame output.
//!
//! A frame is one trajectory point plus, optionally, the spring overlay
//! drawn around it. Frames are written either as aligned text or as JSON
//! lines.

use std::io::{self, Write};

use lissajous::{
    elapsed, Anchor, AnchoredSpring, AxisLayout, AxisScale, PlotArea, Point, SimulationParameters,
    SpringOverlay,
};
use serde::Serialize;

use crate::cli::OutputFormat;

/// One spring in device space.
#[derive(Debug, Clone, Serialize)]
pub struct SpringFrame {
    /// Boundary the spring hangs from.
    pub anchor: Anchor,
    /// Polyline, anchor end first.
    pub points: Vec<Point>,
}

impl From<&AnchoredSpring> for SpringFrame {
    fn from(spring: &AnchoredSpring) -> Self {
        Self {
            anchor: spring.anchor,
            points: spring.points.to_vec(),
        }
    }
}

/// A single output frame.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    /// Step index the point was sampled at.
    pub step: u64,
    /// Simulated time in seconds.
    pub time: f64,
    /// Data-space position.
    pub position: Point,
    /// Device-space position.
    pub pixel: Point,
    /// Boundary springs, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub springs: Option<Vec<SpringFrame>>,
}

/// Builds frames for one parameter set and pixel mapping.
#[derive(Debug, Clone)]
pub struct FrameBuilder<S> {
    params: SimulationParameters,
    layout: AxisLayout,
    x_axis: S,
    y_axis: S,
}

impl<S: AxisScale> FrameBuilder<S> {
    /// Creates a builder.
    pub const fn new(
        params: SimulationParameters,
        layout: AxisLayout,
        x_axis: S,
        y_axis: S,
    ) -> Self {
        Self {
            params,
            layout,
            x_axis,
            y_axis,
        }
    }

    /// Frame for `position`, sampled at `step`.
    pub fn frame(&self, step: u64, position: Point, with_springs: bool) -> Frame {
        let springs = with_springs.then(|| {
            SpringOverlay::build_all(
                position,
                &self.params,
                &self.layout,
                &self.x_axis,
                &self.y_axis,
            )
            .iter()
            .map(SpringFrame::from)
            .collect::<Vec<_>>()
        });
        Frame {
            step,
            time: elapsed(step, &self.params),
            position,
            pixel: Point::new(
                self.x_axis.value_to_pixel(position.x),
                self.y_axis.value_to_pixel(position.y),
            ),
            springs,
        }
    }
}

/// Writes a frame in the requested format.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_frame(out: &mut impl Write, frame: &Frame, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, frame)?;
            writeln!(out)
        }
        OutputFormat::Plain => {
            writeln!(
                out,
                "step {:>6}  t={:>8.3}s  x={:>10.6}  y={:>10.6}  px=({:.1}, {:.1})",
                frame.step,
                frame.time,
                frame.position.x,
                frame.position.y,
                frame.pixel.x,
                frame.pixel.y
            )?;
            for spring in frame.springs.iter().flatten() {
                let start = spring.points.first().copied().unwrap_or_default();
                let end = spring.points.last().copied().unwrap_or_default();
                writeln!(
                    out,
                    "  spring {:<5}  ({:.1}, {:.1}) -> ({:.1}, {:.1})  [{} points]",
                    spring.anchor.name(),
                    start.x,
                    start.y,
                    end.x,
                    end.y,
                    spring.points.len()
                )?;
            }
            Ok(())
        }
    }
}

/// Plot area and axis layout, as printed by `lissajous layout`.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    /// Plot area in percent of the display.
    pub plot_area: PlotArea,
    /// Shared axis layout.
    pub axis: AxisLayout,
    /// Anchor positions in data space, in drawing order.
    pub anchors: Vec<(Anchor, Point)>,
}

impl LayoutReport {
    /// Builds the report.
    pub fn new(plot_area: PlotArea, axis: AxisLayout) -> Self {
        Self {
            plot_area,
            axis,
            anchors: Anchor::ALL.iter().map(|&a| (a, axis.anchor(a))).collect(),
        }
    }

    /// Writes the report in the requested format.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn write(&self, out: &mut impl Write, format: OutputFormat) -> io::Result<()> {
        match format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)
            }
            OutputFormat::Plain => {
                let area = &self.plot_area;
                writeln!(
                    out,
                    "plot area: x={:.2}% y={:.2}% width={:.2}% height={:.2}%",
                    area.x, area.y, area.width, area.height
                )?;
                writeln!(
                    out,
                    "axis: [{:.3}, {:.3}] minor={:.3} major={:.3}",
                    self.axis.minimum,
                    self.axis.maximum,
                    self.axis.minor_interval,
                    self.axis.major_interval
                )?;
                for (anchor, point) in &self.anchors {
                    writeln!(out, "anchor {:<5} ({:.3}, {:.3})", anchor.name(), point.x, point.y)?;
                }
                Ok(())
            }
        }
    }
}
