#![forbid(unsafe_code)]
// Allow these clippy lints for physics/math code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::struct_field_names)]

//! # Lissajous
//!
//! Simulation and geometry engine for a damped two-axis harmonic oscillator
//! with a decorative spring overlay.
//!
//! Lissajous provides:
//! - **Oscillator**: closed-form damped sinusoids sampled at a fixed step
//! - **Trajectory**: an optionally bounded history with exact rewind
//! - **Spring**: a 53-point spring polyline mapped into device space
//! - **Viewport**: a square plot area inside an arbitrary display
//! - **Simulation**: a tick-driven driver with start/pause/stop/forward/rewind
//!
//! ## Sampling Example
//!
//! ```rust
//! use lissajous::{sample, SimulationParameters};
//!
//! let params = SimulationParameters::default();
//!
//! // t = 10 * 50ms = 0.5s
//! let p = sample(10, &params);
//! assert!((p.x - 1.5f64.sin()).abs() < 1e-9);
//! assert!((p.y - 2.0f64.sin()).abs() < 1e-9);
//! ```
//!
//! ## Driver Example
//!
//! ```rust
//! use lissajous::{Simulation, SimulationParameters, StepCount};
//!
//! let mut sim = Simulation::new(SimulationParameters::default());
//! sim.start();
//! for _ in 0..20 {
//!     sim.tick();
//! }
//! sim.pause();
//!
//! sim.rewind(StepCount::new(5).unwrap());
//! assert_eq!(sim.step_count(), 15);
//! ```
//!
//! ## Springs
//!
//! Each frame, four springs connect the current point to anchors just inside
//! the plot boundaries. The anchors come from an [`AxisLayout`] and device
//! coordinates from any [`AxisScale`] implementation supplied by the renderer.
//!
//! ```rust
//! use lissajous::{AxisLayout, LinearScale, SimulationParameters, SpringOverlay};
//!
//! let params = SimulationParameters::default();
//! let layout = AxisLayout::for_parameters(&params, 1);
//! let x_axis = LinearScale::new(layout.minimum, layout.maximum, 0.0, 400.0);
//! let y_axis = LinearScale::new(layout.minimum, layout.maximum, 400.0, 0.0);
//!
//! let point = lissajous::sample(7, &params);
//! let springs = SpringOverlay::build_all(point, &params, &layout, &x_axis, &y_axis);
//! assert_eq!(springs.len(), 4);
//! ```

mod axis;
mod error;
mod oscillator;
mod params;
mod point;
mod simulation;
mod spring;
mod trajectory;
mod viewport;

pub use axis::{Anchor, AxisLayout, AxisScale, LinearScale, SpringDirection};
pub use error::{parse_step_count, Result, SimError, StepCount};
pub use oscillator::{elapsed, sample};
pub use params::SimulationParameters;
pub use point::Point;
pub use simulation::{RunState, Simulation, SimulationState};
pub use spring::{
    spring_template, Affine, AnchoredSpring, SpringGeometry, SpringOverlay, SpringPolyline,
    SPRING_CONTROL_POINTS, SPRING_POINT_COUNT,
};
pub use trajectory::{Rewind, TrajectoryBuffer};
pub use viewport::{fit, PlotArea, PLOT_MARGIN, PLOT_SPAN};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::axis::{Anchor, AxisLayout, AxisScale, LinearScale};
    pub use crate::error::{SimError, StepCount};
    pub use crate::oscillator::sample;
    pub use crate::params::SimulationParameters;
    pub use crate::point::Point;
    pub use crate::simulation::{RunState, Simulation, SimulationState};
    pub use crate::spring::{AnchoredSpring, SpringGeometry, SpringOverlay};
    pub use crate::trajectory::{Rewind, TrajectoryBuffer};
    pub use crate::viewport::{fit, PlotArea};
}
