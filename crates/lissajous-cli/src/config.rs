//! Runtime configuration for `lissajous`.
//!
//! [`Config`] is the single source of truth for a run, independent of
//! whether values came from flags or environment variables. Tests build it
//! directly; production code resolves it with [`Config::from_cli`], which is
//! where invalid parameters are rejected.

use lissajous::{
    fit, AxisLayout, LinearScale, PlotArea, SimError, Simulation, SimulationParameters,
};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Resolved configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Oscillator parameters.
    pub parameters: SimulationParameters,

    /// Trajectory bound (0 = unlimited).
    pub line_length: usize,

    /// Axis margin, in minor ticks.
    pub margin_ticks: u32,

    /// Display width in pixels.
    pub display_width: f64,

    /// Display height in pixels.
    pub display_height: f64,

    /// Log verbosity level (0=warn, 1=info, 2=debug, 3+=trace).
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parameters: SimulationParameters::default(),
            line_length: 0,
            margin_ticks: 1,
            display_width: 800.0,
            display_height: 800.0,
            verbosity: 0,
        }
    }
}

impl Config {
    /// Resolve a config from CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] for a non-positive step
    /// interval or a non-finite parameter.
    pub fn from_cli(cli: &Cli) -> Result<Self, SimError> {
        let mut parameters = SimulationParameters {
            x_frequency: cli.x_frequency,
            y_frequency: cli.y_frequency,
            x_magnitude: cli.x_magnitude,
            y_magnitude: cli.y_magnitude,
            x_damping: cli.x_damping,
            y_damping: cli.y_damping,
            phase_difference: cli.phase_difference,
            ..SimulationParameters::default()
        };
        parameters.set_step_interval_ms(cli.step_interval)?;
        parameters.validate()?;

        Ok(Self {
            parameters,
            line_length: cli.line_length,
            margin_ticks: cli.margin_ticks,
            display_width: cli.width,
            display_height: cli.height,
            verbosity: cli.verbose,
        })
    }

    /// A stopped simulation using these settings.
    #[must_use]
    pub fn simulation(&self) -> Simulation {
        Simulation::new(self.parameters).with_line_length(self.line_length)
    }

    /// Shared axis layout for both plot axes.
    #[must_use]
    pub fn axis_layout(&self) -> AxisLayout {
        AxisLayout::for_parameters(&self.parameters, self.margin_ticks)
    }

    /// Aspect-preserving plot area inside the display.
    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        fit(self.display_width, self.display_height)
    }

    /// Pixel mappings for the X and Y axes.
    ///
    /// The Y axis is flipped so that larger values are drawn higher.
    #[must_use]
    pub fn axis_scales(&self) -> (LinearScale, LinearScale) {
        let layout = self.axis_layout();
        let (left, top, width, height) = self
            .plot_area()
            .to_pixels(self.display_width, self.display_height);
        (
            layout.scale(left, left + width),
            layout.scale(top + height, top),
        )
    }
}
