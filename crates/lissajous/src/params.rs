//! Oscillator parameters.

use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Default milliseconds per simulation step.
const DEFAULT_STEP_INTERVAL_MS: NonZeroU32 = match NonZeroU32::new(50) {
    Some(n) => n,
    None => unreachable!(),
};

/// Parameters of the damped two-axis oscillator.
///
/// Plain data: editable between runs, read by the driver and by whatever
/// renders the plot. The step interval is the only field with a hard
/// invariant and it is carried by its `NonZeroU32` type, so a zero interval
/// can never be stored (deserialisation rejects it too).
///
/// Damping may be negative, which makes the envelope grow over time.
///
/// # Example
///
/// ```rust
/// use lissajous::SimulationParameters;
///
/// let params = SimulationParameters {
///     x_damping: 0.1,
///     phase_difference: 0.5,
///     ..SimulationParameters::default()
/// }
/// .with_step_interval_ms(20)
/// .unwrap();
///
/// assert_eq!(params.step_interval_ms(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Angular frequency of the X motion (rad/s).
    pub x_frequency: f64,
    /// Angular frequency of the Y motion (rad/s).
    pub y_frequency: f64,
    /// Amplitude of the X motion.
    pub x_magnitude: f64,
    /// Amplitude of the Y motion.
    pub y_magnitude: f64,
    /// Exponential damping rate of the X motion (1/s).
    pub x_damping: f64,
    /// Exponential damping rate of the Y motion (1/s).
    pub y_damping: f64,
    /// Phase lead of X over Y, as a multiple of π.
    pub phase_difference: f64,
    /// Simulated milliseconds per step.
    pub step_interval_ms: NonZeroU32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            x_frequency: 3.0,
            y_frequency: 4.0,
            x_magnitude: 1.0,
            y_magnitude: 1.0,
            x_damping: 0.0,
            y_damping: 0.0,
            phase_difference: 0.0,
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
        }
    }
}

impl SimulationParameters {
    /// Milliseconds of simulated time per step.
    #[inline]
    pub fn step_interval_ms(&self) -> u32 {
        self.step_interval_ms.get()
    }

    /// Seconds of simulated time per step.
    #[inline]
    pub fn step_interval_secs(&self) -> f64 {
        self.step_interval_ms.get() as f64 / 1000.0
    }

    /// Returns a copy with a new step interval.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] if `ms` is zero; `self` is
    /// left untouched.
    pub fn with_step_interval_ms(mut self, ms: u32) -> Result<Self> {
        self.step_interval_ms = NonZeroU32::new(ms)
            .ok_or_else(|| SimError::invalid("step_interval_ms", "must be positive"))?;
        Ok(self)
    }

    /// Sets the step interval from a signed value, as typed into a form.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] for zero, negative or
    /// out-of-range values; the previous interval is kept.
    pub fn set_step_interval_ms(&mut self, ms: i64) -> Result<()> {
        let ms = u32::try_from(ms)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| SimError::invalid("step_interval_ms", format!("{ms} is not positive")))?;
        self.step_interval_ms = ms;
        Ok(())
    }

    /// The larger of the two magnitudes; sizes both plot axes.
    #[inline]
    pub fn max_magnitude(&self) -> f64 {
        self.x_magnitude.max(self.y_magnitude)
    }

    /// Checks that every real-valued field is finite.
    ///
    /// Values loaded from outside (a settings file, the command line) should
    /// pass through here before they reach a running simulation.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`] naming the first non-finite
    /// field.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("x_frequency", self.x_frequency),
            ("y_frequency", self.y_frequency),
            ("x_magnitude", self.x_magnitude),
            ("y_magnitude", self.y_magnitude),
            ("x_damping", self.x_damping),
            ("y_damping", self.y_damping),
            ("phase_difference", self.phase_difference),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SimError::invalid(name, format!("{value} is not finite")));
            }
        }
        Ok(())
    }
}
