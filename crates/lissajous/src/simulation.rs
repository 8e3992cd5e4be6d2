//! Simulation state and the tick-driven driver.
//!
//! [`SimulationState`] couples the step counter with the trajectory so the
//! two can never drift apart. [`Simulation`] layers the start / pause /
//! stop / forward / rewind controls on top of it.
//!
//! Everything here is synchronous and takes `&mut self`; callers that share a
//! simulation across threads must wrap it in a lock.

use tracing::{debug, trace};

use crate::error::StepCount;
use crate::oscillator::{elapsed, sample};
use crate::params::SimulationParameters;
use crate::point::Point;
use crate::trajectory::{Rewind, TrajectoryBuffer};

/// Step counter plus trajectory history.
///
/// # Example
///
/// ```rust
/// use lissajous::{SimulationParameters, SimulationState, StepCount};
///
/// let params = SimulationParameters::default();
/// let mut state = SimulationState::bounded(5);
///
/// state.forward(StepCount::new(7).unwrap(), &params);
/// assert_eq!(state.step_count(), 7);
/// assert_eq!(state.trajectory().len(), 5);
///
/// // Only three points are left after rewinding two, but the
/// // counter still reflects the true simulated step.
/// state.rewind(StepCount::new(2).unwrap());
/// assert_eq!(state.step_count(), 5);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationState {
    step_index: u64,
    trajectory: TrajectoryBuffer,
}

impl SimulationState {
    /// Creates an empty state with an unbounded trajectory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty state keeping at most `max_len` points (0 = unbounded).
    pub fn bounded(max_len: usize) -> Self {
        Self {
            step_index: 0,
            trajectory: TrajectoryBuffer::bounded(max_len),
        }
    }

    /// Number of steps taken since the last reset.
    #[inline]
    pub fn step_count(&self) -> u64 {
        self.step_index
    }

    /// Returns true when there is history to rewind.
    #[inline]
    pub fn can_rewind(&self) -> bool {
        !self.trajectory.is_empty()
    }

    /// The retained trajectory.
    #[inline]
    pub fn trajectory(&self) -> &TrajectoryBuffer {
        &self.trajectory
    }

    /// The newest point.
    #[inline]
    pub fn current(&self) -> Option<Point> {
        self.trajectory.last()
    }

    /// Simulated time of the next step, in seconds.
    #[inline]
    pub fn elapsed(&self, params: &SimulationParameters) -> f64 {
        elapsed(self.step_index, params)
    }

    /// Changes the trajectory bound.
    pub fn set_max_len(&mut self, max_len: usize) {
        self.trajectory.set_max_len(max_len);
    }

    /// Samples the oscillator at the current step, records the point and
    /// advances the counter.
    pub fn step(&mut self, params: &SimulationParameters) -> Point {
        let point = sample(self.step_index, params);
        self.trajectory.append(point);
        self.step_index += 1;
        trace!(step = self.step_index, x = point.x, y = point.y, "Simulation step");
        point
    }

    /// Takes `n` steps in a row.
    pub fn forward(&mut self, n: StepCount, params: &SimulationParameters) -> Option<Point> {
        let mut last = None;
        for _ in 0..n.get() {
            last = Some(self.step(params));
        }
        last
    }

    /// Removes the newest `n` points and winds the counter back to match.
    ///
    /// Rewinding past the retained history resets to step 0.
    pub fn rewind(&mut self, n: StepCount) -> Rewind {
        let outcome = self.trajectory.rewind(n);
        match outcome {
            Rewind::Cleared => self.step_index = 0,
            Rewind::Removed(removed) => {
                self.step_index = self.step_index.saturating_sub(removed as u64);
            }
        }
        debug!(requested = n.get(), ?outcome, step = self.step_index, "Rewound trajectory");
        outcome
    }

    /// Clears the trajectory and the counter.
    pub fn reset(&mut self) {
        self.trajectory.clear();
        self.step_index = 0;
    }
}

/// Run state of a [`Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Not running; the next start begins a fresh run.
    #[default]
    Stopped,
    /// Advancing on every tick.
    Running,
    /// Halted mid-run; the next start resumes.
    Paused,
}

/// A damped Lissajous simulation driven by an external timer.
///
/// The driver calls [`tick`](Simulation::tick) from its timer; the other
/// methods correspond to the user's run controls.
///
/// # Example
///
/// ```rust
/// use lissajous::{RunState, Simulation, SimulationParameters, StepCount};
///
/// let mut sim = Simulation::new(SimulationParameters::default());
///
/// // Jump ahead without starting the timer.
/// sim.forward(StepCount::new(40).unwrap());
/// assert_eq!(sim.run_state(), RunState::Paused);
///
/// // Resuming continues from step 40.
/// sim.start();
/// sim.tick();
/// assert_eq!(sim.step_count(), 41);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    params: SimulationParameters,
    state: SimulationState,
    run_state: RunState,
}

impl Simulation {
    /// Creates a stopped simulation with an unbounded trajectory.
    pub fn new(params: SimulationParameters) -> Self {
        Self {
            params,
            state: SimulationState::new(),
            run_state: RunState::Stopped,
        }
    }

    /// Sets the trajectory bound (0 = unbounded).
    pub fn with_line_length(mut self, max_len: usize) -> Self {
        self.state.set_max_len(max_len);
        self
    }

    /// Current parameters.
    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }

    /// Replaces the parameters; they take effect from the next step.
    pub fn set_parameters(&mut self, params: SimulationParameters) {
        debug!(?params, "Simulation parameters changed");
        self.params = params;
    }

    /// Changes the trajectory bound, evicting old points if needed.
    pub fn set_line_length(&mut self, max_len: usize) {
        self.state.set_max_len(max_len);
    }

    /// Step counter and trajectory.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Current run state.
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Returns true while ticks advance the simulation.
    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Returns true when stopped or paused with history to remove.
    pub fn can_rewind(&self) -> bool {
        !self.is_running() && self.state.can_rewind()
    }

    /// Number of steps taken in the current run.
    pub fn step_count(&self) -> u64 {
        self.state.step_count()
    }

    /// Simulated time of the next step, in seconds.
    pub fn elapsed(&self) -> f64 {
        self.state.elapsed(&self.params)
    }

    /// The newest point.
    pub fn current(&self) -> Option<Point> {
        self.state.current()
    }

    /// Starts a fresh run, or resumes if paused.
    pub fn start(&mut self) {
        if self.run_state != RunState::Paused {
            self.state.reset();
            debug!("Starting new run");
        }
        self.run_state = RunState::Running;
    }

    /// Pauses a running simulation. Does nothing otherwise.
    pub fn pause(&mut self) {
        if self.run_state == RunState::Running {
            self.run_state = RunState::Paused;
        }
    }

    /// Stops the simulation; the trajectory is kept until the next start.
    pub fn stop(&mut self) {
        self.run_state = RunState::Stopped;
    }

    /// Advances one step if running. Returns the new point, if any.
    pub fn tick(&mut self) -> Option<Point> {
        if self.is_running() {
            Some(self.state.step(&self.params))
        } else {
            None
        }
    }

    /// Takes `n` steps immediately and leaves the simulation paused.
    ///
    /// Only a paused run is continued. From `Stopped` or `Running` the
    /// current history is discarded and `n` steps are taken from step 0, the
    /// same fresh start [`Simulation::start`] makes; pause first to skip
    /// ahead within a running simulation.
    pub fn forward(&mut self, n: StepCount) -> Option<Point> {
        if self.run_state != RunState::Paused {
            debug!(
                discarded = self.step_count(),
                state = ?self.run_state,
                "Forward starts a fresh run"
            );
            self.state.reset();
        }
        let last = self.state.forward(n, &self.params);
        self.run_state = RunState::Paused;
        debug!(steps = n.get(), step = self.step_count(), "Skipped forward");
        last
    }

    /// Removes the newest `n` steps.
    ///
    /// Ignored while running, since ticks would race the rewind; returns
    /// `None` in that case.
    pub fn rewind(&mut self, n: StepCount) -> Option<Rewind> {
        if self.is_running() {
            debug!("Rewind ignored while running");
            return None;
        }
        Some(self.state.rewind(n))
    }

    /// Clears the trajectory and stops.
    pub fn reset(&mut self) {
        self.state.reset();
        self.run_state = RunState::Stopped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(n: usize) -> StepCount {
        StepCount::new(n).unwrap()
    }

    #[test]
    fn test_step_samples_before_advancing() {
        let params = SimulationParameters::default();
        let mut state = SimulationState::new();
        let first = state.step(&params);
        assert_eq!(first, Point::new(0.0, 0.0));
        assert_eq!(state.step_count(), 1);
    }

    #[test]
    fn test_rewind_exact_inverse() {
        let params = SimulationParameters::default();
        let mut state = SimulationState::new();
        state.forward(count(12), &params);
        let before = state.clone();

        state.forward(count(8), &params);
        assert_eq!(state.rewind(count(8)), Rewind::Removed(8));
        assert_eq!(state, before);
    }

    #[test]
    fn test_rewind_past_start_resets() {
        let params = SimulationParameters::default();
        let mut state = SimulationState::new();
        state.forward(count(3), &params);
        assert_eq!(state.rewind(count(5)), Rewind::Cleared);
        assert_eq!(state.step_count(), 0);
        assert!(!state.can_rewind());
    }

    #[test]
    fn test_resampling_after_rewind_matches() {
        let params = SimulationParameters::default();
        let mut state = SimulationState::new();
        state.forward(count(10), &params);
        let tenth = state.current();

        state.rewind(count(4));
        state.forward(count(4), &params);
        assert_eq!(state.current(), tenth);
    }

    #[test]
    fn test_start_resets_unless_paused() {
        let mut sim = Simulation::new(SimulationParameters::default());
        sim.start();
        for _ in 0..5 {
            sim.tick();
        }
        sim.pause();
        sim.start();
        assert_eq!(sim.step_count(), 5);

        sim.stop();
        sim.start();
        assert_eq!(sim.step_count(), 0);
    }

    #[test]
    fn test_tick_ignored_unless_running() {
        let mut sim = Simulation::new(SimulationParameters::default());
        assert_eq!(sim.tick(), None);
        sim.start();
        assert!(sim.tick().is_some());
        sim.pause();
        assert_eq!(sim.tick(), None);
        assert_eq!(sim.step_count(), 1);
    }

    #[test]
    fn test_forward_from_stopped_starts_fresh() {
        let mut sim = Simulation::new(SimulationParameters::default());
        sim.start();
        sim.tick();
        sim.tick();
        sim.stop();

        sim.forward(count(3));
        assert_eq!(sim.step_count(), 3);
        assert_eq!(sim.run_state(), RunState::Paused);

        sim.forward(count(3));
        assert_eq!(sim.step_count(), 6);
    }

    #[test]
    fn test_forward_while_running_restarts_paused() {
        let mut sim = Simulation::new(SimulationParameters::default());
        sim.start();
        for _ in 0..10 {
            sim.tick();
        }

        let last = sim.forward(count(2));
        assert_eq!(sim.step_count(), 2);
        assert_eq!(sim.run_state(), RunState::Paused);
        assert_eq!(last, Some(sample(1, sim.parameters())));

        // Pausing first keeps the run.
        sim.start();
        sim.tick();
        sim.pause();
        sim.forward(count(2));
        assert_eq!(sim.step_count(), 5);
    }

    #[test]
    fn test_rewind_blocked_while_running() {
        let mut sim = Simulation::new(SimulationParameters::default());
        sim.start();
        sim.tick();
        assert!(!sim.can_rewind());
        assert_eq!(sim.rewind(StepCount::ONE), None);

        sim.stop();
        assert!(sim.can_rewind());
        assert_eq!(sim.rewind(StepCount::ONE), Some(Rewind::Cleared));
        assert!(!sim.can_rewind());
    }

    #[test]
    fn test_line_length_bounds_history() {
        let mut sim = Simulation::new(SimulationParameters::default()).with_line_length(4);
        sim.forward(count(10));
        assert_eq!(sim.state().trajectory().len(), 4);
        assert_eq!(sim.step_count(), 10);

        sim.set_line_length(2);
        assert_eq!(sim.state().trajectory().len(), 2);
    }

    #[test]
    fn test_elapsed_tracks_counter() {
        let mut sim = Simulation::new(SimulationParameters::default());
        sim.forward(count(20));
        assert!((sim.elapsed() - 1.0).abs() < 1e-12);
    }
}
