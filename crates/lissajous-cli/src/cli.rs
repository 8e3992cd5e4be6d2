//! Command-line interface for `lissajous`.
//!
//! Every oscillator parameter is a global option, so it may appear before or
//! after the subcommand and can also come from a `LISSAJOUS_*` environment
//! variable.
//!
//! # Examples
//!
//! ```bash
//! # Final point after 200 steps
//! lissajous simulate --steps 200
//!
//! # Damped run, whole trajectory as JSON lines, then rewind 50 steps
//! lissajous --x-damping 0.2 simulate -n 400 --rewind 50 --trace -f json
//!
//! # Timer-driven playback with the spring overlay
//! lissajous play --frames 100 --springs
//!
//! # Plot area and axis layout for a 1920x1080 display
//! lissajous --width 1920 --height 1080 layout
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use lissajous::StepCount;

/// Damped Lissajous oscillator with a spring overlay.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "lissajous",
    author,
    version,
    about = "Damped Lissajous oscillator with a spring overlay",
    long_about = "Simulates a damped two-axis harmonic oscillator, keeps its trajectory \
                  history with forward/rewind, and computes the spring curves that tie \
                  the moving point to the plot boundaries."
)]
pub struct Cli {
    /// Frequency of vibration on the X axis (rad/s)
    #[arg(
        long,
        default_value_t = 3.0,
        env = "LISSAJOUS_X_FREQUENCY",
        global = true,
        allow_hyphen_values = true
    )]
    pub x_frequency: f64,

    /// Frequency of vibration on the Y axis (rad/s)
    #[arg(
        long,
        default_value_t = 4.0,
        env = "LISSAJOUS_Y_FREQUENCY",
        global = true,
        allow_hyphen_values = true
    )]
    pub y_frequency: f64,

    /// Magnitude of vibration on the X axis
    #[arg(
        long,
        default_value_t = 1.0,
        env = "LISSAJOUS_X_MAGNITUDE",
        global = true,
        allow_hyphen_values = true
    )]
    pub x_magnitude: f64,

    /// Magnitude of vibration on the Y axis
    #[arg(
        long,
        default_value_t = 1.0,
        env = "LISSAJOUS_Y_MAGNITUDE",
        global = true,
        allow_hyphen_values = true
    )]
    pub y_magnitude: f64,

    /// Damping of vibration on the X axis (negative grows)
    #[arg(
        long,
        default_value_t = 0.0,
        env = "LISSAJOUS_X_DAMPING",
        global = true,
        allow_hyphen_values = true
    )]
    pub x_damping: f64,

    /// Damping of vibration on the Y axis (negative grows)
    #[arg(
        long,
        default_value_t = 0.0,
        env = "LISSAJOUS_Y_DAMPING",
        global = true,
        allow_hyphen_values = true
    )]
    pub y_damping: f64,

    /// Phase difference of the vibrations, as a multiple of pi
    #[arg(
        long,
        default_value_t = 0.0,
        env = "LISSAJOUS_PHASE_DIFFERENCE",
        global = true,
        allow_hyphen_values = true
    )]
    pub phase_difference: f64,

    /// Simulated milliseconds per step
    ///
    /// Must be positive.
    #[arg(
        long,
        default_value_t = 50,
        env = "LISSAJOUS_STEP_INTERVAL",
        global = true,
        allow_hyphen_values = true
    )]
    pub step_interval: i64,

    /// Number of stored trajectory points (0 - unlimited)
    #[arg(long, default_value_t = 0, env = "LISSAJOUS_LINE_LENGTH", global = true)]
    pub line_length: usize,

    /// Axis margin beyond the magnitude, in minor ticks
    #[arg(long, default_value_t = 1, env = "LISSAJOUS_MARGIN_TICKS", global = true)]
    pub margin_ticks: u32,

    /// Display width in pixels, used for the plot area and spring pixels
    #[arg(long, default_value_t = 800.0, env = "LISSAJOUS_WIDTH", global = true)]
    pub width: f64,

    /// Display height in pixels
    #[arg(long, default_value_t = 800.0, env = "LISSAJOUS_HEIGHT", global = true)]
    pub height: f64,

    /// Print the resolved configuration as JSON and exit
    #[arg(long, global = true)]
    pub print_config: bool,

    /// Enable verbose logging (repeat for more)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Step the simulation immediately and print the result
    Simulate(SimulateArgs),

    /// Run the simulation on a timer, printing one frame per tick
    Play(PlayArgs),

    /// Print the plot area and axis layout
    Layout(LayoutArgs),
}

/// Arguments for the `simulate` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct SimulateArgs {
    /// Number of steps to take
    #[arg(long, short = 'n', default_value = "100")]
    pub steps: StepCount,

    /// Steps to rewind afterwards
    #[arg(long, short = 'r')]
    pub rewind: Option<StepCount>,

    /// Print every retained trajectory point instead of only the last
    #[arg(long)]
    pub trace: bool,

    /// Include the four boundary springs with the last point
    #[arg(long)]
    pub springs: bool,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Arguments for the `play` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct PlayArgs {
    /// Stop after this many frames (runs until Ctrl-C otherwise)
    #[arg(long)]
    pub frames: Option<StepCount>,

    /// Wall-clock milliseconds between frames (defaults to the step interval)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub animation_interval: Option<u64>,

    /// Include the four boundary springs in each frame
    #[arg(long)]
    pub springs: bool,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Arguments for the `layout` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct LayoutArgs {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Output formats.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Plain,
    /// One JSON object per line
    Json,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["lissajous", "simulate"]).unwrap();
        assert!((cli.x_frequency - 3.0).abs() < f64::EPSILON);
        assert!((cli.y_frequency - 4.0).abs() < f64::EPSILON);
        assert_eq!(cli.step_interval, 50);
        assert_eq!(cli.line_length, 0);
        assert_eq!(cli.verbose, 0);
        let Command::Simulate(args) = cli.command else {
            panic!("expected simulate");
        };
        assert_eq!(args.steps.get(), 100);
        assert_eq!(args.rewind, None);
        assert_eq!(args.format, OutputFormat::Plain);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "lissajous",
            "simulate",
            "--x-damping",
            "-0.5",
            "--line-length",
            "10",
            "-vv",
        ])
        .unwrap();
        assert!((cli.x_damping + 0.5).abs() < f64::EPSILON);
        assert_eq!(cli.line_length, 10);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_zero_steps_rejected() {
        assert!(Cli::try_parse_from(["lissajous", "simulate", "--steps", "0"]).is_err());
        assert!(Cli::try_parse_from(["lissajous", "simulate", "--rewind", "abc"]).is_err());
    }

    #[test]
    fn test_play_args() {
        let cli = Cli::try_parse_from([
            "lissajous",
            "play",
            "--frames",
            "3",
            "--animation-interval",
            "5",
            "--springs",
            "-f",
            "json",
        ])
        .unwrap();
        let Command::Play(args) = cli.command else {
            panic!("expected play");
        };
        assert_eq!(args.frames.map(StepCount::get), Some(3));
        assert_eq!(args.animation_interval, Some(5));
        assert!(args.springs);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_animation_interval_must_be_positive() {
        assert!(Cli::try_parse_from(["lissajous", "play", "--animation-interval", "0"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["lissajous"]).is_err());
    }
}
