//! Subcommand implementations.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use lissajous::{LinearScale, Simulation};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::cli::{LayoutArgs, PlayArgs, SimulateArgs};
use crate::config::Config;
use crate::frame::{FrameBuilder, LayoutReport, write_frame};

fn frame_builder(config: &Config) -> FrameBuilder<LinearScale> {
    let (x_axis, y_axis) = config.axis_scales();
    FrameBuilder::new(config.parameters, config.axis_layout(), x_axis, y_axis)
}

/// Steps the simulation, optionally rewinds, and prints the result.
///
/// # Errors
///
/// Fails only when writing to `out` fails.
pub fn simulate(config: &Config, args: &SimulateArgs, out: &mut impl Write) -> Result<()> {
    let mut sim = config.simulation();
    sim.forward(args.steps);
    if let Some(n) = args.rewind {
        sim.rewind(n);
    }
    info!(
        steps = sim.step_count(),
        retained = sim.state().trajectory().len(),
        "Simulation finished"
    );

    let builder = frame_builder(config);
    let trajectory = sim.state().trajectory();
    let Some(last) = trajectory.last() else {
        debug!("Trajectory empty after rewind");
        return Ok(());
    };

    if args.trace {
        let first_step = sim.step_count() - trajectory.len() as u64;
        let count = trajectory.len();
        for (i, point) in trajectory.iter().enumerate() {
            let is_last = i + 1 == count;
            let frame = builder.frame(first_step + i as u64, *point, args.springs && is_last);
            write_frame(out, &frame, args.format).context("writing frame")?;
        }
    } else {
        let frame = builder.frame(sim.step_count() - 1, last, args.springs);
        write_frame(out, &frame, args.format).context("writing frame")?;
    }
    Ok(())
}

/// Prints the plot area and axis layout.
///
/// # Errors
///
/// Fails only when writing to `out` fails.
pub fn layout(config: &Config, args: &LayoutArgs, out: &mut impl Write) -> Result<()> {
    LayoutReport::new(config.plot_area(), config.axis_layout())
        .write(out, args.format)
        .context("writing layout")
}

/// Runs the simulation on a timer until the frame limit or Ctrl-C.
///
/// Each tick advances one step and writes one frame. Ticks that fall behind
/// are skipped rather than bunched, mirroring a UI timer.
///
/// # Errors
///
/// Fails when writing a frame fails or the Ctrl-C handler cannot be
/// installed.
pub async fn play(config: &Config, args: &PlayArgs, out: &mut impl Write) -> Result<()> {
    let interval_ms = args
        .animation_interval
        .unwrap_or_else(|| u64::from(config.parameters.step_interval_ms()));
    let limit = args.frames.map(|n| n.get() as u64);
    let builder = frame_builder(config);

    let mut sim: Simulation = config.simulation();
    sim.start();
    info!(interval_ms, ?limit, "Playback started");

    let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            result = &mut ctrl_c => {
                result.context("listening for Ctrl-C")?;
                info!("Interrupted");
                break;
            }
            _ = ticker.tick() => {
                let Some(point) = sim.tick() else { break };
                let frame = builder.frame(sim.step_count() - 1, point, args.springs);
                write_frame(out, &frame, args.format).context("writing frame")?;
                out.flush().context("flushing output")?;
                if limit.is_some_and(|limit| sim.step_count() >= limit) {
                    break;
                }
            }
        }
    }

    sim.stop();
    info!(steps = sim.step_count(), "Playback stopped");
    Ok(())
}
