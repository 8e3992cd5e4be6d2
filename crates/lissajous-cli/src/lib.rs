#![forbid(unsafe_code)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

//! Headless driver for the [`lissajous`] oscillator.
//!
//! The binary resolves a [`config::Config`] from flags and `LISSAJOUS_*`
//! environment variables, then runs one of three subcommands:
//!
//! - `simulate` steps immediately and prints the last point or the trace
//! - `play` advances one step per timer tick until a frame limit or Ctrl-C
//! - `layout` prints the plot area and axis layout for the display size
//!
//! Frames go to stdout as aligned text or JSON lines; logs go to stderr.

pub mod cli;
pub mod commands;
pub mod config;
pub mod frame;
pub mod logging;
