//! `lissajous` command-line entry point.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use lissajous_cli::cli::{Cli, Command};
use lissajous_cli::config::Config;
use lissajous_cli::{commands, logging};
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_cli(cli).context("invalid configuration")?;
    debug!(?config, "Resolved configuration");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.print_config {
        serde_json::to_writer_pretty(&mut out, &config).context("writing configuration")?;
        writeln!(out)?;
        return Ok(());
    }

    match &cli.command {
        Command::Simulate(args) => commands::simulate(&config, args, &mut out)?,
        Command::Layout(args) => commands::layout(&config, args, &mut out)?,
        Command::Play(args) => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("building async runtime")?;
            runtime.block_on(commands::play(&config, args, &mut out))?;
        }
    }

    out.flush().context("flushing output")
}
