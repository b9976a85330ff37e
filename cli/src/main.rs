//! `atin` - command-line front end for the Atin codec and rounding helpers.
//!
//! ```text
//! atin parse d9h3m4s5           -> 788645s (W1D2H3M4S5)
//! atin format 3600              -> H1
//! atin round H5M12S45 --grid M5 -> H5M15
//! atin round 2024-01-14T05:12:45+01:00 --mode down -> 2024-01-14T05:10:00+01:00
//! ```
//!
//! `round` without `--grid` or `--mode` reads the config file; a config that
//! cannot be read or parsed is then an error rather than silently ignored.
//!
//! Logs go to stderr, filtered by `RUST_LOG` (default `warn`), so stdout only
//! ever carries the result.

mod commands;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use atin_config::AtinConfig;

use crate::commands::Cli;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = if cli.command.needs_config() {
        AtinConfig::load().context("cannot load config for rounding defaults")?
    } else {
        None
    };

    let output = commands::run(cli.command, config.as_ref())?;
    println!("{output}");
    Ok(())
}
