//! Subcommand definitions and their output.

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat};
use clap::{Parser, Subcommand};

use atin_config::AtinConfig;
use atin_core::{Atin, Grid, RoundingMode, Span, round, round_timestamp};

const DEFAULT_GRID_MINUTES: i64 = 5;

#[derive(Parser)]
#[command(name = "atin")]
#[command(about = "Parse, format and round Atin durations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse Atin text and print its total seconds and canonical form
    Parse { input: String },
    /// Format a number of whole seconds as Atin text
    Format {
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
    },
    /// Round an RFC 3339 timestamp or an Atin span onto a grid
    Round {
        value: String,
        /// Grid as Atin text [default: config, then M5]
        #[arg(long)]
        grid: Option<Atin>,
        /// down, up or nearest [default: config, then nearest]
        #[arg(long)]
        mode: Option<RoundingMode>,
    },
}

impl Commands {
    /// True when a missing flag has to be filled in from the config file.
    #[must_use]
    pub fn needs_config(&self) -> bool {
        matches!(self, Commands::Round { grid, mode, .. } if grid.is_none() || mode.is_none())
    }
}

pub fn run(command: Commands, config: Option<&AtinConfig>) -> Result<String> {
    match command {
        Commands::Parse { input } => {
            let span = atin_core::parse(input.as_str())
                .with_context(|| format!("cannot parse `{input}`"))?;
            Ok(format!("{}s ({})", span.whole_seconds(), Atin(span)))
        }
        Commands::Format { seconds } => {
            let span = Span::from_seconds(seconds)
                .with_context(|| format!("{seconds} seconds is out of range"))?;
            Ok(atin_core::format(span))
        }
        Commands::Round { value, grid, mode } => {
            let grid = resolve_grid(grid, config)?;
            let mode = mode
                .or_else(|| config.and_then(AtinConfig::rounding_mode))
                .unwrap_or_default();
            tracing::debug!(grid = %Atin(grid.span()), %mode, "rounding");
            round_value(&value, grid, mode)
        }
    }
}

fn resolve_grid(flag: Option<Atin>, config: Option<&AtinConfig>) -> Result<Grid> {
    if let Some(atin) = flag {
        return Grid::new(atin.span()).with_context(|| format!("invalid grid `{atin}`"));
    }
    if let Some(grid) = config.map(AtinConfig::rounding_grid).transpose()?.flatten() {
        return Ok(grid);
    }
    let fallback = Span::from_minutes(DEFAULT_GRID_MINUTES).context("default grid")?;
    Ok(Grid::new(fallback)?)
}

fn round_value(value: &str, grid: Grid, mode: RoundingMode) -> Result<String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        let rounded = round_timestamp(ts, grid, mode)?;
        return Ok(rounded.to_rfc3339_opts(SecondsFormat::AutoSi, false));
    }

    let span = atin_core::parse(value)
        .with_context(|| format!("`{value}` is neither an RFC 3339 timestamp nor Atin text"))?;
    let rounded = round(span, grid, mode)?;
    Ok(atin_core::format(rounded))
}
