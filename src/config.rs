use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::constants::{DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_POLL_MS};
use crate::window::{CellMetrics, WindowPolicy};

#[derive(Debug, Parser)]
#[command(name = "erp-desk", version, about = "Tiny-ERP desktop in the terminal")]
pub struct Cli {
    /// Logical pixels per terminal column.
    #[arg(long, default_value_t = DEFAULT_CELL_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub cell_width: u32,

    /// Logical pixels per terminal row.
    #[arg(long, default_value_t = DEFAULT_CELL_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    pub cell_height: u32,

    /// Leave mouse capture off; windows are then driven from the keyboard.
    #[arg(long)]
    pub no_mouse: bool,

    /// Start with an empty desktop instead of the dashboard.
    #[arg(long)]
    pub no_dashboard: bool,

    /// Append log output to this file instead of the in-memory log.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Idle redraw interval in milliseconds.
    #[arg(long, default_value_t = DEFAULT_POLL_MS)]
    pub poll_ms: u64,
}

/// Runtime settings for a desktop session.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub policy: WindowPolicy,
    pub metrics: CellMetrics,
    pub mouse_capture: bool,
    pub open_dashboard: bool,
    pub log_file: Option<PathBuf>,
    pub poll_interval: Duration,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            policy: WindowPolicy::default(),
            metrics: CellMetrics::default(),
            mouse_capture: true,
            open_dashboard: true,
            log_file: None,
            poll_interval: Duration::from_millis(DEFAULT_POLL_MS),
        }
    }
}

impl From<Cli> for ShellConfig {
    fn from(cli: Cli) -> Self {
        Self {
            policy: WindowPolicy::default(),
            metrics: CellMetrics::new(cli.cell_width, cli.cell_height),
            mouse_capture: !cli.no_mouse,
            open_dashboard: !cli.no_dashboard,
            log_file: cli.log_file,
            poll_interval: Duration::from_millis(cli.poll_ms),
        }
    }
}
