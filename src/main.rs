use clap::Parser;

use erp_desk::drivers::{ConsoleDriver, ConsoleSession};
use erp_desk::runner::run_desktop;
use erp_desk::{Cli, Desktop, Result, ShellConfig, tracing_sub};

fn main() -> Result<()> {
    let config = ShellConfig::from(Cli::parse());
    tracing_sub::init(config.log_file.as_deref())?;

    let mut desktop = Desktop::new(&config);
    let mut session = ConsoleSession::new()?;
    session.enter()?;

    let result = run_desktop(
        session.terminal_mut(),
        ConsoleDriver::new(),
        &mut desktop,
        config.poll_interval,
        |event| tracing::info!(?event, "shell event"),
    );

    session.exit()?;
    result
}
