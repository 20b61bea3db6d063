//! Chaps CLI entry point.

use std::process::ExitCode;

use chaps::cli::{Cli, CommandDispatcher};
use chaps::pants::{Delegate, DryRunDelegate, ProcessDelegate};
use clap::Parser;
use console::style;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so Pants output is not interleaved with ours
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("chaps=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chaps=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Chaps starting with args: {:?}", cli);

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            return ExitCode::from(1);
        }
    };

    let delegate: Box<dyn Delegate> = if cli.dry_run {
        Box::new(DryRunDelegate)
    } else {
        Box::new(ProcessDelegate::new())
    };

    let dispatcher = CommandDispatcher::new(cwd);

    match dispatcher.dispatch(&cli, delegate.as_ref()) {
        Ok(result) => ExitCode::from(result.process_exit_code()),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            ExitCode::from(1)
        }
    }
}
