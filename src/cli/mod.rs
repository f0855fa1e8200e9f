//! Command-line interface layer.
//!
//! Loads configuration, runs the detector behind a spinner and prints the
//! report. Everything below this module is usable as a library.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt};

pub mod args;
pub mod exit_status;
pub mod report;
pub mod run;

pub use args::{Arguments, OutputFormat};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let outcome = run::run(&args)?;

    match args.format {
        OutputFormat::Text => report::print(&outcome, args.verbose),
        OutputFormat::Json => report::print_json(&outcome)?,
    }

    Ok(ExitStatus::Success)
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("warn,ucd=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
