//! OBD2 Tool component binary
//!
//! Prints the startup banner, runs the helper initialization and reports
//! success. Command-line arguments are ignored and the exit status is
//! always 0.
//!
//! # Usage
//!
//! ```bash
//! obd2-component
//! ```

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use tracing::warn;

use obd2_tool::{cli, utils::logging};

fn main() -> ExitCode {
    logging::init_logging();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    // Exit status is 0 even when stdout refuses the write.
    if let Err(e) = cli::run(&mut handle).context("Failed to write startup output") {
        warn!("{:#}", e);
    }

    ExitCode::SUCCESS
}
