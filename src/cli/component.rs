//! Startup sequence for the component binary

use std::io::Write;

use tracing::{debug, info};

use crate::{Result, utils::Helper};

/// First line printed on startup
pub const BANNER: &str = "OBD2 Tool - Component";

/// Line printed once initialization reports success
pub const SUCCESS_MESSAGE: &str = "Application initialized successfully";

/// Run the startup sequence against `out`
///
/// Writes the banner, runs [`Helper::initialize_to`] on the same stream and
/// writes the success line when it reports success.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", BANNER)?;

    if Helper::initialize_to(out) {
        writeln!(out, "{}", SUCCESS_MESSAGE)?;
        info!(version = Helper::get_version(), "Application initialized");
    }

    out.flush()?;
    debug!("Startup sequence finished");

    Ok(())
}
