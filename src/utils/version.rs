//! Version information

/// Component version, pinned through the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the component version string
pub fn get_version() -> &'static str {
    VERSION
}
