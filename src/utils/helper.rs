//! Helper operations for the OBD2 tool component
//!
//! Provides the component version and the initialization step run at startup.

use std::io::{self, Write};

use tracing::{debug, warn};

use super::version;

/// Component name used in the initialization line
pub const COMPONENT_NAME: &str = "OBD2 Tool Component";

/// Stateless helper exposing the version and the initialization step
#[derive(Debug, Clone, Copy, Default)]
pub struct Helper;

impl Helper {
    /// Get version string
    pub fn get_version() -> &'static str {
        version::get_version()
    }

    /// Line written by [`Helper::initialize`], without the trailing newline
    pub fn init_message() -> String {
        format!("Initializing {} v{}", COMPONENT_NAME, Self::get_version())
    }

    /// Initialize the component, announcing it on standard output
    ///
    /// Equivalent to [`Helper::initialize_to`] on locked stdout, so the line
    /// and the result are exactly those of the sink variant. Always returns
    /// `true`.
    pub fn initialize() -> bool {
        Self::initialize_to(&mut io::stdout().lock())
    }

    /// Initialize the component, announcing it on `out`
    ///
    /// Always returns `true`. A failed write is logged and otherwise ignored.
    pub fn initialize_to<W: Write>(out: &mut W) -> bool {
        let message = Self::init_message();
        debug!(version = Self::get_version(), "Initializing component");

        if let Err(e) = writeln!(out, "{}", message) {
            warn!("Failed to write initialization message: {}", e);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// Sink that rejects every write
    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_get_version() {
        assert_eq!(Helper::get_version(), "1.3.0");
        assert_eq!(Helper::get_version(), Helper::get_version());
    }

    #[test]
    fn test_init_message() {
        assert_eq!(
            Helper::init_message(),
            "Initializing OBD2 Tool Component v1.3.0"
        );
    }

    #[test]
    fn test_initialize_to_writes_one_line() {
        let mut out = Vec::new();
        assert!(Helper::initialize_to(&mut out));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Initializing OBD2 Tool Component v1.3.0\n"
        );
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(5)]
    fn test_repeated_initialize_repeats_line(#[case] calls: usize) {
        let mut out = Vec::new();
        for _ in 0..calls {
            assert!(Helper::initialize_to(&mut out));
        }

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), calls);
        assert!(lines.iter().all(|l| *l == Helper::init_message()));
    }

    #[test]
    fn test_initialize_succeeds_on_broken_sink() {
        assert!(Helper::initialize_to(&mut BrokenSink));
    }

    #[test]
    fn test_initialize_stdout_matches_sink_variant() {
        let mut sink = Vec::new();
        assert_eq!(Helper::initialize(), Helper::initialize_to(&mut sink));
        assert_eq!(sink, format!("{}\n", Helper::init_message()).into_bytes());
    }
}
