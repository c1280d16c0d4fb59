//! Error type definitions

use thiserror::Error;

/// Main error type for the OBD2 tool component
///
/// The startup sequence itself cannot fail; the only failure left is the
/// output stream refusing a write (closed pipe, full disk).
#[derive(Error, Debug)]
pub enum Error {
    /// Output stream errors
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
