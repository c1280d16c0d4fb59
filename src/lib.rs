//! OBD2 Tool - Component
//!
//! Startup component of the OBD2 tool. It prints a banner, runs the helper
//! initialization step and reports the outcome on standard output.
//!
//! # Usage
//!
//! ```bash
//! obd2-component
//! ```
//!
//! Output:
//!
//! ```text
//! OBD2 Tool - Component
//! Initializing OBD2 Tool Component v1.3.0
//! Application initialized successfully
//! ```
//!
//! # Examples
//!
//! ```rust
//! use obd2_tool::Helper;
//!
//! assert_eq!(Helper::get_version(), "1.3.0");
//!
//! let mut out = Vec::new();
//! assert!(Helper::initialize_to(&mut out));
//! assert_eq!(out, b"Initializing OBD2 Tool Component v1.3.0\n");
//! ```

pub mod cli;
pub mod error;
pub mod utils;

pub use error::{Error, Result};
pub use utils::{Helper, VERSION};
