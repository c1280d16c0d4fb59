//! Utility functions and helpers
//!
//! This module contains utility functions used throughout the application.

pub mod helper;
pub mod logging;
pub mod version;

pub use helper::Helper;
pub use version::{VERSION, get_version};
