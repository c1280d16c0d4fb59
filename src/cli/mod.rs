//! CLI entry point logic
//!
//! The binary in `src/main.rs` is a thin wrapper around [`component::run`].

pub mod component;

pub use component::run;
