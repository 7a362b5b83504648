//! Structured logging to a rotating file.
//!
//! `tracing` spans and events from the whole crate are formatted by a plain
//! `tracing-subscriber` fmt layer and written to a size-rotated file in the
//! user's data directory.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → try.log (+ .1 .. .3)
//! ```
//!
//! # Configuration
//!
//! The filter is resolved from:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the config file
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
pub mod init;

pub use init::{init_tracing, init_tracing_in};
