//! Error types
//!
//! Validation failures are reported as [`crate::FieldVerdict`] data. The
//! types here cover the genuinely exceptional cases: loading configuration and
//! parsing textual field or event names.

mod config;
mod parse;

pub use config::*;
pub use parse::*;
