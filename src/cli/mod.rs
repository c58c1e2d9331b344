//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction, RatiosAction};
pub use commands::{run, CommandResult, Context};
pub use enums::{OutputFormat, SchemaTarget};
