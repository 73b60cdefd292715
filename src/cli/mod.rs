//! Command-line interface for tunebridge.
//!
//! Lets the resolver be driven by hand (`classify`, `resolve`) or fed a
//! stream of chat messages (`listen`).

mod commands;

pub use commands::{Cli, Commands, ConfigAction, run_command};
