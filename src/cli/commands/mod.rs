//! CLI command handlers for `StudentGen`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod session;
