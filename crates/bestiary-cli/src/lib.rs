//! Bestiary CLI library.
//!
//! This library provides the core functionality for the bestiary
//! command-line interface: importing monster records, running the
//! trait-extraction batch, and inspecting a one-off description.

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
