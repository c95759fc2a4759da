//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storyboard binary.

mod commands;
mod estimate;
mod generate;
mod presets;

pub use commands::{Cli, Commands};
pub use estimate::run_estimate;
pub use generate::run_generate;
pub use presets::list_presets;
