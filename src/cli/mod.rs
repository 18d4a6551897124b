//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, PageCommands, PostCommands};
pub use output::{format_config, format_nav_outcome, format_tag_report};
