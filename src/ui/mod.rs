//! User interface
//!
//! This module contains the CLI definition and the text/JSON renderers
//! used by the `domainscan` binary.

pub mod cli;
pub mod output;

// Re-export commonly used items
pub use cli::{Cli, Commands, cli_to_config};
