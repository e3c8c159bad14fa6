//! folio-cli library
//!
//! Command definitions and the runner behind the `folio` binary.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod project_commands;
pub(crate) mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use logger::initialize as initialize_logger;
pub use project_commands::{CreateArgs, EditArgs, ProjectCommands};
pub use runner::run;
