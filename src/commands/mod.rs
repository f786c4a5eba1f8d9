//! Subcommand handlers and dispatch.
pub mod completions;
pub mod hanoi;
pub mod koch;
pub mod sort;
pub mod version;

use anyhow::Result;

use crate::cli::Command;
use crate::logging::Logger;

/// Dispatch a parsed subcommand to its handler.
///
/// # Errors
///
/// Propagates the handler's error unchanged.
pub fn run(command: &Command, log: &Logger) -> Result<()> {
    match command {
        Command::Sort(opts) => sort::run(opts, log),
        Command::Hanoi(opts) => hanoi::run(opts, log),
        Command::Koch(opts) => koch::run(opts, log),
        Command::Completions(opts) => {
            completions::run(opts);
            Ok(())
        }
        Command::Version => {
            version::run();
            Ok(())
        }
    }
}
