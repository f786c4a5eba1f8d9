//! Completions command: emit a shell completion script.
use std::io;

use clap::CommandFactory as _;

use crate::cli::{Cli, CompletionsOpts};

/// Write the completion script for the requested shell to `out`.
pub fn write(opts: &CompletionsOpts, out: &mut dyn io::Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(opts.shell, &mut cmd, name, out);
}

/// Print the completion script to stdout.
pub fn run(opts: &CompletionsOpts) {
    write(opts, &mut io::stdout());
}
