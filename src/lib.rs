//! Recursion toolkit.
//!
//! Three independent command-line utilities that share only their CLI,
//! logging and error plumbing:
//!
//! - **[`sorter`]**: copy every file of a tree into `<dest>/<extension>/`
//! - **[`hanoi`]**: validated peg/disk model and the recursive solver
//! - **[`fractal`]**: Koch curves drawn through a turtle-style [`fractal::Pen`]
//!
//! [`commands`] wires each utility to its `rkit` subcommand.
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod fractal;
pub mod hanoi;
pub mod logging;
pub mod prompt;
pub mod sorter;
