//! Command-line definition: subcommands, their options and usage rendering.
use std::path::PathBuf;

use clap::{CommandFactory as _, Parser, Subcommand};

/// Top-level CLI entry point for the recursion toolkit.
#[derive(Parser, Debug)]
#[command(
    name = "rkit",
    about = "File sorting, Towers of Hanoi and Koch snowflake utilities",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Copy every file of a tree into per-extension folders
    Sort(SortOpts),
    /// Solve the Towers of Hanoi puzzle
    Hanoi(HanoiOpts),
    /// Render a Koch snowflake to SVG
    Koch(KochOpts),
    /// Print a shell completion script
    Completions(CompletionsOpts),
    /// Print version information
    Version,
}

impl Command {
    /// Subcommand name as typed on the command line.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sort(_) => "sort",
            Self::Hanoi(_) => "hanoi",
            Self::Koch(_) => "koch",
            Self::Completions(_) => "completions",
            Self::Version => "version",
        }
    }
}

/// Options for the `sort` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct SortOpts {
    /// Directory to read files from
    pub source: PathBuf,

    /// Directory to create extension folders in
    #[arg(default_value = "dist")]
    pub dest: PathBuf,

    /// Preview copies without writing anything
    #[arg(short = 'd', long)]
    pub dry_run: bool,
}

/// Options for the `hanoi` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct HanoiOpts {
    /// Number of disks (prompted for when omitted)
    #[arg(allow_negative_numbers = true)]
    pub disks: Option<i64>,

    /// Do not print the move trace
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the moves and final state as JSON instead of a trace
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,
}

/// Options for the `koch` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct KochOpts {
    /// Recursion level (prompted for when omitted)
    #[arg(allow_negative_numbers = true)]
    pub depth: Option<i64>,

    /// Side length of the initial triangle
    #[arg(short, long, default_value_t = 300.0, allow_negative_numbers = true)]
    pub length: f64,

    /// SVG file to write
    #[arg(short, long, default_value = "koch_snowflake.svg")]
    pub output: PathBuf,
}

/// Options for the `completions` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CompletionsOpts {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

/// One-line usage string for the subcommand `name`, e.g.
/// `Usage: rkit sort [OPTIONS] <SOURCE> [DEST]`.
#[must_use]
pub fn usage_hint(name: &str) -> String {
    let mut cmd = Cli::command();
    cmd.build();
    let usage = match cmd.find_subcommand_mut(name) {
        Some(sub) => sub.render_usage(),
        None => cmd.render_usage(),
    };
    usage.to_string().lines().next().unwrap_or_default().to_string()
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_sort_with_default_dest() {
        let cli = Cli::parse_from(["rkit", "sort", "photos"]);
        let Command::Sort(opts) = cli.command else {
            panic!("expected sort command");
        };
        assert_eq!(opts.source, PathBuf::from("photos"));
        assert_eq!(opts.dest, PathBuf::from("dist"));
        assert!(!opts.dry_run);
    }

    #[test]
    fn parse_sort_with_dest_and_dry_run() {
        let cli = Cli::parse_from(["rkit", "sort", "--dry-run", "in", "out"]);
        let Command::Sort(opts) = cli.command else {
            panic!("expected sort command");
        };
        assert_eq!(opts.dest, PathBuf::from("out"));
        assert!(opts.dry_run);
    }

    #[test]
    fn sort_requires_source() {
        assert!(Cli::try_parse_from(["rkit", "sort"]).is_err());
    }

    #[test]
    fn parse_hanoi_without_count() {
        let cli = Cli::parse_from(["rkit", "hanoi"]);
        assert!(matches!(
            cli.command,
            Command::Hanoi(HanoiOpts { disks: None, .. })
        ));
    }

    #[test]
    fn parse_hanoi_negative_count_reaches_validation() {
        let cli = Cli::parse_from(["rkit", "hanoi", "-3"]);
        assert!(matches!(
            cli.command,
            Command::Hanoi(HanoiOpts { disks: Some(-3), .. })
        ));
    }

    #[test]
    fn hanoi_rejects_non_integer() {
        assert!(Cli::try_parse_from(["rkit", "hanoi", "three"]).is_err());
    }

    #[test]
    fn hanoi_json_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["rkit", "hanoi", "3", "--json", "--quiet"]).is_err());
    }

    #[test]
    fn parse_koch_defaults() {
        let cli = Cli::parse_from(["rkit", "koch", "4"]);
        let Command::Koch(opts) = cli.command else {
            panic!("expected koch command");
        };
        assert_eq!(opts.depth, Some(4));
        assert!((opts.length - 300.0).abs() < f64::EPSILON);
        assert_eq!(opts.output, PathBuf::from("koch_snowflake.svg"));
    }

    #[test]
    fn parse_koch_length_and_output() {
        let cli = Cli::parse_from(["rkit", "koch", "2", "-l", "120", "-o", "flake.svg"]);
        let Command::Koch(opts) = cli.command else {
            panic!("expected koch command");
        };
        assert!((opts.length - 120.0).abs() < f64::EPSILON);
        assert_eq!(opts.output, PathBuf::from("flake.svg"));
    }

    #[test]
    fn parse_verbose_is_global() {
        let cli = Cli::parse_from(["rkit", "hanoi", "3", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_completions() {
        let cli = Cli::parse_from(["rkit", "completions", "bash"]);
        assert!(matches!(cli.command, Command::Completions(_)));
    }

    #[test]
    fn command_names_match_subcommands() {
        let cmd = Cli::command();
        for name in ["sort", "hanoi", "koch", "completions", "version"] {
            assert!(cmd.find_subcommand(name).is_some(), "missing {name}");
        }
        assert_eq!(Cli::parse_from(["rkit", "version"]).command.name(), "version");
    }

    #[test]
    fn usage_hint_names_subcommand_arguments() {
        let hint = usage_hint("sort");
        assert!(hint.contains("rkit sort"), "got {hint}");
        assert!(hint.contains("<SOURCE>"), "got {hint}");
        assert!(!hint.contains('\n'));
    }
}
