#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
//! Integration tests for the extension-bucketed copier.
//!
//! Each test builds an isolated source tree in a temporary directory and
//! checks the resulting bucket layout under the destination.

mod common;

use recursion_kit::error::ToolError;
use recursion_kit::sorter::{self, NO_EXTENSION, SortOptions};

use common::{CaptureLog, SortFixtureBuilder};

// ---------------------------------------------------------------------------
// Bucket layout
// ---------------------------------------------------------------------------

/// `a.txt`, `b.TXT` and `README` land in `txt/` and `no_extension/`.
#[test]
fn sorts_mixed_case_and_extensionless_files() {
    let fx = SortFixtureBuilder::new()
        .with_file("a.txt", "alpha")
        .with_file("b.TXT", "bravo")
        .with_file("README", "readme")
        .build();
    let log = CaptureLog::new();

    let report = sorter::sort_tree(&fx.source(), &fx.dest(), SortOptions::default(), &log).unwrap();

    assert_eq!(report.files.len(), 3);
    assert_eq!(fx.buckets(), vec![NO_EXTENSION, "txt"]);
    assert_eq!(fx.bucket("txt"), vec!["a.txt", "b.TXT"]);
    assert_eq!(fx.bucket(NO_EXTENSION), vec!["README"]);
    assert_eq!(
        std::fs::read_to_string(fx.dest().join("txt/b.TXT")).unwrap(),
        "bravo"
    );
}

/// Nested directories are flattened into the buckets.
#[test]
fn flattens_nested_directories() {
    let fx = SortFixtureBuilder::new()
        .with_file("top.rs", "fn main() {}")
        .with_file("src/lib.rs", "")
        .with_file("src/deep/er/mod.rs", "")
        .with_file("docs/guide.md", "# guide")
        .build();
    let log = CaptureLog::new();

    sorter::sort_tree(&fx.source(), &fx.dest(), SortOptions::default(), &log).unwrap();

    assert_eq!(fx.buckets(), vec!["md", "rs"]);
    assert_eq!(fx.bucket("rs"), vec!["lib.rs", "mod.rs", "top.rs"]);
}

/// Every copied file is reported on an info line.
#[test]
fn logs_each_copy() {
    let fx = SortFixtureBuilder::new()
        .with_file("one.csv", "1")
        .with_file("two.csv", "2")
        .build();
    let log = CaptureLog::new();

    sorter::sort_tree(&fx.source(), &fx.dest(), SortOptions::default(), &log).unwrap();

    let copies: Vec<String> = log
        .infos()
        .into_iter()
        .filter(|l| l.starts_with("Copied: "))
        .collect();
    assert_eq!(copies.len(), 2);
}

// ---------------------------------------------------------------------------
// Collisions
// ---------------------------------------------------------------------------

/// Same-named files from different directories get `_1`, `_2`, ... suffixes.
#[test]
fn same_name_in_different_directories_is_suffixed() {
    let fx = SortFixtureBuilder::new()
        .with_file("a/photo.jpg", "a")
        .with_file("b/photo.jpg", "b")
        .with_file("c/photo.JPG", "c")
        .build();
    let log = CaptureLog::new();

    sorter::sort_tree(&fx.source(), &fx.dest(), SortOptions::default(), &log).unwrap();

    assert_eq!(
        fx.bucket("jpg"),
        vec!["photo.JPG", "photo.jpg", "photo_1.jpg"]
    );
}

/// Running twice doubles each bucket instead of overwriting.
#[test]
fn second_run_doubles_bucket_contents() {
    let fx = SortFixtureBuilder::new()
        .with_file("a.txt", "a")
        .with_file("README", "r")
        .build();
    let log = CaptureLog::new();

    sorter::sort_tree(&fx.source(), &fx.dest(), SortOptions::default(), &log).unwrap();
    sorter::sort_tree(&fx.source(), &fx.dest(), SortOptions::default(), &log).unwrap();

    assert_eq!(fx.bucket("txt"), vec!["a.txt", "a_1.txt"]);
    assert_eq!(fx.bucket(NO_EXTENSION), vec!["README", "README_1"]);

    sorter::sort_tree(&fx.source(), &fx.dest(), SortOptions::default(), &log).unwrap();
    assert_eq!(fx.bucket("txt"), vec!["a.txt", "a_1.txt", "a_2.txt"]);
}

// ---------------------------------------------------------------------------
// Dry run
// ---------------------------------------------------------------------------

/// A dry run reports planned copies and leaves the destination untouched.
#[test]
fn dry_run_reports_without_writing() {
    let fx = SortFixtureBuilder::new()
        .with_file("x.log", "1")
        .with_file("sub/x.log", "2")
        .build();
    let log = CaptureLog::new();

    let report = sorter::sort_tree(
        &fx.source(),
        &fx.dest(),
        SortOptions { dry_run: true },
        &log,
    )
    .unwrap();

    assert!(!fx.dest().exists());
    assert_eq!(report.files.len(), 2);
    assert_eq!(log.dry_runs().len(), 2);
    assert!(log.dry_runs()[1].ends_with("x_1.log"));
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A missing source is rejected before anything is created.
#[test]
fn missing_source_is_rejected() {
    let fx = SortFixtureBuilder::new().build();
    let log = CaptureLog::new();
    let missing = fx.root.path().join("missing");

    let err = sorter::sort_tree(&missing, &fx.dest(), SortOptions::default(), &log).unwrap_err();

    assert!(matches!(err, ToolError::InvalidInput(_)));
    assert!(!fx.dest().exists());
}

/// A source that is a file is rejected.
#[test]
fn file_as_source_is_rejected() {
    let fx = SortFixtureBuilder::new().with_file("only.txt", "x").build();
    let log = CaptureLog::new();

    let err = sorter::sort_tree(
        &fx.source().join("only.txt"),
        &fx.dest(),
        SortOptions::default(),
        &log,
    )
    .unwrap_err();

    assert!(err.to_string().contains("not a directory"));
}

/// Sorting a directory into itself is refused before anything is copied.
#[test]
fn source_as_destination_is_rejected() {
    let fx = SortFixtureBuilder::new()
        .with_file("a.txt", "a")
        .with_file("txt/b.txt", "b")
        .build();
    let log = CaptureLog::new();

    let err = sorter::sort_tree(&fx.source(), &fx.source(), SortOptions::default(), &log)
        .unwrap_err();

    assert!(matches!(err, ToolError::InvalidInput(_)));
    assert!(log.infos().is_empty());
    assert!(!fx.source().join("txt/a.txt").exists());
    assert!(!fx.source().join("txt/b_1.txt").exists());
}

/// An empty source produces no buckets.
#[test]
fn empty_source_copies_nothing() {
    let fx = SortFixtureBuilder::new().build();
    let log = CaptureLog::new();

    let report = sorter::sort_tree(&fx.source(), &fx.dest(), SortOptions::default(), &log).unwrap();

    assert!(report.files.is_empty());
    assert!(!fx.dest().exists());
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// The command records one summary entry per bucket.
#[test]
fn command_summarises_buckets() {
    let fx = SortFixtureBuilder::new()
        .with_file("a.txt", "a")
        .with_file("b.TXT", "b")
        .with_file("README", "r")
        .build();
    let log = recursion_kit::logging::Logger::with_log_file(None);
    let opts = recursion_kit::cli::SortOpts {
        source: fx.source(),
        dest: fx.dest(),
        dry_run: false,
    };

    recursion_kit::commands::sort::run(&opts, &log).unwrap();

    let summary: Vec<(String, Option<String>)> = log
        .entries()
        .into_iter()
        .map(|e| (e.name, e.message))
        .collect();
    insta::assert_debug_snapshot!("sort_bucket_summary", summary);
}
