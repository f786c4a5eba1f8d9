// Shared helpers for integration tests.
//
// Provides a temporary source/destination pair with a fluent builder, and an
// in-memory `Log` so tests can assert on what a command reported without a
// global subscriber.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code, clippy::expect_used, clippy::panic)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use recursion_kit::logging::{EntryStatus, Log};

/// A captured log line, tagged with the method that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Stage(String),
    Info(String),
    Debug(String),
    Warn(String),
    Error(String),
    DryRun(String),
}

/// [`Log`] implementation that keeps every message in memory.
#[derive(Debug, Default)]
pub struct CaptureLog {
    lines: Mutex<Vec<Line>>,
    records: Mutex<Vec<(String, EntryStatus)>>,
}

impl CaptureLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines in order.
    pub fn lines(&self) -> Vec<Line> {
        self.lines.lock().expect("log lock").clone()
    }

    /// Messages of the captured info lines, in order.
    pub fn infos(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                Line::Info(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    /// Messages of the captured warnings, in order.
    pub fn warnings(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                Line::Warn(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    /// Messages of the captured dry-run lines, in order.
    pub fn dry_runs(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                Line::DryRun(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    fn push(&self, line: Line) {
        self.lines.lock().expect("log lock").push(line);
    }
}

impl Log for CaptureLog {
    fn stage(&self, msg: &str) {
        self.push(Line::Stage(msg.to_string()));
    }
    fn info(&self, msg: &str) {
        self.push(Line::Info(msg.to_string()));
    }
    fn debug(&self, msg: &str) {
        self.push(Line::Debug(msg.to_string()));
    }
    fn warn(&self, msg: &str) {
        self.push(Line::Warn(msg.to_string()));
    }
    fn error(&self, msg: &str) {
        self.push(Line::Error(msg.to_string()));
    }
    fn dry_run(&self, msg: &str) {
        self.push(Line::DryRun(msg.to_string()));
    }
    fn record(&self, name: &str, status: EntryStatus, _message: Option<&str>) {
        self.records
            .lock()
            .expect("log lock")
            .push((name.to_string(), status));
    }
}

/// A source tree and an empty destination, both backed by one
/// [`tempfile::TempDir`] that is deleted on drop.
pub struct SortFixture {
    pub root: tempfile::TempDir,
}

impl SortFixture {
    /// Source directory.
    pub fn source(&self) -> PathBuf {
        self.root.path().join("source")
    }

    /// Destination directory (not created until something is copied).
    pub fn dest(&self) -> PathBuf {
        self.root.path().join("dest")
    }

    /// Names of the files in bucket `bucket`, sorted.
    pub fn bucket(&self, bucket: &str) -> Vec<String> {
        let dir = self.dest().join(bucket);
        let mut names: Vec<String> = std::fs::read_dir(&dir)
            .unwrap_or_else(|e| panic!("read {}: {e}", dir.display()))
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Names of all bucket directories, sorted.
    pub fn buckets(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.dest())
            .expect("read dest")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Fluent builder for [`SortFixture`].
pub struct SortFixtureBuilder {
    fixture: SortFixture,
}

impl SortFixtureBuilder {
    /// Begin with an empty source directory.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(root.path().join("source")).expect("create source dir");
        Self {
            fixture: SortFixture { root },
        }
    }

    /// Write `content` to `source/<rel>`, creating parent directories.
    pub fn with_file(self, rel: &str, content: &str) -> Self {
        let path = self.fixture.source().join(rel);
        write_file(&path, content);
        self
    }

    /// Finish building and return the fixture.
    pub fn build(self) -> SortFixture {
        self.fixture
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(path, content).expect("write file");
}
