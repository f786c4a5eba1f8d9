//! Recursive, extension-bucketed copy of a directory tree.
use std::collections::{BTreeMap, HashSet};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use filetime::{FileTime, set_file_times};

use crate::error::ToolError;
use crate::logging::Log;

use super::extension::extension_of;

/// Options for [`sort_tree`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SortOptions {
    /// Report planned copies without touching the destination.
    pub dry_run: bool,
}

/// One file placed (or planned) in a bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedFile {
    /// File read from the source tree.
    pub source: PathBuf,
    /// Path written under the destination.
    pub destination: PathBuf,
    /// Bucket (extension) the file was sorted into.
    pub bucket: OsString,
}

impl CopiedFile {
    /// `true` if the file had to take a suffixed name.
    #[must_use]
    pub fn was_renamed(&self) -> bool {
        self.source.file_name() != self.destination.file_name()
    }
}

/// Outcome of a [`sort_tree`] run.
#[derive(Debug, Clone, Default)]
pub struct SortReport {
    /// Files in the order they were copied.
    pub files: Vec<CopiedFile>,
    /// Directories left out of the traversal.
    pub skipped: Vec<PathBuf>,
}

impl SortReport {
    /// Number of files per bucket, sorted by bucket name.
    #[must_use]
    pub fn bucket_counts(&self) -> BTreeMap<&OsStr, usize> {
        let mut counts = BTreeMap::new();
        for file in &self.files {
            *counts.entry(file.bucket.as_os_str()).or_insert(0) += 1;
        }
        counts
    }
}

/// Check that `source` exists and is a directory.
///
/// # Errors
///
/// Returns [`ToolError::InvalidInput`] describing which condition failed.
pub fn validate_source(source: &Path) -> Result<(), ToolError> {
    if !source.exists() {
        return Err(ToolError::invalid_input(format!(
            "Source directory does not exist: {}",
            source.display()
        )));
    }
    if !source.is_dir() {
        return Err(ToolError::invalid_input(format!(
            "Source path is not a directory: {}",
            source.display()
        )));
    }
    Ok(())
}

/// Copy every file under `source` into `dest/<extension>/`.
///
/// Directories are visited depth-first, siblings in name order. Name clashes
/// inside a bucket get a `_1`, `_2`, ... suffix before the extension. When
/// `dest` lies inside `source` it is not traversed.
///
/// Collision checks and copies are not atomic; the destination must not be
/// written by anything else during the run.
///
/// # Errors
///
/// Returns [`ToolError::InvalidInput`] for a bad `source` or a `dest` that
/// is the source directory itself, and [`ToolError::Io`] for the first
/// filesystem failure. Files copied before the failure are left in place.
pub fn sort_tree(
    source: &Path,
    dest: &Path,
    opts: SortOptions,
    log: &dyn Log,
) -> Result<SortReport, ToolError> {
    validate_source(source)?;
    let excluded = resolve_dest(dest);
    if let Some(dest_dir) = excluded.as_deref()
        && fs::canonicalize(source).is_ok_and(|src| src == dest_dir)
    {
        return Err(ToolError::invalid_input(format!(
            "Destination directory must differ from the source directory: {}",
            dest.display()
        )));
    }
    let mut sorter = Sorter {
        dest,
        excluded,
        opts,
        log,
        planned: HashSet::new(),
        report: SortReport::default(),
    };
    sorter.visit(source)?;
    Ok(sorter.report)
}

/// First free path for `name` inside `bucket_dir`.
///
/// `taken` decides whether a candidate is already in use. The suffix goes
/// before the final extension: `notes.txt` becomes `notes_1.txt`, `README`
/// becomes `README_1`.
pub fn unique_destination(
    bucket_dir: &Path,
    name: &Path,
    taken: impl Fn(&Path) -> bool,
) -> PathBuf {
    let candidate = bucket_dir.join(name);
    if !taken(&candidate) {
        return candidate;
    }
    let (stem, ext) = match (name.file_stem(), name.extension()) {
        (Some(stem), Some(ext)) if !ext.is_empty() => (stem.to_os_string(), Some(ext)),
        _ => (name.as_os_str().to_os_string(), None),
    };
    let mut counter = 1u64;
    loop {
        let mut file_name = OsString::from(&stem);
        file_name.push(format!("_{counter}"));
        if let Some(ext) = ext {
            file_name.push(".");
            file_name.push(ext);
        }
        let candidate = bucket_dir.join(&file_name);
        if !taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Copy `src` to `dst` carrying over permissions and access/modification
/// times.
///
/// # Errors
///
/// Returns [`ToolError::Io`] naming the path whose operation failed.
pub fn copy_preserving_metadata(src: &Path, dst: &Path) -> Result<(), ToolError> {
    fs::copy(src, dst).map_err(|e| ToolError::io(src, e))?;
    let meta = fs::metadata(src).map_err(|e| ToolError::io(src, e))?;
    set_file_times(
        dst,
        FileTime::from_last_access_time(&meta),
        FileTime::from_last_modification_time(&meta),
    )
    .map_err(|e| ToolError::io(dst, e))
}

/// Canonical form of `dest`, resolving through its nearest existing ancestor
/// when it has not been created yet.
fn resolve_dest(dest: &Path) -> Option<PathBuf> {
    if let Ok(path) = fs::canonicalize(dest) {
        return Some(path);
    }
    let name = dest.file_name()?;
    let parent = dest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Some(resolve_dest(parent)?.join(name))
}

/// Traversal state for one [`sort_tree`] run.
struct Sorter<'a> {
    dest: &'a Path,
    excluded: Option<PathBuf>,
    opts: SortOptions,
    log: &'a dyn Log,
    /// Destinations claimed during a dry run, which never reach the disk.
    planned: HashSet<PathBuf>,
    report: SortReport,
}

impl Sorter<'_> {
    fn visit(&mut self, dir: &Path) -> Result<(), ToolError> {
        let mut entries = fs::read_dir(dir)
            .map_err(|e| ToolError::io(dir, e))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ToolError::io(dir, e))?;
        entries.sort();

        for path in entries {
            if path.is_dir() {
                if self.is_destination(&path) {
                    self.log.debug(&format!(
                        "skipping destination directory {}",
                        path.display()
                    ));
                    self.report.skipped.push(path);
                    continue;
                }
                self.visit(&path)?;
            } else if path.is_file() {
                self.copy_file(&path)?;
            } else {
                self.log
                    .debug(&format!("skipping non-regular file {}", path.display()));
            }
        }
        Ok(())
    }

    fn is_destination(&self, dir: &Path) -> bool {
        self.excluded
            .as_deref()
            .is_some_and(|excluded| fs::canonicalize(dir).is_ok_and(|d| d == excluded))
    }

    fn copy_file(&mut self, path: &Path) -> Result<(), ToolError> {
        let Some(name) = path.file_name() else {
            return Ok(());
        };
        let bucket = extension_of(path);
        let bucket_dir = self.dest.join(&bucket);
        let planned = &self.planned;
        let target = unique_destination(&bucket_dir, Path::new(name), |candidate| {
            candidate.exists() || planned.contains(candidate)
        });

        if self.opts.dry_run {
            self.log.dry_run(&format!(
                "would copy {} -> {}",
                path.display(),
                target.display()
            ));
            self.planned.insert(target.clone());
        } else {
            fs::create_dir_all(&bucket_dir).map_err(|e| ToolError::io(&bucket_dir, e))?;
            copy_preserving_metadata(path, &target)?;
            self.log.info(&format!(
                "Copied: {} -> {}",
                path.display(),
                target.display()
            ));
        }

        self.report.files.push(CopiedFile {
            source: path.to_path_buf(),
            destination: target,
            bucket,
        });
        Ok(())
    }
}
