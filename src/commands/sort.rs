//! Sort command: copy a tree into extension buckets.
use anyhow::Result;

use crate::cli::SortOpts;
use crate::logging::{EntryStatus, Logger};
use crate::sorter::{self, SortOptions};

/// Run the sort command.
///
/// # Errors
///
/// Returns an error if the source is missing or not a directory, or any
/// filesystem operation fails. Files copied before the failure remain.
pub fn run(opts: &SortOpts, log: &Logger) -> Result<()> {
    log.info(&format!("Source directory: {}", opts.source.display()));
    log.info(&format!("Destination directory: {}", opts.dest.display()));

    log.stage("Copying files");
    let report = sorter::sort_tree(
        &opts.source,
        &opts.dest,
        SortOptions {
            dry_run: opts.dry_run,
        },
        log,
    )?;

    let status = if opts.dry_run {
        EntryStatus::DryRun
    } else {
        EntryStatus::Ok
    };
    for (bucket, count) in report.bucket_counts() {
        let noun = if count == 1 { "file" } else { "files" };
        log.record(
            &bucket.to_string_lossy(),
            status,
            Some(&format!("{count} {noun}")),
        );
    }
    for dir in &report.skipped {
        log.record(
            &dir.display().to_string(),
            EntryStatus::Skipped,
            Some("destination directory"),
        );
    }
    log.print_summary("entries");

    let renamed = report.files.iter().filter(|f| f.was_renamed()).count();
    if renamed > 0 {
        let noun = if renamed == 1 { "file was" } else { "files were" };
        log.info(&format!("{renamed} {noun} renamed to avoid a name clash"));
    }

    if report.files.is_empty() {
        log.warn("no files found to copy");
    } else if !opts.dry_run {
        log.info("File copying completed successfully!");
    }
    Ok(())
}
