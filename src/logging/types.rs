//! Core logging types: summary entries, their status, and the [`Log`] trait.

/// One line of the end-of-run summary.
#[derive(Debug, Clone)]
pub struct SummaryEntry {
    /// What the entry describes (e.g. a bucket name).
    pub name: String,
    /// Outcome for this entry.
    pub status: EntryStatus,
    /// Optional detail (e.g. a file count or skip reason).
    pub message: Option<String>,
}

/// Outcome of a summary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// Work was carried out.
    Ok,
    /// Deliberately left out.
    Skipped,
    /// Planned only; nothing was written.
    DryRun,
}

/// Abstraction over logging backends.
///
/// Core code logs through `&dyn Log` so tests and commands can supply their
/// own logger without touching the global subscriber.
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str);
    /// Record an entry for the summary.
    fn record(&self, name: &str, status: EntryStatus, message: Option<&str>);
}
