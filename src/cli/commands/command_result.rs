use crate::cli::actions::ActionStats;
use crate::issues::{Issue, MissingKeyIssue, UnusedKeyIssue};

#[derive(Debug)]
pub enum CommandSummary {
    Sync(SyncSummary),
    Unused(UnusedSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct SyncSummary {
    pub source_file: String,
    pub target_count: usize,
    pub is_check: bool,
    pub missing_issues: Vec<MissingKeyIssue>,
    /// `None` in check mode or when nothing was missing.
    pub applied: Option<ActionStats>,
}

#[derive(Debug)]
pub struct UnusedSummary {
    pub resource_file: String,
    pub corpus_files: usize,
    pub skipped_files: usize,
    pub unused_issues: Vec<UnusedKeyIssue>,
    /// `None` unless `--prune` was given and there was something to remove.
    pub pruned: Option<ActionStats>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running ftlsync commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (commands that fix what they find).
    pub exit_on_errors: bool,
    /// All issues found, parse errors included.
    pub issues: Vec<Issue>,
    /// Number of junk entries across the resources that were read.
    pub parse_error_count: usize,
}
