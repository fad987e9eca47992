//! Report formatting and printing utilities.
//!
//! Command output goes to stdout; summaries of `unused` and all warnings go
//! to stderr so the key list on stdout stays machine-readable.

use std::io::{self, Write};

use colored::Colorize;

use super::{
    actions::{Action, AppendMessages, Operation},
    commands::{CommandResult, CommandSummary, InitSummary, SyncSummary, UnusedSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to a writer, sorted by location.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(compare_issues);

    let max_line_width = sorted
        .iter()
        .map(|i| i.location().line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }
}

/// Print a warning about resource lines that could not be parsed.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} line(s) could not be parsed and were kept as-is (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Sync(summary) => print_sync(summary),
        CommandSummary::Unused(summary) => {
            print_unused_to(summary, &mut io::stdout().lock(), &mut io::stderr().lock())
        }
        CommandSummary::Init(summary) => print_init(summary),
    }

    let stderr = &mut io::stderr().lock();
    if verbose {
        let parse_errors: Vec<Issue> = result
            .issues
            .iter()
            .filter(|i| matches!(i, Issue::ParseError(_)))
            .cloned()
            .collect();
        report_to(&parse_errors, stderr);
    }
    print_parse_warning_to(result.parse_error_count, verbose, stderr);
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();

    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line:col
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        loc.file_path,
        loc.line,
        loc.col
    );

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    a.location().cmp(b.location())
}

fn print_sync(summary: &SyncSummary) {
    if summary.missing_issues.is_empty() {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "{} target file(s) in sync with {}",
                summary.target_count, summary.source_file
            )
            .green()
        );
        return;
    }

    if summary.is_check {
        AppendMessages::preview(&summary.missing_issues);
        println!(
            "{} {} missing key(s) in {} file(s).",
            FAILURE_MARK.red(),
            summary.missing_issues.len(),
            AppendMessages::to_operations(&summary.missing_issues).len()
        );
        println!("Run without {} to add these keys.", "--check".cyan());
    } else {
        print_added_to(summary, &mut io::stdout().lock());
    }
}

fn print_added_to<W: Write>(summary: &SyncSummary, writer: &mut W) {
    for op in AppendMessages::to_operations(&summary.missing_issues) {
        if let Operation::AppendMessages {
            file_path,
            messages,
        } = op
        {
            let _ = writeln!(
                writer,
                "{} {} missing key(s) to {}:",
                "Added".green().bold(),
                messages.len(),
                file_path
            );
            for message in &messages {
                let _ = writeln!(writer, "  - {}", message.id);
            }
        }
    }
}

fn print_unused_to<O: Write, E: Write>(summary: &UnusedSummary, out: &mut O, err: &mut E) {
    for issue in &summary.unused_issues {
        let _ = writeln!(out, "{}", issue.context.key);
    }

    if summary.skipped_files > 0 {
        let _ = writeln!(
            err,
            "{} {} corpus path(s) could not be read and were skipped",
            "warning:".bold().yellow(),
            summary.skipped_files
        );
    }

    let count = summary.unused_issues.len();
    if count == 0 {
        let _ = writeln!(
            err,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} corpus file(s) - no unused keys in {}",
                summary.corpus_files, summary.resource_file
            )
            .green()
        );
        return;
    }

    match &summary.pruned {
        Some(stats) => {
            let _ = writeln!(
                err,
                "{} {} line(s) of {} unused key(s) from {}.",
                "Removed".green().bold(),
                stats.changes_applied,
                count,
                summary.resource_file
            );
        }
        None => {
            let _ = writeln!(
                err,
                "{} {} unused key(s) in {} (checked {} corpus file(s)).",
                FAILURE_MARK.red(),
                count,
                summary.resource_file,
                summary.corpus_files
            );
            let _ = writeln!(err, "Run with {} to remove them.", "--prune".cyan());
        }
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
