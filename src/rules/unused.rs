//! Unused key detection rule.
//!
//! Detects keys defined in a resource that no corpus file mentions. A key is
//! used when it occurs as a substring of any corpus file.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::parse_error_issues;
use crate::{
    core::{
        MessageContext, MessageLocation, ProjectContext,
        file_scanner::scan_files,
        keys::{KeyLine, distinct_keys, extract_key_lines},
        parsers::{ftl::parse_resource, syntax::strip_line_ending},
        usage::UsageScanner,
    },
    issues::{ParseErrorIssue, UnusedKeyIssue},
};

/// Result of checking one resource against the corpus.
#[derive(Debug)]
pub struct UnusedKeysCheck {
    pub resource_path: PathBuf,
    pub issues: Vec<UnusedKeyIssue>,
    pub parse_errors: Vec<ParseErrorIssue>,
    pub corpus_files: usize,
    /// Corpus paths that could not be walked.
    pub skipped_files: usize,
}

/// Check the source resource of `ctx` against its corpus.
///
/// Corpus files are read in parallel; a file that cannot be read aborts the
/// check.
pub fn check_unused_keys_issues(ctx: &ProjectContext) -> Result<UnusedKeysCheck> {
    let resource_path = ctx.source_path();
    let text = fs::read_to_string(&resource_path)
        .with_context(|| format!("Failed to read FTL file: {}", resource_path.display()))?;
    let resource_file = resource_path.to_string_lossy().to_string();

    let scan = scan_files(
        &ctx.corpus_root(),
        &ctx.config.extensions,
        &ctx.config.ignores,
    );
    let corpus = scan
        .files
        .par_iter()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read corpus file: {}", path.display()))
        })
        .collect::<Result<Vec<String>>>()?;

    let scanner = UsageScanner::new(ctx.config.exclude_key_prefixes.iter().cloned());
    let lines = extract_key_lines(&text);
    let issues = check_unused_keys(&resource_file, &lines, &scanner, &corpus);
    tracing::debug!(
        "{}: {} unused key(s) across {} corpus file(s)",
        resource_file,
        issues.len(),
        corpus.len()
    );

    Ok(UnusedKeysCheck {
        parse_errors: parse_error_issues(&resource_file, &parse_resource(&text)),
        resource_path,
        issues,
        corpus_files: scan.files.len(),
        skipped_files: scan.skipped_count,
    })
}

/// Check key lines against corpus texts.
///
/// Issues follow resource order, one per key, located at the line that
/// defines the key.
pub fn check_unused_keys<T>(
    file_path: &str,
    lines: &[KeyLine<'_>],
    scanner: &UsageScanner,
    corpus: &[T],
) -> Vec<UnusedKeyIssue>
where
    T: AsRef<str> + Sync,
{
    let keys = distinct_keys(lines);
    scanner
        .unused_keys(&keys, corpus)
        .into_iter()
        .filter_map(|key| {
            let line = lines.iter().find(|l| l.key == key)?;
            Some(UnusedKeyIssue {
                context: MessageContext::new(
                    MessageLocation::with_line(file_path, line.line),
                    key,
                    line_value(line.text),
                ),
            })
        })
        .collect()
}

/// Text after the first `=` of a key line.
fn line_value(text: &str) -> String {
    strip_line_ending(text)
        .split_once('=')
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default()
}
