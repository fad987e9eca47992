//! Missing message detection rule.
//!
//! Detects messages defined in the source locale that a target locale does
//! not define. Only top-level message ids are compared; attributes are
//! carried along with their message.

use std::path::PathBuf;

use anyhow::Result;

use super::parse_error_issues;
use crate::{
    core::{
        LocaleResource, MessageContext, MessageLocation, ProjectContext,
        parsers::ftl::parse_ftl_file, reconcile::missing_messages,
    },
    issues::{MissingKeyIssue, ParseErrorIssue},
};

/// Missing messages of a single target resource.
#[derive(Debug, Clone)]
pub struct TargetMissingKeys {
    pub target_path: PathBuf,
    pub issues: Vec<MissingKeyIssue>,
}

/// Result of checking every target against the source.
#[derive(Debug, Default)]
pub struct MissingKeysCheck {
    /// One entry per target, in the order the targets were checked.
    pub targets: Vec<TargetMissingKeys>,
    pub parse_errors: Vec<ParseErrorIssue>,
}

impl MissingKeysCheck {
    pub fn issues(&self) -> impl Iterator<Item = &MissingKeyIssue> {
        self.targets.iter().flat_map(|t| t.issues.iter())
    }
}

/// Check the source resource against `targets`, or against the discovered
/// target locales when `targets` is empty.
///
/// Relative `targets` are resolved against the project root.
///
/// The source is parsed once and reused for every target. A missing or
/// unreadable file aborts the check.
pub fn check_missing_keys_issues(
    ctx: &ProjectContext,
    targets: &[PathBuf],
) -> Result<MissingKeysCheck> {
    let source_path = ctx.source_path();
    let source = parse_ftl_file(&source_path)?;
    let source_file = source_path.to_string_lossy().to_string();

    let target_paths = if targets.is_empty() {
        ctx.target_paths()?
    } else {
        targets.iter().map(|target| ctx.resolve(target)).collect()
    };
    tracing::debug!(
        "Checking {} target(s) against {}",
        target_paths.len(),
        source_file
    );

    let mut check = MissingKeysCheck {
        parse_errors: parse_error_issues(&source_file, &source),
        ..Default::default()
    };

    for target_path in target_paths {
        let target = parse_ftl_file(&target_path)?;
        let target_file = target_path.to_string_lossy().to_string();
        check
            .parse_errors
            .extend(parse_error_issues(&target_file, &target));

        let issues = check_missing_keys(&source, &source_file, &target, &target_file);
        tracing::debug!("{}: {} missing key(s)", target_file, issues.len());
        check.targets.push(TargetMissingKeys {
            target_path,
            issues,
        });
    }

    Ok(check)
}

/// Check one parsed target against the parsed source.
///
/// Issues are in source order; a source id defined twice is reported once.
pub fn check_missing_keys(
    source: &LocaleResource,
    source_file: &str,
    target: &LocaleResource,
    target_file: &str,
) -> Vec<MissingKeyIssue> {
    missing_messages(source, target)
        .into_iter()
        .map(|message| MissingKeyIssue {
            context: MessageContext::new(
                MessageLocation::with_line(source_file, message.line),
                message.id.clone(),
                message.value.clone().unwrap_or_default(),
            ),
            target_file: target_file.to_string(),
            message: message.clone(),
        })
        .collect()
}
