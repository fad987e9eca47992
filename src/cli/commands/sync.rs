use anyhow::Result;

use super::super::{
    actions::{Action, AppendMessages},
    args::SyncCommand,
};
use super::helper::finish;
use super::{CommandResult, CommandSummary, SyncSummary};
use crate::{
    core::ProjectContext,
    issues::{Issue, MissingKeyIssue},
    rules::missing::check_missing_keys_issues,
};

/// Append source messages missing from each target, or only report them
/// with `--check`.
pub fn sync(cmd: SyncCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = ProjectContext::new(&args.common)?;

    let check = check_missing_keys_issues(&ctx, &args.targets)?;
    let missing_issues: Vec<MissingKeyIssue> = check.issues().cloned().collect();

    let applied = if args.check || missing_issues.is_empty() {
        None
    } else {
        Some(AppendMessages::run(&missing_issues)?)
    };

    let mut issues: Vec<Issue> = missing_issues
        .iter()
        .cloned()
        .map(Issue::MissingKey)
        .collect();
    issues.extend(check.parse_errors.into_iter().map(Issue::ParseError));

    Ok(finish(
        CommandSummary::Sync(SyncSummary {
            source_file: ctx.source_path().to_string_lossy().to_string(),
            target_count: check.targets.len(),
            is_check: args.check,
            missing_issues,
            applied,
        }),
        issues,
        args.check,
    ))
}
