use anyhow::Result;

use super::super::{
    actions::{Action, RemoveKeyLines},
    args::{UnusedArgs, UnusedCommand},
};
use super::helper::finish;
use super::{CommandResult, CommandSummary, UnusedSummary};
use crate::{
    core::ProjectContext,
    issues::Issue,
    rules::unused::check_unused_keys_issues,
};

impl UnusedArgs {
    /// Layer the corpus flags over the loaded config.
    ///
    /// `--exclude-prefix` and `--ignore` add to the configured lists;
    /// `--extension` replaces them.
    fn apply_to(&self, ctx: &mut ProjectContext) -> Result<()> {
        let config = &mut ctx.config;
        if let Some(corpus_root) = &self.corpus_root {
            config.corpus_root = corpus_root.to_string_lossy().to_string();
        }
        config
            .exclude_key_prefixes
            .extend(self.exclude_prefix.iter().cloned());
        config.ignores.extend(self.ignore.iter().cloned());
        if !self.extension.is_empty() {
            config.extensions = self.extension.clone();
        }
        config.validate()
    }
}

/// List keys of the source resource that no corpus file mentions, and
/// remove them with `--prune`.
pub fn unused(cmd: UnusedCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let mut ctx = ProjectContext::new(&args.common)?;
    args.apply_to(&mut ctx)?;

    let check = check_unused_keys_issues(&ctx)?;

    let pruned = if args.prune && !check.issues.is_empty() {
        Some(RemoveKeyLines::run(&check.issues)?)
    } else {
        None
    };

    let mut issues: Vec<Issue> = check
        .issues
        .iter()
        .cloned()
        .map(Issue::UnusedKey)
        .collect();
    issues.extend(check.parse_errors.into_iter().map(Issue::ParseError));

    Ok(finish(
        CommandSummary::Unused(UnusedSummary {
            resource_file: check.resource_path.to_string_lossy().to_string(),
            corpus_files: check.corpus_files,
            skipped_files: check.skipped_files,
            unused_issues: check.issues,
            pruned,
        }),
        issues,
        false,
    ))
}
