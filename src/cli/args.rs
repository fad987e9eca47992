//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `sync`: Append messages missing from target locales
//! - `unused`: List (and optionally prune) keys no source file mentions
//! - `init`: Write a default `.ftlsyncrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Sync(cmd)) => cmd.args.common.verbose,
            Some(Command::Unused(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root used to find the config file and resolve relative paths
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Source resource file (overrides locale discovery)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Directory with one sub-directory per locale (overrides config file)
    #[arg(long)]
    pub locales_root: Option<PathBuf>,

    /// Source locale (overrides config file)
    #[arg(long)]
    pub source_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct SyncArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Target resource files (default: every other locale)
    #[arg(long, num_args = 1..)]
    pub targets: Vec<PathBuf>,

    /// Report missing keys without writing; exit with 1 if any are missing
    #[arg(long)]
    pub check: bool,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub args: SyncArgs,
}

#[derive(Debug, Parser)]
pub struct UnusedArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Root of the source code to search (overrides config file)
    #[arg(long)]
    pub corpus_root: Option<PathBuf>,

    /// Key prefix that is never reported (keys built at runtime)
    /// Can be specified multiple times: --exclude-prefix toast_actions --exclude-prefix menu
    #[arg(long)]
    pub exclude_prefix: Vec<String>,

    /// Corpus path or glob pattern to skip, in addition to the config file
    #[arg(long)]
    pub ignore: Vec<String>,

    /// Corpus file extension (replaces the config file list)
    #[arg(long)]
    pub extension: Vec<String>,

    /// Remove unused keys from the resource file
    #[arg(long)]
    pub prune: bool,
}

#[derive(Debug, Args)]
pub struct UnusedCommand {
    #[command(flatten)]
    pub args: UnusedArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Append messages missing from target locales
    Sync(SyncCommand),
    /// List keys that no source file mentions
    Unused(UnusedCommand),
    /// Initialize a new .ftlsyncrc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Arguments::command().debug_assert();
    }

    #[test]
    fn test_parse_sync_targets() {
        let args = Arguments::try_parse_from([
            "ftlsync", "sync", "--targets", "de.ftl", "fr.ftl", "--check", "-v",
        ])
        .unwrap();
        let Some(Command::Sync(cmd)) = &args.command else {
            panic!("expected sync");
        };
        assert_eq!(
            cmd.args.targets,
            vec![PathBuf::from("de.ftl"), PathBuf::from("fr.ftl")]
        );
        assert!(cmd.args.check);
        assert!(args.verbose());
    }

    #[test]
    fn test_parse_unused_repeated_flags() {
        let args = Arguments::try_parse_from([
            "ftlsync",
            "unused",
            "--exclude-prefix",
            "toast_actions",
            "--exclude-prefix",
            "menu",
            "--prune",
        ])
        .unwrap();
        let Some(Command::Unused(cmd)) = args.command else {
            panic!("expected unused");
        };
        assert_eq!(cmd.args.exclude_prefix, vec!["toast_actions", "menu"]);
        assert!(cmd.args.prune);
        assert!(!cmd.args.common.verbose);
    }
}
