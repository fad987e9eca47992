//! Low-level file operations produced by actions.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::{
    Entry, LocaleResource, Message,
    keys::extract_key_lines,
    parsers::ftl::parse_ftl_file,
    prune::prune_lines,
    reconcile::reconcile,
    serialize::serialize,
};

/// A change to a single resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Append the messages the file does not define yet.
    AppendMessages {
        file_path: String,
        messages: Vec<Message>,
    },
    /// Drop every line that belongs to one of `keys`.
    RemoveKeyLines { file_path: String, keys: Vec<String> },
}

/// Outcome of executing an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationResult {
    /// The file was rewritten; `changes` keys were added or lines removed.
    Applied { changes: usize },
    /// Nothing to change; the file was not written.
    Unchanged,
}

impl OperationResult {
    pub fn is_applied(&self) -> bool {
        matches!(self, OperationResult::Applied { .. })
    }

    pub fn changes(&self) -> usize {
        match self {
            OperationResult::Applied { changes } => *changes,
            OperationResult::Unchanged => 0,
        }
    }
}

impl Operation {
    pub fn file_path(&self) -> &str {
        match self {
            Operation::AppendMessages { file_path, .. }
            | Operation::RemoveKeyLines { file_path, .. } => file_path,
        }
    }

    /// Apply the operation to the file on disk.
    ///
    /// The file is read again first, so keys that were fixed in the meantime
    /// are not added or removed twice. A file that would not change is not
    /// written.
    pub fn execute(&self) -> Result<OperationResult> {
        match self {
            Operation::AppendMessages {
                file_path,
                messages,
            } => {
                let path = Path::new(file_path);
                let mut target = parse_ftl_file(path)?;
                let source =
                    LocaleResource::new(messages.iter().cloned().map(Entry::Message).collect());
                let added = reconcile(&source, &mut target);
                if added.is_empty() {
                    return Ok(OperationResult::Unchanged);
                }
                write_file(path, &serialize(&target))?;
                tracing::debug!("{}: appended {}", file_path, added.join(", "));
                Ok(OperationResult::Applied {
                    changes: added.len(),
                })
            }
            Operation::RemoveKeyLines { file_path, keys } => {
                let path = Path::new(file_path);
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read FTL file: {}", file_path))?;
                let lines = extract_key_lines(&text);
                let pruned = prune_lines(&lines, &keys.iter().cloned().collect());
                if !pruned.is_changed() {
                    return Ok(OperationResult::Unchanged);
                }
                write_file(path, &pruned.text)?;
                tracing::debug!("{}: removed {} line(s)", file_path, pruned.removed_lines);
                Ok(OperationResult::Applied {
                    changes: pruned.removed_lines,
                })
            }
        }
    }

    /// Print what `execute` would do to stdout.
    pub fn preview(&self) {
        self.preview_to(&mut io::stdout().lock());
    }

    pub fn preview_to<W: Write>(&self, writer: &mut W) {
        let (verb, keys): (_, Vec<&str>) = match self {
            Operation::AppendMessages { messages, .. } => {
                ("Would add", messages.iter().map(|m| m.id.as_str()).collect())
            }
            Operation::RemoveKeyLines { keys, .. } => {
                ("Would remove", keys.iter().map(String::as_str).collect())
            }
        };
        let _ = writeln!(
            writer,
            "{} {} key(s) in {}:",
            verb.yellow().bold(),
            keys.len(),
            self.file_path()
        );
        for key in keys {
            let _ = writeln!(writer, "  - {}", key);
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}
